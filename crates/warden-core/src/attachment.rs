//! Attachments: revocable, session-scoped permission grants.
//!
//! The host owns the live attachment. The values here are handles a caller
//! keeps so it can remove the grant later.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PlayerId;

/// Host-assigned identifier of an attachment.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttachmentId(pub u64);

impl fmt::Debug for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttachmentId({})", self.0)
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A dynamic permission grant on a live session.
///
/// Whoever receives an `Attachment` from `add_attachment` is responsible
/// for removing it when the grant should end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Host-assigned identifier.
    pub id: AttachmentId,

    /// The session the attachment is bound to.
    pub holder: PlayerId,

    /// Nodes set by this attachment and their values.
    pub permissions: BTreeMap<String, bool>,
}

impl Attachment {
    /// An attachment carrying a single node.
    pub fn single(id: AttachmentId, holder: PlayerId, node: &str, value: bool) -> Self {
        let mut permissions = BTreeMap::new();
        permissions.insert(node.to_owned(), value);
        Self {
            id,
            holder,
            permissions,
        }
    }

    /// The value this attachment sets for a node, if any.
    pub fn value_of(&self, node: &str) -> Option<bool> {
        self.permissions.get(node).copied()
    }
}

/// Where an effective permission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantSource {
    /// Host defaults (operator status, permission defaults).
    Default,
    /// A dynamic attachment.
    Attachment(AttachmentId),
}

/// A permission as currently resolved for a session: `(node, granting source)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivePermission {
    /// The permission node.
    pub node: String,

    /// Whether the node resolves to granted.
    pub value: bool,

    /// What produced this value.
    pub source: GrantSource,
}

impl EffectivePermission {
    /// A permission granted by the given attachment.
    pub fn from_attachment(attachment: &Attachment, node: &str, value: bool) -> Self {
        Self {
            node: node.to_owned(),
            value,
            source: GrantSource::Attachment(attachment.id),
        }
    }
}
