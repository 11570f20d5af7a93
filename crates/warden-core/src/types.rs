//! Identity and scope types.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::CoreError;
use crate::host::World;

/// A durable player identifier, stable across sessions.
///
/// Resolvable whether or not the player is currently connected.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The nil identifier (used as a sentinel by some hosts for console senders).
    pub const NIL: Self = Self(Uuid::nil());
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for PlayerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A player's durable identity: the "offline player" record.
///
/// This is what every scoped operation receives, whether the caller
/// started from a live session or from a stored id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfflinePlayer {
    /// The stable identifier.
    pub id: PlayerId,

    /// Last known name, if the host has one.
    #[serde(default)]
    pub name: Option<String>,
}

impl OfflinePlayer {
    /// An identity with no known name.
    pub fn new(id: PlayerId) -> Self {
        Self { id, name: None }
    }

    /// An identity with a known name.
    pub fn named(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// The name if known, otherwise the id rendered as text.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}

impl From<PlayerId> for OfflinePlayer {
    fn from(id: PlayerId) -> Self {
        Self::new(id)
    }
}

/// The partition an operation applies to.
///
/// `Global` is the cross-world scope. It is distinct from any world name,
/// including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WorldScope {
    /// Not scoped to any world.
    #[default]
    Global,
    /// Scoped to the world with this name.
    Named(String),
}

impl WorldScope {
    /// Scope to a named world.
    pub fn named(name: impl Into<String>) -> Self {
        WorldScope::Named(name.into())
    }

    /// Scope to the world a host handle points at.
    pub fn of(world: &dyn World) -> Self {
        WorldScope::Named(world.name().to_owned())
    }

    /// Check if this is the global scope.
    pub fn is_global(&self) -> bool {
        matches!(self, WorldScope::Global)
    }

    /// The world name, or `None` for the global scope.
    pub fn name(&self) -> Option<&str> {
        match self {
            WorldScope::Global => None,
            WorldScope::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for WorldScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldScope::Global => write!(f, "<global>"),
            WorldScope::Named(name) => write!(f, "{}", name),
        }
    }
}

impl From<Option<&str>> for WorldScope {
    fn from(name: Option<&str>) -> Self {
        match name {
            Some(name) => WorldScope::Named(name.to_owned()),
            None => WorldScope::Global,
        }
    }
}

impl From<&str> for WorldScope {
    fn from(name: &str) -> Self {
        WorldScope::Named(name.to_owned())
    }
}

impl From<String> for WorldScope {
    fn from(name: String) -> Self {
        WorldScope::Named(name)
    }
}

// Serialized as a nullable world name, the shape hosts already exchange.
impl Serialize for WorldScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.name().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorldScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(match name {
            Some(name) => WorldScope::Named(name),
            None => WorldScope::Global,
        })
    }
}
