//! # Warden Core
//!
//! The host object model shared by the permission and chat contracts.
//!
//! This crate contains no backend logic. It describes the shapes a game
//! server hands to a provider: who a player is, which world they stand in,
//! and how the host grants dynamic permissions to a live session.
//!
//! ## Key Types
//!
//! - [`WorldScope`] - Global scope or a named world
//! - [`PlayerId`] / [`OfflinePlayer`] - Durable player identity
//! - [`Player`] - A live, connected session handle supplied by the host
//! - [`CommandSender`] - Anything the host can run a native permission check on
//! - [`Attachment`] - A revocable, session-scoped permission grant
//! - [`InfoValue`] - A typed informational node value
//!
//! ## World Scoping
//!
//! Every scoped operation takes a [`WorldScope`]. `WorldScope::Global` is
//! the cross-world scope; `WorldScope::Named` names one world.
//!
//! ```rust
//! use warden_core::WorldScope;
//!
//! assert!(WorldScope::from(None).is_global());
//! assert_eq!(WorldScope::named("nether").name(), Some("nether"));
//! ```

pub mod attachment;
pub mod error;
pub mod host;
pub mod info;
pub mod node;
pub mod types;

pub use attachment::{Attachment, AttachmentId, EffectivePermission, GrantSource};
pub use error::{CoreError, Result};
pub use host::{CommandSender, Player, World};
pub use info::{InfoKind, InfoValue};
pub use node::{validate_node, MAX_NODE_LEN};
pub use types::{OfflinePlayer, PlayerId, WorldScope};
pub use uuid::Uuid;
