//! # Warden Chat
//!
//! The chat metadata provider contract: prefixes, suffixes and typed
//! informational nodes for players and groups.
//!
//! ## Overview
//!
//! A chat backend implements [`Chat`]. It is built around a permission
//! provider, handed over at construction and returned by
//! [`Chat::permission`]; the only thing the contract uses it for is
//! [`ChatExt::groups`].
//!
//! Group membership queries on [`Chat`] are answered by the chat backend
//! itself. They may disagree with the permission provider's answers.
//!
//! ## Informational Nodes
//!
//! Getters take a default and return it verbatim when nothing is stored
//! for `(world, entity, node)`:
//!
//! ```rust,no_run
//! use warden_chat::Chat;
//! use warden_core::{OfflinePlayer, WorldScope};
//!
//! fn home_limit(chat: &dyn Chat, player: &OfflinePlayer) -> i32 {
//!     chat.player_info_integer(&WorldScope::Global, player, "homes.max", 1)
//! }
//! ```

pub mod ext;
pub mod provider;

pub use ext::ChatExt;
pub use provider::Chat;
