//! # Warden Store
//!
//! In-memory reference backends for the permission and chat contracts.
//!
//! ## Overview
//!
//! [`MemoryPermission`] and [`MemoryChat`] keep everything in memory behind
//! a `parking_lot::RwLock`. They are what the testkit runs its conformance
//! checks against, and a working default for hosts with no other backend.
//!
//! ## Scoping
//!
//! - A value stored under `WorldScope::Named(w)` is only visible from `w`.
//! - A value stored under `WorldScope::Global` is visible from the global
//!   scope and, with [`MemoryConfig::inherit_global`], from every world.
//! - A world's own value shadows the inherited global one.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use warden_chat::{Chat, ChatExt};
//! use warden_core::{OfflinePlayer, PlayerId, WorldScope};
//! use warden_perms::Permission;
//! use warden_store::{MemoryChat, MemoryConfig, MemoryPermission};
//!
//! let perms = Arc::new(MemoryPermission::new(MemoryConfig::default()));
//! let chat = MemoryChat::new(perms.clone(), MemoryConfig::default());
//!
//! let steve = OfflinePlayer::new(PlayerId::random());
//! let west = WorldScope::named("west");
//!
//! perms.player_add_group(&west, &steve, "builder");
//! chat.set_player_prefix(&west, &steve, "[B] ");
//!
//! assert_eq!(chat.player_prefix(&west, &steve).as_deref(), Some("[B] "));
//! assert_eq!(chat.player_prefix(&WorldScope::named("east"), &steve), None);
//! assert!(chat.groups().contains(&"builder".to_string()));
//! ```

pub mod chat;
pub mod config;
pub mod permission;
mod scope;

pub use chat::MemoryChat;
pub use config::MemoryConfig;
pub use permission::MemoryPermission;
