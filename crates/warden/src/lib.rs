//! # Warden
//!
//! The unified API for Warden: pluggable permission and chat providers for
//! game servers.
//!
//! ## Overview
//!
//! Warden defines two provider contracts and a registry to find them:
//!
//! - **Permission**: Per-world grants for players and groups, group membership
//! - **Chat**: Prefixes, suffixes and typed informational nodes per world
//! - **Services**: Lookup of the installed provider by priority or preference
//!
//! Every scoped call takes a [`WorldScope`]. Calls that take a live
//! [`Player`] resolve to the same scoped call with the player's current
//! world and durable identity.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use warden::{ChatExt, MemoryChat, MemoryConfig, MemoryPermission};
//! use warden::{OfflinePlayer, PlayerId, ServicePriority, Services, WorldScope};
//!
//! let services = Services::new();
//! let perms = Arc::new(MemoryPermission::new(MemoryConfig::default()));
//! let chat = Arc::new(MemoryChat::new(perms.clone(), MemoryConfig::default()));
//! services.register_permission(perms, ServicePriority::Normal);
//! services.register_chat(chat, ServicePriority::Normal);
//!
//! let chat = services.chat().unwrap();
//! let steve = OfflinePlayer::named(PlayerId::random(), "Steve");
//! let world = WorldScope::named("world");
//!
//! chat.set_player_prefix(&world, &steve, "[Mod] ");
//! assert_eq!(chat.player_prefix(&world, &steve).as_deref(), Some("[Mod] "));
//! assert_eq!(chat.player_info_integer(&world, &steve, "homes", 1), 1);
//! assert_eq!(chat.groups(), vec!["default"]);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `warden::core` - Host object model (WorldScope, Player, Attachment, etc.)
//! - `warden::perms` - The permission contract
//! - `warden::chat` - The chat contract
//! - `warden::store` - In-memory reference backends

pub mod config;
pub mod error;
pub mod services;

// Re-export component crates
pub use warden_chat as chat;
pub use warden_core as core;
pub use warden_perms as perms;
pub use warden_store as store;

// Re-export main types for convenience
pub use config::ServicesConfig;
pub use error::{Result, ServiceError};
pub use services::{ServicePriority, Services};

// Re-export the contracts and commonly used core types
pub use warden_chat::{Chat, ChatExt};
pub use warden_core::{
    Attachment, CommandSender, EffectivePermission, GrantSource, InfoValue, OfflinePlayer, Player,
    PlayerId, World, WorldScope,
};
pub use warden_perms::{Permission, PermissionExt};
pub use warden_store::{MemoryChat, MemoryConfig, MemoryPermission};
