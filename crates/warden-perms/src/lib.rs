//! # Warden Permissions
//!
//! The permission provider contract.
//!
//! ## Overview
//!
//! A permission backend implements [`Permission`]: node checks and
//! mutations for players and groups, group membership, and the host
//! attachment integration. Consumers call through [`PermissionExt`] for
//! the native-check `has` and for the live-session convenience forms.
//!
//! ## Conventions
//!
//! - **Scope**: every player or group operation takes a [`WorldScope`];
//!   `WorldScope::Global` is the cross-world scope.
//! - **Failure**: mutators return `false` when they did not apply. Nothing
//!   in the contract returns an error.
//! - **Groups**: check [`Permission::has_group_support`] before relying on
//!   group semantics. A backend without groups may return `false` from
//!   every group mutation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use warden_perms::{Permission, PermissionExt};
//! use warden_core::{Player, WorldScope};
//!
//! fn can_build(perms: &dyn Permission, player: &dyn Player) -> bool {
//!     // Same as perms.player_has(&WorldScope::of(player.world()), &player.offline_player(), ..)
//!     perms.player_has_online(player, "build.place")
//! }
//! ```
//!
//! [`WorldScope`]: warden_core::WorldScope

pub mod ext;
pub mod provider;

pub use ext::PermissionExt;
pub use provider::Permission;
