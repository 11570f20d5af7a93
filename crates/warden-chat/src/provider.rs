//! Chat trait: prefix, suffix and info node access per world.

use warden_core::{OfflinePlayer, WorldScope};
use warden_perms::Permission;

/// The chat metadata provider contract.
///
/// Scoped methods take a [`WorldScope`]; `WorldScope::Global` addresses the
/// cross-world value. Info getters return the caller's default when the node
/// is unset for that entity and scope.
pub trait Chat: Send + Sync {
    /// The permission provider this backend was constructed with.
    fn permission(&self) -> &dyn Permission;

    /// Name of the chat backend.
    fn name(&self) -> &str;

    /// Whether the backend is currently active.
    fn is_enabled(&self) -> bool;

    // ─────────────────────────────────────────────────────────────────────────
    // Prefix / Suffix
    // ─────────────────────────────────────────────────────────────────────────

    /// A player's prefix in a scope, if one is set.
    fn player_prefix(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String>;

    fn set_player_prefix(&self, world: &WorldScope, player: &OfflinePlayer, prefix: &str);

    /// A player's suffix in a scope, if one is set.
    fn player_suffix(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String>;

    fn set_player_suffix(&self, world: &WorldScope, player: &OfflinePlayer, suffix: &str);

    /// A group's prefix in a scope, if one is set.
    fn group_prefix(&self, world: &WorldScope, group: &str) -> Option<String>;

    fn set_group_prefix(&self, world: &WorldScope, group: &str, prefix: &str);

    /// A group's suffix in a scope, if one is set.
    fn group_suffix(&self, world: &WorldScope, group: &str) -> Option<String>;

    fn set_group_suffix(&self, world: &WorldScope, group: &str, suffix: &str);

    // ─────────────────────────────────────────────────────────────────────────
    // Player Info Nodes
    // ─────────────────────────────────────────────────────────────────────────

    fn player_info_integer(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: i32,
    ) -> i32;

    fn set_player_info_integer(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: i32,
    );

    fn player_info_double(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: f64,
    ) -> f64;

    fn set_player_info_double(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: f64,
    );

    fn player_info_boolean(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: bool,
    ) -> bool;

    fn set_player_info_boolean(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: bool,
    );

    fn player_info_string(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: &str,
    ) -> String;

    fn set_player_info_string(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: &str,
    );

    // ─────────────────────────────────────────────────────────────────────────
    // Group Info Nodes
    // ─────────────────────────────────────────────────────────────────────────

    fn group_info_integer(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: i32,
    ) -> i32;

    fn set_group_info_integer(&self, world: &WorldScope, group: &str, node: &str, value: i32);

    fn group_info_double(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: f64,
    ) -> f64;

    fn set_group_info_double(&self, world: &WorldScope, group: &str, node: &str, value: f64);

    fn group_info_boolean(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: bool,
    ) -> bool;

    fn set_group_info_boolean(&self, world: &WorldScope, group: &str, node: &str, value: bool);

    fn group_info_string(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: &str,
    ) -> String;

    fn set_group_info_string(&self, world: &WorldScope, group: &str, node: &str, value: &str);

    // ─────────────────────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if a player belongs to a group in a scope, as this chat
    /// backend sees it.
    fn player_in_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool;

    /// All groups a player belongs to in a scope, as this chat backend
    /// sees it.
    fn player_groups(&self, world: &WorldScope, player: &OfflinePlayer) -> Vec<String>;

    fn primary_group(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String>;
}
