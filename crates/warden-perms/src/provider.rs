//! Permission trait: the capability set every permission backend exposes.

use warden_core::{Attachment, EffectivePermission, OfflinePlayer, Player, WorldScope};

/// The permission provider contract.
///
/// Every call is a single synchronous query or mutation against the
/// backend's own store. The contract makes no ordering promise between
/// calls: whether a `player_add` is visible to the next `player_has` is up
/// to the implementation.
pub trait Permission: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Identification
    // ─────────────────────────────────────────────────────────────────────────

    /// Name of the permission backend.
    fn name(&self) -> &str;

    /// Whether the backend is currently active.
    fn is_enabled(&self) -> bool;

    /// Whether grants made through this backend are visible to the host's
    /// native permission check.
    fn has_super_perms_compat(&self) -> bool;

    // ─────────────────────────────────────────────────────────────────────────
    // Player Nodes
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if a player has a permission node in a scope.
    fn player_has(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool;

    /// Grant a permission node to a player in a scope.
    ///
    /// Returns `false` if the grant was not applied.
    fn player_add(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool;

    /// Revoke a permission node from a player in a scope.
    ///
    /// Returns `false` if nothing was revoked.
    fn player_remove(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str)
        -> bool;

    // ─────────────────────────────────────────────────────────────────────────
    // Group Nodes
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if a group has a permission node in a scope.
    fn group_has(&self, world: &WorldScope, group: &str, permission: &str) -> bool;

    /// Grant a permission node to a group in a scope.
    fn group_add(&self, world: &WorldScope, group: &str, permission: &str) -> bool;

    /// Revoke a permission node from a group in a scope.
    fn group_remove(&self, world: &WorldScope, group: &str, permission: &str) -> bool;

    // ─────────────────────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if a player belongs to a group in a scope.
    fn player_in_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool;

    /// Add a player to a group in a scope.
    fn player_add_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool;

    /// Remove a player from a group in a scope.
    fn player_remove_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str)
        -> bool;

    /// All groups a player belongs to in a scope.
    fn player_groups(&self, world: &WorldScope, player: &OfflinePlayer) -> Vec<String>;

    /// The player's main group in a scope. What "main" means is up to the
    /// backend; `None` if the player has no group at all.
    fn primary_group(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String>;

    /// Every group the backend knows, independent of any player.
    fn groups(&self) -> Vec<String>;

    /// Whether group operations mean anything for this backend.
    fn has_group_support(&self) -> bool;

    // ─────────────────────────────────────────────────────────────────────────
    // Attachments
    // ─────────────────────────────────────────────────────────────────────────

    /// Grant a permission to a live session for as long as it lasts.
    ///
    /// The returned attachment belongs to the caller, who must remove it
    /// when the grant should end.
    fn add_attachment(&self, player: &dyn Player, permission: &str, value: bool) -> Attachment;

    /// Revoke an attachment. Returns the removed attachment, or `None` if
    /// it was not attached to this session.
    fn remove_attachment(&self, player: &dyn Player, attachment: &Attachment)
        -> Option<Attachment>;

    /// Revoke an attachment without reporting the outcome.
    fn player_remove_attachment(&self, player: &dyn Player, attachment: &Attachment);

    /// Snapshot of every permission currently resolved for a session.
    fn effective_permissions(&self, player: &dyn Player) -> Vec<EffectivePermission>;
}
