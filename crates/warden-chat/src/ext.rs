//! Convenience layer over [`Chat`].
//!
//! `_online` methods resolve a live session to its current world and
//! durable identity; `_in` methods resolve a host world handle to its
//! scope. Both then call the scoped method unchanged.

use warden_core::{Player, World, WorldScope};

use crate::provider::Chat;

/// Extension methods available on every [`Chat`] implementation.
pub trait ChatExt: Chat {
    /// Every group known to the permission provider this backend holds.
    fn groups(&self) -> Vec<String> {
        self.permission().groups()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Prefix / Suffix
    // ─────────────────────────────────────────────────────────────────────────

    fn player_prefix_online(&self, player: &dyn Player) -> Option<String> {
        self.player_prefix(&WorldScope::of(player.world()), &player.offline_player())
    }

    fn set_player_prefix_online(&self, player: &dyn Player, prefix: &str) {
        self.set_player_prefix(&WorldScope::of(player.world()), &player.offline_player(), prefix)
    }

    fn player_suffix_online(&self, player: &dyn Player) -> Option<String> {
        self.player_suffix(&WorldScope::of(player.world()), &player.offline_player())
    }

    fn set_player_suffix_online(&self, player: &dyn Player, suffix: &str) {
        self.set_player_suffix(&WorldScope::of(player.world()), &player.offline_player(), suffix)
    }

    fn group_prefix_in(&self, world: &dyn World, group: &str) -> Option<String> {
        self.group_prefix(&WorldScope::of(world), group)
    }

    fn set_group_prefix_in(&self, world: &dyn World, group: &str, prefix: &str) {
        self.set_group_prefix(&WorldScope::of(world), group, prefix)
    }

    fn group_suffix_in(&self, world: &dyn World, group: &str) -> Option<String> {
        self.group_suffix(&WorldScope::of(world), group)
    }

    fn set_group_suffix_in(&self, world: &dyn World, group: &str, suffix: &str) {
        self.set_group_suffix(&WorldScope::of(world), group, suffix)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Player Info Nodes
    // ─────────────────────────────────────────────────────────────────────────

    fn player_info_integer_online(
        &self,
        player: &dyn Player,
        node: &str,
        default_value: i32,
    ) -> i32 {
        self.player_info_integer(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            default_value,
        )
    }

    fn set_player_info_integer_online(&self, player: &dyn Player, node: &str, value: i32) {
        self.set_player_info_integer(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            value,
        )
    }

    fn player_info_double_online(
        &self,
        player: &dyn Player,
        node: &str,
        default_value: f64,
    ) -> f64 {
        self.player_info_double(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            default_value,
        )
    }

    fn set_player_info_double_online(&self, player: &dyn Player, node: &str, value: f64) {
        self.set_player_info_double(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            value,
        )
    }

    fn player_info_boolean_online(
        &self,
        player: &dyn Player,
        node: &str,
        default_value: bool,
    ) -> bool {
        self.player_info_boolean(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            default_value,
        )
    }

    fn set_player_info_boolean_online(&self, player: &dyn Player, node: &str, value: bool) {
        self.set_player_info_boolean(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            value,
        )
    }

    fn player_info_string_online(
        &self,
        player: &dyn Player,
        node: &str,
        default_value: &str,
    ) -> String {
        self.player_info_string(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            default_value,
        )
    }

    fn set_player_info_string_online(&self, player: &dyn Player, node: &str, value: &str) {
        self.set_player_info_string(
            &WorldScope::of(player.world()),
            &player.offline_player(),
            node,
            value,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Group Info Nodes
    // ─────────────────────────────────────────────────────────────────────────

    fn group_info_integer_in(
        &self,
        world: &dyn World,
        group: &str,
        node: &str,
        default_value: i32,
    ) -> i32 {
        self.group_info_integer(&WorldScope::of(world), group, node, default_value)
    }

    fn set_group_info_integer_in(&self, world: &dyn World, group: &str, node: &str, value: i32) {
        self.set_group_info_integer(&WorldScope::of(world), group, node, value)
    }

    fn group_info_double_in(
        &self,
        world: &dyn World,
        group: &str,
        node: &str,
        default_value: f64,
    ) -> f64 {
        self.group_info_double(&WorldScope::of(world), group, node, default_value)
    }

    fn set_group_info_double_in(&self, world: &dyn World, group: &str, node: &str, value: f64) {
        self.set_group_info_double(&WorldScope::of(world), group, node, value)
    }

    fn group_info_boolean_in(
        &self,
        world: &dyn World,
        group: &str,
        node: &str,
        default_value: bool,
    ) -> bool {
        self.group_info_boolean(&WorldScope::of(world), group, node, default_value)
    }

    fn set_group_info_boolean_in(&self, world: &dyn World, group: &str, node: &str, value: bool) {
        self.set_group_info_boolean(&WorldScope::of(world), group, node, value)
    }

    fn group_info_string_in(
        &self,
        world: &dyn World,
        group: &str,
        node: &str,
        default_value: &str,
    ) -> String {
        self.group_info_string(&WorldScope::of(world), group, node, default_value)
    }

    fn set_group_info_string_in(&self, world: &dyn World, group: &str, node: &str, value: &str) {
        self.set_group_info_string(&WorldScope::of(world), group, node, value)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────────────────────

    fn player_in_group_online(&self, player: &dyn Player, group: &str) -> bool {
        self.player_in_group(&WorldScope::of(player.world()), &player.offline_player(), group)
    }

    fn player_groups_online(&self, player: &dyn Player) -> Vec<String> {
        self.player_groups(&WorldScope::of(player.world()), &player.offline_player())
    }

    fn primary_group_online(&self, player: &dyn Player) -> Option<String> {
        self.primary_group(&WorldScope::of(player.world()), &player.offline_player())
    }
}

impl<C: Chat + ?Sized> ChatExt for C {}
