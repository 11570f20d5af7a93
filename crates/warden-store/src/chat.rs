//! In-memory implementation of the Chat trait.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use warden_chat::Chat;
use warden_core::{InfoValue, OfflinePlayer, PlayerId, WorldScope};
use warden_perms::Permission;

use crate::config::MemoryConfig;
use crate::scope::Scoped;

/// Chat metadata attached to one player or group in one scope.
#[derive(Debug, Default)]
struct Meta {
    prefix: Option<String>,
    suffix: Option<String>,
    info: HashMap<String, InfoValue>,
}

/// In-memory chat backend.
///
/// Group membership is tracked here, separately from the permission
/// provider; use [`MemoryChat::add_player_group`] to populate it.
pub struct MemoryChat {
    permission: Arc<dyn Permission>,
    config: MemoryConfig,
    enabled: AtomicBool,
    inner: RwLock<MemoryChatInner>,
}

struct MemoryChatInner {
    players: Scoped<PlayerId, Meta>,
    groups: Scoped<String, Meta>,
    membership: Scoped<PlayerId, Vec<String>>,
}

impl MemoryChat {
    /// Create a new empty chat backend around a permission provider.
    pub fn new(permission: Arc<dyn Permission>, config: MemoryConfig) -> Self {
        Self {
            permission,
            config,
            enabled: AtomicBool::new(true),
            inner: RwLock::new(MemoryChatInner {
                players: Scoped::new(),
                groups: Scoped::new(),
                membership: Scoped::new(),
            }),
        }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Add a player to a group as seen by this chat backend.
    ///
    /// Returns `false` if the player is already a member or groups are
    /// unsupported.
    pub fn add_player_group(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        group: &str,
    ) -> bool {
        if !self.config.group_support {
            return false;
        }
        let mut inner = self.inner.write();
        let groups = inner.membership.entry(world, &player.id);
        if groups.iter().any(|g| g == group) {
            return false;
        }
        groups.push(group.to_owned());
        tracing::debug!(world = %world, player = %player.id, group, "chat group joined");
        true
    }

    /// Remove a player from a group as seen by this chat backend.
    pub fn remove_player_group(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        group: &str,
    ) -> bool {
        if !self.config.group_support {
            return false;
        }
        let mut inner = self.inner.write();
        let Some(groups) = inner.membership.get_mut(world, &player.id) else {
            return false;
        };
        let before = groups.len();
        groups.retain(|g| g != group);
        let removed = groups.len() != before;
        if removed {
            inner.membership.remove_if(world, &player.id, Vec::is_empty);
            tracing::debug!(world = %world, player = %player.id, group, "chat group left");
        }
        removed
    }

    fn player_lookup<T>(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        read: impl Fn(&Meta) -> Option<T>,
    ) -> Option<T> {
        self.inner
            .read()
            .players
            .layers(world, &player.id, self.config.inherit_global)
            .into_iter()
            .find_map(read)
    }

    fn group_lookup<T>(
        &self,
        world: &WorldScope,
        group: &str,
        read: impl Fn(&Meta) -> Option<T>,
    ) -> Option<T> {
        self.inner
            .read()
            .groups
            .layers(world, &group.to_owned(), self.config.inherit_global)
            .into_iter()
            .find_map(read)
    }

    fn player_update(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        write: impl FnOnce(&mut Meta),
    ) {
        write(self.inner.write().players.entry(world, &player.id));
    }

    fn group_update(&self, world: &WorldScope, group: &str, write: impl FnOnce(&mut Meta)) {
        write(self.inner.write().groups.entry(world, &group.to_owned()));
    }

    fn set_player_info(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: InfoValue,
    ) {
        tracing::debug!(
            world = %world,
            player = %player.id,
            node,
            kind = %value.kind(),
            "player info set"
        );
        self.player_update(world, player, |meta| {
            meta.info.insert(node.to_owned(), value);
        });
    }

    fn set_group_info(&self, world: &WorldScope, group: &str, node: &str, value: InfoValue) {
        tracing::debug!(world = %world, group, node, kind = %value.kind(), "group info set");
        self.group_update(world, group, |meta| {
            meta.info.insert(node.to_owned(), value);
        });
    }

    // The first scope that has the node decides; a value of another type
    // there yields the default rather than falling through to global.
    fn player_info<T>(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        read: impl Fn(&InfoValue) -> Option<T>,
    ) -> Option<T> {
        self.player_lookup(world, player, |meta| meta.info.get(node).map(|v| read(v)))
            .flatten()
    }

    fn group_info<T>(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        read: impl Fn(&InfoValue) -> Option<T>,
    ) -> Option<T> {
        self.group_lookup(world, group, |meta| meta.info.get(node).map(|v| read(v)))
            .flatten()
    }
}

impl Chat for MemoryChat {
    fn permission(&self) -> &dyn Permission {
        &*self.permission
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn player_prefix(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
        self.player_lookup(world, player, |meta| meta.prefix.clone())
    }

    fn set_player_prefix(&self, world: &WorldScope, player: &OfflinePlayer, prefix: &str) {
        tracing::debug!(world = %world, player = %player.id, prefix, "player prefix set");
        self.player_update(world, player, |meta| meta.prefix = Some(prefix.to_owned()));
    }

    fn player_suffix(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
        self.player_lookup(world, player, |meta| meta.suffix.clone())
    }

    fn set_player_suffix(&self, world: &WorldScope, player: &OfflinePlayer, suffix: &str) {
        tracing::debug!(world = %world, player = %player.id, suffix, "player suffix set");
        self.player_update(world, player, |meta| meta.suffix = Some(suffix.to_owned()));
    }

    fn group_prefix(&self, world: &WorldScope, group: &str) -> Option<String> {
        self.group_lookup(world, group, |meta| meta.prefix.clone())
    }

    fn set_group_prefix(&self, world: &WorldScope, group: &str, prefix: &str) {
        tracing::debug!(world = %world, group, prefix, "group prefix set");
        self.group_update(world, group, |meta| meta.prefix = Some(prefix.to_owned()));
    }

    fn group_suffix(&self, world: &WorldScope, group: &str) -> Option<String> {
        self.group_lookup(world, group, |meta| meta.suffix.clone())
    }

    fn set_group_suffix(&self, world: &WorldScope, group: &str, suffix: &str) {
        tracing::debug!(world = %world, group, suffix, "group suffix set");
        self.group_update(world, group, |meta| meta.suffix = Some(suffix.to_owned()));
    }

    fn player_info_integer(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: i32,
    ) -> i32 {
        self.player_info(world, player, node, InfoValue::as_integer)
            .unwrap_or(default_value)
    }

    fn set_player_info_integer(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: i32,
    ) {
        self.set_player_info(world, player, node, InfoValue::Integer(value));
    }

    fn player_info_double(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: f64,
    ) -> f64 {
        self.player_info(world, player, node, InfoValue::as_double)
            .unwrap_or(default_value)
    }

    fn set_player_info_double(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: f64,
    ) {
        self.set_player_info(world, player, node, InfoValue::Double(value));
    }

    fn player_info_boolean(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: bool,
    ) -> bool {
        self.player_info(world, player, node, InfoValue::as_boolean)
            .unwrap_or(default_value)
    }

    fn set_player_info_boolean(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: bool,
    ) {
        self.set_player_info(world, player, node, InfoValue::Boolean(value));
    }

    fn player_info_string(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: &str,
    ) -> String {
        self.player_info(world, player, node, |v| v.as_str().map(str::to_owned))
            .unwrap_or_else(|| default_value.to_owned())
    }

    fn set_player_info_string(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: &str,
    ) {
        self.set_player_info(world, player, node, InfoValue::from(value));
    }

    fn group_info_integer(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: i32,
    ) -> i32 {
        self.group_info(world, group, node, InfoValue::as_integer)
            .unwrap_or(default_value)
    }

    fn set_group_info_integer(&self, world: &WorldScope, group: &str, node: &str, value: i32) {
        self.set_group_info(world, group, node, InfoValue::Integer(value));
    }

    fn group_info_double(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: f64,
    ) -> f64 {
        self.group_info(world, group, node, InfoValue::as_double)
            .unwrap_or(default_value)
    }

    fn set_group_info_double(&self, world: &WorldScope, group: &str, node: &str, value: f64) {
        self.set_group_info(world, group, node, InfoValue::Double(value));
    }

    fn group_info_boolean(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: bool,
    ) -> bool {
        self.group_info(world, group, node, InfoValue::as_boolean)
            .unwrap_or(default_value)
    }

    fn set_group_info_boolean(&self, world: &WorldScope, group: &str, node: &str, value: bool) {
        self.set_group_info(world, group, node, InfoValue::Boolean(value));
    }

    fn group_info_string(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: &str,
    ) -> String {
        self.group_info(world, group, node, |v| v.as_str().map(str::to_owned))
            .unwrap_or_else(|| default_value.to_owned())
    }

    fn set_group_info_string(&self, world: &WorldScope, group: &str, node: &str, value: &str) {
        self.set_group_info(world, group, node, InfoValue::from(value));
    }

    fn player_in_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool {
        self.player_groups(world, player).iter().any(|g| g == group)
    }

    fn player_groups(&self, world: &WorldScope, player: &OfflinePlayer) -> Vec<String> {
        if !self.config.group_support {
            return Vec::new();
        }
        self.inner
            .read()
            .membership
            .layers_flattened(world, &player.id, self.config.inherit_global)
    }

    fn primary_group(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
        if !self.config.group_support {
            return None;
        }
        self.player_groups(world, player)
            .into_iter()
            .next()
            .or_else(|| self.config.default_group.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPermission;
    use proptest::prelude::*;
    use warden_chat::ChatExt;

    fn setup() -> (Arc<MemoryPermission>, MemoryChat) {
        let perms = Arc::new(MemoryPermission::new(MemoryConfig::default()));
        let chat = MemoryChat::new(perms.clone(), MemoryConfig::default());
        (perms, chat)
    }

    fn player() -> OfflinePlayer {
        OfflinePlayer::new(PlayerId::random())
    }

    #[test]
    fn test_prefix_suffix_roundtrip() {
        let (_, chat) = setup();
        let steve = player();
        let west = WorldScope::named("west");

        assert_eq!(chat.player_prefix(&west, &steve), None);
        chat.set_player_prefix(&west, &steve, "[Mod] ");
        chat.set_player_suffix(&west, &steve, " *");
        assert_eq!(chat.player_prefix(&west, &steve).as_deref(), Some("[Mod] "));
        assert_eq!(chat.player_suffix(&west, &steve).as_deref(), Some(" *"));

        chat.set_group_prefix(&WorldScope::Global, "vip", "&6");
        assert_eq!(chat.group_prefix(&west, "vip").as_deref(), Some("&6"));
        assert_eq!(chat.group_suffix(&west, "vip"), None);
    }

    #[test]
    fn test_world_value_shadows_global() {
        let (_, chat) = setup();
        let steve = player();
        let west = WorldScope::named("west");

        chat.set_player_prefix(&WorldScope::Global, &steve, "global");
        chat.set_player_prefix(&west, &steve, "west");

        assert_eq!(chat.player_prefix(&west, &steve).as_deref(), Some("west"));
        assert_eq!(
            chat.player_prefix(&WorldScope::named("east"), &steve).as_deref(),
            Some("global")
        );
        assert_eq!(chat.player_prefix(&WorldScope::Global, &steve).as_deref(), Some("global"));
    }

    #[test]
    fn test_info_isolated_by_world() {
        let (_, chat) = setup();
        let steve = player();
        let west = WorldScope::named("west");
        let east = WorldScope::named("east");

        chat.set_player_info_integer(&west, &steve, "homes", 5);
        chat.set_group_info_string(&west, "vip", "title", "Baron");

        assert_eq!(chat.player_info_integer(&west, &steve, "homes", 1), 5);
        assert_eq!(chat.player_info_integer(&east, &steve, "homes", 1), 1);
        assert_eq!(chat.player_info_integer(&WorldScope::Global, &steve, "homes", 1), 1);

        assert_eq!(chat.group_info_string(&west, "vip", "title", ""), "Baron");
        assert_eq!(chat.group_info_string(&east, "vip", "title", ""), "");
        assert_eq!(chat.group_info_string(&WorldScope::Global, "vip", "title", "none"), "none");
    }

    #[test]
    fn test_info_type_mismatch_returns_default() {
        let (_, chat) = setup();
        let steve = player();

        chat.set_player_info_string(&WorldScope::Global, &steve, "homes", "five");
        assert_eq!(chat.player_info_integer(&WorldScope::Global, &steve, "homes", 3), 3);

        chat.set_group_info_boolean(&WorldScope::Global, "vip", "fly", true);
        assert_eq!(chat.group_info_double(&WorldScope::Global, "vip", "fly", 0.5), 0.5);
        assert!(chat.group_info_boolean(&WorldScope::Global, "vip", "fly", false));
    }

    #[test]
    fn test_info_all_types() {
        let (_, chat) = setup();
        let steve = player();
        let g = WorldScope::Global;

        chat.set_player_info_double(&g, &steve, "speed", -1.25);
        chat.set_player_info_boolean(&g, &steve, "muted", false);
        chat.set_group_info_integer(&g, "vip", "homes", -3);
        chat.set_group_info_double(&g, "vip", "discount", 0.0);

        assert_eq!(chat.player_info_double(&g, &steve, "speed", 9.0), -1.25);
        assert!(!chat.player_info_boolean(&g, &steve, "muted", true));
        assert_eq!(chat.group_info_integer(&g, "vip", "homes", 0), -3);
        assert_eq!(chat.group_info_double(&g, "vip", "discount", 1.0), 0.0);
    }

    #[test]
    fn test_groups_delegate_to_permission_provider() {
        let (perms, chat) = setup();
        perms.create_group("admin");

        assert_eq!(chat.groups(), perms.groups());
        assert_eq!(chat.groups(), vec!["admin", "default"]);
    }

    #[test]
    fn test_membership_independent_of_permission_provider() {
        let (perms, chat) = setup();
        let steve = player();
        let g = WorldScope::Global;

        perms.player_add_group(&g, &steve, "builder");
        assert!(!chat.player_in_group(&g, &steve, "builder"));
        assert_eq!(chat.primary_group(&g, &steve).as_deref(), Some("default"));

        assert!(chat.add_player_group(&g, &steve, "vip"));
        assert!(!chat.add_player_group(&g, &steve, "vip"));
        assert_eq!(chat.player_groups(&g, &steve), vec!["vip"]);
        assert!(!perms.player_in_group(&g, &steve, "vip"));

        assert!(chat.remove_player_group(&g, &steve, "vip"));
        assert!(chat.player_groups(&g, &steve).is_empty());
    }

    #[test]
    fn test_group_support_flag_alone_disables_membership() {
        let config = MemoryConfig {
            group_support: false,
            ..MemoryConfig::default()
        };
        let perms = Arc::new(MemoryPermission::new(config.clone()));
        let chat = MemoryChat::new(perms, config);
        let steve = player();
        let west = WorldScope::named("west");

        assert!(!chat.add_player_group(&west, &steve, "vip"));
        assert!(!chat.player_in_group(&west, &steve, "vip"));
        assert!(chat.player_groups(&west, &steve).is_empty());
        assert_eq!(chat.primary_group(&west, &steve), None);
        assert!(!chat.remove_player_group(&west, &steve, "vip"));
        assert!(chat.groups().is_empty());
    }

    #[test]
    fn test_leaving_last_group_drops_entry() {
        let (_, chat) = setup();
        let steve = player();
        let west = WorldScope::named("west");

        chat.add_player_group(&west, &steve, "vip");
        chat.add_player_group(&west, &steve, "mod");
        assert_eq!(chat.inner.read().membership.len(), 1);

        assert!(chat.remove_player_group(&west, &steve, "vip"));
        assert_eq!(chat.inner.read().membership.len(), 1);
        assert!(chat.remove_player_group(&west, &steve, "mod"));
        assert_eq!(chat.inner.read().membership.len(), 0);
        assert_eq!(chat.primary_group(&west, &steve).as_deref(), Some("default"));
    }

    proptest! {
        #[test]
        fn test_unset_nodes_return_default(
            world in "[a-z]{1,8}",
            node in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
            integer in any::<i32>(),
            double in any::<f64>(),
            boolean in any::<bool>(),
            string in ".{0,16}",
        ) {
            let (_, chat) = setup();
            let steve = player();
            let scope = WorldScope::named(world);

            chat.set_player_info_integer(&scope, &steve, "stored.9", 9);

            prop_assert_eq!(
                chat.player_info_integer(&scope, &steve, &node, integer),
                integer
            );
            prop_assert_eq!(
                chat.player_info_double(&scope, &steve, &node, double).to_bits(),
                double.to_bits()
            );
            prop_assert_eq!(
                chat.group_info_boolean(&scope, "vip", &node, boolean),
                boolean
            );
            prop_assert_eq!(chat.group_info_string(&scope, "vip", &node, &string), string);
        }
    }
}
