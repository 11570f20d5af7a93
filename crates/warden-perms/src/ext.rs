//! Convenience layer over [`Permission`].
//!
//! Each `_online` method takes a live session in place of `(world, player)`
//! and forwards to the scoped method with the session's current world and
//! durable identity. Each `_in` method takes a host world handle in place
//! of a scope. The forwarding lives here once, for every backend.

use warden_core::{CommandSender, Player, World, WorldScope};

use crate::provider::Permission;

/// Extension methods available on every [`Permission`] implementation.
pub trait PermissionExt: Permission {
    /// The host's native permission check for a sender.
    ///
    /// This never consults the backend, so it always agrees with the host.
    fn has(&self, sender: &dyn CommandSender, permission: &str) -> bool {
        sender.has_permission(permission)
    }

    fn player_has_online(&self, player: &dyn Player, permission: &str) -> bool {
        self.player_has(&WorldScope::of(player.world()), &player.offline_player(), permission)
    }

    fn player_add_online(&self, player: &dyn Player, permission: &str) -> bool {
        self.player_add(&WorldScope::of(player.world()), &player.offline_player(), permission)
    }

    fn player_remove_online(&self, player: &dyn Player, permission: &str) -> bool {
        self.player_remove(&WorldScope::of(player.world()), &player.offline_player(), permission)
    }

    fn group_has_in(&self, world: &dyn World, group: &str, permission: &str) -> bool {
        self.group_has(&WorldScope::of(world), group, permission)
    }

    fn group_add_in(&self, world: &dyn World, group: &str, permission: &str) -> bool {
        self.group_add(&WorldScope::of(world), group, permission)
    }

    fn group_remove_in(&self, world: &dyn World, group: &str, permission: &str) -> bool {
        self.group_remove(&WorldScope::of(world), group, permission)
    }

    fn player_in_group_online(&self, player: &dyn Player, group: &str) -> bool {
        self.player_in_group(&WorldScope::of(player.world()), &player.offline_player(), group)
    }

    fn player_add_group_online(&self, player: &dyn Player, group: &str) -> bool {
        self.player_add_group(&WorldScope::of(player.world()), &player.offline_player(), group)
    }

    fn player_remove_group_online(&self, player: &dyn Player, group: &str) -> bool {
        self.player_remove_group(&WorldScope::of(player.world()), &player.offline_player(), group)
    }

    fn player_groups_online(&self, player: &dyn Player) -> Vec<String> {
        self.player_groups(&WorldScope::of(player.world()), &player.offline_player())
    }

    fn primary_group_online(&self, player: &dyn Player) -> Option<String> {
        self.primary_group(&WorldScope::of(player.world()), &player.offline_player())
    }
}

impl<P: Permission + ?Sized> PermissionExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use proptest::prelude::*;
    use warden_core::{Attachment, AttachmentId, EffectivePermission, OfflinePlayer, PlayerId};

    /// Records the scope and identity of every scoped call.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(&'static str, WorldScope, Option<OfflinePlayer>, String)>>,
    }

    impl Recorder {
        fn record(
            &self,
            op: &'static str,
            world: &WorldScope,
            player: Option<&OfflinePlayer>,
            arg: &str,
        ) {
            self.calls
                .lock()
                .push((op, world.clone(), player.cloned(), arg.to_owned()));
        }

        fn take(&self) -> Vec<(&'static str, WorldScope, Option<OfflinePlayer>, String)> {
            std::mem::take(&mut *self.calls.lock())
        }
    }

    impl Permission for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }
        fn is_enabled(&self) -> bool {
            true
        }
        fn has_super_perms_compat(&self) -> bool {
            false
        }
        fn player_has(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
            self.record("player_has", world, Some(player), permission);
            true
        }
        fn player_add(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
            self.record("player_add", world, Some(player), permission);
            true
        }
        fn player_remove(
            &self,
            world: &WorldScope,
            player: &OfflinePlayer,
            permission: &str,
        ) -> bool {
            self.record("player_remove", world, Some(player), permission);
            false
        }
        fn group_has(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
            self.record("group_has", world, None, &format!("{group}:{permission}"));
            true
        }
        fn group_add(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
            self.record("group_add", world, None, &format!("{group}:{permission}"));
            true
        }
        fn group_remove(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
            self.record("group_remove", world, None, &format!("{group}:{permission}"));
            true
        }
        fn player_in_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool {
            self.record("player_in_group", world, Some(player), group);
            true
        }
        fn player_add_group(
            &self,
            world: &WorldScope,
            player: &OfflinePlayer,
            group: &str,
        ) -> bool {
            self.record("player_add_group", world, Some(player), group);
            true
        }
        fn player_remove_group(
            &self,
            world: &WorldScope,
            player: &OfflinePlayer,
            group: &str,
        ) -> bool {
            self.record("player_remove_group", world, Some(player), group);
            true
        }
        fn player_groups(&self, world: &WorldScope, player: &OfflinePlayer) -> Vec<String> {
            self.record("player_groups", world, Some(player), "");
            vec!["default".into()]
        }
        fn primary_group(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
            self.record("primary_group", world, Some(player), "");
            Some("default".into())
        }
        fn groups(&self) -> Vec<String> {
            vec!["default".into()]
        }
        fn has_group_support(&self) -> bool {
            true
        }
        fn add_attachment(&self, player: &dyn Player, permission: &str, value: bool) -> Attachment {
            Attachment::single(AttachmentId(0), player.id(), permission, value)
        }
        fn remove_attachment(
            &self,
            _player: &dyn Player,
            attachment: &Attachment,
        ) -> Option<Attachment> {
            Some(attachment.clone())
        }
        fn player_remove_attachment(&self, _player: &dyn Player, _attachment: &Attachment) {}
        fn effective_permissions(&self, _player: &dyn Player) -> Vec<EffectivePermission> {
            Vec::new()
        }
    }

    struct Sender(bool);

    impl CommandSender for Sender {
        fn name(&self) -> &str {
            "console"
        }
        fn has_permission(&self, _node: &str) -> bool {
            self.0
        }
    }

    struct Spot(String);

    impl World for Spot {
        fn name(&self) -> &str {
            &self.0
        }
    }

    struct Online {
        id: PlayerId,
        world: Spot,
    }

    impl CommandSender for Online {
        fn name(&self) -> &str {
            "Steve"
        }
        fn has_permission(&self, _node: &str) -> bool {
            false
        }
    }

    impl Player for Online {
        fn id(&self) -> PlayerId {
            self.id
        }
        fn world(&self) -> &dyn World {
            &self.world
        }
        fn add_attachment(&self, node: &str, value: bool) -> Attachment {
            Attachment::single(AttachmentId(1), self.id, node, value)
        }
        fn remove_attachment(&self, _attachment: &Attachment) -> bool {
            true
        }
        fn effective_permissions(&self) -> Vec<EffectivePermission> {
            Vec::new()
        }
    }

    fn online(world: &str) -> Online {
        Online {
            id: PlayerId::random(),
            world: Spot(world.to_owned()),
        }
    }

    #[test]
    fn test_has_uses_native_check() {
        let perms = Recorder::default();
        assert!(perms.has(&Sender(true), "any.node"));
        assert!(!perms.has(&Sender(false), "any.node"));
        assert!(perms.take().is_empty());
    }

    #[test]
    fn test_online_forms_match_scoped_forms() {
        let perms = Recorder::default();
        let player = online("west");
        let scope = WorldScope::named("west");
        let identity = player.offline_player();

        assert_eq!(
            perms.player_remove_online(&player, "a.b"),
            perms.player_remove(&scope, &identity, "a.b")
        );
        assert_eq!(
            perms.player_groups_online(&player),
            perms.player_groups(&scope, &identity)
        );
        assert_eq!(
            perms.primary_group_online(&player),
            perms.primary_group(&scope, &identity)
        );

        let calls = perms.take();
        assert_eq!(calls.len(), 6);
        for pair in calls.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_world_forms_match_scoped_forms() {
        let perms = Recorder::default();
        let world = Spot("nether".into());
        let scope = WorldScope::named("nether");

        perms.group_add_in(&world, "mod", "kick");
        perms.group_add(&scope, "mod", "kick");
        perms.group_has_in(&world, "mod", "kick");
        perms.group_has(&scope, "mod", "kick");
        perms.group_remove_in(&world, "mod", "kick");
        perms.group_remove(&scope, "mod", "kick");

        let calls = perms.take();
        for pair in calls.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }

    proptest! {
        #[test]
        fn test_online_forwarding_law(
            world in "[a-z_]{1,16}",
            node in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}",
        ) {
            let perms = Recorder::default();
            let player = online(&world);
            let scope = WorldScope::named(world.clone());
            let identity = player.offline_player();

            perms.player_has_online(&player, &node);
            perms.player_has(&scope, &identity, &node);
            perms.player_add_online(&player, &node);
            perms.player_add(&scope, &identity, &node);
            perms.player_in_group_online(&player, &node);
            perms.player_in_group(&scope, &identity, &node);
            perms.player_add_group_online(&player, &node);
            perms.player_add_group(&scope, &identity, &node);
            perms.player_remove_group_online(&player, &node);
            perms.player_remove_group(&scope, &identity, &node);

            let calls = perms.take();
            prop_assert_eq!(calls.len(), 10);
            for pair in calls.chunks(2) {
                prop_assert_eq!(&pair[0], &pair[1]);
            }
        }
    }
}
