//! Backends that record every call.
//!
//! Used to check that convenience forms reach the scoped methods with the
//! same arguments as a direct call.

use std::sync::Arc;

use parking_lot::Mutex;

use warden_chat::Chat;
use warden_core::{Attachment, EffectivePermission, OfflinePlayer, Player, WorldScope};
use warden_perms::Permission;

/// The entity a scoped call addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Player(OfflinePlayer),
    Group(String),
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub op: &'static str,
    pub world: WorldScope,
    pub subject: Subject,
    /// Remaining arguments, rendered with `Debug`.
    pub args: Vec<String>,
}

#[derive(Default)]
struct CallLog(Mutex<Vec<Call>>);

impl CallLog {
    fn player(
        &self,
        op: &'static str,
        world: &WorldScope,
        player: &OfflinePlayer,
        args: Vec<String>,
    ) {
        self.push(op, world, Subject::Player(player.clone()), args);
    }

    fn group(&self, op: &'static str, world: &WorldScope, group: &str, args: Vec<String>) {
        self.push(op, world, Subject::Group(group.to_owned()), args);
    }

    fn push(&self, op: &'static str, world: &WorldScope, subject: Subject, args: Vec<String>) {
        self.0.lock().push(Call {
            op,
            world: world.clone(),
            subject,
            args,
        });
    }

    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.lock())
    }
}

macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$(format!("{:?}", $arg)),*]
    };
}

/// A permission backend that records calls and holds a fixed group list.
///
/// Queries answer `true`, mutations answer `true`, and `groups()` returns
/// the configured list unmodified.
#[derive(Default)]
pub struct RecordingPermission {
    groups: Vec<String>,
    log: CallLog,
}

impl RecordingPermission {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose `groups()` returns exactly `groups`.
    pub fn with_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
            log: CallLog::default(),
        }
    }

    /// Drain the recorded calls.
    pub fn take_calls(&self) -> Vec<Call> {
        self.log.take()
    }
}

impl Permission for RecordingPermission {
    fn name(&self) -> &str {
        "recording"
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn has_super_perms_compat(&self) -> bool {
        false
    }

    fn player_has(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
        self.log.player("player_has", world, player, args![permission]);
        true
    }

    fn player_add(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
        self.log.player("player_add", world, player, args![permission]);
        true
    }

    fn player_remove(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
        self.log.player("player_remove", world, player, args![permission]);
        true
    }

    fn group_has(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
        self.log.group("group_has", world, group, args![permission]);
        true
    }

    fn group_add(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
        self.log.group("group_add", world, group, args![permission]);
        true
    }

    fn group_remove(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
        self.log.group("group_remove", world, group, args![permission]);
        true
    }

    fn player_in_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool {
        self.log.player("player_in_group", world, player, args![group]);
        true
    }

    fn player_add_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool {
        self.log.player("player_add_group", world, player, args![group]);
        true
    }

    fn player_remove_group(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        group: &str,
    ) -> bool {
        self.log.player("player_remove_group", world, player, args![group]);
        true
    }

    fn player_groups(&self, world: &WorldScope, player: &OfflinePlayer) -> Vec<String> {
        self.log.player("player_groups", world, player, args![]);
        self.groups.clone()
    }

    fn primary_group(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
        self.log.player("primary_group", world, player, args![]);
        self.groups.first().cloned()
    }

    fn groups(&self) -> Vec<String> {
        self.groups.clone()
    }

    fn has_group_support(&self) -> bool {
        true
    }

    fn add_attachment(&self, player: &dyn Player, permission: &str, value: bool) -> Attachment {
        player.add_attachment(permission, value)
    }

    fn remove_attachment(
        &self,
        player: &dyn Player,
        attachment: &Attachment,
    ) -> Option<Attachment> {
        player
            .remove_attachment(attachment)
            .then(|| attachment.clone())
    }

    fn player_remove_attachment(&self, player: &dyn Player, attachment: &Attachment) {
        player.remove_attachment(attachment);
    }

    fn effective_permissions(&self, player: &dyn Player) -> Vec<EffectivePermission> {
        player.effective_permissions()
    }
}

/// A chat backend that records calls.
///
/// Getters answer deterministically from their arguments: prefix and suffix
/// getters echo the scope, info getters return the caller default.
pub struct RecordingChat {
    permission: Arc<dyn Permission>,
    log: CallLog,
}

impl RecordingChat {
    pub fn new(permission: Arc<dyn Permission>) -> Self {
        Self {
            permission,
            log: CallLog::default(),
        }
    }

    /// Drain the recorded calls.
    pub fn take_calls(&self) -> Vec<Call> {
        self.log.take()
    }
}

impl Chat for RecordingChat {
    fn permission(&self) -> &dyn Permission {
        &*self.permission
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn player_prefix(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
        self.log.player("player_prefix", world, player, args![]);
        Some(format!("prefix@{world}"))
    }

    fn set_player_prefix(&self, world: &WorldScope, player: &OfflinePlayer, prefix: &str) {
        self.log.player("set_player_prefix", world, player, args![prefix]);
    }

    fn player_suffix(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
        self.log.player("player_suffix", world, player, args![]);
        Some(format!("suffix@{world}"))
    }

    fn set_player_suffix(&self, world: &WorldScope, player: &OfflinePlayer, suffix: &str) {
        self.log.player("set_player_suffix", world, player, args![suffix]);
    }

    fn group_prefix(&self, world: &WorldScope, group: &str) -> Option<String> {
        self.log.group("group_prefix", world, group, args![]);
        Some(format!("prefix@{world}"))
    }

    fn set_group_prefix(&self, world: &WorldScope, group: &str, prefix: &str) {
        self.log.group("set_group_prefix", world, group, args![prefix]);
    }

    fn group_suffix(&self, world: &WorldScope, group: &str) -> Option<String> {
        self.log.group("group_suffix", world, group, args![]);
        Some(format!("suffix@{world}"))
    }

    fn set_group_suffix(&self, world: &WorldScope, group: &str, suffix: &str) {
        self.log.group("set_group_suffix", world, group, args![suffix]);
    }

    fn player_info_integer(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: i32,
    ) -> i32 {
        self.log
            .player("player_info_integer", world, player, args![node, default_value]);
        default_value
    }

    fn set_player_info_integer(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: i32,
    ) {
        self.log
            .player("set_player_info_integer", world, player, args![node, value]);
    }

    fn player_info_double(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: f64,
    ) -> f64 {
        self.log
            .player("player_info_double", world, player, args![node, default_value]);
        default_value
    }

    fn set_player_info_double(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: f64,
    ) {
        self.log
            .player("set_player_info_double", world, player, args![node, value]);
    }

    fn player_info_boolean(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: bool,
    ) -> bool {
        self.log
            .player("player_info_boolean", world, player, args![node, default_value]);
        default_value
    }

    fn set_player_info_boolean(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: bool,
    ) {
        self.log
            .player("set_player_info_boolean", world, player, args![node, value]);
    }

    fn player_info_string(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        default_value: &str,
    ) -> String {
        self.log
            .player("player_info_string", world, player, args![node, default_value]);
        default_value.to_owned()
    }

    fn set_player_info_string(
        &self,
        world: &WorldScope,
        player: &OfflinePlayer,
        node: &str,
        value: &str,
    ) {
        self.log
            .player("set_player_info_string", world, player, args![node, value]);
    }

    fn group_info_integer(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: i32,
    ) -> i32 {
        self.log
            .group("group_info_integer", world, group, args![node, default_value]);
        default_value
    }

    fn set_group_info_integer(&self, world: &WorldScope, group: &str, node: &str, value: i32) {
        self.log
            .group("set_group_info_integer", world, group, args![node, value]);
    }

    fn group_info_double(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: f64,
    ) -> f64 {
        self.log
            .group("group_info_double", world, group, args![node, default_value]);
        default_value
    }

    fn set_group_info_double(&self, world: &WorldScope, group: &str, node: &str, value: f64) {
        self.log
            .group("set_group_info_double", world, group, args![node, value]);
    }

    fn group_info_boolean(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: bool,
    ) -> bool {
        self.log
            .group("group_info_boolean", world, group, args![node, default_value]);
        default_value
    }

    fn set_group_info_boolean(&self, world: &WorldScope, group: &str, node: &str, value: bool) {
        self.log
            .group("set_group_info_boolean", world, group, args![node, value]);
    }

    fn group_info_string(
        &self,
        world: &WorldScope,
        group: &str,
        node: &str,
        default_value: &str,
    ) -> String {
        self.log
            .group("group_info_string", world, group, args![node, default_value]);
        default_value.to_owned()
    }

    fn set_group_info_string(&self, world: &WorldScope, group: &str, node: &str, value: &str) {
        self.log
            .group("set_group_info_string", world, group, args![node, value]);
    }

    fn player_in_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool {
        self.log.player("player_in_group", world, player, args![group]);
        false
    }

    fn player_groups(&self, world: &WorldScope, player: &OfflinePlayer) -> Vec<String> {
        self.log.player("player_groups", world, player, args![]);
        Vec::new()
    }

    fn primary_group(&self, world: &WorldScope, player: &OfflinePlayer) -> Option<String> {
        self.log.player("primary_group", world, player, args![]);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FakePlayer, FakeWorld};
    use crate::generators;
    use proptest::prelude::*;
    use warden_chat::ChatExt;
    use warden_perms::PermissionExt;

    fn chat() -> RecordingChat {
        RecordingChat::new(Arc::new(RecordingPermission::new()))
    }

    /// Assert the log holds `(online, scoped)` pairs of identical calls.
    fn assert_pairs(calls: &[Call], expected_pairs: usize) {
        assert_eq!(calls.len(), expected_pairs * 2, "calls: {calls:#?}");
        for pair in calls.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_player_prefix_suffix_forwarding() {
        let chat = chat();
        let player = FakePlayer::new("Steve", "west");
        let scope = WorldScope::named("west");
        let identity = player.offline_player();

        assert_eq!(
            chat.player_prefix_online(&player),
            chat.player_prefix(&scope, &identity)
        );
        chat.set_player_prefix_online(&player, "[A]");
        chat.set_player_prefix(&scope, &identity, "[A]");
        assert_eq!(
            chat.player_suffix_online(&player),
            chat.player_suffix(&scope, &identity)
        );
        chat.set_player_suffix_online(&player, "!");
        chat.set_player_suffix(&scope, &identity, "!");

        assert_pairs(&chat.take_calls(), 4);
    }

    #[test]
    fn test_group_prefix_suffix_forwarding() {
        let chat = chat();
        let world = FakeWorld::new("east");
        let scope = WorldScope::named("east");

        assert_eq!(chat.group_prefix_in(&world, "vip"), chat.group_prefix(&scope, "vip"));
        chat.set_group_prefix_in(&world, "vip", "&6");
        chat.set_group_prefix(&scope, "vip", "&6");
        assert_eq!(chat.group_suffix_in(&world, "vip"), chat.group_suffix(&scope, "vip"));
        chat.set_group_suffix_in(&world, "vip", "&r");
        chat.set_group_suffix(&scope, "vip", "&r");

        assert_pairs(&chat.take_calls(), 4);
    }

    #[test]
    fn test_membership_forwarding() {
        let chat = chat();
        let player = FakePlayer::new("Alex", "nether");
        let scope = WorldScope::named("nether");
        let identity = player.offline_player();

        assert_eq!(
            chat.player_in_group_online(&player, "mod"),
            chat.player_in_group(&scope, &identity, "mod")
        );
        assert_eq!(
            chat.player_groups_online(&player),
            chat.player_groups(&scope, &identity)
        );
        assert_eq!(
            chat.primary_group_online(&player),
            chat.primary_group(&scope, &identity)
        );

        assert_pairs(&chat.take_calls(), 3);
    }

    #[test]
    fn test_teleport_changes_forwarded_scope() {
        let chat = chat();
        let mut player = FakePlayer::new("Alex", "west");

        chat.player_prefix_online(&player);
        player.teleport("east");
        chat.player_prefix_online(&player);

        let calls = chat.take_calls();
        assert_eq!(calls[0].world, WorldScope::named("west"));
        assert_eq!(calls[1].world, WorldScope::named("east"));
    }

    #[test]
    fn test_recording_permission_groups_unmodified() {
        let perms = RecordingPermission::with_groups(["b", "a", "b"]);
        assert_eq!(perms.groups(), vec!["b", "a", "b"]);
        assert!(perms.take_calls().is_empty());
    }

    #[test]
    fn test_permission_ext_forwarding() {
        let perms = RecordingPermission::new();
        let player = FakePlayer::new("Steve", "west");
        let scope = WorldScope::named("west");
        let identity = player.offline_player();

        perms.player_remove_online(&player, "x.y");
        perms.player_remove(&scope, &identity, "x.y");
        perms.player_groups_online(&player);
        perms.player_groups(&scope, &identity);
        perms.primary_group_online(&player);
        perms.primary_group(&scope, &identity);

        assert_pairs(&perms.take_calls(), 3);
    }

    proptest! {
        #[test]
        fn test_player_info_forwarding(
            world in generators::world_name(),
            node in generators::node(),
            int in any::<i32>(),
            double in any::<f64>(),
            boolean in any::<bool>(),
            text in ".{0,16}",
        ) {
            let chat = chat();
            let player = FakePlayer::new("Steve", world.clone());
            let scope = WorldScope::named(world);
            let identity = player.offline_player();

            prop_assert_eq!(
                chat.player_info_integer_online(&player, &node, int),
                chat.player_info_integer(&scope, &identity, &node, int)
            );
            chat.set_player_info_integer_online(&player, &node, int);
            chat.set_player_info_integer(&scope, &identity, &node, int);

            prop_assert_eq!(
                chat.player_info_double_online(&player, &node, double).to_bits(),
                chat.player_info_double(&scope, &identity, &node, double).to_bits()
            );
            chat.set_player_info_double_online(&player, &node, double);
            chat.set_player_info_double(&scope, &identity, &node, double);

            prop_assert_eq!(
                chat.player_info_boolean_online(&player, &node, boolean),
                chat.player_info_boolean(&scope, &identity, &node, boolean)
            );
            chat.set_player_info_boolean_online(&player, &node, boolean);
            chat.set_player_info_boolean(&scope, &identity, &node, boolean);

            prop_assert_eq!(
                chat.player_info_string_online(&player, &node, &text),
                chat.player_info_string(&scope, &identity, &node, &text)
            );
            chat.set_player_info_string_online(&player, &node, &text);
            chat.set_player_info_string(&scope, &identity, &node, &text);

            let calls = chat.take_calls();
            prop_assert_eq!(calls.len(), 16);
            for pair in calls.chunks(2) {
                prop_assert_eq!(&pair[0], &pair[1]);
            }
        }

        #[test]
        fn test_group_info_forwarding(
            world in generators::world_name(),
            group in generators::group_name(),
            node in generators::node(),
            int in any::<i32>(),
            double in any::<f64>(),
            boolean in any::<bool>(),
            text in ".{0,16}",
        ) {
            let chat = chat();
            let handle = FakeWorld::new(world.clone());
            let scope = WorldScope::named(world);

            prop_assert_eq!(
                chat.group_info_integer_in(&handle, &group, &node, int),
                chat.group_info_integer(&scope, &group, &node, int)
            );
            chat.set_group_info_integer_in(&handle, &group, &node, int);
            chat.set_group_info_integer(&scope, &group, &node, int);

            prop_assert_eq!(
                chat.group_info_double_in(&handle, &group, &node, double).to_bits(),
                chat.group_info_double(&scope, &group, &node, double).to_bits()
            );
            chat.set_group_info_double_in(&handle, &group, &node, double);
            chat.set_group_info_double(&scope, &group, &node, double);

            prop_assert_eq!(
                chat.group_info_boolean_in(&handle, &group, &node, boolean),
                chat.group_info_boolean(&scope, &group, &node, boolean)
            );
            chat.set_group_info_boolean_in(&handle, &group, &node, boolean);
            chat.set_group_info_boolean(&scope, &group, &node, boolean);

            prop_assert_eq!(
                chat.group_info_string_in(&handle, &group, &node, &text),
                chat.group_info_string(&scope, &group, &node, &text)
            );
            chat.set_group_info_string_in(&handle, &group, &node, &text);
            chat.set_group_info_string(&scope, &group, &node, &text);

            let calls = chat.take_calls();
            prop_assert_eq!(calls.len(), 16);
            for pair in calls.chunks(2) {
                prop_assert_eq!(&pair[0], &pair[1]);
            }
        }

        #[test]
        fn test_permission_online_forwarding(
            world in generators::world_name(),
            node in generators::node(),
            group in generators::group_name(),
        ) {
            let perms = RecordingPermission::new();
            let player = FakePlayer::new("Steve", world.clone());
            let handle = FakeWorld::new(world.clone());
            let scope = WorldScope::named(world);
            let identity = player.offline_player();

            perms.player_has_online(&player, &node);
            perms.player_has(&scope, &identity, &node);
            perms.player_add_online(&player, &node);
            perms.player_add(&scope, &identity, &node);
            perms.player_in_group_online(&player, &group);
            perms.player_in_group(&scope, &identity, &group);
            perms.player_add_group_online(&player, &group);
            perms.player_add_group(&scope, &identity, &group);
            perms.player_remove_group_online(&player, &group);
            perms.player_remove_group(&scope, &identity, &group);
            perms.group_has_in(&handle, &group, &node);
            perms.group_has(&scope, &group, &node);
            perms.group_add_in(&handle, &group, &node);
            perms.group_add(&scope, &group, &node);
            perms.group_remove_in(&handle, &group, &node);
            perms.group_remove(&scope, &group, &node);

            let calls = perms.take_calls();
            prop_assert_eq!(calls.len(), 16);
            for pair in calls.chunks(2) {
                prop_assert_eq!(&pair[0], &pair[1]);
            }
        }
    }
}
