//! Reusable conformance checks.
//!
//! Each check exercises one obligation of the contracts against any backend
//! and reports the first violation it finds. Checks use fresh random
//! identities and node names, so they can run against a backend that
//! already holds data.

use std::fmt::Debug;

use thiserror::Error;

use warden_chat::{Chat, ChatExt};
use warden_core::{OfflinePlayer, Player, PlayerId, Uuid, WorldScope};
use warden_perms::{Permission, PermissionExt};

use crate::fixtures::FakeSender;

/// A violated contract obligation.
#[derive(Debug, Error)]
pub enum ConformanceFailure {
    #[error("{method} returned {actual} instead of the default {expected}")]
    DefaultNotReturned {
        method: &'static str,
        expected: String,
        actual: String,
    },

    #[error("{method} set under {set_in} is visible from {seen_from}")]
    ScopeLeak {
        method: &'static str,
        set_in: WorldScope,
        seen_from: WorldScope,
    },

    #[error("groups() returned {chat:?} but the permission provider returned {permission:?}")]
    GroupsDiffer {
        chat: Vec<String>,
        permission: Vec<String>,
    },

    #[error("{method}: online form returned {online} but scoped form returned {scoped}")]
    FormsDiffer {
        method: &'static str,
        online: String,
        scoped: String,
    },

    #[error("has() returned {actual} but the host answered {expected}")]
    NativeCheckIgnored { expected: bool, actual: bool },

    #[error("membership: {0}")]
    Membership(String),
}

/// Result of a conformance check.
pub type Outcome = Result<(), ConformanceFailure>;

const INTEGERS: [i32; 5] = [0, -1, 42, i32::MIN, i32::MAX];
const DOUBLES: [f64; 6] = [0.0, -0.0, -1.5, f64::MAX, f64::MIN_POSITIVE, f64::NAN];
const BOOLEANS: [bool; 2] = [true, false];
const STRINGS: [&str; 3] = ["", "default", "ünïcødé"];

fn fresh_player() -> OfflinePlayer {
    OfflinePlayer::new(PlayerId::random())
}

fn fresh_name(kind: &str) -> String {
    format!("conformance.{kind}.{}", Uuid::new_v4().simple())
}

fn ensure_default<T: Debug>(method: &'static str, expected: &T, actual: &T, same: bool) -> Outcome {
    if same {
        Ok(())
    } else {
        Err(ConformanceFailure::DefaultNotReturned {
            method,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

fn ensure_same<T: Debug + PartialEq>(method: &'static str, online: T, scoped: T) -> Outcome {
    if online == scoped {
        Ok(())
    } else {
        Err(ConformanceFailure::FormsDiffer {
            method,
            online: format!("{online:?}"),
            scoped: format!("{scoped:?}"),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Permission checks
// ─────────────────────────────────────────────────────────────────────────────

/// `has` answers exactly what the host's native check answers.
pub fn check_native_has(perms: &dyn Permission) -> Outcome {
    for sender in [FakeSender::allowing(), FakeSender::denying()] {
        let actual = perms.has(&sender, &fresh_name("node"));
        if actual != sender.answer {
            return Err(ConformanceFailure::NativeCheckIgnored {
                expected: sender.answer,
                actual,
            });
        }
    }
    Ok(())
}

/// Membership mutations that report success are visible to membership
/// queries in the same scope.
///
/// A backend without group support passes unconditionally: returning
/// `false` from every group mutation is valid for it.
pub fn check_group_membership(perms: &dyn Permission) -> Outcome {
    if !perms.has_group_support() {
        return Ok(());
    }

    let player = fresh_player();
    let group = fresh_name("group");
    let world = WorldScope::named(fresh_name("world"));

    if perms.player_add_group(&world, &player, &group) {
        if !perms.player_in_group(&world, &player, &group) {
            return Err(ConformanceFailure::Membership(format!(
                "{group} added in {world} but player_in_group is false"
            )));
        }
        if !perms.player_groups(&world, &player).contains(&group) {
            return Err(ConformanceFailure::Membership(format!(
                "{group} added in {world} but missing from player_groups"
            )));
        }
    }

    if perms.player_remove_group(&world, &player, &group)
        && perms.player_in_group(&world, &player, &group)
    {
        return Err(ConformanceFailure::Membership(format!(
            "{group} removed in {world} but player_in_group is still true"
        )));
    }

    Ok(())
}

/// A player node granted in one world is not visible from another world
/// or from the global scope.
pub fn check_permission_isolation(perms: &dyn Permission) -> Outcome {
    let player = fresh_player();
    let node = fresh_name("node");
    let west = WorldScope::named(fresh_name("west"));
    let east = WorldScope::named(fresh_name("east"));

    if !perms.player_add(&west, &player, &node) {
        return Ok(());
    }

    for seen_from in [east, WorldScope::Global] {
        if perms.player_has(&seen_from, &player, &node) {
            return Err(ConformanceFailure::ScopeLeak {
                method: "player_add",
                set_in: west,
                seen_from,
            });
        }
    }

    perms.player_remove(&west, &player, &node);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat checks
// ─────────────────────────────────────────────────────────────────────────────

/// `groups()` returns exactly what the held permission provider returns.
pub fn check_groups_delegation(chat: &dyn Chat) -> Outcome {
    let from_chat = chat.groups();
    let from_permission = chat.permission().groups();
    if from_chat == from_permission {
        Ok(())
    } else {
        Err(ConformanceFailure::GroupsDiffer {
            chat: from_chat,
            permission: from_permission,
        })
    }
}

/// Info getters return the caller default verbatim for unset nodes.
pub fn check_info_defaults(chat: &dyn Chat) -> Outcome {
    let player = fresh_player();
    let group = fresh_name("group");

    for world in [WorldScope::Global, WorldScope::named(fresh_name("world"))] {
        let node = fresh_name("info");

        for d in INTEGERS {
            let got = chat.player_info_integer(&world, &player, &node, d);
            ensure_default("player_info_integer", &d, &got, got == d)?;
            let got = chat.group_info_integer(&world, &group, &node, d);
            ensure_default("group_info_integer", &d, &got, got == d)?;
        }

        for d in DOUBLES {
            let got = chat.player_info_double(&world, &player, &node, d);
            ensure_default("player_info_double", &d, &got, got.to_bits() == d.to_bits())?;
            let got = chat.group_info_double(&world, &group, &node, d);
            ensure_default("group_info_double", &d, &got, got.to_bits() == d.to_bits())?;
        }

        for d in BOOLEANS {
            let got = chat.player_info_boolean(&world, &player, &node, d);
            ensure_default("player_info_boolean", &d, &got, got == d)?;
            let got = chat.group_info_boolean(&world, &group, &node, d);
            ensure_default("group_info_boolean", &d, &got, got == d)?;
        }

        for d in STRINGS {
            let got = chat.player_info_string(&world, &player, &node, d);
            ensure_default("player_info_string", &d, &got.as_str(), got == d)?;
            let got = chat.group_info_string(&world, &group, &node, d);
            ensure_default("group_info_string", &d, &got.as_str(), got == d)?;
        }
    }

    Ok(())
}

/// Values set under one world are invisible from another world and from
/// the global scope, for players and groups alike.
pub fn check_world_isolation(chat: &dyn Chat) -> Outcome {
    let player = fresh_player();
    let group = fresh_name("group");
    let node = fresh_name("info");
    let west = WorldScope::named(fresh_name("west"));
    let east = WorldScope::named(fresh_name("east"));
    let marker = fresh_name("marker");

    chat.set_player_prefix(&west, &player, &marker);
    chat.set_player_suffix(&west, &player, &marker);
    chat.set_group_prefix(&west, &group, &marker);
    chat.set_group_suffix(&west, &group, &marker);
    chat.set_player_info_integer(&west, &player, &node, 7);
    chat.set_player_info_double(&west, &player, &node, 7.5);
    chat.set_player_info_boolean(&west, &player, &node, true);
    chat.set_player_info_string(&west, &player, &node, &marker);
    chat.set_group_info_integer(&west, &group, &node, 7);
    chat.set_group_info_double(&west, &group, &node, 7.5);
    chat.set_group_info_boolean(&west, &group, &node, true);
    chat.set_group_info_string(&west, &group, &node, &marker);

    for seen_from in [east, WorldScope::Global] {
        let leak = |method| {
            Err(ConformanceFailure::ScopeLeak {
                method,
                set_in: west.clone(),
                seen_from: seen_from.clone(),
            })
        };

        if chat.player_prefix(&seen_from, &player).as_deref() == Some(marker.as_str()) {
            return leak("set_player_prefix");
        }
        if chat.player_suffix(&seen_from, &player).as_deref() == Some(marker.as_str()) {
            return leak("set_player_suffix");
        }
        if chat.group_prefix(&seen_from, &group).as_deref() == Some(marker.as_str()) {
            return leak("set_group_prefix");
        }
        if chat.group_suffix(&seen_from, &group).as_deref() == Some(marker.as_str()) {
            return leak("set_group_suffix");
        }
        if chat.player_info_integer(&seen_from, &player, &node, 0) != 0 {
            return leak("set_player_info_integer");
        }
        if chat.player_info_double(&seen_from, &player, &node, 0.0) != 0.0 {
            return leak("set_player_info_double");
        }
        if chat.player_info_boolean(&seen_from, &player, &node, false) {
            return leak("set_player_info_boolean");
        }
        if !chat.player_info_string(&seen_from, &player, &node, "").is_empty() {
            return leak("set_player_info_string");
        }
        if chat.group_info_integer(&seen_from, &group, &node, 0) != 0 {
            return leak("set_group_info_integer");
        }
        if chat.group_info_double(&seen_from, &group, &node, 0.0) != 0.0 {
            return leak("set_group_info_double");
        }
        if chat.group_info_boolean(&seen_from, &group, &node, false) {
            return leak("set_group_info_boolean");
        }
        if !chat.group_info_string(&seen_from, &group, &node, "").is_empty() {
            return leak("set_group_info_string");
        }
    }

    Ok(())
}

/// Every getter answers the same through its online (or world handle)
/// form as through the scoped form with the session's world and identity.
pub fn check_online_equivalence(chat: &dyn Chat, player: &dyn Player) -> Outcome {
    let world = WorldScope::of(player.world());
    let identity = player.offline_player();
    let group = fresh_name("group");
    let node = fresh_name("info");

    ensure_same(
        "player_prefix",
        chat.player_prefix_online(player),
        chat.player_prefix(&world, &identity),
    )?;
    ensure_same(
        "player_suffix",
        chat.player_suffix_online(player),
        chat.player_suffix(&world, &identity),
    )?;
    ensure_same(
        "group_prefix",
        chat.group_prefix_in(player.world(), &group),
        chat.group_prefix(&world, &group),
    )?;
    ensure_same(
        "group_suffix",
        chat.group_suffix_in(player.world(), &group),
        chat.group_suffix(&world, &group),
    )?;
    ensure_same(
        "player_info_integer",
        chat.player_info_integer_online(player, &node, 3),
        chat.player_info_integer(&world, &identity, &node, 3),
    )?;
    ensure_same(
        "player_info_double",
        chat.player_info_double_online(player, &node, 0.25).to_bits(),
        chat.player_info_double(&world, &identity, &node, 0.25).to_bits(),
    )?;
    ensure_same(
        "player_info_boolean",
        chat.player_info_boolean_online(player, &node, true),
        chat.player_info_boolean(&world, &identity, &node, true),
    )?;
    ensure_same(
        "player_info_string",
        chat.player_info_string_online(player, &node, "x"),
        chat.player_info_string(&world, &identity, &node, "x"),
    )?;
    ensure_same(
        "group_info_integer",
        chat.group_info_integer_in(player.world(), &group, &node, 3),
        chat.group_info_integer(&world, &group, &node, 3),
    )?;
    ensure_same(
        "group_info_double",
        chat.group_info_double_in(player.world(), &group, &node, 0.25).to_bits(),
        chat.group_info_double(&world, &group, &node, 0.25).to_bits(),
    )?;
    ensure_same(
        "group_info_boolean",
        chat.group_info_boolean_in(player.world(), &group, &node, true),
        chat.group_info_boolean(&world, &group, &node, true),
    )?;
    ensure_same(
        "group_info_string",
        chat.group_info_string_in(player.world(), &group, &node, "x"),
        chat.group_info_string(&world, &group, &node, "x"),
    )?;
    ensure_same(
        "player_in_group",
        chat.player_in_group_online(player, &group),
        chat.player_in_group(&world, &identity, &group),
    )?;
    ensure_same(
        "player_groups",
        chat.player_groups_online(player),
        chat.player_groups(&world, &identity),
    )?;
    ensure_same(
        "primary_group",
        chat.primary_group_online(player),
        chat.primary_group(&world, &identity),
    )
}

/// Run every chat check.
pub fn check_chat(chat: &dyn Chat, player: &dyn Player) -> Outcome {
    check_groups_delegation(chat)?;
    check_info_defaults(chat)?;
    check_world_isolation(chat)?;
    check_online_equivalence(chat, player)
}

/// Run every permission check.
pub fn check_permission(perms: &dyn Permission) -> Outcome {
    check_native_has(perms)?;
    check_group_membership(perms)?;
    check_permission_isolation(perms)
}
