//! In-memory implementation of the Permission trait.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use warden_core::{
    validate_node, Attachment, EffectivePermission, OfflinePlayer, Player, PlayerId, WorldScope,
};
use warden_perms::Permission;

use crate::config::MemoryConfig;
use crate::scope::Scoped;

/// In-memory permission backend.
///
/// All data is lost when the backend is dropped. Thread-safe via RwLock.
pub struct MemoryPermission {
    config: MemoryConfig,
    enabled: AtomicBool,
    inner: RwLock<MemoryPermissionInner>,
}

struct MemoryPermissionInner {
    /// Nodes granted directly to players.
    player_nodes: Scoped<PlayerId, BTreeSet<String>>,

    /// Nodes granted to groups.
    group_nodes: Scoped<String, BTreeSet<String>>,

    /// Group membership, in join order.
    membership: Scoped<PlayerId, Vec<String>>,

    /// Every group that has been created, granted a node, or joined.
    known_groups: BTreeSet<String>,
}

impl MemoryPermission {
    /// Create a new empty backend.
    pub fn new(config: MemoryConfig) -> Self {
        let mut known_groups = BTreeSet::new();
        if config.group_support {
            if let Some(group) = &config.default_group {
                known_groups.insert(group.clone());
            }
        }

        Self {
            config,
            enabled: AtomicBool::new(true),
            inner: RwLock::new(MemoryPermissionInner {
                player_nodes: Scoped::new(),
                group_nodes: Scoped::new(),
                membership: Scoped::new(),
                known_groups,
            }),
        }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Switch the backend on or off. A disabled backend still answers
    /// queries; registries use [`Permission::is_enabled`] to skip it.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Register a group with no nodes and no members.
    ///
    /// Returns `false` if the group already exists or groups are unsupported.
    pub fn create_group(&self, group: &str) -> bool {
        if !self.config.group_support {
            return false;
        }
        let created = self.inner.write().known_groups.insert(group.to_owned());
        if created {
            tracing::debug!(group, "group created");
        }
        created
    }

    fn accepts(&self, node: &str) -> bool {
        match validate_node(node) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(backend = %self.config.name, "rejected node: {}", e);
                false
            }
        }
    }
}

impl MemoryPermissionInner {
    fn groups_of(&self, world: &WorldScope, player: &PlayerId, inherit: bool) -> Vec<String> {
        self.membership.layers_flattened(world, player, inherit)
    }

    fn group_has(&self, world: &WorldScope, group: &str, node: &str, inherit: bool) -> bool {
        self.group_nodes
            .layers(world, &group.to_owned(), inherit)
            .into_iter()
            .any(|nodes| nodes.contains(node))
    }
}

impl Permission for MemoryPermission {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn has_super_perms_compat(&self) -> bool {
        self.config.super_perms_compat
    }

    fn player_has(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
        let inherit = self.config.inherit_global;
        let inner = self.inner.read();

        let direct = inner
            .player_nodes
            .layers(world, &player.id, inherit)
            .into_iter()
            .any(|nodes| nodes.contains(permission));
        if direct {
            return true;
        }

        if !self.config.group_support {
            return false;
        }

        inner
            .groups_of(world, &player.id, inherit)
            .iter()
            .any(|group| inner.group_has(world, group, permission, inherit))
    }

    fn player_add(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
        if !self.accepts(permission) {
            return false;
        }

        let added = self
            .inner
            .write()
            .player_nodes
            .entry(world, &player.id)
            .insert(permission.to_owned());
        if added {
            tracing::debug!(
                world = %world,
                player = %player.id,
                node = permission,
                "player node added"
            );
        }
        added
    }

    fn player_remove(&self, world: &WorldScope, player: &OfflinePlayer, permission: &str) -> bool {
        let mut inner = self.inner.write();
        let removed = inner
            .player_nodes
            .get_mut(world, &player.id)
            .map(|nodes| nodes.remove(permission))
            .unwrap_or(false);
        if removed {
            inner
                .player_nodes
                .remove_if(world, &player.id, BTreeSet::is_empty);
            tracing::debug!(
                world = %world,
                player = %player.id,
                node = permission,
                "player node removed"
            );
        }
        removed
    }

    fn group_has(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
        if !self.config.group_support {
            return false;
        }
        self.inner
            .read()
            .group_has(world, group, permission, self.config.inherit_global)
    }

    fn group_add(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
        if !self.config.group_support || !self.accepts(permission) {
            return false;
        }

        let mut inner = self.inner.write();
        inner.known_groups.insert(group.to_owned());
        let added = inner
            .group_nodes
            .entry(world, &group.to_owned())
            .insert(permission.to_owned());
        if added {
            tracing::debug!(world = %world, group, node = permission, "group node added");
        }
        added
    }

    fn group_remove(&self, world: &WorldScope, group: &str, permission: &str) -> bool {
        if !self.config.group_support {
            return false;
        }

        let key = group.to_owned();
        let mut inner = self.inner.write();
        let removed = inner
            .group_nodes
            .get_mut(world, &key)
            .map(|nodes| nodes.remove(permission))
            .unwrap_or(false);
        if removed {
            inner.group_nodes.remove_if(world, &key, BTreeSet::is_empty);
            tracing::debug!(world = %world, group, node = permission, "group node removed");
        }
        removed
    }

    fn player_in_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool {
        if !self.config.group_support {
            return false;
        }
        self.inner
            .read()
            .groups_of(world, &player.id, self.config.inherit_global)
            .iter()
            .any(|g| g == group)
    }

    fn player_add_group(&self, world: &WorldScope, player: &OfflinePlayer, group: &str) -> bool {
        if !self.config.group_support {
            return false;
        }

        let mut inner = self.inner.write();
        inner.known_groups.insert(group.to_owned());
        let groups = inner.membership.entry(world, &player.id);
        if groups.iter().any(|g| g == group) {
            return false;
        }
        groups.push(group.to_owned());
        tracing::debug!(world = %world, player = %player.id, group, "player joined group");
        true
    }

    fn player_remove_group(
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
            tracing::debug!(world = %world, player = %player.id, group, "player left group");
        }
        removed
    }

    fn player_groups(&self, world: &WorldScope, player: &OfflinePlayer) -> Vec<String> {
        if !self.config.group_support {
            return Vec::new();
        }
        self.inner
            .read()
            .groups_of(world, &player.id, self.config.inherit_global)
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

    fn groups(&self) -> Vec<String> {
        if !self.config.group_support {
            return Vec::new();
        }
        self.inner.read().known_groups.iter().cloned().collect()
    }

    fn has_group_support(&self) -> bool {
        self.config.group_support
    }

    fn add_attachment(&self, player: &dyn Player, permission: &str, value: bool) -> Attachment {
        let attachment = player.add_attachment(permission, value);
        tracing::debug!(
            player = %player.id(),
            attachment = %attachment.id,
            node = permission,
            value,
            "attachment added"
        );
        attachment
    }

    fn remove_attachment(
        &self,
        player: &dyn Player,
        attachment: &Attachment,
    ) -> Option<Attachment> {
        if player.remove_attachment(attachment) {
            tracing::debug!(
                player = %player.id(),
                attachment = %attachment.id,
                "attachment removed"
            );
            Some(attachment.clone())
        } else {
            None
        }
    }

    fn player_remove_attachment(&self, player: &dyn Player, attachment: &Attachment) {
        let _ = self.remove_attachment(player, attachment);
    }

    fn effective_permissions(&self, player: &dyn Player) -> Vec<EffectivePermission> {
        player.effective_permissions()
    }
}
