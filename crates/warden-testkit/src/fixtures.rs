//! Host fakes.
//!
//! Stand-ins for the objects a game server hands to providers.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use warden_core::{
    Attachment, AttachmentId, CommandSender, EffectivePermission, GrantSource, Player, PlayerId,
    World,
};

/// A world with a fixed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeWorld(pub String);

impl FakeWorld {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl World for FakeWorld {
    fn name(&self) -> &str {
        &self.0
    }
}

/// A sender whose native check always answers the same way.
#[derive(Debug, Clone)]
pub struct FakeSender {
    pub name: String,
    pub answer: bool,
}

impl FakeSender {
    /// A console-like sender that passes every check.
    pub fn allowing() -> Self {
        Self {
            name: "console".to_string(),
            answer: true,
        }
    }

    /// A sender that fails every check.
    pub fn denying() -> Self {
        Self {
            name: "nobody".to_string(),
            answer: false,
        }
    }
}

impl CommandSender for FakeSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, _node: &str) -> bool {
        self.answer
    }
}

/// A connected player session.
///
/// Native permissions come from host defaults plus attachments; the last
/// attachment that sets a node wins.
pub struct FakePlayer {
    id: PlayerId,
    name: String,
    world: FakeWorld,
    defaults: BTreeMap<String, bool>,
    attachments: Mutex<Vec<Attachment>>,
    next_attachment: AtomicU64,
}

impl FakePlayer {
    /// A player with a random id standing in `world`.
    pub fn new(name: impl Into<String>, world: impl Into<String>) -> Self {
        Self::with_id(PlayerId::random(), name, world)
    }

    pub fn with_id(id: PlayerId, name: impl Into<String>, world: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            world: FakeWorld::new(world),
            defaults: BTreeMap::new(),
            attachments: Mutex::new(Vec::new()),
            next_attachment: AtomicU64::new(1),
        }
    }

    /// Add a host default permission.
    pub fn with_default(mut self, node: &str, value: bool) -> Self {
        self.defaults.insert(node.to_owned(), value);
        self
    }

    /// Move the player to another world.
    pub fn teleport(&mut self, world: impl Into<String>) {
        self.world = FakeWorld::new(world);
    }

    /// Number of attachments currently on the session.
    pub fn attachment_count(&self) -> usize {
        self.attachments.lock().len()
    }
}

impl CommandSender for FakePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        let attached = self
            .attachments
            .lock()
            .iter()
            .rev()
            .find_map(|a| a.value_of(node));
        attached
            .or_else(|| self.defaults.get(node).copied())
            .unwrap_or(false)
    }
}

impl Player for FakePlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn world(&self) -> &dyn World {
        &self.world
    }

    fn add_attachment(&self, node: &str, value: bool) -> Attachment {
        let id = AttachmentId(self.next_attachment.fetch_add(1, Ordering::SeqCst));
        let attachment = Attachment::single(id, self.id, node, value);
        self.attachments.lock().push(attachment.clone());
        attachment
    }

    fn remove_attachment(&self, attachment: &Attachment) -> bool {
        let mut attachments = self.attachments.lock();
        let before = attachments.len();
        attachments.retain(|a| a.id != attachment.id);
        attachments.len() != before
    }

    fn effective_permissions(&self) -> Vec<EffectivePermission> {
        let mut resolved: BTreeMap<String, EffectivePermission> = self
            .defaults
            .iter()
            .map(|(node, value)| {
                let effective = EffectivePermission {
                    node: node.clone(),
                    value: *value,
                    source: GrantSource::Default,
                };
                (node.clone(), effective)
            })
            .collect();

        for attachment in self.attachments.lock().iter() {
            for (node, value) in &attachment.permissions {
                resolved.insert(
                    node.clone(),
                    EffectivePermission::from_attachment(attachment, node, *value),
                );
            }
        }

        resolved.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_overrides_default() {
        let player = FakePlayer::new("Steve", "world").with_default("fly", false);
        assert!(!player.has_permission("fly"));

        let attachment = player.add_attachment("fly", true);
        assert!(player.has_permission("fly"));

        assert!(player.remove_attachment(&attachment));
        assert!(!player.remove_attachment(&attachment));
        assert!(!player.has_permission("fly"));
    }

    #[test]
    fn test_effective_permissions_sources() {
        let player = FakePlayer::new("Steve", "world")
            .with_default("chat", true)
            .with_default("fly", false);
        let attachment = player.add_attachment("fly", true);

        let effective = player.effective_permissions();
        assert_eq!(effective.len(), 2);
        assert_eq!(effective[0].node, "chat");
        assert_eq!(effective[0].source, GrantSource::Default);
        assert_eq!(effective[1].node, "fly");
        assert!(effective[1].value);
        assert_eq!(effective[1].source, GrantSource::Attachment(attachment.id));
    }

    #[test]
    fn test_teleport_changes_world() {
        let mut player = FakePlayer::new("Alex", "world");
        player.teleport("world_nether");
        assert_eq!(player.world().name(), "world_nether");
        assert_eq!(player.offline_player().name.as_deref(), Some("Alex"));
    }
}
