//! Traits the host server implements for its own objects.
//!
//! Providers only ever read a world name and a durable identity from these
//! handles, and pass attachment requests straight back to the host.

use crate::attachment::{Attachment, EffectivePermission};
use crate::types::{OfflinePlayer, PlayerId};

/// Anything a command can come from: a player, the console, a command block.
pub trait CommandSender {
    /// The sender's display name.
    fn name(&self) -> &str;

    /// The host's native permission evaluation for this sender.
    fn has_permission(&self, node: &str) -> bool;
}

/// A loaded world.
pub trait World {
    /// The world's name, as used for [`WorldScope::Named`](crate::WorldScope::Named).
    fn name(&self) -> &str;
}

/// A live, connected player session.
pub trait Player: CommandSender {
    /// The stable identifier of the connected player.
    fn id(&self) -> PlayerId;

    /// The world the player currently stands in.
    fn world(&self) -> &dyn World;

    /// The durable identity behind this session.
    fn offline_player(&self) -> OfflinePlayer {
        OfflinePlayer::named(self.id(), CommandSender::name(self))
    }

    /// Attach a dynamic permission to this session.
    ///
    /// The attachment lives until the session ends or it is removed.
    fn add_attachment(&self, node: &str, value: bool) -> Attachment;

    /// Detach a previously added attachment. Returns `false` if the
    /// attachment was not attached to this session.
    fn remove_attachment(&self, attachment: &Attachment) -> bool;

    /// Every permission currently resolved for this session, from any source.
    fn effective_permissions(&self) -> Vec<EffectivePermission>;
}
