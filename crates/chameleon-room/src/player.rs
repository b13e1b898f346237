//! Player records and the cosmetic pools they draw from.

use std::time::Instant;

use chameleon_protocol::{Archetype, PlayerId, PlayerSummary};

/// Avatars handed out on join.
pub const AVATARS: &[&str] = &[
    "🦎", "🐸", "🦊", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐵", "🐶", "🐱",
];

/// Display names for bot players. When all twelve are taken the room
/// falls back to "Bot N".
pub const BOT_NAMES: &[&str] = &[
    "Suspicious Steve",
    "Sneaky Sarah",
    "Cunning Carl",
    "Bluffing Betty",
    "Tricky Tom",
    "Mysterious Maya",
    "Dodgy Dave",
    "Clever Claire",
    "Wily Winston",
    "Shifty Shelly",
    "Artful Arthur",
    "Cryptic Cathy",
];

/// One seat at the table, human or bot.
///
/// The id is stable for the life of the room; connection churn never
/// touches it.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_host: bool,
    pub is_bot: bool,
    pub ready: bool,
    pub avatar: &'static str,
    pub score: u32,
    pub connected: bool,
    /// When the player's connection dropped; `None` while connected.
    pub disconnected_at: Option<Instant>,
    /// Bot persona; `None` for humans.
    pub archetype: Option<Archetype>,
}

impl Player {
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            id: self.id,
            name: self.name.clone(),
            is_host: self.is_host,
            is_bot: self.is_bot,
            ready: self.ready,
            avatar: self.avatar.to_string(),
            score: self.score,
            connected: self.connected,
        }
    }
}
