//! Shared vocabulary: phases, difficulty, room configuration, dice.
//!
//! These types are used both on the wire and inside the engine, so they
//! live here rather than in the crates that own the behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::PlayerId;

// ---------------------------------------------------------------------------
// Recipient
// ---------------------------------------------------------------------------

/// Specifies who should receive a notification.
///
/// Dispatch logic produces `(Recipient, Notification)` pairs; the server
/// layer resolves them against the room's live connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// Every player in the room.
    All,
    /// One specific player.
    Player(PlayerId),
    /// Everyone except the specified player.
    AllExcept(PlayerId),
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The phase of a round, in the order a round moves through them.
///
/// `ChameleonGuess` is only entered when the vote actually lands on the
/// outsider; every other transition is linear. Serialized in kebab-case
/// (`"role-reveal"`, `"clue-giving"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    RoleReveal,
    DiceRoll,
    ClueGiving,
    Discussion,
    Voting,
    ChameleonGuess,
    Results,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::RoleReveal => "role-reveal",
            Phase::DiceRoll => "dice-roll",
            Phase::ClueGiving => "clue-giving",
            Phase::Discussion => "discussion",
            Phase::Voting => "voting",
            Phase::ChameleonGuess => "chameleon-guess",
            Phase::Results => "results",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Room-level difficulty. Tunes which association tier bots draw clues
/// from and how sharply they vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// A bot's table persona, attached at creation. Shown to other players
/// and used by the heuristics to shade how the bot clues and votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Aggressive,
    Cautious,
    Analytical,
    Erratic,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Aggressive,
        Archetype::Cautious,
        Archetype::Analytical,
        Archetype::Erratic,
    ];
}

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// The coarse lifecycle state of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Lobby,
    Playing,
    Ended,
}

impl RoomStatus {
    /// New players may only join while the room sits in the lobby.
    pub fn accepts_joins(self) -> bool {
        matches!(self, RoomStatus::Lobby)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomStatus::Lobby => "lobby",
            RoomStatus::Playing => "playing",
            RoomStatus::Ended => "ended",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// RoomConfig
// ---------------------------------------------------------------------------

/// Host-tunable room settings. Mutable only while the room is in the
/// lobby; a running game keeps the settings it started with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Minimum players (humans + bots) required to start.
    pub min_players: usize,
    /// Hard cap on room size.
    pub max_players: usize,
    /// Seconds a player gets to submit their clue before the turn is
    /// passed for them.
    pub turn_secs: u64,
    /// Length of the open discussion window.
    pub discussion_secs: u64,
    /// Bot difficulty for this room.
    pub difficulty: Difficulty,
}

impl Default for RoomConfig {
    fn default() -> Self {
        RoomConfig {
            min_players: 4,
            max_players: 8,
            turn_secs: 30,
            discussion_secs: 120,
            difficulty: Difficulty::Medium,
        }
    }
}

// ---------------------------------------------------------------------------
// DiceRoll
// ---------------------------------------------------------------------------

/// The dice result that selects the secret word from the 4x4 topic grid.
///
/// The draw picks a grid cell uniformly and derives the die faces from
/// it (`die1 = row + 1`, `die2 = col + 1`), so every word is equally
/// likely. `index` is the flattened cell, `row * 4 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub die1: u8,
    pub die2: u8,
    pub row: usize,
    pub col: usize,
    pub index: usize,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Phase::RoleReveal).unwrap();
        assert_eq!(json, "\"role-reveal\"");

        let json = serde_json::to_string(&Phase::ChameleonGuess).unwrap();
        assert_eq!(json, "\"chameleon-guess\"");
    }

    #[test]
    fn test_phase_display_matches_wire_name() {
        assert_eq!(Phase::ClueGiving.to_string(), "clue-giving");
    }

    #[test]
    fn test_difficulty_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
    }

    #[test]
    fn test_room_status_accepts_joins_only_in_lobby() {
        assert!(RoomStatus::Lobby.accepts_joins());
        assert!(!RoomStatus::Playing.accepts_joins());
        assert!(!RoomStatus::Ended.accepts_joins());
    }

    #[test]
    fn test_room_config_defaults() {
        let config = RoomConfig::default();
        assert_eq!(config.min_players, 4);
        assert_eq!(config.max_players, 8);
        assert_eq!(config.turn_secs, 30);
        assert_eq!(config.discussion_secs, 120);
        assert_eq!(config.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_dice_roll_round_trip() {
        let roll = DiceRoll {
            die1: 2,
            die2: 3,
            row: 1,
            col: 2,
            index: 6,
        };
        let bytes = serde_json::to_vec(&roll).unwrap();
        let decoded: DiceRoll = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(roll, decoded);
    }

    #[test]
    fn test_recipient_round_trip() {
        let r = Recipient::AllExcept(PlayerId(3));
        let bytes = serde_json::to_vec(&r).unwrap();
        let decoded: Recipient = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(r, decoded);
    }
}
