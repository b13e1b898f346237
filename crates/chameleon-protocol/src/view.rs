//! Per-player state projections.
//!
//! A [`GameView`] is the only shape game state ever leaves the server
//! in. It is built per recipient, so hidden information (the secret
//! word for the outsider, vote targets before the reveal) is stripped
//! before serialization rather than filtered client-side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::{PlayerId, RoomCode};
use crate::types::{DiceRoll, Phase, RoomConfig, RoomStatus};

// ---------------------------------------------------------------------------
// Room-level shapes
// ---------------------------------------------------------------------------

/// One player as shown in rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub is_host: bool,
    pub is_bot: bool,
    pub ready: bool,
    pub avatar: String,
    pub score: u32,
    pub connected: bool,
}

/// The public face of a room: roster plus settings. Safe to send to
/// anyone in the room at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub code: RoomCode,
    pub status: RoomStatus,
    pub host: Option<PlayerId>,
    pub players: Vec<PlayerSummary>,
    pub config: RoomConfig,
}

/// A topic as shown to players: the 16-word grid everyone sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub words: Vec<String>,
}

// ---------------------------------------------------------------------------
// Round shapes
// ---------------------------------------------------------------------------

/// A submitted clue. Clues are public the moment they are given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub player: PlayerId,
    pub word: String,
}

/// A cast vote with its target. Only ever serialized after the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEntry {
    pub voter: PlayerId,
    pub target: PlayerId,
}

/// A vote as it appears in a mid-voting projection: who has voted is
/// public, who they voted for is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteStatus {
    pub voter: PlayerId,
    /// `None` until the votes are revealed.
    pub target: Option<PlayerId>,
}

/// How a round ended. Everything here is public once the round reaches
/// the results phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResolution {
    /// The vote produced no single leader, so nobody was accused.
    pub tie: bool,
    /// Who the outsider was.
    pub outsider: PlayerId,
    /// Who the vote landed on, if anyone.
    pub accused: Option<PlayerId>,
    /// Whether the accused was in fact the outsider.
    pub caught: bool,
    /// Whether a caught outsider guessed the secret word.
    pub guessed_word: bool,
    /// The caught outsider's guess, verbatim.
    pub guess: Option<String>,
    /// The secret word, revealed to everyone.
    pub secret_word: String,
    /// Votes received per accused player.
    pub vote_counts: BTreeMap<PlayerId, u32>,
}

// ---------------------------------------------------------------------------
// GameView
// ---------------------------------------------------------------------------

/// A snapshot of the running game from one player's seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub round: u32,
    pub phase: Phase,
    pub topic: TopicView,
    /// Hidden until the dice have been rolled.
    pub dice: Option<DiceRoll>,
    /// The secret word. `None` for the outsider and for everyone during
    /// role reveal.
    pub secret_word: Option<String>,
    /// Whether the viewing player is the outsider this round.
    pub is_outsider: bool,
    pub turn_order: Vec<PlayerId>,
    pub turn_index: usize,
    pub clues: Vec<ClueEntry>,
    /// Vote progress; targets are populated only once revealed.
    pub votes: Vec<VoteStatus>,
    pub scores: BTreeMap<PlayerId, u32>,
    pub config: RoomConfig,
    /// Present only in the results phase.
    pub resolution: Option<RoundResolution>,
}

// =========================================================================
// Tests
// =========================================================================
