//! Server → client notifications.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::{PlayerId, RoomCode};
use crate::types::DiceRoll;
use crate::view::{
    ClueEntry, GameView, PlayerSummary, RoomSnapshot, RoundResolution, TopicView, VoteEntry,
};

/// Everything the server can push to a client.
///
/// Internally tagged, kebab-case, mirroring [`crate::Action`]. Variants
/// marked "private" are only ever sent to a single player; the rest are
/// room broadcasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Notification {
    // -- Lobby --
    /// Private: the sender's room was created and they are its host.
    RoomCreated {
        code: RoomCode,
        player: PlayerId,
        room: RoomSnapshot,
    },
    /// A player joined (or reconnected, per the flag).
    PlayerJoined {
        player: PlayerSummary,
        reconnected: bool,
        room: RoomSnapshot,
    },
    /// A player's connection dropped; they may still come back.
    PlayerDisconnected { player: PlayerId, room: RoomSnapshot },
    /// A player left for good (explicit leave or expired grace).
    PlayerLeft { player: PlayerId, room: RoomSnapshot },
    /// Roster or settings changed (ready flips, bots, config, host).
    RoomUpdate { room: RoomSnapshot },

    // -- Round lifecycle --
    GameStarted { round: u32 },
    /// Private: the recipient's role for this round.
    RoleAssigned { outsider: bool },
    DiceRolled { dice: DiceRoll, topic: TopicView },
    /// Private: the secret word, sent to knowers only.
    SecretRevealed { word: String, index: usize },
    CluePhaseStarted {
        turn_order: Vec<PlayerId>,
        current: PlayerId,
    },
    ClueSubmitted { player: PlayerId, word: String },
    /// A player's turn expired (or they were absent) and was skipped.
    TurnPassed { player: PlayerId },
    NextTurn { player: PlayerId, index: usize },
    DiscussionStarted { clues: Vec<ClueEntry>, secs: u64 },
    VotingStarted,
    /// Vote progress without targets.
    PlayerVoted {
        player: PlayerId,
        votes: usize,
        total: usize,
    },
    /// All votes are in (or the window closed); targets go public.
    VotesRevealed {
        votes: Vec<VoteEntry>,
        vote_counts: BTreeMap<PlayerId, u32>,
        accused: Option<PlayerId>,
        tie: bool,
        caught: bool,
        outsider: PlayerId,
    },
    /// The caught outsider guessed; did they name the secret word?
    GuessResult {
        correct: bool,
        guess: String,
        secret_word: String,
    },
    RoundResults {
        resolution: RoundResolution,
        scores: BTreeMap<PlayerId, u32>,
        round: u32,
    },
    NewRound { round: u32 },
    GameEnded {
        scores: BTreeMap<PlayerId, u32>,
        rounds: u32,
        room: RoomSnapshot,
    },

    // -- Session --
    /// A chat line from a room member, length-capped by the server.
    ChatMessage {
        player: PlayerId,
        name: String,
        message: String,
    },
    /// Private: full state snapshot in reply to a state request.
    State {
        room: RoomSnapshot,
        game: Option<GameView>,
    },
    /// Private: a request failed. `code` follows HTTP conventions.
    Error { code: u16, message: String },
}

// =========================================================================
// Tests
// =========================================================================
