//! Wire types for the chameleon game server.
//!
//! Everything a client and the server exchange lives here: identifiers,
//! the [`Action`] enum (client → server), the [`Notification`] enum
//! (server → client), per-player state projections, and the codec that
//! turns them into bytes.
//!
//! This crate is deliberately free of game logic. The rules, heuristics
//! and engine crates all speak in these types, so keeping them in one
//! leaf crate avoids dependency cycles.

pub mod action;
pub mod codec;
pub mod error;
pub mod ids;
pub mod notify;
pub mod types;
pub mod view;

pub use action::{Action, ConfigPatch};
pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use ids::{ConnId, PlayerId, ROOM_CODE_ALPHABET, ROOM_CODE_LEN, RoomCode};
pub use notify::Notification;
pub use types::{Archetype, DiceRoll, Difficulty, Phase, Recipient, RoomConfig, RoomStatus};
pub use view::{
    ClueEntry, GameView, PlayerSummary, RoomSnapshot, RoundResolution, TopicView, VoteEntry,
    VoteStatus,
};
