//! The game state machine for a single room.
//!
//! A [`GameSession`] runs one game: rounds of role reveal, dice roll,
//! clue giving, discussion, voting, and (when the outsider is caught)
//! the final guess. It is synchronous and single-owner; the server's
//! room actor holds it and serializes every mutation. Autonomous seats
//! act through [`bots`], which feed the same validated entry points as
//! human input.

pub mod bots;

mod error;
mod session;

pub use error::EngineError;
pub use session::{
    ClueAdvance, GameSession, GuessReveal, RoundSetup, Seat, VoteProgress, VoteReveal,
};
