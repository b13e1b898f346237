//! Room state: who is at the table, and in what shape.
//!
//! A [`Room`] is a plain synchronous struct; the server layer wraps it
//! in an actor and owns all concurrency. The room tracks membership,
//! readiness, host succession and the disconnect grace window, but
//! knows nothing about rounds — a running game lives next to it, not
//! inside it.

pub mod error;
pub mod player;
pub mod room;

pub use error::{RoomError, StartBlocked};
pub use player::{AVATARS, BOT_NAMES, Player};
pub use room::{JoinOutcome, LeaveReport, Room, SweepReport};
