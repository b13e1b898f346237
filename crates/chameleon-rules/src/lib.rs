//! Pure round mechanics for the chameleon game.
//!
//! Everything here is a synchronous function over plain data: no tasks,
//! no channels, no clocks. Randomness always comes in as `&mut impl Rng`
//! so callers (and tests) control determinism.

pub mod clue;
pub mod draw;
pub mod roles;
pub mod score;
pub mod vote;

pub use clue::{ClueRejection, MAX_CLUE_LEN, validate_clue};
pub use draw::{draw_secret, pick_topic};
pub use roles::{assign_outsider, first_turn_order, rotated_turn_order};
pub use score::score_round;
pub use vote::{Tally, tally_votes};
