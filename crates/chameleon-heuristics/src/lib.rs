//! Decision heuristics for autonomous players.
//!
//! Everything here is a pure function over public round state: the clue
//! log, the topic grid, and (for players who know it) the secret word.
//! Nothing mutates a round; callers submit the returned word or vote
//! through the same validated entry points a human would use. When the
//! association tables have nothing to offer, every function degrades to
//! a safe fallback rather than failing the round.

mod clue;
mod infer;
mod profile;
mod vote;

pub use clue::{knower_clue, outsider_clue, outsider_guess};
pub use infer::rank_candidates;
pub use profile::Profile;
pub use vote::{knower_vote, outsider_vote};
