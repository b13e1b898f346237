use thiserror::Error;

use chameleon_protocol::Phase;
use chameleon_rules::ClueRejection;

/// Everything a game mutation can be rejected for. None of these are
/// fatal: the caller relays the reason to the offending client and the
/// round continues untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no game is running in this room")]
    NoSuchSession,

    #[error("not allowed during the {0} phase")]
    WrongPhase(Phase),

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("invalid clue: {0}")]
    InvalidClue(#[from] ClueRejection),

    #[error("you have already voted this round")]
    AlreadyVoted,

    #[error("you cannot vote for yourself")]
    SelfVote,

    #[error("that player is not in this round")]
    InvalidTarget,

    #[error("only the outsider submits a guess")]
    NotTheOutsider,
}
