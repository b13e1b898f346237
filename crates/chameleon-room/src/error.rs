//! Error types for room management.

/// Errors from room membership and lobby operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    #[error("game already in progress")]
    InProgress,

    #[error("room is full")]
    Full,

    #[error("no such player in this room")]
    UnknownPlayer,

    #[error("connection is not a member of this room")]
    UnknownConnection,

    #[error("that player is not a bot")]
    NotABot,

    #[error("only allowed while the room is in the lobby")]
    NotInLobby,

    #[error("invalid settings: {0}")]
    InvalidConfig(String),
}

/// Why a game cannot start yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartBlocked {
    #[error("need at least {need} players, have {have}")]
    NotEnoughPlayers { have: usize, need: usize },

    #[error("not all players are ready")]
    NotAllReady,
}
