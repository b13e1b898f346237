use thiserror::Error;

use chameleon_engine::EngineError;
use chameleon_protocol::RoomCode;
use chameleon_room::{RoomError, StartBlocked};

/// Top-level failure for a server request. Always surfaced to the
/// offending client only, as a private error notification; nothing
/// here is fatal to the room or the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("room {0} does not exist")]
    RoomNotFound(RoomCode),

    #[error("room {0} is shutting down")]
    Unavailable(RoomCode),

    #[error("this connection is not in the room")]
    NotInRoom,

    #[error("only the host can do that")]
    NotHost,

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    CannotStart(#[from] StartBlocked),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ServerError {
    /// The numeric code carried by the error notification, following
    /// HTTP conventions.
    pub fn code(&self) -> u16 {
        match self {
            ServerError::RoomNotFound(_) => 404,
            ServerError::Unavailable(_) => 503,
            ServerError::NotInRoom => 403,
            ServerError::NotHost => 403,
            ServerError::Room(RoomError::Full) => 409,
            ServerError::Room(RoomError::InProgress) => 409,
            ServerError::Room(_) => 400,
            ServerError::CannotStart(_) => 409,
            ServerError::Engine(_) => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_room_not_found_is_404() {
        let err = ServerError::RoomNotFound(RoomCode::new("ABC234"));
        assert_eq!(err.code(), 404);
    }

    #[test]
    fn test_code_full_room_is_conflict() {
        let err: ServerError = RoomError::Full.into();
        assert_eq!(err.code(), 409);
    }

    #[test]
    fn test_code_engine_rejection_is_bad_request() {
        let err: ServerError = EngineError::AlreadyVoted.into();
        assert_eq!(err.code(), 400);
    }
}
