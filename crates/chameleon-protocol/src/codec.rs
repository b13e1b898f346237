//! Codec trait and the JSON implementation.
//!
//! The transport layer moves bytes; everything above it speaks typed
//! messages. The [`Codec`] trait is the seam between the two, so a
//! binary format can replace JSON later without touching the server.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes values to bytes and decodes them back.
///
/// `Send + Sync + 'static` because codecs are shared across the async
/// tasks that own connections. `DeserializeOwned` so decoded values do
/// not borrow from the input buffer.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or
    /// don't match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// ## Example
///
/// ```rust
/// use chameleon_protocol::{Action, Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let action = Action::CreateRoom { name: "Ana".into() };
///
/// let bytes = codec.encode(&action).unwrap();
/// let decoded: Action = codec.decode(&bytes).unwrap();
/// assert_eq!(action, decoded);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Notification, RoomCode};

    #[test]
    fn test_json_codec_action_round_trip() {
        let codec = JsonCodec;
        let action = Action::SubmitClue {
            code: RoomCode::new("ABC234"),
            word: "Italy".into(),
        };

        let bytes = codec.encode(&action).unwrap();
        let decoded: Action = codec.decode(&bytes).unwrap();
        assert_eq!(action, decoded);
    }

    #[test]
    fn test_json_codec_decode_garbage_returns_error() {
        let codec = JsonCodec;
        let result: Result<Notification, _> = codec.decode(b"not json at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_json_codec_decode_wrong_shape_returns_error() {
        let codec = JsonCodec;
        let result: Result<Action, _> = codec.decode(br#"{"name": "hello"}"#);
        assert!(result.is_err());
    }
}
