//! Error types for the protocol layer.
//!
//! Each crate defines its own error enum; a `ProtocolError` always means
//! a serialization problem, never a game-rule violation.

/// Errors that can occur while encoding or decoding messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, missing fields, or a
    /// wrong shape for the expected type.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
