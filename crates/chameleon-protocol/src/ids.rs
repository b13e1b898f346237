//! Identity newtypes.
//!
//! Connections and players are deliberately separate identities: a player
//! keeps their [`PlayerId`] (and with it their score, host flag and turn
//! position) across a disconnect, while every socket the transport hands
//! us gets a fresh [`ConnId`]. Reconnection is just rebinding a new
//! `ConnId` to an existing `PlayerId`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PlayerId
// ---------------------------------------------------------------------------

/// A stable identifier for a player within a room.
///
/// Allocated from a per-room counter when the player first joins and never
/// changes afterwards, even across disconnects. Serialized as a plain
/// number thanks to `#[serde(transparent)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ConnId
// ---------------------------------------------------------------------------

/// A transport-assigned connection identifier.
///
/// Opaque to the server core: whatever string the transport layer uses to
/// name a socket. Ephemeral, unlike [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnId(String);

impl ConnId {
    pub fn new(id: impl Into<String>) -> Self {
        ConnId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoomCode
// ---------------------------------------------------------------------------

/// The alphabet room codes are drawn from.
///
/// Excludes `0/O` and `1/I` so codes survive being read out loud across
/// a table.
pub const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// The length of a generated room code.
pub const ROOM_CODE_LEN: usize = 6;

/// A short join code identifying a room, e.g. `K7QMX2`.
///
/// Codes are case-insensitive on input: the constructor and the
/// `Deserialize` impl both fold to uppercase, so lookups can compare
/// codes directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Builds a code, folding to uppercase.
    pub fn new(code: impl AsRef<str>) -> Self {
        RoomCode(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hand-written so client-supplied codes are normalized at the parse
// boundary rather than at every lookup site.
impl<'de> Deserialize<'de> for RoomCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(RoomCode::new(raw))
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_serializes_as_plain_number() {
        // `#[serde(transparent)]` means PlayerId(42) → `42`, not `{"0":42}`.
        let json = serde_json::to_string(&PlayerId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_player_id_deserializes_from_plain_number() {
        let pid: PlayerId = serde_json::from_str("42").unwrap();
        assert_eq!(pid, PlayerId(42));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(7).to_string(), "P-7");
    }

    #[test]
    fn test_conn_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ConnId::new("sock-1")).unwrap();
        assert_eq!(json, "\"sock-1\"");
    }

    #[test]
    fn test_room_code_new_folds_to_uppercase() {
        assert_eq!(RoomCode::new("k7qmx2").as_str(), "K7QMX2");
    }

    #[test]
    fn test_room_code_new_trims_whitespace() {
        assert_eq!(RoomCode::new("  K7QMX2 ").as_str(), "K7QMX2");
    }

    #[test]
    fn test_room_code_deserialize_normalizes() {
        // Lowercase user input must compare equal to the stored code.
        let code: RoomCode = serde_json::from_str("\"abc234\"").unwrap();
        assert_eq!(code, RoomCode::new("ABC234"));
    }

    #[test]
    fn test_room_code_alphabet_has_no_ambiguous_glyphs() {
        for banned in [b'0', b'O', b'1', b'I'] {
            assert!(
                !ROOM_CODE_ALPHABET.contains(&banned),
                "alphabet must not contain {}",
                banned as char
            );
        }
    }
}
