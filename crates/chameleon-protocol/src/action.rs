//! Client → server actions.

use serde::{Deserialize, Serialize};

use crate::ids::{PlayerId, RoomCode};
use crate::types::{Difficulty, RoomConfig};

// ---------------------------------------------------------------------------
// ConfigPatch
// ---------------------------------------------------------------------------

/// A partial update to a room's settings. Absent fields keep their
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_players: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discussion_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl ConfigPatch {
    /// Merges the patch into `config`.
    pub fn apply(&self, config: &mut RoomConfig) {
        if let Some(v) = self.min_players {
            config.min_players = v;
        }
        if let Some(v) = self.max_players {
            config.max_players = v;
        }
        if let Some(v) = self.turn_secs {
            config.turn_secs = v;
        }
        if let Some(v) = self.discussion_secs {
            config.discussion_secs = v;
        }
        if let Some(v) = self.difficulty {
            config.difficulty = v;
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Everything a client can ask the server to do.
///
/// Internally tagged JSON: `{ "type": "submit-clue", "code": "K7QMX2",
/// "word": "Italy" }`. The `code` names the room; the server maps the
/// sending connection to a player within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    // -- Lobby --
    /// Create a room and become its host.
    CreateRoom { name: String },
    /// Join an existing room by code. Also the reconnection path: a
    /// returning player joins with their old name.
    JoinRoom { code: RoomCode, name: String },
    /// Host only: add a bot to the lobby.
    AddBot { code: RoomCode },
    /// Host only: remove a bot from the lobby.
    RemoveBot { code: RoomCode, player: PlayerId },
    /// Flip the sender's ready flag.
    ToggleReady { code: RoomCode },
    /// Host only: change room settings while in the lobby.
    UpdateConfig { code: RoomCode, patch: ConfigPatch },
    /// Host only: start the game.
    StartGame { code: RoomCode },

    // -- In-game --
    /// Submit a one-word clue on the sender's turn.
    SubmitClue { code: RoomCode, word: String },
    /// Vote for a suspect during the voting phase.
    SubmitVote { code: RoomCode, target: PlayerId },
    /// The accused outsider's guess at the secret word.
    SubmitGuess { code: RoomCode, word: String },
    /// Host only: advance from the results screen into a new round.
    NextRound { code: RoomCode },
    /// Host only: end the game and return the room to the lobby.
    EndGame { code: RoomCode },

    // -- Session --
    /// Say something to the room. Relayed to everyone, lobby or in-game.
    SendChat { code: RoomCode, message: String },
    /// Leave the room for good (no reconnection grace).
    LeaveRoom { code: RoomCode },
    /// Ask for a full state snapshot, e.g. after reconnecting.
    GetState { code: RoomCode },
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_create_room_json_format() {
        let action = Action::CreateRoom { name: "Ana".into() };
        let json: serde_json::Value = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "create-room");
        assert_eq!(json["name"], "Ana");
    }

    #[test]
    fn test_action_join_room_normalizes_code() {
        let raw = r#"{"type": "join-room", "code": "k7qmx2", "name": "Bo"}"#;
        let action: Action = serde_json::from_str(raw).unwrap();

        match action {
            Action::JoinRoom { code, name } => {
                assert_eq!(code.as_str(), "K7QMX2");
                assert_eq!(name, "Bo");
            }
            other => panic!("expected JoinRoom, got {other:?}"),
        }
    }

    #[test]
    fn test_action_submit_clue_round_trip() {
        let action = Action::SubmitClue {
            code: RoomCode::new("ABC234"),
            word: "Italy".into(),
        };
        let bytes = serde_json::to_vec(&action).unwrap();
        let decoded: Action = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(action, decoded);
    }

    #[test]
    fn test_action_submit_vote_round_trip() {
        let action = Action::SubmitVote {
            code: RoomCode::new("ABC234"),
            target: PlayerId(3),
        };
        let bytes = serde_json::to_vec(&action).unwrap();
        let decoded: Action = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(action, decoded);
    }

    #[test]
    fn test_action_send_chat_json_format() {
        let action = Action::SendChat {
            code: RoomCode::new("ABC234"),
            message: "good luck everyone".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "send-chat");
        assert_eq!(json["message"], "good luck everyone");
    }

    #[test]
    fn test_action_unknown_type_returns_error() {
        let raw = r#"{"type": "fly-to-moon", "code": "ABC234"}"#;
        let result: Result<Action, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_patch_apply_merges_only_present_fields() {
        let mut config = RoomConfig::default();
        let patch = ConfigPatch {
            turn_secs: Some(45),
            difficulty: Some(Difficulty::Hard),
            ..ConfigPatch::default()
        };

        patch.apply(&mut config);

        assert_eq!(config.turn_secs, 45);
        assert_eq!(config.difficulty, Difficulty::Hard);
        // Untouched fields keep their defaults.
        assert_eq!(config.min_players, 4);
        assert_eq!(config.discussion_secs, 120);
    }

    #[test]
    fn test_config_patch_deserializes_from_partial_json() {
        let raw = r#"{"discussion_secs": 60}"#;
        let patch: ConfigPatch = serde_json::from_str(raw).unwrap();
        assert_eq!(patch.discussion_secs, Some(60));
        assert_eq!(patch.min_players, None);
    }
}
