//! The room itself: membership, readiness, host succession.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use chameleon_protocol::{
    Archetype, ConfigPatch, ConnId, PlayerId, RoomCode, RoomConfig, RoomSnapshot, RoomStatus,
};

use crate::error::{RoomError, StartBlocked};
use crate::player::{AVATARS, BOT_NAMES, Player};

/// Result of a join: the player's stable id, and whether this was a
/// returning player rather than a new seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    pub player: PlayerId,
    pub reconnected: bool,
}

/// Result of an explicit leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveReport {
    pub player: PlayerId,
    /// Set when the leaver was host and someone else took over.
    pub new_host: Option<PlayerId>,
    /// No connected humans remain; the registry should drop the room.
    pub delete_room: bool,
}

/// Result of a disconnect sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Players whose grace window expired, in seat order.
    pub removed: Vec<PlayerId>,
    pub new_host: Option<PlayerId>,
    pub delete_room: bool,
}

/// One game room: a roster keyed by stable player ids, plus the
/// connection → player index that makes reconnection work.
#[derive(Debug)]
pub struct Room {
    code: RoomCode,
    created_at: Instant,
    status: RoomStatus,
    config: RoomConfig,
    players: Vec<Player>,
    conns: HashMap<ConnId, PlayerId>,
    next_key: u64,
}

impl Room {
    /// Creates a room with its host seated.
    pub fn new<R: Rng + ?Sized>(
        code: RoomCode,
        host_conn: ConnId,
        host_name: &str,
        rng: &mut R,
    ) -> Self {
        let mut room = Room {
            code,
            created_at: Instant::now(),
            status: RoomStatus::Lobby,
            config: RoomConfig::default(),
            players: Vec::new(),
            conns: HashMap::new(),
            next_key: 1,
        };
        let host = room.alloc_id();
        room.players.push(Player {
            id: host,
            name: sanitize_name(host_name),
            is_host: true,
            is_bot: false,
            ready: true,
            avatar: random_avatar(rng),
            score: 0,
            connected: true,
            disconnected_at: None,
            archetype: None,
        });
        room.conns.insert(host_conn, host);
        info!(code = %room.code, host = %host, "room created");
        room
    }

    // -- Accessors -----------------------------------------------------

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    pub fn set_status(&mut self, status: RoomStatus) {
        self.status = status;
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn host(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_host)
    }

    /// The player a connection is bound to.
    pub fn player_by_conn(&self, conn: &ConnId) -> Option<&Player> {
        self.conns.get(conn).and_then(|&id| self.player(id))
    }

    pub fn is_host_conn(&self, conn: &ConnId) -> bool {
        self.player_by_conn(conn).is_some_and(|p| p.is_host)
    }

    /// Time since the room was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    pub fn connected_humans(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !p.is_bot && p.connected)
            .count()
    }

    // -- Membership ----------------------------------------------------

    /// Seats a connection in the room.
    ///
    /// Three cases, tried in order:
    /// 1. The connection is already bound → idempotent rejoin.
    /// 2. A disconnected human with the same name exists → the new
    ///    connection takes over that seat (the reconnection path, valid
    ///    even mid-game).
    /// 3. Otherwise a fresh seat, which requires a lobby with space.
    pub fn join<R: Rng + ?Sized>(
        &mut self,
        conn: ConnId,
        name: &str,
        rng: &mut R,
    ) -> Result<JoinOutcome, RoomError> {
        if let Some(&id) = self.conns.get(&conn) {
            return Ok(JoinOutcome {
                player: id,
                reconnected: true,
            });
        }

        let name = sanitize_name(name);

        // Reconnection by name: only disconnected humans are eligible,
        // so an online player's name cannot be hijacked.
        let returning = self
            .players
            .iter_mut()
            .find(|p| !p.is_bot && !p.connected && p.name.eq_ignore_ascii_case(&name));
        if let Some(player) = returning {
            player.connected = true;
            player.disconnected_at = None;
            let id = player.id;
            self.conns.insert(conn, id);
            info!(code = %self.code, player = %id, "player reconnected");
            return Ok(JoinOutcome {
                player: id,
                reconnected: true,
            });
        }

        if !self.status.accepts_joins() {
            return Err(RoomError::InProgress);
        }
        if self.players.len() >= self.config.max_players {
            return Err(RoomError::Full);
        }

        // Duplicate display names get a numeric suffix.
        let name = if self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&name))
        {
            format!("{}{}", name, self.players.len() + 1)
        } else {
            name
        };

        let id = self.alloc_id();
        self.players.push(Player {
            id,
            name,
            is_host: false,
            is_bot: false,
            ready: false,
            avatar: random_avatar(rng),
            score: 0,
            connected: true,
            disconnected_at: None,
            archetype: None,
        });
        self.conns.insert(conn, id);
        info!(code = %self.code, player = %id, "player joined");
        Ok(JoinOutcome {
            player: id,
            reconnected: false,
        })
    }

    /// Marks a connection's player as disconnected and unbinds the
    /// connection. The seat survives until the grace window expires.
    pub fn mark_disconnected(&mut self, conn: &ConnId) -> Result<PlayerId, RoomError> {
        let id = self
            .conns
            .remove(conn)
            .ok_or(RoomError::UnknownConnection)?;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RoomError::UnknownPlayer)?;
        player.connected = false;
        player.disconnected_at = Some(Instant::now());
        debug!(code = %self.code, player = %id, "player disconnected");
        Ok(id)
    }

    /// Removes a player immediately (explicit leave, no grace).
    pub fn leave(&mut self, conn: &ConnId) -> Result<LeaveReport, RoomError> {
        let id = self
            .conns
            .remove(conn)
            .ok_or(RoomError::UnknownConnection)?;
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(RoomError::UnknownPlayer)?;

        let was_host = self.players[idx].is_host;
        self.players.remove(idx);

        let new_host = if was_host { self.promote_host() } else { None };
        let delete_room = self.connected_humans() == 0;
        info!(code = %self.code, player = %id, delete_room, "player left");
        Ok(LeaveReport {
            player: id,
            new_host,
            delete_room,
        })
    }

    /// Evicts disconnected humans whose grace window has expired.
    pub fn sweep_disconnected(&mut self, grace: Duration) -> SweepReport {
        let expired: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| {
                !p.is_bot
                    && !p.connected
                    && p.disconnected_at
                        .is_some_and(|at| at.elapsed() >= grace)
            })
            .map(|p| p.id)
            .collect();

        if expired.is_empty() {
            return SweepReport::default();
        }

        let host_removed = self
            .players
            .iter()
            .any(|p| p.is_host && expired.contains(&p.id));
        self.players.retain(|p| !expired.contains(&p.id));

        let new_host = if host_removed {
            self.promote_host()
        } else {
            None
        };
        let delete_room = self.connected_humans() == 0;
        info!(
            code = %self.code,
            removed = expired.len(),
            delete_room,
            "disconnect sweep evicted players"
        );
        SweepReport {
            removed: expired,
            new_host,
            delete_room,
        }
    }

    // -- Lobby operations ----------------------------------------------

    /// Adds a bot with a free name from the pool, pre-marked ready.
    pub fn add_bot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PlayerId, RoomError> {
        if self.status != RoomStatus::Lobby {
            return Err(RoomError::NotInLobby);
        }
        if self.players.len() >= self.config.max_players {
            return Err(RoomError::Full);
        }

        let free: Vec<&str> = BOT_NAMES
            .iter()
            .copied()
            .filter(|n| !self.players.iter().any(|p| p.name == *n))
            .collect();
        let name = match free.choose(rng) {
            Some(name) => name.to_string(),
            None => {
                let bots = self.players.iter().filter(|p| p.is_bot).count();
                format!("Bot {}", bots + 1)
            }
        };

        let id = self.alloc_id();
        let archetype = Archetype::ALL.choose(rng).copied();
        self.players.push(Player {
            id,
            name,
            is_host: false,
            is_bot: true,
            ready: true,
            avatar: random_avatar(rng),
            score: 0,
            connected: true,
            disconnected_at: None,
            archetype,
        });
        debug!(code = %self.code, player = %id, "bot added");
        Ok(id)
    }

    /// Removes a bot from the lobby.
    pub fn remove_bot(&mut self, id: PlayerId) -> Result<(), RoomError> {
        if self.status != RoomStatus::Lobby {
            return Err(RoomError::NotInLobby);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(RoomError::UnknownPlayer)?;
        if !self.players[idx].is_bot {
            return Err(RoomError::NotABot);
        }
        self.players.remove(idx);
        Ok(())
    }

    /// Flips a player's ready flag. Lobby only.
    pub fn toggle_ready(&mut self, conn: &ConnId) -> Result<(PlayerId, bool), RoomError> {
        if self.status != RoomStatus::Lobby {
            return Err(RoomError::NotInLobby);
        }
        let id = *self.conns.get(conn).ok_or(RoomError::UnknownConnection)?;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RoomError::UnknownPlayer)?;
        player.ready = !player.ready;
        Ok((id, player.ready))
    }

    /// Applies a settings patch. Lobby only; the merged result must
    /// still be coherent.
    pub fn update_config(&mut self, patch: &ConfigPatch) -> Result<(), RoomError> {
        if self.status != RoomStatus::Lobby {
            return Err(RoomError::NotInLobby);
        }
        let mut next = self.config.clone();
        patch.apply(&mut next);

        if next.min_players < 3 {
            return Err(RoomError::InvalidConfig(
                "minimum players cannot go below 3".into(),
            ));
        }
        if next.max_players > 12 {
            return Err(RoomError::InvalidConfig(
                "maximum players cannot exceed 12".into(),
            ));
        }
        if next.min_players > next.max_players {
            return Err(RoomError::InvalidConfig(
                "minimum players cannot exceed maximum".into(),
            ));
        }
        if next.max_players < self.players.len() {
            return Err(RoomError::InvalidConfig(
                "maximum cannot drop below the current player count".into(),
            ));
        }
        if !(5..=120).contains(&next.turn_secs) {
            return Err(RoomError::InvalidConfig(
                "turn timer must be between 5 and 120 seconds".into(),
            ));
        }
        if !(1..=600).contains(&next.discussion_secs) {
            return Err(RoomError::InvalidConfig(
                "discussion timer must be between 1 and 600 seconds".into(),
            ));
        }

        self.config = next;
        Ok(())
    }

    /// Whether a game can start right now.
    pub fn can_start(&self) -> Result<(), StartBlocked> {
        let have = self.players.len();
        let need = self.config.min_players;
        if have < need {
            return Err(StartBlocked::NotEnoughPlayers { have, need });
        }
        if !self.players.iter().all(|p| p.ready) {
            return Err(StartBlocked::NotAllReady);
        }
        Ok(())
    }

    // -- Game boundary -------------------------------------------------

    /// Writes final scores back onto the roster.
    pub fn apply_scores(&mut self, scores: &std::collections::BTreeMap<PlayerId, u32>) {
        for player in &mut self.players {
            if let Some(&score) = scores.get(&player.id) {
                player.score = score;
            }
        }
    }

    /// Returns the room to the lobby after a game ends. Humans other
    /// than the host must ready up again; bots stay ready.
    pub fn reset_after_game(&mut self) {
        self.status = RoomStatus::Lobby;
        for player in &mut self.players {
            if !player.is_bot && !player.is_host {
                player.ready = false;
            }
        }
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            code: self.code.clone(),
            status: self.status,
            host: self.host().map(|p| p.id),
            players: self.players.iter().map(|p| p.summary()).collect(),
            config: self.config.clone(),
        }
    }

    // -- Internals -----------------------------------------------------

    fn alloc_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_key);
        self.next_key += 1;
        id
    }

    /// Hands the host flag to the first connected human, if any.
    fn promote_host(&mut self) -> Option<PlayerId> {
        let id = self
            .players
            .iter()
            .find(|p| !p.is_bot && p.connected)
            .map(|p| p.id)?;
        for player in &mut self.players {
            player.is_host = player.id == id;
        }
        info!(code = %self.code, host = %id, "host promoted");
        Some(id)
    }
}

fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Player".to_string()
    } else {
        trimmed.to_string()
    }
}

fn random_avatar<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    AVATARS.choose(rng).copied().unwrap_or("🦎")
}

// =========================================================================
// Tests
// =========================================================================
