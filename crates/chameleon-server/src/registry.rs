//! The process-wide room registry.
//!
//! Maps room codes to actor handles and connections to the room they
//! are in. All cross-room state lives here; everything room-scoped is
//! owned by the room's actor. A periodic sweep evicts expired seats
//! and drops rooms with no humans left.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, info};

use chameleon_protocol::{Action, ConnId, ROOM_CODE_ALPHABET, ROOM_CODE_LEN, RoomCode};

use crate::actor::{NotificationSender, RoomHandle, spawn_room};
use crate::error::ServerError;
use crate::pacing::Pacing;

struct RegistryInner {
    rooms: HashMap<RoomCode, RoomHandle>,
    /// Which room each live connection is in. A connection is in at
    /// most one room.
    conn_rooms: HashMap<ConnId, RoomCode>,
    rng: StdRng,
}

/// Creates rooms, routes connections to their room actor, and runs
/// the cleanup sweep.
pub struct Registry {
    inner: Mutex<RegistryInner>,
    pacing: Pacing,
}

impl Registry {
    pub fn new(pacing: Pacing) -> Arc<Self> {
        Arc::new(Registry {
            inner: Mutex::new(RegistryInner {
                rooms: HashMap::new(),
                conn_rooms: HashMap::new(),
                rng: StdRng::from_os_rng(),
            }),
            pacing,
        })
    }

    /// Creates a room with a fresh collision-checked code and seats
    /// the creator as host.
    pub async fn create_room(
        &self,
        conn: ConnId,
        name: &str,
        sender: NotificationSender,
    ) -> Result<RoomCode, ServerError> {
        let mut inner = self.inner.lock().await;
        let code = loop {
            let candidate = random_code(&mut inner.rng);
            if !inner.rooms.contains_key(&candidate) {
                break candidate;
            }
        };
        let handle = spawn_room(
            code.clone(),
            conn.clone(),
            name,
            sender,
            self.pacing.clone(),
        );
        inner.rooms.insert(code.clone(), handle);
        inner.conn_rooms.insert(conn, code.clone());
        info!(room = %code, "room registered");
        Ok(code)
    }

    /// Joins (or reconnects) a connection to an existing room.
    pub async fn join_room(
        &self,
        code: &RoomCode,
        conn: ConnId,
        name: &str,
        sender: NotificationSender,
    ) -> Result<(), ServerError> {
        let handle = {
            let inner = self.inner.lock().await;
            inner
                .rooms
                .get(code)
                .cloned()
                .ok_or_else(|| ServerError::RoomNotFound(code.clone()))?
        };
        handle.join(conn.clone(), name.to_string(), sender).await?;
        let mut inner = self.inner.lock().await;
        inner.conn_rooms.insert(conn, code.clone());
        Ok(())
    }

    /// Routes any non-join action to the sender's room. Create/join
    /// carry their own entry points because they need a notification
    /// channel.
    pub async fn act(&self, conn: &ConnId, action: Action) -> Result<(), ServerError> {
        let leaving = matches!(action, Action::LeaveRoom { .. });
        let handle = {
            let inner = self.inner.lock().await;
            let code = inner.conn_rooms.get(conn).ok_or(ServerError::NotInRoom)?;
            inner
                .rooms
                .get(code)
                .cloned()
                .ok_or_else(|| ServerError::RoomNotFound(code.clone()))?
        };
        handle.act(conn.clone(), action).await?;
        if leaving {
            let mut inner = self.inner.lock().await;
            inner.conn_rooms.remove(conn);
        }
        Ok(())
    }

    /// The transport lost this connection. The seat goes into grace in
    /// its room; the connection itself is forgotten.
    pub async fn disconnect(&self, conn: &ConnId) {
        let handle = {
            let mut inner = self.inner.lock().await;
            let Some(code) = inner.conn_rooms.remove(conn) else {
                return;
            };
            inner.rooms.get(&code).cloned()
        };
        if let Some(handle) = handle {
            handle.disconnected(conn.clone()).await;
        }
    }

    /// One cleanup pass over every room. Rooms that report themselves
    /// done (or whose actor is gone) are dropped.
    pub async fn sweep_once(&self) {
        let handles: Vec<RoomHandle> = {
            let inner = self.inner.lock().await;
            inner.rooms.values().cloned().collect()
        };

        let mut dead = Vec::new();
        for handle in handles {
            match handle.sweep().await {
                Ok(false) => {}
                Ok(true) | Err(_) => dead.push(handle.code().clone()),
            }
        }

        if !dead.is_empty() {
            let mut inner = self.inner.lock().await;
            for code in dead {
                if let Some(handle) = inner.rooms.remove(&code) {
                    handle.shutdown().await;
                }
                inner.conn_rooms.retain(|_, c| *c != code);
                debug!(room = %code, "room dropped by sweep");
            }
        }
    }

    /// Runs the sweep on its configured interval until the registry is
    /// dropped.
    pub fn spawn_sweeper(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let registry = Arc::downgrade(self);
        let interval = self.pacing.sweep_interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(registry) = registry.upgrade() else {
                    break;
                };
                registry.sweep_once().await;
            }
        })
    }

    pub async fn room_count(&self) -> usize {
        self.inner.lock().await.rooms.len()
    }
}

fn random_code(rng: &mut StdRng) -> RoomCode {
    let raw: String = (0..ROOM_CODE_LEN)
        .map(|_| {
            let i = rng.random_range(0..ROOM_CODE_ALPHABET.len());
            ROOM_CODE_ALPHABET[i] as char
        })
        .collect();
    RoomCode::new(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_code_uses_unambiguous_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let code = random_code(&mut rng);
            assert_eq!(code.as_str().len(), ROOM_CODE_LEN);
            for b in code.as_str().bytes() {
                assert!(ROOM_CODE_ALPHABET.contains(&b));
            }
        }
    }
}
