use std::time::Duration;

/// Fixed delays the phase scheduler works with. Per-round windows that
/// players control (turn and discussion time) live in `RoomConfig`;
/// these are the server-side holds and sweep cadences.
#[derive(Debug, Clone)]
pub struct Pacing {
    /// How long the role reveal stays on screen.
    pub role_reveal: Duration,
    /// Hold between the dice roll and the secret reveal.
    pub secret_reveal: Duration,
    /// Bounds for a bot's simulated thinking delay.
    pub bot_think_min: Duration,
    pub bot_think_max: Duration,
    /// How long the ballot stays open before it is force-resolved.
    pub vote_window: Duration,
    /// How long a caught outsider gets to guess.
    pub guess_window: Duration,
    /// How long a disconnected human's seat is held.
    pub disconnect_grace: Duration,
    /// Cadence of the registry's cleanup sweep.
    pub sweep_interval: Duration,
    /// Idle rooms (not in a game) older than this are dropped by the sweep.
    pub stale_room_age: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            role_reveal: Duration::from_secs(5),
            secret_reveal: Duration::from_secs(3),
            bot_think_min: Duration::from_secs(2),
            bot_think_max: Duration::from_secs(4),
            vote_window: Duration::from_secs(60),
            guess_window: Duration::from_secs(30),
            disconnect_grace: Duration::from_secs(60),
            sweep_interval: Duration::from_secs(30),
            stale_room_age: Duration::from_secs(3600),
        }
    }
}

impl Pacing {
    /// Millisecond-scale pacing so integration tests can drive whole
    /// games in real time.
    pub fn rapid() -> Self {
        Pacing {
            role_reveal: Duration::from_millis(10),
            secret_reveal: Duration::from_millis(10),
            bot_think_min: Duration::from_millis(5),
            bot_think_max: Duration::from_millis(15),
            vote_window: Duration::from_millis(500),
            guess_window: Duration::from_millis(500),
            disconnect_grace: Duration::from_millis(100),
            sweep_interval: Duration::from_millis(50),
            stale_room_age: Duration::from_secs(60),
        }
    }
}
