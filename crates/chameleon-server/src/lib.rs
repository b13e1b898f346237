//! The coordinating layer: room registry, per-room actors, timers.
//!
//! The transport hands this crate a notification channel per
//! connection plus decoded [`chameleon_protocol::Action`] values; the
//! registry routes them to the owning room actor, which serializes all
//! mutations for its room and drives phases with generation-checked
//! timers. Nothing above this crate touches game state directly.

mod actor;
mod error;
mod pacing;
mod registry;

pub use actor::{NotificationSender, RoomHandle};
pub use error::ServerError;
pub use pacing::Pacing;
pub use registry::Registry;

/// Installs the process-wide tracing subscriber, filtered by
/// `RUST_LOG` (default `info`).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
