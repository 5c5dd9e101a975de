//! Error types

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Startup configuration faults. These are fatal: the engine is never started.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The event start is not before the deadline
    #[error("Event start {start} must be before the deadline {deadline}")]
    WindowInverted {
        start: DateTime<Utc>,
        deadline: DateTime<Utc>,
    },
}

/// Errors raised while talking to a running countdown
#[derive(Debug, Error)]
pub enum CountdownError {
    /// The tick loop has been cancelled or has exited
    #[error("Countdown loop is no longer running")]
    LoopStopped,
}
