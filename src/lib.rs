//! Hackathon Countdown - a countdown service for an event deadline
//!
//! This library samples the wall clock once per second, derives the time left
//! until a fixed deadline and gates the completion notice a countdown page shows
//! once the deadline has passed.

pub mod api;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use engine::{CountdownEngine, CountdownSnapshot, EventWindow, RemainingDuration};
pub use error::{ConfigError, CountdownError};
pub use state::AppState;
pub use tasks::{CountdownHandle, CountdownTicker};
pub use utils::signals::shutdown_signal;
