//! Background tasks module
//!
//! This module contains the countdown loop and the tasks that consume its events.

pub mod completion_effects;
pub mod countdown_ticker;

// Re-export main types
pub use completion_effects::completion_effects_task;
pub use countdown_ticker::{CountdownHandle, CountdownTicker, TICK_INTERVAL};
