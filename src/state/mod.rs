//! State management module
//!
//! This module contains the shared application state and the messages
//! exchanged with the countdown loop.

pub mod app_state;
pub mod events;

// Re-export main types
pub use app_state::AppState;
pub use events::{CountdownCommand, CountdownEvent};
