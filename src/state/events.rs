//! Messages exchanged with the countdown loop

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::engine::CountdownSnapshot;

/// One-time notifications emitted by the countdown loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CountdownEvent {
    /// The deadline was observed as reached for the first time this session
    DeadlineReached { at: DateTime<Utc> },
    /// The completion notice was dismissed for the first time this session
    CompletionAcknowledged { at: DateTime<Utc> },
}

/// Requests routed into the countdown loop
#[derive(Debug)]
pub enum CountdownCommand {
    Acknowledge {
        reply: oneshot::Sender<CountdownSnapshot>,
    },
}
