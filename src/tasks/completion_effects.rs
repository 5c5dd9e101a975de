//! One-shot "time's up" effects background task

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use crate::state::CountdownEvent;

/// Stages of the end-of-event sequence, in playback order
pub const TIMES_UP_SEQUENCE: [&str; 3] = [
    "alarm: sounding the end-of-hackathon alarm",
    "flash: hands off your keyboards",
    "banner: TIME'S UP, all coding activities must cease",
];

/// Background task that plays the decorative completion sequence.
///
/// Returns the number of sequences played once the event channel closes.
pub async fn completion_effects_task(mut events: broadcast::Receiver<CountdownEvent>) -> usize {
    info!("Starting completion effects task");

    let mut played = 0;
    loop {
        match events.recv().await {
            Ok(CountdownEvent::DeadlineReached { at }) => {
                for stage in TIMES_UP_SEQUENCE {
                    warn!(deadline_reached_at = %at, "{}", stage);
                }
                played += 1;
            }
            Ok(CountdownEvent::CompletionAcknowledged { at }) => {
                info!(acknowledged_at = %at, "Completion notice dismissed");
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Completion effects lagged behind by {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Countdown events closed, stopping completion effects task");
                break;
            }
        }
    }
    played
}
