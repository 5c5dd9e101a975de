//! Shared application state handed to the HTTP handlers

use std::time::Instant;

use tracing::{error, info};

use crate::{
    engine::{CountdownSnapshot, EventWindow},
    error::CountdownError,
    tasks::CountdownHandle,
};

/// Application state: the configured window plus a handle on the running countdown
#[derive(Debug)]
pub struct AppState {
    /// Event window the countdown was started with
    pub window: EventWindow,
    /// Access to the countdown loop
    pub countdown: CountdownHandle,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    pub fn new(
        port: u16,
        host: String,
        window: EventWindow,
        countdown: CountdownHandle,
    ) -> Self {
        Self {
            window,
            countdown,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Latest snapshot published by the countdown loop
    pub fn current_snapshot(&self) -> CountdownSnapshot {
        self.countdown.snapshot()
    }

    /// Dismiss the completion notice for the rest of the session
    pub async fn acknowledge_completion(&self) -> Result<CountdownSnapshot, CountdownError> {
        match self.countdown.acknowledge_completion().await {
            Ok(snapshot) => {
                info!(
                    "Acknowledgment recorded, notice visible: {}",
                    snapshot.show_completion_notice
                );
                Ok(snapshot)
            }
            Err(e) => {
                error!("Failed to acknowledge completion: {}", e);
                Err(e)
            }
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
