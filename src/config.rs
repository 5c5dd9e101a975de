//! Configuration and CLI argument handling

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::{engine::EventWindow, error::ConfigError};

/// End of AlgoForge 2025: March 23, 2025 at 1 PM IST
pub const DEFAULT_DEADLINE: &str = "2025-03-23T07:30:00Z";

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "hackathon-countdown")]
#[command(about = "Countdown service for a hackathon deadline")]
#[command(version)]
pub struct Config {
    /// Deadline the countdown runs towards, as an RFC 3339 UTC instant
    #[arg(short, long, default_value = DEFAULT_DEADLINE)]
    pub deadline: DateTime<Utc>,

    /// Event start; before it the full event length is shown
    #[arg(short, long)]
    pub start: Option<DateTime<Utc>>,

    /// Port to bind the server to
    #[arg(short, long, default_value = "20553")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the event window, rejecting a start that is not before the deadline
    pub fn event_window(&self) -> Result<EventWindow, ConfigError> {
        match self.start {
            Some(start) => EventWindow::between(start, self.deadline),
            None => Ok(EventWindow::until(self.deadline)),
        }
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
