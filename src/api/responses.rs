//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::CountdownSnapshot;

/// Status response: the latest countdown snapshot plus event and server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub countdown: CountdownSnapshot,
    pub deadline: DateTime<Utc>,
    pub event_start: Option<DateTime<Utc>>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Response to an acknowledgment of the completion notice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcknowledgeResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub countdown: CountdownSnapshot,
}

impl AcknowledgeResponse {
    pub fn acknowledged(countdown: CountdownSnapshot) -> Self {
        Self {
            status: "acknowledged".to_string(),
            message: "Completion notice dismissed for this session".to_string(),
            timestamp: Utc::now(),
            countdown,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
