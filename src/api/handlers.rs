//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, info, warn};

use super::responses::{AcknowledgeResponse, HealthResponse, StatusResponse};
use crate::state::AppState;

/// Handle GET /status - Return the latest countdown snapshot
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let countdown = state.current_snapshot();
    debug!("Status requested: {} remaining", countdown.remaining);

    Json(StatusResponse {
        countdown,
        deadline: state.window.deadline().at(),
        event_start: state.window.start(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    })
}

/// Handle POST /acknowledge - Dismiss the completion notice
pub async fn acknowledge_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AcknowledgeResponse>, StatusCode> {
    match state.acknowledge_completion().await {
        Ok(countdown) => {
            info!("Acknowledge endpoint called - completion notice dismissed");
            Ok(Json(AcknowledgeResponse::acknowledged(countdown)))
        }
        Err(e) => {
            warn!("Acknowledge endpoint unavailable: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
