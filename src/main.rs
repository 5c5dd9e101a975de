//! Hackathon Countdown - a countdown service for an event deadline
//!
//! This is the main entry point for the hackathon-countdown application.

use std::{future::IntoFuture, sync::Arc};

use tokio::{net::TcpListener, sync::broadcast};
use tracing::{error, info};

use hackathon_countdown::{
    api::create_router,
    clock::SystemClock,
    config::Config,
    engine::CountdownEngine,
    state::AppState,
    tasks::{completion_effects_task, CountdownTicker},
    utils::{run_until_shutdown, shutdown_signal},
};

const EVENT_BUFFER: usize = 16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("hackathon_countdown={},tower_http=info", config.log_level()))
        .init();

    info!("Starting hackathon-countdown v{}", env!("CARGO_PKG_VERSION"));

    // A bad window is fatal: the countdown never starts
    let window = match config.event_window() {
        Ok(window) => window,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    info!("Configuration: host={}, port={}, deadline={}, start={:?}",
          config.host, config.port, config.deadline, config.start);

    // Subscribe before the loop starts so the eager sample's event is not missed
    let (event_tx, event_rx) = broadcast::channel(EVENT_BUFFER);
    let effects = tokio::spawn(completion_effects_task(event_rx));

    let ticker = CountdownTicker::spawn(CountdownEngine::new(window), SystemClock, event_tx);
    let state = Arc::new(AppState::new(config.port, config.host.clone(), window, ticker.handle()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /status      - Current countdown snapshot");
    info!("  POST /acknowledge - Dismiss the completion notice");
    info!("  GET  /health      - Health check");

    let server = axum::serve(listener, app).into_future();
    let outcome = run_until_shutdown(server, shutdown_signal()).await;

    // Stop ticking before anything downstream goes away
    ticker.cancel().await;
    if let Ok(played) = effects.await {
        info!("Completion sequence played {} time(s)", played);
    }

    // Report a failed server or signal setup only after the loop is stopped
    outcome?;
    info!("Server shutdown complete");
    Ok(())
}
