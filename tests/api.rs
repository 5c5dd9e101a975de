use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;
use tower::ServiceExt;

use hackathon_countdown::{
    api::responses::{AcknowledgeResponse, HealthResponse, StatusResponse},
    create_router,
    engine::EventPhase,
    AppState, CountdownEngine, CountdownTicker, EventWindow, ManualClock, RemainingDuration,
};

fn deadline() -> DateTime<Utc> {
    "2025-03-23T07:30:00Z".parse().unwrap()
}

fn app_at(now: DateTime<Utc>) -> (Router, CountdownTicker) {
    app_with_window(EventWindow::until(deadline()), now)
}

fn app_with_window(window: EventWindow, now: DateTime<Utc>) -> (Router, CountdownTicker) {
    let (events, _) = broadcast::channel(8);
    let engine = CountdownEngine::new(window);
    let ticker = CountdownTicker::spawn(engine, ManualClock::new(now), events);
    let state = Arc::new(AppState::new(20553, "127.0.0.1".to_string(), window, ticker.handle()));
    (create_router(state), ticker)
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json<T: DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_json<T: DeserializeOwned>(app: &Router, uri: &str) -> T {
    let response = app.clone().oneshot(request(Method::GET, uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json(response).await
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, ticker) = app_at(deadline());

    let response = app.oneshot(request(Method::GET, "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = json(response).await;
    assert_eq!(health.status, "ok");

    ticker.cancel().await;
}

#[tokio::test]
async fn status_before_the_deadline() {
    let (app, ticker) = app_at(deadline() - Duration::seconds(2));

    let response = app.oneshot(request(Method::GET, "/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let status: StatusResponse = json(response).await;
    assert_eq!(status.deadline, deadline());
    assert_eq!(status.event_start, None);
    assert_eq!(status.countdown.remaining, RemainingDuration { hours: 0, minutes: 0, seconds: 2 });
    assert!(!status.countdown.deadline_reached);
    assert!(!status.countdown.show_completion_notice);

    ticker.cancel().await;
}

#[tokio::test]
async fn acknowledge_hides_the_completion_notice() {
    let (app, ticker) = app_at(deadline() + Duration::minutes(5));

    let status: StatusResponse = get_json(&app, "/status").await;
    assert!(status.countdown.show_completion_notice);
    assert_eq!(status.countdown.remaining, RemainingDuration::zero());

    let response = app.clone().oneshot(request(Method::POST, "/acknowledge")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack: AcknowledgeResponse = json(response).await;
    assert_eq!(ack.status, "acknowledged");
    assert!(ack.countdown.acknowledged);
    assert!(!ack.countdown.show_completion_notice);

    let status: StatusResponse = get_json(&app, "/status").await;
    assert!(status.countdown.deadline_reached);
    assert!(!status.countdown.show_completion_notice);

    // a second dismissal is accepted and changes nothing
    let response = app.oneshot(request(Method::POST, "/acknowledge")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    ticker.cancel().await;
}

#[tokio::test]
async fn acknowledge_after_shutdown_is_unavailable() {
    let (app, ticker) = app_at(deadline() + Duration::seconds(1));
    ticker.cancel().await;

    let response = app.oneshot(request(Method::POST, "/acknowledge")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn status_before_the_event_starts() {
    let start: DateTime<Utc> = "2025-03-22T07:30:00Z".parse().unwrap();
    let window = EventWindow::between(start, deadline()).unwrap();
    let (app, ticker) = app_with_window(window, start - Duration::hours(3));

    let status: StatusResponse = get_json(&app, "/status").await;
    assert_eq!(status.event_start, Some(start));
    assert_eq!(status.countdown.phase, EventPhase::Upcoming);
    assert_eq!(status.countdown.remaining, RemainingDuration { hours: 24, minutes: 0, seconds: 0 });
    assert!(!status.countdown.show_completion_notice);

    ticker.cancel().await;
}

#[tokio::test(start_paused = true)]
async fn status_follows_the_loop_into_the_event() {
    let start: DateTime<Utc> = "2025-03-22T07:30:00Z".parse().unwrap();
    let window = EventWindow::between(start, deadline()).unwrap();
    let clock = ManualClock::new(start - Duration::seconds(1));
    let (events, _) = broadcast::channel(8);
    let ticker = CountdownTicker::spawn(CountdownEngine::new(window), clock.clone(), events);
    let handle = ticker.handle();
    let mut snapshots = handle.subscribe();
    let state = Arc::new(AppState::new(20553, "127.0.0.1".to_string(), window, handle));
    let app = create_router(state);

    clock.set(start + Duration::hours(12));
    snapshots.changed().await.unwrap();

    let status: StatusResponse = get_json(&app, "/status").await;
    assert_eq!(status.countdown.phase, EventPhase::Running);
    assert_eq!(status.countdown.remaining, RemainingDuration { hours: 12, minutes: 0, seconds: 0 });

    ticker.cancel().await;
}
