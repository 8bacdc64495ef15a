use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Always 200 while the process is serving requests.
pub async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// Liveness probe: plain-text `pong`.
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// `/health` and `/ping`, with the app metadata already bound as state.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ping", get(ping_handler))
        .with_state(app_info)
}
