use crate::shutdown::shutdown_signal;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Where [`create_router`] serves the OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Binds the configured address and serves `router` until SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps application routes with the cross-cutting pieces every service gets:
///
/// - `GET /api-docs/openapi.json` rendering `T`
/// - plain-text 404 fallback
/// - request tracing spans at INFO level
///
/// Routes are merged at the root; domain routers apply their own state before
/// being passed in.
pub fn create_router<T>(routes: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .route(OPENAPI_PATH, get(|| async { Json(T::openapi()) }))
        .merge(routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}
