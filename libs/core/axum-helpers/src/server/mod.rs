//! Server infrastructure module.
//!
//! - Listener bootstrap with graceful shutdown
//! - Request tracing, OpenAPI document route and plain-text 404 fallback
//! - Health (`/health`) and liveness (`/ping`) endpoints

pub mod app;
pub mod health;

pub use app::{OPENAPI_PATH, create_app, create_router, not_found};
pub use health::{HealthResponse, health_handler, health_router, ping_handler};
