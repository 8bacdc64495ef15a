//! # Axum Helpers
//!
//! Server plumbing shared by the HTTP binaries.
//!
//! ## Modules
//!
//! - **[`server`]**: listener bootstrap, cross-cutting middleware, health and liveness routes
//! - **[`shutdown`]**: SIGINT/SIGTERM handling for graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let routes = Router::new().merge(health_router(app_info!()));
//!     let router = create_router::<ApiDoc>(routes);
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod server;
pub mod shutdown;

pub use server::{
    HealthResponse, create_app, create_router, health_handler, health_router, not_found,
    ping_handler,
};
pub use shutdown::shutdown_signal;
