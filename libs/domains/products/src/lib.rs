//! Products Domain
//!
//! In-memory product catalog: CRUD over products keyed by an integer ID,
//! with a unique business `code_value` per product.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, body decoding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, error tagging
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_products::{InMemoryProductRepository, ProductService, handlers};
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! let app: Router = Router::new().nest("/products", handlers::router(service));
//! ```

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult, RepositoryError, RepositoryResult};
pub use extractors::ProductId;
pub use handlers::ApiDoc;
pub use models::{Product, ProductEnvelope, ProductField, ProductRequest, UpdateProduct};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
