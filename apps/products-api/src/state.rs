//! Application state management

use domain_products::InMemoryProductRepository;

/// Shared application state
///
/// The product store lives for the whole process; clones share it.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: crate::config::Config,
    pub products: InMemoryProductRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            products: InMemoryProductRepository::new(),
        }
    }
}
