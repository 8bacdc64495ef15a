use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Product;

/// Repository trait for Product persistence
///
/// The service only depends on this capability set, so another backing store
/// can be swapped in without touching the business rules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and write the allocated ID back into `product`.
    ///
    /// Fails with `CodeAlreadyExists` before allocating an ID.
    async fn save(&self, product: &mut Product) -> RepositoryResult<()>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i64) -> RepositoryResult<Product>;

    /// Replace the stored record with the same ID
    async fn update(&self, product: &Product) -> RepositoryResult<()>;

    /// Delete a product by ID
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    products: HashMap<i64, Product>,
    last_id: i64,
}

impl Store {
    /// Linear scan; `except` skips the record being updated.
    fn code_taken(&self, code_value: &str, except: Option<i64>) -> bool {
        self.products
            .values()
            .any(|p| p.code_value == code_value && Some(p.id) != except)
    }
}

/// In-memory implementation of ProductRepository
///
/// One lock guards both the map and the ID counter, so uniqueness checks and
/// ID allocation are atomic with respect to every other operation. Clones
/// share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating IDs after `last_id`.
    pub fn with_starting_id(last_id: i64) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                products: HashMap::new(),
                last_id,
            })),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.store.read().await.products.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &mut Product) -> RepositoryResult<()> {
        let mut store = self.store.write().await;

        if store.code_taken(&product.code_value, None) {
            return Err(RepositoryError::CodeAlreadyExists);
        }

        store.last_id += 1;
        product.id = store.last_id;
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, code_value = %product.code_value, "Saved product");
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Product> {
        let store = self.store.read().await;
        store
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        let mut store = self.store.write().await;

        if !store.products.contains_key(&product.id) {
            return Err(RepositoryError::NotFound);
        }

        if store.code_taken(&product.code_value, Some(product.id)) {
            return Err(RepositoryError::CodeAlreadyExists);
        }

        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Updated product");
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }
}
