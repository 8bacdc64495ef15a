//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductField, parse_expiration};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validates incoming products and translates repository failures into
/// field-tagged domain errors. Holds no state besides the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new product; its `id` is filled in on success.
    #[instrument(skip(self, product), fields(code_value = %product.code_value))]
    pub async fn save(&self, product: &mut Product) -> ProductResult<()> {
        validate(product)?;
        self.repository.save(product).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> ProductResult<Product> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Validate and replace the product stored under `product.id`.
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn update(&self, product: &Product) -> ProductResult<()> {
        validate(product)?;
        self.repository.update(product).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ProductResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Required-field checks in wire order, then the expiration date format.
/// Only the first failure is reported. Zero counts as missing for numbers.
fn validate(product: &Product) -> ProductResult<()> {
    let missing = if product.name.is_empty() {
        Some(ProductField::Name)
    } else if product.quantity == 0 {
        Some(ProductField::Quantity)
    } else if product.code_value.is_empty() {
        Some(ProductField::CodeValue)
    } else if product.expiration.is_empty() {
        Some(ProductField::Expiration)
    } else if product.price == 0.0 {
        Some(ProductField::Price)
    } else {
        None
    };

    if let Some(field) = missing {
        return Err(ProductError::FieldRequired(field));
    }

    if parse_expiration(&product.expiration).is_none() {
        return Err(ProductError::FieldFormat(ProductField::Expiration));
    }

    Ok(())
}
