//! Path parameter extraction for product routes.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ProductError;

/// Decimal integer `{id}` path segment.
///
/// Anything that does not parse as an integer is rejected with
/// [`ProductError::InvalidId`] before the body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ProductError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ProductError::InvalidId)?;

        raw.parse().map(ProductId).map_err(|_| ProductError::InvalidId)
    }
}
