use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ProductField;

/// Storage-level failures. They carry no field tag; the service attaches one.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("product code already exists")]
    CodeAlreadyExists,

    #[error("product not found")]
    NotFound,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// Unreadable body, invalid JSON, wrong value type or a missing required key
    #[error("{0}")]
    MalformedBody(String),

    #[error("field is required: {0}")]
    FieldRequired(ProductField),

    #[error("field has an invalid format: {0}")]
    FieldFormat(ProductField),

    #[error("product code already exists: {0}")]
    CodeAlreadyExists(ProductField),

    #[error("invalid id")]
    InvalidId,

    #[error("product not found: {0}")]
    NotFound(ProductField),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::CodeAlreadyExists => {
                ProductError::CodeAlreadyExists(ProductField::CodeValue)
            }
            RepositoryError::NotFound => ProductError::NotFound(ProductField::Id),
        }
    }
}

impl From<serde_json::Error> for ProductError {
    fn from(err: serde_json::Error) -> Self {
        ProductError::MalformedBody(err.to_string())
    }
}

impl From<BytesRejection> for ProductError {
    fn from(err: BytesRejection) -> Self {
        ProductError::MalformedBody(err.body_text())
    }
}

impl ProductError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::MalformedBody(_)
            | ProductError::FieldRequired(_)
            | ProductError::FieldFormat(_)
            | ProductError::CodeAlreadyExists(_)
            | ProductError::InvalidId => StatusCode::BAD_REQUEST,
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client.
    pub fn message(&self) -> String {
        match self {
            ProductError::MalformedBody(reason) if reason.is_empty() => "invalid body".to_string(),
            ProductError::MalformedBody(_)
            | ProductError::FieldRequired(_)
            | ProductError::FieldFormat(_)
            | ProductError::CodeAlreadyExists(_) => format!("invalid body: {}", self),
            ProductError::InvalidId => "invalid id".to_string(),
            ProductError::NotFound(_) => "product with the provided id not found".to_string(),
            ProductError::Internal(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        if let ProductError::Internal(ref details) = self {
            tracing::error!(error = %details, "Unhandled product error");
        }

        (self.status_code(), self.message()).into_response()
    }
}
