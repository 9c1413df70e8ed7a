use thiserror::Error;

use crate::forms::products::ProductFormError;
use crate::repository::errors::RepositoryError;

/// Caller-facing error taxonomy for catalog operations.
///
/// Validation and uniqueness errors represent bad input and are returned
/// unmodified; they are never retried. `StoreUnavailable` covers store-level
/// failures, leaving retry policy to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A required field was absent or empty after trimming.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// A numeric field failed to parse or was negative.
    #[error("invalid numeric value for field: {0}")]
    InvalidNumericValue(&'static str),
    /// Another product already holds this name (case-insensitively).
    #[error("a product with this name already exists")]
    NameConflict,
    /// Another product already holds this code.
    #[error("a product with this code already exists")]
    CodeConflict,
    /// Requested product was not found.
    #[error("product not found")]
    NotFound,
    /// The record store failed to serve the request.
    #[error("record store unavailable")]
    StoreUnavailable,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ProductFormError> for ServiceError {
    fn from(err: ProductFormError) -> Self {
        match err {
            ProductFormError::MissingRequiredField(field) => Self::MissingRequiredField(field),
            ProductFormError::InvalidNumericValue(field) => Self::InvalidNumericValue(field),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            // The store's UNIQUE constraints are the durability backstop
            // behind the uniqueness guard; map violations to the same
            // conflicts instead of letting a duplicate persist.
            RepositoryError::UniqueViolation(message) => {
                if message.contains("code") {
                    Self::CodeConflict
                } else {
                    Self::NameConflict
                }
            }
            RepositoryError::Pool(_)
            | RepositoryError::Database(_)
            | RepositoryError::Validation(_) => Self::StoreUnavailable,
        }
    }
}
