use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures surfaced by the record store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matched the requested identifier.
    #[error("record not found")]
    NotFound,
    /// A `UNIQUE` constraint rejected the write; the message names the
    /// violated column.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    /// Could not acquire a pooled connection.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
    /// A stored row failed domain-type conversion.
    #[error("invalid stored value: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => Self::NotFound,
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            other => Self::Database(other),
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        Self::Validation(err.to_string())
    }
}
