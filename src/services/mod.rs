//! Business rules for both resources, written as pure functions over the
//! repository traits so they stay testable without a database.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod appointment;
pub mod consultant;

/// User-facing failure taxonomy. Everything except `Internal` is caused by
/// bad input and maps to a 400 response; none of these are retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("id not found")]
    NotFound,

    #[error("consultant not found")]
    ConsultantNotFound,

    #[error("consultant still has appointments")]
    HasDependents,

    #[error("page below 1")]
    InvalidPage,

    #[error("internal error")]
    Internal(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
