use crate::crypto::PasswordError;
use crate::storage::StoreError;
use thiserror::Error;

/// Failure of a service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required input was missing or empty. Names the offending field.
    #[error("missing required field: {0}")]
    Validation(&'static str),
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("no member matches the given email")]
    NotFound,
    #[error("password does not match")]
    Auth,
    #[error(transparent)]
    Hashing(#[from] PasswordError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub(crate) fn require_text(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.is_empty() {
        return Err(ServiceError::Validation(field));
    }
    Ok(())
}

/// Ids are assigned from 1 upwards, so 0 stands for "not provided".
pub(crate) fn require_id(field: &'static str, value: i64) -> ServiceResult<()> {
    if value == 0 {
        return Err(ServiceError::Validation(field));
    }
    Ok(())
}

pub(crate) fn store_err(err: sqlx::Error) -> ServiceError {
    ServiceError::Store(err.into())
}
