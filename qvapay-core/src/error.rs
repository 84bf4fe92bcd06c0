use thiserror::Error;

/// Errors raised while building a request, before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount is not a number or is less than 0")]
    InvalidAmount,

    #[error("Description is not correct")]
    InvalidDescription,

    #[error("UUID should be an string")]
    InvalidUuid,
}
