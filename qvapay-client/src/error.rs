use qvapay_core::error::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QvapayError {
    /// The request was rejected locally and never sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("ReqwestError - {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URLParseError - {0}")]
    Url(#[from] url::ParseError),

    #[error("SerdeJsonError - {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request failed with status code {status}")]
    Http { status: u16, body: String },
}

impl QvapayError {
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Status code of a non-2xx response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
