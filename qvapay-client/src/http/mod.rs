use async_trait::async_trait;
use qvapay_core::params::QueryParams;
use serde_json::Value;

use crate::error::QvapayError;

pub mod reqwest;

#[cfg(test)]
use mockall::automock;

/// The response of the api as received: status, headers and the body.
///
/// A body that is not json is kept as a json string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self {
            status,
            headers: Vec::new(),
            data,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decodes the body, e.g. into one of the types in `qvapay_core::primitives`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, QvapayError> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

/// Issues `GET` requests relative to the api base url.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<ApiResponse, QvapayError>;
}
