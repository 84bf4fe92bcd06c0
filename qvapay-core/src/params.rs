//! Query parameters sent with every api call.
//!
//! QvaPay authenticates apps with the `app_id` and `app_secret` query parameters, so every
//! parameter set starts with them.
use serde::{Deserialize, Serialize};

use crate::invoice::ValidatedInvoice;

/// App credentials as issued in the QvaPay dashboard. They are not checked locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub app_id: String,
    pub app_secret: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }
}

/// Ordered list of query parameters. Serializes as a sequence of `(name, value)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn authenticated(credentials: &Credentials) -> Self {
        Self(vec![
            ("app_id".to_owned(), credentials.app_id.clone()),
            ("app_secret".to_owned(), credentials.app_secret.clone()),
        ])
    }

    pub fn for_invoice(credentials: &Credentials, invoice: &ValidatedInvoice) -> Self {
        let mut params = Self::authenticated(credentials)
            .with("amount", invoice.amount())
            .with("description", invoice.description())
            .with("signed", if invoice.signed() { "1" } else { "0" });

        if let Some(remote_id) = invoice.remote_id() {
            params = params.with("remote_id", remote_id);
        }
        params
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.push((name.to_owned(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
