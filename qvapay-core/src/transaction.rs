use std::fmt::Display;

use serde_json::Value;

use crate::error::ValidationError;

/// Identifier of a transaction as used in `/transaction/{uuid}`.
///
/// The value is not checked against the uuid format, it is put into the path as is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn path(&self) -> String {
        format!("/transaction/{}", self.0)
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(uuid: &str) -> Self {
        Self::new(uuid)
    }
}

impl From<String> for TransactionId {
    fn from(uuid: String) -> Self {
        Self(uuid)
    }
}

impl From<&String> for TransactionId {
    fn from(uuid: &String) -> Self {
        Self(uuid.clone())
    }
}

impl TryFrom<&Value> for TransactionId {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(uuid) => Ok(Self(uuid.clone())),
            _ => Err(ValidationError::InvalidUuid),
        }
    }
}

impl TryFrom<Option<&str>> for TransactionId {
    type Error = ValidationError;

    fn try_from(uuid: Option<&str>) -> Result<Self, Self::Error> {
        uuid.map(Self::new).ok_or(ValidationError::InvalidUuid)
    }
}
