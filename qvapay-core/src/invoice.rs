//! Building and validating `/create_invoice` requests.
//!
//! An [`InvoiceRequest`] is what the caller asks for, a [`ValidatedInvoice`] is what gets sent.
//! Validation checks the amount first and the description second, and never touches the network.
use serde_json::Value;

use crate::{
    amount::{Amount, RawAmount},
    error::ValidationError,
};

/// Maximum description length in UTF-16 code units, the way the api measures it.
pub const MAX_DESCRIPTION_LENGTH: usize = 300;

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceRequest {
    pub amount: RawAmount,
    pub description: String,
    pub remote_id: Option<String>,
    /// Signed payment urls expire after 30 minutes.
    pub signed: bool,
}

impl InvoiceRequest {
    pub fn new(amount: impl Into<RawAmount>, description: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            remote_id: None,
            signed: true,
        }
    }

    pub fn with_remote_id(self, remote_id: impl Into<String>) -> Self {
        Self {
            remote_id: Some(remote_id.into()),
            ..self
        }
    }

    pub fn with_signed(self, signed: bool) -> Self {
        Self { signed, ..self }
    }

    pub fn unsigned(self) -> Self {
        self.with_signed(false)
    }

    pub fn validate(&self) -> Result<ValidatedInvoice, ValidationError> {
        let amount = Amount::parse(self.amount.clone())?;
        validate_description(&self.description)?;

        Ok(ValidatedInvoice {
            amount: amount.to_fixed_2(),
            description: self.description.clone(),
            remote_id: self.remote_id.clone().filter(|id| !id.is_empty()),
            signed: self.signed,
        })
    }
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    let length = description.encode_utf16().count();
    if length == 0 || length > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::InvalidDescription);
    }
    Ok(())
}

/// Invoice parameters that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedInvoice {
    amount: String,
    description: String,
    remote_id: Option<String>,
    signed: bool,
}

impl ValidatedInvoice {
    /// The amount with exactly two decimals.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn remote_id(&self) -> Option<&str> {
        self.remote_id.as_deref()
    }

    pub const fn signed(&self) -> bool {
        self.signed
    }
}

impl TryFrom<InvoiceRequest> for ValidatedInvoice {
    type Error = ValidationError;

    fn try_from(request: InvoiceRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}

impl TryFrom<&InvoiceRequest> for ValidatedInvoice {
    type Error = ValidationError;

    fn try_from(request: &InvoiceRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}

/// Validates an untyped invoice such as `{"amount": "25.60", "description": "...", "remote_id": "BRID56568989"}`.
///
/// A missing or non-string description is rejected, `remote_id` is kept only when it is truthy
/// and `signed` defaults to `true`.
impl TryFrom<&Value> for ValidatedInvoice {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let amount = RawAmount::from_value(value.get("amount").unwrap_or(&Value::Null));
        Amount::parse(amount.clone())?;

        let description = match value.get("description") {
            Some(Value::String(description)) => description.clone(),
            _ => return Err(ValidationError::InvalidDescription),
        };

        InvoiceRequest {
            amount,
            description,
            remote_id: value.get("remote_id").and_then(truthy_text),
            signed: value.get("signed").map_or(true, is_truthy),
        }
        .validate()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
