//! Invoice amounts.
//!
//! Callers hand in amounts as numbers, numeric text or even booleans. `RawAmount` keeps the
//! value as it was supplied and `Amount::parse` turns it into a positive dollar amount.
//! The api expects the amount as text with exactly two decimals, see [`Amount::to_fixed_2`].
use std::fmt::Display;

use serde_json::Value;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl RawAmount {
    /// Builds a raw amount from untyped json input.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(number) => Self::Number(number.as_f64().unwrap_or(f64::NAN)),
            Value::String(text) => Self::Text(text.clone()),
            Value::Bool(flag) => Self::Bool(*flag),
            other => Self::Text(other.to_string()),
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            Self::Number(number) => *number,
            Self::Text(text) => parse_float_prefix(text),
            // booleans are never numbers, `true` included
            Self::Bool(_) => f64::NAN,
        }
    }
}

impl From<f64> for RawAmount {
    fn from(amount: f64) -> Self {
        Self::Number(amount)
    }
}

impl From<f32> for RawAmount {
    fn from(amount: f32) -> Self {
        Self::Number(amount.into())
    }
}

impl From<u32> for RawAmount {
    fn from(amount: u32) -> Self {
        Self::Number(amount.into())
    }
}

impl From<i32> for RawAmount {
    fn from(amount: i32) -> Self {
        Self::Number(amount.into())
    }
}

impl From<u64> for RawAmount {
    fn from(amount: u64) -> Self {
        Self::Number(amount as f64)
    }
}

impl From<i64> for RawAmount {
    fn from(amount: i64) -> Self {
        Self::Number(amount as f64)
    }
}

impl From<&str> for RawAmount {
    fn from(amount: &str) -> Self {
        Self::Text(amount.to_owned())
    }
}

impl From<String> for RawAmount {
    fn from(amount: String) -> Self {
        Self::Text(amount)
    }
}

impl From<bool> for RawAmount {
    fn from(amount: bool) -> Self {
        Self::Bool(amount)
    }
}

/// A positive amount in dollars. Overflowing input such as `"1e400"` is kept as infinity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Not-a-number and non-positive inputs are reported as the same error.
    pub fn parse(raw: impl Into<RawAmount>) -> Result<Self, ValidationError> {
        let value = raw.into().as_f64();
        if value.is_nan() || value <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(Self(value))
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Renders the amount with exactly two decimals.
    ///
    /// Values that sit exactly halfway between two cents round up, everything else rounds to
    /// the nearest cent of its exact binary value (`1.005` is really `1.00499..` and becomes `1.00`).
    /// From `1e21` on the amount is written in exponent form (`1e+21`) and infinity as `Infinity`.
    pub fn to_fixed_2(&self) -> String {
        if self.0.is_infinite() {
            return "Infinity".to_owned();
        }
        if self.0 >= 1e21 {
            return format!("{:e}", self.0).replacen('e', "e+", 1);
        }
        // only multiples of 1/8 with an odd numerator land exactly on a half cent
        let eighths = self.0 * 8.0;
        if eighths < 2f64.powi(53) && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
            let cents = (25 * eighths as u128 + 1) / 2;
            return format!("{}.{:02}", cents / 100, cents % 100);
        }
        format!("{:.2}", self.0)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fixed_2())
    }
}

/// Parses the longest numeric prefix of `input` after leading whitespace.
///
/// `"22.5 USD"` yields `22.5`, `"XX"` yields NaN.
fn parse_float_prefix(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
