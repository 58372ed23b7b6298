//! Lenient numeric coercion for request payloads.
//!
//! Clients (form front-ends in particular) send numbers as `1`, `1.0`, `"1"`
//! or `true` interchangeably. Integer fields accept any of those as long as
//! the value is integral; float fields accept any finite number, numeric
//! string or boolean.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A field value as it appeared on the wire, before coercion.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Numeric {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

/// A field that could not be coerced; the message names the field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {reason}")]
pub struct CoerceError {
    pub field: &'static str,
    pub reason: String,
}

impl CoerceError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        CoerceError {
            field,
            reason: reason.into(),
        }
    }
}

impl Numeric {
    pub fn to_int(&self, field: &'static str) -> Result<i64, CoerceError> {
        let parsed = match self {
            Numeric::Bool(b) => Some(i64::from(*b)),
            Numeric::Int(v) => Some(*v),
            Numeric::Float(v) => integral(*v),
            Numeric::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            Numeric::Other(_) => None,
        };
        parsed.ok_or_else(|| {
            CoerceError::new(field, format!("expected an integer, found {}", self))
        })
    }

    pub fn to_float(&self, field: &'static str) -> Result<f64, CoerceError> {
        let parsed = match self {
            Numeric::Bool(b) => Some(f64::from(u8::from(*b))),
            Numeric::Int(v) => Some(*v as f64),
            Numeric::Float(v) => Some(*v),
            Numeric::Text(s) => s.trim().parse::<f64>().ok(),
            Numeric::Other(_) => None,
        };
        match parsed {
            Some(v) if v.is_finite() => Ok(v),
            Some(_) => Err(CoerceError::new(
                field,
                format!("expected a finite number, found {}", self),
            )),
            None => Err(CoerceError::new(
                field,
                format!("expected a number, found {}", self),
            )),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Numeric::Bool(b) => write!(f, "{}", b),
            Numeric::Int(v) => write!(f, "{}", v),
            Numeric::Float(v) => write!(f, "{}", v),
            Numeric::Text(s) => write!(f, "{:?}", s),
            Numeric::Other(v) => write!(f, "{}", v),
        }
    }
}

fn integral(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
