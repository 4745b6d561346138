//! Input boundary types.
//!
//! Measurements arrive from the outside world as native numbers or as text
//! (CLI arguments, JSON records), so the boundary keeps both forms and
//! defers numeric interpretation until classification.

use serde::Deserialize;

use crate::Error;

/// A raw scalar input.
///
/// Deserializes untagged, so JSON numbers, JSON strings and JSON `null`
/// all map onto it directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A native numeric value.
    Number(f64),
    /// A textual value, parsed on demand.
    Text(String),
    /// A null or absent value. Never interpretable as a number.
    Null,
}

impl Value {
    /// Interpret the value as a floating point number.
    ///
    /// Text is trimmed and parsed with the standard float grammar (sign,
    /// decimal point, exponent). Returns [`Error::TypeConversion`] when the
    /// value is null or the text does not parse.
    pub fn to_f64(&self) -> Result<f64, Error> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::TypeConversion(format!("{:?} is not a number", s))),
            Value::Null => Err(Error::TypeConversion("null is not a number".to_string())),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// A package record as received, before any validation.
///
/// Fields left out of a record deserialize as [`Value::Null`] and fail
/// validation with a type conversion error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageInput {
    #[serde(default)]
    pub width: Value,
    #[serde(default)]
    pub height: Value,
    #[serde(default)]
    pub length: Value,
    #[serde(default)]
    pub mass: Value,
}

impl PackageInput {
    /// Coerce and validate the record into a measurement.
    pub fn validate(&self) -> Result<crate::PackageMeasurement, Error> {
        crate::PackageMeasurement::from_values(&self.width, &self.height, &self.length, &self.mass)
    }
}
