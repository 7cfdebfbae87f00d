//! Payload decoding for behavior factories

use crate::PayloadError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Decode a payload into a typed parameter struct.
pub fn decode<T: DeserializeOwned>(param: &Value) -> Result<T, PayloadError> {
    Ok(T::deserialize(param)?)
}

/// Require a finite, non-negative number.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, PayloadError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PayloadError::invalid(
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(value)
}

/// Require a finite, strictly positive number.
pub fn positive(field: &'static str, value: f64) -> Result<f64, PayloadError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PayloadError::invalid(
            field,
            format!("must be a positive number, got {value}"),
        ));
    }
    Ok(value)
}

/// `{x, y}` pair of reals, both defaulting to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// `{x, y}` pair of integers, both required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}
