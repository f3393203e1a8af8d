//! Error types for yield, cost, revenue and profit calculations.

use thiserror::Error;

/// Calculation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum YieldError {
    /// Environment selects a level the plant's factor table does not define.
    #[error("plant '{plant}' has no '{level}' level for factor '{dimension}'")]
    UnknownLevel {
        plant: String,
        dimension: String,
        level: String,
    },

    /// An optional plant field is required by the operation but absent.
    #[error("plant '{plant}' is missing required field '{field}'")]
    MissingField { plant: String, field: &'static str },

    /// Crop quantity is negative or not finite.
    #[error("invalid crop quantity for '{plant}': {value}")]
    InvalidQuantity { plant: String, value: f64 },

    /// A numeric plant field is not finite.
    #[error("invalid value for '{plant}' field '{field}': {value}")]
    InvalidValue {
        plant: String,
        field: String,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, YieldError>;
