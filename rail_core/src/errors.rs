//! # Error Types
//!
//! Structured error types for rail_core. Every variant carries enough
//! context for a caller (human or program) to report exactly which input
//! was rejected and why.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::errors::{CalcError, CalcResult};
//!
//! fn require_pair(parts: &[&str]) -> CalcResult<()> {
//!     if parts.len() != 2 {
//!         return Err(CalcError::invalid_coordinate(
//!             parts.join(" "),
//!             "Expected two components",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_pair(&["10", "-5"]).is_ok());
//! assert!(require_pair(&["abc"]).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rail_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A coordinate string did not parse into exactly two integer components
    #[error("Invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    /// A material quantity does not fit in a u64
    #[error("Quantity overflow: {quantity} exceeds the representable range (from {amount})")]
    QuantityOverflow { quantity: String, amount: u64 },

    /// Material name is not one of the known crafting materials
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidCoordinate error
    pub fn invalid_coordinate(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidCoordinate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a QuantityOverflow error
    pub fn quantity_overflow(quantity: impl Into<String>, amount: u64) -> Self {
        CalcError::QuantityOverflow {
            quantity: quantity.into(),
            amount,
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            CalcError::QuantityOverflow { .. } => "QUANTITY_OVERFLOW",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
