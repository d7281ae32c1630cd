//! # Error Types
//!
//! Structured error types for suite_core. The placement pipeline itself never
//! fails: every degenerate input still yields a renderable layout. Errors only
//! come from caller-side validation, suite-id parsing and project documents.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::errors::{LayoutError, LayoutResult};
//!
//! fn validate_width(width_m: f64) -> LayoutResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(LayoutError::InvalidInput {
//!             field: "width_m".to_string(),
//!             value: width_m.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for suite_core operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Structured error type for configuration and document handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LayoutError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Suite type id not in the catalog
    #[error("Unknown suite type: {id}")]
    UnknownSuiteType { id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl LayoutError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LayoutError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        LayoutError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownSuiteType error
    pub fn unknown_suite_type(id: impl Into<String>) -> Self {
        LayoutError::UnknownSuiteType { id: id.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        LayoutError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LayoutError::InvalidInput { .. } => "INVALID_INPUT",
            LayoutError::MissingField { .. } => "MISSING_FIELD",
            LayoutError::UnknownSuiteType { .. } => "UNKNOWN_SUITE_TYPE",
            LayoutError::SerializationError { .. } => "SERIALIZATION_ERROR",
            LayoutError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        LayoutError::serialization(e.to_string())
    }
}
