//! Error types for the Ronda toolkit.
//!
//! This module defines the error type shared across the Ronda crates,
//! covering malformed statement documents, assumption documents, and
//! report generation failures.

use thiserror::Error;

/// The main error type for Ronda operations.
///
/// Missing financial *data* is never an error in Ronda — absent values are
/// carried as `None` and propagate through formulas. These variants cover
/// structural failures only: documents that do not have the expected shape.
#[derive(Debug, Error)]
pub enum RondaError {
    /// A statement document does not have the expected top-level structure.
    #[error("Invalid statement document: {0}")]
    InvalidStatements(String),

    /// An assumption document does not have the expected top-level structure.
    #[error("Invalid assumption document: {0}")]
    InvalidAssumptions(String),

    /// Error serializing or deserializing a JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
///
/// This is a convenience type that uses [`RondaError`] as the error type.
pub type Result<T> = std::result::Result<T, RondaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RondaError::InvalidStatements("missing years".to_string());
        assert_eq!(err.to_string(), "Invalid statement document: missing years");

        let err = RondaError::InvalidAssumptions("not an object".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid assumption document: not an object"
        );
    }

    #[test]
    fn test_error_from_str() {
        let err: RondaError = "fail".into();
        assert!(matches!(err, RondaError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());
    }
}
