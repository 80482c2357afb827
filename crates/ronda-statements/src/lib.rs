#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Standardized financial statement data model for the Ronda valuation
//! toolkit.
//!
//! This crate provides the value types shared by the metrics and validation
//! engines: line items, statement sets, a missing-data-tolerant accessor,
//! and the optional-aware arithmetic every formula is built on.

/// The version of the ronda-statements crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod accessor;
pub mod error;
pub mod field;
pub mod math;
pub mod statement;

// Re-exports
pub use accessor::StatementAccessor;
pub use error::{Result, RondaError};
pub use field::Field;
pub use statement::{LineItem, StatementKind, StatementSet, Year};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
