#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! DCF assumption validator for the Ronda valuation toolkit.
//!
//! The [`AssumptionValidator`] runs an ordered sequence of completeness,
//! plausibility, and consistency checks over a free-form assumption
//! document and reports every finding with a severity; only errors mark
//! the set invalid.

/// The version of the ronda-validate crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod assumptions;
pub mod discount;
pub mod issue;
pub mod ranges;
pub mod summary;
pub mod validator;

// Re-exports
pub use assumptions::{AssumptionSet, Complexity, DcfType, TerminalMethod};
pub use discount::{DiscountInputs, WaccDefaults, cost_of_equity, implied_discount_rate};
pub use issue::{Severity, ValidationIssue, ValidationResult};
pub use ranges::{RangeBound, ReasonableRanges};
pub use summary::{SummaryEntry, ValidationSummary};
pub use validator::{AssumptionValidator, ValidatorConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
