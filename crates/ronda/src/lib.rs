#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ronda
//!
//! Historical financial metrics and DCF assumption validation.
//!
//! ronda is an umbrella crate that re-exports all ronda sub-crates for
//! convenience. It derives the growth, margin, return, efficiency, and
//! leverage profile of a company from its historical statements, and
//! validates the assumption set behind a discounted cash flow model
//! before the model is built.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ronda::{AssumptionValidator, MetricsEngine};
//!
//! # fn main() -> ronda::Result<()> {
//! let statements = load_statements("AAPL.json")?;
//! let metrics = MetricsEngine::new(&statements).compute();
//!
//! let result = AssumptionValidator::new(&assumptions)
//!     .with_historical(&metrics)
//!     .validate();
//! assert!(result.is_valid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`statements`] - Standardized statement data model and optional-aware
//!   arithmetic
//! - [`metrics`] - Historical metrics engine, presentation report, and
//!   period averages
//! - [`validate`] - Assumption completeness, plausibility, and consistency
//!   checks
//!
//! ## Architecture
//!
//! The pipeline has three stages:
//!
//! 1. **Statements** normalize raw filings into year-keyed line items
//! 2. **Metrics** derive ratio series from the statement panel
//! 3. **Validation** judges a proposed assumption set, optionally against
//!    the company's own history

/// Version information for the ronda crate.
///
/// This constant contains the current version of ronda as specified in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Statement Data Model
// ============================================================================

/// Standardized financial statement data model.
///
/// This module re-exports the [`ronda_statements`] crate: the statement
/// set and line-item types, the field taxonomy, the missing-data-tolerant
/// accessor, and the optional-aware arithmetic primitives.
///
/// # Example
///
/// ```ignore
/// use ronda::statements::{Field, StatementAccessor};
/// ```
pub mod statements {
    pub use ronda_statements::*;
}

// Re-export core types at top level for convenience
pub use ronda_statements::{Field, LineItem, StatementAccessor, StatementKind, StatementSet, Year};

// Re-export error types
pub use ronda_statements::{Result, RondaError};

// ============================================================================
// Historical Metrics
// ============================================================================

/// Historical metrics engine and reporting.
///
/// This module re-exports the [`ronda_metrics`] crate which derives the
/// full ratio panel from a statement set:
///
/// - **Growth**: revenue, gross profit, EBIT, net income
/// - **Margins**: gross, EBIT, EBITDA, net
/// - **Returns**: ROA, ROE, ROIC
/// - **Working capital**: DSO, DIO, DPO, cash conversion cycle
/// - **Capital intensity**: capex and D&A ratios
/// - **Leverage**: debt ratios and interest coverage
///
/// # Example
///
/// ```ignore
/// use ronda::metrics::{MetricsEngine, MetricsReport};
/// ```
pub mod metrics {
    pub use ronda_metrics::*;
}

pub use ronda_metrics::{HistoricalMetrics, MetricAverages, MetricsEngine, MetricsReport};

// ============================================================================
// Assumption Validation
// ============================================================================

/// DCF assumption validation.
///
/// This module re-exports the [`ronda_validate`] crate which checks an
/// assumption document for completeness (required fields per model
/// configuration), plausibility (reasonable-range warnings), and
/// consistency (perpetuity growth against the implied discount rate).
///
/// # Example
///
/// ```ignore
/// use ronda::validate::{AssumptionValidator, ValidationSummary};
/// ```
pub mod validate {
    pub use ronda_validate::*;
}

pub use ronda_validate::{
    AssumptionSet, AssumptionValidator, Severity, ValidationResult, ValidationSummary,
};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// ronda. Import it with:
///
/// ```ignore
/// use ronda::prelude::*;
/// ```
///
/// This brings into scope:
/// - Statement types: [`Field`], [`LineItem`], [`StatementAccessor`],
///   [`StatementSet`], [`Year`]
/// - Metrics types: [`HistoricalMetrics`], [`MetricsEngine`],
///   [`MetricsReport`], [`MetricAverages`]
/// - Validation types: [`AssumptionSet`], [`AssumptionValidator`],
///   [`Severity`], [`ValidationResult`], [`ValidationSummary`]
/// - Error types: [`Result`], [`RondaError`]
pub mod prelude {
    pub use crate::{Field, LineItem, StatementAccessor, StatementKind, StatementSet, Year};
    pub use crate::{HistoricalMetrics, MetricAverages, MetricsEngine, MetricsReport};
    pub use crate::{
        AssumptionSet, AssumptionValidator, Severity, ValidationResult, ValidationSummary,
    };
    pub use crate::{Result, RondaError};
}
