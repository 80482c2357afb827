#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Historical financial metrics engine for the Ronda valuation toolkit.
//!
//! The [`MetricsEngine`] derives growth, margin, return, working-capital,
//! capital-intensity, leverage, and tax metrics from a standardized
//! statement set; [`MetricsReport`] and [`MetricAverages`] provide the
//! rounded presentation document and period averages.

/// The version of the ronda-metrics crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod engine;
pub mod panel;
pub mod report;

// Re-exports
pub use engine::{MetricsConfig, MetricsEngine};
pub use panel::{HistoricalMetrics, MetricSeries};
pub use report::{MetricAverages, MetricsReport};
