//! The historical metrics panel.

use std::collections::BTreeMap;

use ronda_statements::Year;
use serde::{Deserialize, Serialize};

/// One metric across fiscal years.
///
/// `None` (or an absent year) means the metric could not be computed from
/// the available data — not zero, not an error — and propagates through any
/// formula that depends on it.
pub type MetricSeries = BTreeMap<Year, Option<f64>>;

/// Collection of computed historical metrics by year.
///
/// Built fresh by each [`MetricsEngine`](crate::MetricsEngine) run and never
/// mutated afterwards. All ratios are stored unscaled (0.20, not 20%); the
/// presentation transform lives in [`report`](crate::report).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalMetrics {
    /// Fiscal years covered, newest first.
    pub years: Vec<Year>,

    // Growth metrics
    /// Year-over-year revenue growth.
    pub revenue_growth: MetricSeries,
    /// Year-over-year gross profit growth.
    pub gross_profit_growth: MetricSeries,
    /// Year-over-year EBIT growth.
    pub ebit_growth: MetricSeries,
    /// Year-over-year net income growth.
    pub net_income_growth: MetricSeries,

    // Margin metrics
    /// Gross profit over revenue.
    pub gross_margin: MetricSeries,
    /// Operating income over revenue.
    pub ebit_margin: MetricSeries,
    /// EBITDA (EBIT plus D&A) over revenue.
    pub ebitda_margin: MetricSeries,
    /// Net income over revenue.
    pub net_margin: MetricSeries,

    // Return metrics
    /// Return on assets: net income over average total assets.
    pub roa: MetricSeries,
    /// Return on equity: net income over average shareholders' equity.
    pub roe: MetricSeries,
    /// Return on invested capital: NOPAT over average invested capital.
    pub roic: MetricSeries,

    // Working capital metrics (in days)
    /// Days sales outstanding.
    pub dso: MetricSeries,
    /// Days inventory outstanding.
    pub dio: MetricSeries,
    /// Days payables outstanding.
    pub dpo: MetricSeries,
    /// Cash conversion cycle: DSO + DIO - DPO.
    pub cash_conversion_cycle: MetricSeries,

    // Capital intensity
    /// Capital expenditures over revenue.
    pub capex_to_revenue: MetricSeries,
    /// Capital expenditures over depreciation and amortization.
    pub capex_to_da: MetricSeries,
    /// Depreciation and amortization over revenue.
    pub da_to_revenue: MetricSeries,

    // Leverage metrics
    /// Total debt over shareholders' equity.
    pub debt_to_equity: MetricSeries,
    /// Total debt over EBITDA.
    pub debt_to_ebitda: MetricSeries,
    /// EBIT over interest expense.
    pub interest_coverage: MetricSeries,

    // Effective tax rate
    /// Income tax expense over pre-tax income.
    pub effective_tax_rate: MetricSeries,
}

impl HistoricalMetrics {
    /// Create an empty panel for the given years.
    #[must_use]
    pub fn new(years: Vec<Year>) -> Self {
        Self {
            years,
            ..Self::default()
        }
    }

    /// The value of a series for a year, flattening absent entries.
    #[must_use]
    pub fn value(series: &MetricSeries, year: Year) -> Option<f64> {
        series.get(&year).copied().flatten()
    }
}
