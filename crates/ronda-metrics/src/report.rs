//! Presentation transform for the metrics panel.
//!
//! The panel stores unscaled ratios; this module produces the serializable
//! report document consumed downstream: percentage metrics scaled by 100,
//! everything rounded to two decimals, undefined years omitted, plus the
//! period averages. Formatting only — every number here is re-derivable
//! from the unscaled panel.

use std::collections::BTreeMap;

use ronda_statements::Year;
use ronda_statements::math::mean_of_defined;
use serde::{Deserialize, Serialize};

use crate::panel::{HistoricalMetrics, MetricSeries};

/// Rounded year-keyed values with undefined years omitted.
pub type ReportSeries = BTreeMap<Year, f64>;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale and round a series for presentation.
fn format_series(series: &MetricSeries, as_percent: bool) -> ReportSeries {
    series
        .iter()
        .filter_map(|(&year, &value)| {
            value.map(|v| (year, round2(if as_percent { v * 100.0 } else { v })))
        })
        .collect()
}

/// Growth rates, as percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthReport {
    /// Revenue growth, percent.
    pub revenue_growth_pct: ReportSeries,
    /// Gross profit growth, percent.
    pub gross_profit_growth_pct: ReportSeries,
    /// EBIT growth, percent.
    pub ebit_growth_pct: ReportSeries,
    /// Net income growth, percent.
    pub net_income_growth_pct: ReportSeries,
}

/// Profitability margins, as percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginsReport {
    /// Gross margin, percent.
    pub gross_margin_pct: ReportSeries,
    /// EBIT margin, percent.
    pub ebit_margin_pct: ReportSeries,
    /// EBITDA margin, percent.
    pub ebitda_margin_pct: ReportSeries,
    /// Net margin, percent.
    pub net_margin_pct: ReportSeries,
}

/// Return metrics, as percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnsReport {
    /// Return on assets, percent.
    pub roa_pct: ReportSeries,
    /// Return on equity, percent.
    pub roe_pct: ReportSeries,
    /// Return on invested capital, percent.
    pub roic_pct: ReportSeries,
}

/// Working-capital turnover, in days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingCapitalReport {
    /// Days sales outstanding.
    pub dso_days: ReportSeries,
    /// Days inventory outstanding.
    pub dio_days: ReportSeries,
    /// Days payables outstanding.
    pub dpo_days: ReportSeries,
    /// Cash conversion cycle, days.
    pub cash_conversion_cycle_days: ReportSeries,
}

/// Capital-intensity metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalIntensityReport {
    /// CapEx over revenue, percent.
    pub capex_to_revenue_pct: ReportSeries,
    /// CapEx over D&A, plain ratio.
    pub capex_to_da_ratio: ReportSeries,
    /// D&A over revenue, percent.
    pub da_to_revenue_pct: ReportSeries,
}

/// Leverage and coverage ratios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeverageReport {
    /// Total debt over equity.
    pub debt_to_equity_ratio: ReportSeries,
    /// Total debt over EBITDA.
    pub debt_to_ebitda_ratio: ReportSeries,
    /// EBIT over interest expense.
    pub interest_coverage_ratio: ReportSeries,
}

/// Effective tax rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxReport {
    /// Effective tax rate, percent.
    pub effective_tax_rate_pct: ReportSeries,
}

/// The rounded, scaled metrics document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Fiscal years covered, newest first.
    pub years: Vec<Year>,
    /// Growth rates.
    pub growth: GrowthReport,
    /// Profitability margins.
    pub margins: MarginsReport,
    /// Return metrics.
    pub returns: ReturnsReport,
    /// Working-capital days.
    pub working_capital: WorkingCapitalReport,
    /// Capital intensity.
    pub capital_intensity: CapitalIntensityReport,
    /// Leverage and coverage.
    pub leverage: LeverageReport,
    /// Tax metrics.
    pub tax: TaxReport,
}

impl MetricsReport {
    /// Build the report document from an unscaled panel.
    #[must_use]
    pub fn from_panel(panel: &HistoricalMetrics) -> Self {
        Self {
            years: panel.years.clone(),
            growth: GrowthReport {
                revenue_growth_pct: format_series(&panel.revenue_growth, true),
                gross_profit_growth_pct: format_series(&panel.gross_profit_growth, true),
                ebit_growth_pct: format_series(&panel.ebit_growth, true),
                net_income_growth_pct: format_series(&panel.net_income_growth, true),
            },
            margins: MarginsReport {
                gross_margin_pct: format_series(&panel.gross_margin, true),
                ebit_margin_pct: format_series(&panel.ebit_margin, true),
                ebitda_margin_pct: format_series(&panel.ebitda_margin, true),
                net_margin_pct: format_series(&panel.net_margin, true),
            },
            returns: ReturnsReport {
                roa_pct: format_series(&panel.roa, true),
                roe_pct: format_series(&panel.roe, true),
                roic_pct: format_series(&panel.roic, true),
            },
            working_capital: WorkingCapitalReport {
                dso_days: format_series(&panel.dso, false),
                dio_days: format_series(&panel.dio, false),
                dpo_days: format_series(&panel.dpo, false),
                cash_conversion_cycle_days: format_series(&panel.cash_conversion_cycle, false),
            },
            capital_intensity: CapitalIntensityReport {
                capex_to_revenue_pct: format_series(&panel.capex_to_revenue, true),
                capex_to_da_ratio: format_series(&panel.capex_to_da, false),
                da_to_revenue_pct: format_series(&panel.da_to_revenue, true),
            },
            leverage: LeverageReport {
                debt_to_equity_ratio: format_series(&panel.debt_to_equity, false),
                debt_to_ebitda_ratio: format_series(&panel.debt_to_ebitda, false),
                interest_coverage_ratio: format_series(&panel.interest_coverage, false),
            },
            tax: TaxReport {
                effective_tax_rate_pct: format_series(&panel.effective_tax_rate, true),
            },
        }
    }
}

/// Period averages over the historical window.
///
/// Arithmetic mean of the defined year-values per metric, unscaled; `None`
/// when no year has a defined value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricAverages {
    /// Average revenue growth.
    pub avg_revenue_growth: Option<f64>,
    /// Average gross margin.
    pub avg_gross_margin: Option<f64>,
    /// Average EBIT margin.
    pub avg_ebit_margin: Option<f64>,
    /// Average EBITDA margin.
    pub avg_ebitda_margin: Option<f64>,
    /// Average net margin.
    pub avg_net_margin: Option<f64>,
    /// Average return on assets.
    pub avg_roa: Option<f64>,
    /// Average return on equity.
    pub avg_roe: Option<f64>,
    /// Average return on invested capital.
    pub avg_roic: Option<f64>,
    /// Average days sales outstanding.
    pub avg_dso: Option<f64>,
    /// Average days inventory outstanding.
    pub avg_dio: Option<f64>,
    /// Average days payables outstanding.
    pub avg_dpo: Option<f64>,
    /// Average CapEx over revenue.
    pub avg_capex_to_revenue: Option<f64>,
    /// Average effective tax rate.
    pub avg_effective_tax_rate: Option<f64>,
}

impl MetricAverages {
    /// Compute the period averages from an unscaled panel.
    #[must_use]
    pub fn from_panel(panel: &HistoricalMetrics) -> Self {
        let avg = |series: &MetricSeries| mean_of_defined(series.values().copied());
        Self {
            avg_revenue_growth: avg(&panel.revenue_growth),
            avg_gross_margin: avg(&panel.gross_margin),
            avg_ebit_margin: avg(&panel.ebit_margin),
            avg_ebitda_margin: avg(&panel.ebitda_margin),
            avg_net_margin: avg(&panel.net_margin),
            avg_roa: avg(&panel.roa),
            avg_roe: avg(&panel.roe),
            avg_roic: avg(&panel.roic),
            avg_dso: avg(&panel.dso),
            avg_dio: avg(&panel.dio),
            avg_dpo: avg(&panel.dpo),
            avg_capex_to_revenue: avg(&panel.capex_to_revenue),
            avg_effective_tax_rate: avg(&panel.effective_tax_rate),
        }
    }
}
