//! Reasonable-range bounds for assumption values.
//!
//! These bounds encode business judgment, not formula logic: values outside
//! them are unusual, never invalid. They are named configuration so a
//! desk can tune them without touching validation code.

use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` plausibility bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl RangeBound {
    /// Create a bound.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether a value falls strictly outside the bound.
    #[must_use]
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }
}

/// The reasonable-range table for key DCF assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonableRanges {
    /// Annual revenue growth: -20% to +50%.
    pub revenue_growth: RangeBound,
    /// Terminal / perpetuity growth: 0% to 4%, should not exceed GDP.
    pub terminal_growth: RangeBound,
    /// Gross margin: 5% to 95%.
    pub gross_margin: RangeBound,
    /// EBIT margin: -20% to 60%.
    pub ebit_margin: RangeBound,
    /// Risk-free rate: 1% to 10%.
    pub risk_free_rate: RangeBound,
    /// Equity risk premium: 3% to 10%.
    pub equity_risk_premium: RangeBound,
    /// Beta: 0.3 to 3.0.
    pub beta: RangeBound,
    /// Cost of debt: 2% to 15%.
    pub cost_of_debt: RangeBound,
    /// Tax rate: 10% to 40%.
    pub tax_rate: RangeBound,
    /// Exit EBITDA multiple: 3x to 25x.
    pub exit_multiple: RangeBound,
    /// CapEx as a share of revenue: 1% to 25%.
    pub capex_pct_revenue: RangeBound,
    /// Days sales outstanding: 15 to 120 days.
    pub dso_days: RangeBound,
    /// Days inventory outstanding: 0 to 180 days.
    pub dio_days: RangeBound,
    /// Days payables outstanding: 15 to 120 days.
    pub dpo_days: RangeBound,
    /// Weighted average cost of capital: 5% to 20%.
    pub wacc: RangeBound,
}

impl Default for ReasonableRanges {
    fn default() -> Self {
        Self {
            revenue_growth: RangeBound::new(-0.20, 0.50),
            terminal_growth: RangeBound::new(0.00, 0.04),
            gross_margin: RangeBound::new(0.05, 0.95),
            ebit_margin: RangeBound::new(-0.20, 0.60),
            risk_free_rate: RangeBound::new(0.01, 0.10),
            equity_risk_premium: RangeBound::new(0.03, 0.10),
            beta: RangeBound::new(0.3, 3.0),
            cost_of_debt: RangeBound::new(0.02, 0.15),
            tax_rate: RangeBound::new(0.10, 0.40),
            exit_multiple: RangeBound::new(3.0, 25.0),
            capex_pct_revenue: RangeBound::new(0.01, 0.25),
            dso_days: RangeBound::new(15.0, 120.0),
            dio_days: RangeBound::new(0.0, 180.0),
            dpo_days: RangeBound::new(15.0, 120.0),
            wacc: RangeBound::new(0.05, 0.20),
        }
    }
}
