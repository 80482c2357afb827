//! Implied discount-rate calculation.
//!
//! A one-shot CAPM plus target-leverage blend, used by the validator to
//! test the perpetuity growth rate for divergence. Deliberately not an
//! iterative WACC solver: the target capital structure is taken as given.

use serde::{Deserialize, Serialize};

/// Defaults applied when WACC components are not supplied.
///
/// Business assumptions, named so they can be tuned without touching the
/// blend formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaccDefaults {
    /// Pre-tax cost of debt assumed when none is given.
    pub cost_of_debt: f64,
    /// Marginal tax rate assumed for the debt tax shield when none is given.
    pub tax_rate: f64,
}

impl Default for WaccDefaults {
    fn default() -> Self {
        Self {
            cost_of_debt: 0.05,
            tax_rate: 0.25,
        }
    }
}

/// Inputs to the implied discount-rate computation.
///
/// The three CAPM components are mandatory; leverage inputs are optional
/// and fall back to [`WaccDefaults`] where the blend needs them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountInputs {
    /// Risk-free rate, typically the 10-year Treasury yield.
    pub risk_free_rate: f64,
    /// Equity risk premium.
    pub equity_risk_premium: f64,
    /// Levered equity beta.
    pub beta: f64,
    /// Target debt-to-equity ratio; zero or absent means all-equity.
    pub target_debt_to_equity: Option<f64>,
    /// Pre-tax cost of debt.
    pub cost_of_debt: Option<f64>,
    /// Marginal tax rate for the debt tax shield.
    pub tax_rate: Option<f64>,
}

/// CAPM cost of equity: `rf + beta * erp`.
#[must_use]
pub fn cost_of_equity(risk_free_rate: f64, beta: f64, equity_risk_premium: f64) -> f64 {
    beta.mul_add(equity_risk_premium, risk_free_rate)
}

/// The implied discount rate for a set of capital-structure assumptions.
///
/// With no target leverage this is the CAPM cost of equity. With a target
/// debt-to-equity ratio `d`, debt carries weight `d / (1 + d)` and the
/// after-tax cost of debt is blended in:
///
/// ```text
/// rate = we * ke + wd * kd * (1 - t)
/// ```
///
/// # Example
///
/// ```
/// use ronda_validate::discount::{DiscountInputs, WaccDefaults, implied_discount_rate};
///
/// let inputs = DiscountInputs {
///     risk_free_rate: 0.04,
///     equity_risk_premium: 0.05,
///     beta: 1.1,
///     target_debt_to_equity: None,
///     cost_of_debt: None,
///     tax_rate: None,
/// };
/// let rate = implied_discount_rate(&inputs, &WaccDefaults::default());
/// assert!((rate - 0.095).abs() < 1e-12);
/// ```
#[must_use]
pub fn implied_discount_rate(inputs: &DiscountInputs, defaults: &WaccDefaults) -> f64 {
    let ke = cost_of_equity(
        inputs.risk_free_rate,
        inputs.beta,
        inputs.equity_risk_premium,
    );

    let target_de = inputs.target_debt_to_equity.unwrap_or(0.0);
    if target_de == 0.0 {
        return ke;
    }

    let kd = inputs.cost_of_debt.unwrap_or(defaults.cost_of_debt);
    let tax = inputs.tax_rate.unwrap_or(defaults.tax_rate);

    let debt_weight = target_de / (1.0 + target_de);
    let equity_weight = 1.0 - debt_weight;

    equity_weight * ke + debt_weight * kd * (1.0 - tax)
}
