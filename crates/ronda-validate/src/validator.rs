//! The assumption validator.
//!
//! Runs a fixed, ordered sequence of checks over an [`AssumptionSet`] and
//! accumulates a [`ValidationResult`]. The order is observable: later
//! checks read values earlier checks gate on (the DCF type gates the
//! capital-structure requirements, the terminal method selects which
//! terminal-value fields must exist), so it never changes.

use ronda_metrics::HistoricalMetrics;
use serde::{Deserialize, Serialize};

use crate::assumptions::{AssumptionSet, Complexity, DcfType, TerminalMethod};
use crate::discount::{DiscountInputs, WaccDefaults, implied_discount_rate};
use crate::issue::{Severity, ValidationIssue, ValidationResult};
use crate::ranges::{RangeBound, ReasonableRanges};

/// Configuration for a validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Plausibility bounds for assumption values.
    pub ranges: ReasonableRanges,
    /// Defaults for unsupplied WACC components.
    pub wacc_defaults: WaccDefaults,
    /// Terminal growth above this level draws a GDP-growth warning.
    pub gdp_growth_ceiling: f64,
}

impl ValidatorConfig {
    /// The default configuration with a 3% GDP-growth ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ranges: ReasonableRanges::default(),
            wacc_defaults: WaccDefaults::default(),
            gdp_growth_ceiling: 0.03,
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates DCF model assumptions for completeness and plausibility.
///
/// Missing required fields and invalid enumerations are errors; values
/// outside the reasonable ranges are warnings; a perpetuity growth rate at
/// or above the implied discount rate is the sole cross-field error. The
/// run always completes and reports every finding.
///
/// # Example
///
/// ```ignore
/// use ronda_validate::AssumptionValidator;
///
/// let result = AssumptionValidator::new(&assumptions).validate();
/// if !result.is_valid {
///     eprintln!("{} required inputs missing", result.missing_required.len());
/// }
/// ```
#[derive(Debug)]
pub struct AssumptionValidator<'a> {
    assumptions: &'a AssumptionSet,
    #[allow(dead_code)] // Reserved for range checks against historical metrics.
    historical: Option<&'a HistoricalMetrics>,
    config: ValidatorConfig,
    result: ValidationResult,
}

impl<'a> AssumptionValidator<'a> {
    /// Create a validator with the default configuration.
    #[must_use]
    pub fn new(assumptions: &'a AssumptionSet) -> Self {
        Self::with_config(assumptions, ValidatorConfig::new())
    }

    /// Create a validator with an explicit configuration.
    #[must_use]
    pub fn with_config(assumptions: &'a AssumptionSet, config: ValidatorConfig) -> Self {
        Self {
            assumptions,
            historical: None,
            config,
            result: ValidationResult::new(),
        }
    }

    /// Attach the historical metrics panel.
    ///
    /// No current check consumes it; the parameter is part of the contract
    /// so future plausibility checks can compare assumptions against the
    /// company's own history.
    #[must_use]
    pub const fn with_historical(mut self, historical: &'a HistoricalMetrics) -> Self {
        self.historical = Some(historical);
        self
    }

    /// Run all checks in order and return the accumulated result.
    #[must_use]
    pub fn validate(mut self) -> ValidationResult {
        self.validate_model_config();
        self.validate_revenue();
        self.validate_costs();
        self.validate_capital_structure();
        self.validate_terminal_value();
        self.validate_working_capital();
        self.validate_capex();
        self.validate_scenarios();
        self.result
    }

    fn add_issue(
        &mut self,
        category: &str,
        field: &str,
        message: impl Into<String>,
        severity: Severity,
        suggestion: Option<String>,
    ) {
        self.result.push(ValidationIssue {
            category: category.to_string(),
            field: field.to_string(),
            message: message.into(),
            severity,
            suggestion,
        });
    }

    fn missing_required(&mut self, category: &str, field: &str) {
        self.add_issue(
            category,
            field,
            format!("Required assumption '{field}' is missing"),
            Severity::Error,
            Some(format!("Please provide a value for {field}")),
        );
    }

    /// Warn when a value falls strictly outside its plausibility bound.
    ///
    /// Values are rendered as percentages even for plain ratios like the
    /// exit multiple; the message format is presentation only and
    /// independent of the comparison.
    fn check_range(&mut self, category: &str, field: &str, value: f64, bound: RangeBound) {
        if bound.is_outside(value) {
            self.add_issue(
                category,
                field,
                format!(
                    "Value {:.2}% is outside typical range ({:.0}% to {:.0}%)",
                    value * 100.0,
                    bound.min * 100.0,
                    bound.max * 100.0
                ),
                Severity::Warning,
                Some("Verify this assumption is intentional".to_string()),
            );
        }
    }

    fn validate_model_config(&mut self) {
        if self
            .assumptions
            .text("model_config", "dcf_type")
            .and_then(DcfType::parse)
            .is_none()
        {
            self.add_issue(
                "model_config",
                "dcf_type",
                "DCF type must be 'unlevered' (WACC) or 'levered' (equity)",
                Severity::Error,
                None,
            );
        }

        if self
            .assumptions
            .text("model_config", "complexity")
            .and_then(Complexity::parse)
            .is_none()
        {
            self.add_issue(
                "model_config",
                "complexity",
                "Complexity must be '2-stage', '3-stage', or 'lbo'",
                Severity::Error,
                None,
            );
        }

        match self.assumptions.number("model_config", "projection_years") {
            None => self.add_issue(
                "model_config",
                "projection_years",
                "Projection period is required",
                Severity::Error,
                None,
            ),
            Some(years) if !(3.0..=15.0).contains(&years) => self.add_issue(
                "model_config",
                "projection_years",
                format!("Projection period of {years:.0} years is unusual (typical: 5-10)"),
                Severity::Warning,
                None,
            ),
            Some(_) => {}
        }

        if self
            .assumptions
            .text("model_config", "terminal_method")
            .and_then(TerminalMethod::parse)
            .is_none()
        {
            self.add_issue(
                "model_config",
                "terminal_method",
                "Terminal method must be 'perpetuity', 'exit_multiple', or 'both'",
                Severity::Error,
                None,
            );
        }
    }

    fn validate_revenue(&mut self) {
        if self.assumptions.section_missing("revenue") {
            self.add_issue(
                "revenue",
                "all",
                "Revenue assumptions section is missing",
                Severity::Error,
                None,
            );
            return;
        }

        // Years 1-3 are required regardless of the projection length;
        // later years (window capped at 5) are range-checked when present.
        let projection_years = self
            .assumptions
            .number("model_config", "projection_years")
            .map_or(5, |years| years as i64);
        let horizon = projection_years.clamp(3, 5);

        for year in 1..=horizon {
            let key = format!("revenue_growth_y{year}");
            match self.assumptions.number("revenue", &key) {
                Some(value) => {
                    let bound = self.config.ranges.revenue_growth;
                    self.check_range("revenue", &key, value, bound);
                }
                None if year <= 3 => self.add_issue(
                    "revenue",
                    &key,
                    format!("Year {year} revenue growth rate is required"),
                    Severity::Error,
                    None,
                ),
                None => {}
            }
        }

        match self.assumptions.number("revenue", "terminal_growth_rate") {
            None => self.add_issue(
                "revenue",
                "terminal_growth_rate",
                "Terminal growth rate is required",
                Severity::Error,
                None,
            ),
            Some(growth) => {
                let bound = self.config.ranges.terminal_growth;
                self.check_range("revenue", "terminal_growth_rate", growth, bound);
                if growth > self.config.gdp_growth_ceiling {
                    self.add_issue(
                        "revenue",
                        "terminal_growth_rate",
                        format!(
                            "Terminal growth of {:.1}% exceeds long-term GDP growth",
                            growth * 100.0
                        ),
                        Severity::Warning,
                        Some("Consider using 2-3% for mature companies".to_string()),
                    );
                }
            }
        }
    }

    fn validate_costs(&mut self) {
        if self.assumptions.section_missing("costs") {
            self.add_issue(
                "costs",
                "all",
                "Cost assumptions section is missing",
                Severity::Error,
                None,
            );
            return;
        }

        match self.assumptions.number("costs", "gross_margin_target") {
            Some(value) => {
                let bound = self.config.ranges.gross_margin;
                self.check_range("costs", "gross_margin_target", value, bound);
            }
            None => self.missing_required("costs", "gross_margin_target"),
        }

        if self.assumptions.number("costs", "opex_pct_revenue").is_none() {
            self.add_issue(
                "costs",
                "opex_pct_revenue",
                "Operating expenses as % of revenue is required",
                Severity::Error,
                None,
            );
        }
    }

    fn validate_capital_structure(&mut self) {
        if self.assumptions.section_missing("capital_structure") {
            self.add_issue(
                "capital_structure",
                "all",
                "Capital structure assumptions section is missing",
                Severity::Error,
                None,
            );
            return;
        }

        match self.assumptions.number("capital_structure", "risk_free_rate") {
            Some(value) => {
                let bound = self.config.ranges.risk_free_rate;
                self.check_range("capital_structure", "risk_free_rate", value, bound);
            }
            None => self.add_issue(
                "capital_structure",
                "risk_free_rate",
                "Risk-free rate is required (typically 10-year Treasury yield)",
                Severity::Error,
                None,
            ),
        }

        match self
            .assumptions
            .number("capital_structure", "equity_risk_premium")
        {
            Some(value) => {
                let bound = self.config.ranges.equity_risk_premium;
                self.check_range("capital_structure", "equity_risk_premium", value, bound);
            }
            None => self.add_issue(
                "capital_structure",
                "equity_risk_premium",
                "Equity risk premium is required (typically 5-6%)",
                Severity::Error,
                None,
            ),
        }

        match self.assumptions.number("capital_structure", "beta") {
            Some(value) => {
                let bound = self.config.ranges.beta;
                self.check_range("capital_structure", "beta", value, bound);
            }
            None => self.add_issue(
                "capital_structure",
                "beta",
                "Beta is required for cost of equity calculation",
                Severity::Error,
                None,
            ),
        }

        // WACC components only matter for an unlevered DCF.
        let dcf_type = self
            .assumptions
            .text("model_config", "dcf_type")
            .and_then(DcfType::parse);
        if dcf_type == Some(DcfType::Unlevered) {
            let target_de = self
                .assumptions
                .number("capital_structure", "target_debt_to_equity");
            if target_de.is_none() {
                self.add_issue(
                    "capital_structure",
                    "target_debt_to_equity",
                    "Target D/E ratio is required for WACC calculation",
                    Severity::Error,
                    None,
                );
            }

            let cost_of_debt = self.assumptions.number("capital_structure", "cost_of_debt");
            match cost_of_debt {
                None if target_de.is_some_and(|de| de > 0.0) => self.add_issue(
                    "capital_structure",
                    "cost_of_debt",
                    "Cost of debt is required when using debt financing",
                    Severity::Error,
                    None,
                ),
                Some(value) => {
                    let bound = self.config.ranges.cost_of_debt;
                    self.check_range("capital_structure", "cost_of_debt", value, bound);
                }
                None => {}
            }
        }
    }

    fn validate_terminal_value(&mut self) {
        let Some(method) = self
            .assumptions
            .text("model_config", "terminal_method")
            .and_then(TerminalMethod::parse)
        else {
            // An invalid method was already reported by the config check;
            // there is nothing to gate the terminal-value fields on.
            return;
        };

        if method.includes_perpetuity() {
            match self
                .assumptions
                .number("terminal_value", "perpetuity_growth_rate")
            {
                None => self.add_issue(
                    "terminal_value",
                    "perpetuity_growth_rate",
                    "Perpetuity growth rate is required for Gordon Growth method",
                    Severity::Error,
                    None,
                ),
                Some(growth) => {
                    let bound = self.config.ranges.terminal_growth;
                    self.check_range("terminal_value", "perpetuity_growth_rate", growth, bound);

                    // Growth at or above the discount rate makes the Gordon
                    // Growth denominator non-positive: a divergent terminal
                    // value, not a judgment call.
                    if let Some(rate) = self.implied_discount_rate() {
                        if growth >= rate {
                            self.add_issue(
                                "terminal_value",
                                "perpetuity_growth_rate",
                                format!(
                                    "Growth rate ({:.1}%) must be less than WACC ({:.1}%)",
                                    growth * 100.0,
                                    rate * 100.0
                                ),
                                Severity::Error,
                                None,
                            );
                        }
                    }
                }
            }
        }

        if method.includes_exit_multiple() {
            match self.assumptions.number("terminal_value", "exit_multiple") {
                None => self.add_issue(
                    "terminal_value",
                    "exit_multiple",
                    "Exit EBITDA multiple is required",
                    Severity::Error,
                    None,
                ),
                Some(multiple) => {
                    let bound = self.config.ranges.exit_multiple;
                    self.check_range("terminal_value", "exit_multiple", multiple, bound);
                }
            }
        }
    }

    /// The implied discount rate from the capital-structure assumptions,
    /// `None` (check skipped, not an error) when any CAPM input is absent.
    fn implied_discount_rate(&self) -> Option<f64> {
        let risk_free_rate = self.assumptions.number("capital_structure", "risk_free_rate")?;
        let equity_risk_premium = self
            .assumptions
            .number("capital_structure", "equity_risk_premium")?;
        let beta = self.assumptions.number("capital_structure", "beta")?;

        let inputs = DiscountInputs {
            risk_free_rate,
            equity_risk_premium,
            beta,
            target_debt_to_equity: self
                .assumptions
                .number("capital_structure", "target_debt_to_equity"),
            cost_of_debt: self.assumptions.number("capital_structure", "cost_of_debt"),
            tax_rate: self.assumptions.number("capital_structure", "tax_rate"),
        };
        Some(implied_discount_rate(&inputs, &self.config.wacc_defaults))
    }

    fn validate_working_capital(&mut self) {
        if self.assumptions.section_missing("working_capital") {
            self.add_issue(
                "working_capital",
                "all",
                "Working capital assumptions are missing - will use historical averages",
                Severity::Warning,
                None,
            );
            return;
        }

        for (field, bound) in [
            ("dso_days", self.config.ranges.dso_days),
            ("dio_days", self.config.ranges.dio_days),
            ("dpo_days", self.config.ranges.dpo_days),
        ] {
            if let Some(value) = self.assumptions.number("working_capital", field) {
                self.check_range("working_capital", field, value, bound);
            }
        }
    }

    fn validate_capex(&mut self) {
        if self.assumptions.section_missing("capex") {
            self.add_issue(
                "capex",
                "all",
                "CapEx assumptions are missing - will use historical averages",
                Severity::Warning,
                None,
            );
            return;
        }

        if let Some(value) = self.assumptions.number("capex", "capex_pct_revenue") {
            let bound = self.config.ranges.capex_pct_revenue;
            self.check_range("capex", "capex_pct_revenue", value, bound);
        }
    }

    fn validate_scenarios(&mut self) {
        // Fully optional: an absent section raises nothing at all.
        if self.assumptions.section_missing("scenarios") {
            return;
        }

        for name in ["base", "bull", "bear"] {
            let present = self
                .assumptions
                .section("scenarios")
                .is_some_and(|section| section.contains_key(name));
            if !present {
                self.add_issue(
                    "scenarios",
                    name,
                    format!("'{name}' scenario is missing"),
                    Severity::Info,
                    None,
                );
            }
        }
    }
}
