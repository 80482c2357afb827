//! The DCF assumption document.
//!
//! Assumptions arrive as a nested mapping of category name to field name to
//! value, authored by an upstream configuration layer. The document is kept
//! dynamic (category and field names are data, and revenue growth fields
//! are year-indexed) with typed accessors on top; the validator does not
//! infer or default field names it does not recognize.

use derive_more::Display;
use ronda_statements::{Result, RondaError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A nested assumption document: category name → field name → value.
///
/// Recognized categories are `model_config`, `revenue`, `costs`,
/// `capital_structure`, `terminal_value`, `working_capital`, `capex`, and
/// the optional `scenarios`. Unrecognized categories and fields pass
/// through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssumptionSet(Map<String, Value>);

impl AssumptionSet {
    /// Wrap a JSON object as an assumption set.
    ///
    /// Fails with [`RondaError::InvalidAssumptions`] when the value is not
    /// an object; a structurally invalid document is fatal, not a
    /// validation issue.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(RondaError::InvalidAssumptions(format!(
                "expected a JSON object of categories, got {other}"
            ))),
        }
    }

    /// A category's field map, `None` when the category is absent or not
    /// an object.
    #[must_use]
    pub fn section(&self, category: &str) -> Option<&Map<String, Value>> {
        self.0.get(category).and_then(Value::as_object)
    }

    /// Whether a category is absent or empty.
    #[must_use]
    pub fn section_missing(&self, category: &str) -> bool {
        self.section(category).is_none_or(Map::is_empty)
    }

    /// A field's raw value, with JSON `null` treated as absent.
    #[must_use]
    pub fn field(&self, category: &str, field: &str) -> Option<&Value> {
        self.section(category)
            .and_then(|section| section.get(field))
            .filter(|value| !value.is_null())
    }

    /// A numeric field value.
    #[must_use]
    pub fn number(&self, category: &str, field: &str) -> Option<f64> {
        self.field(category, field).and_then(Value::as_f64)
    }

    /// A string field value.
    #[must_use]
    pub fn text(&self, category: &str, field: &str) -> Option<&str> {
        self.field(category, field).and_then(Value::as_str)
    }
}

/// DCF flavor: discount free cash flow to the firm or to equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DcfType {
    /// Unlevered DCF discounted at WACC.
    #[display("unlevered")]
    Unlevered,
    /// Levered DCF discounted at the cost of equity.
    #[display("levered")]
    Levered,
}

impl DcfType {
    /// Parse the document representation, `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unlevered" => Some(Self::Unlevered),
            "levered" => Some(Self::Levered),
            _ => None,
        }
    }
}

/// Model complexity selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Complexity {
    /// Explicit window plus terminal value.
    #[display("2-stage")]
    TwoStage,
    /// Explicit window, fade stage, terminal value.
    #[display("3-stage")]
    ThreeStage,
    /// Leveraged buyout model.
    #[display("lbo")]
    Lbo,
}

impl Complexity {
    /// Parse the document representation, `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "2-stage" => Some(Self::TwoStage),
            "3-stage" => Some(Self::ThreeStage),
            "lbo" => Some(Self::Lbo),
            _ => None,
        }
    }
}

/// How terminal value is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TerminalMethod {
    /// Gordon Growth perpetuity.
    #[display("perpetuity")]
    Perpetuity,
    /// Exit EBITDA multiple.
    #[display("exit_multiple")]
    ExitMultiple,
    /// Both, typically cross-checked against each other.
    #[display("both")]
    Both,
}

impl TerminalMethod {
    /// Parse the document representation, `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "perpetuity" => Some(Self::Perpetuity),
            "exit_multiple" => Some(Self::ExitMultiple),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Whether the method requires a perpetuity growth rate.
    #[must_use]
    pub const fn includes_perpetuity(&self) -> bool {
        matches!(self, Self::Perpetuity | Self::Both)
    }

    /// Whether the method requires an exit multiple.
    #[must_use]
    pub const fn includes_exit_multiple(&self) -> bool {
        matches!(self, Self::ExitMultiple | Self::Both)
    }
}
