//! Standardized financial statement structures.
//!
//! This module defines the core data types for representing multi-year
//! financial statement data: a [`LineItem`] holds one standardized row with
//! its year-keyed values, and a [`StatementSet`] groups the income
//! statement, balance sheet, and cash-flow statement for one company.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A fiscal year identifier.
pub type Year = i32;

/// The three standardized statement groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Income statement (revenue through net income).
    Income,
    /// Balance sheet (assets, liabilities, equity).
    Balance,
    /// Cash-flow statement (operating, investing, financing).
    CashFlow,
}

/// One standardized financial-statement row.
///
/// A `LineItem` is produced by an upstream normalizer (EDGAR parser, vendor
/// adapter) and is immutable once built. Years absent from the source simply
/// have no entry; an explicit `None` entry is equivalent to a missing year.
/// Neither is ever substituted with zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Human-readable name, e.g. "Operating Income (EBIT)".
    pub name: String,
    /// Reporting unit, e.g. "USD".
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Reported values keyed by fiscal year.
    #[serde(default)]
    pub values: BTreeMap<Year, Option<f64>>,
}

fn default_unit() -> String {
    "USD".to_string()
}

impl LineItem {
    /// Create a line item with the given name and values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: BTreeMap<Year, Option<f64>>) -> Self {
        Self {
            name: name.into(),
            unit: default_unit(),
            values,
        }
    }

    /// The reported value for a year, `None` when the year is absent or
    /// carries no value.
    #[must_use]
    pub fn value(&self, year: Year) -> Option<f64> {
        self.values.get(&year).copied().flatten()
    }

    /// Years for which this item carries a defined value.
    pub fn defined_years(&self) -> impl Iterator<Item = Year> + '_ {
        self.values
            .iter()
            .filter_map(|(year, value)| value.map(|_| *year))
    }
}

/// A standardized multi-year statement set for one company.
///
/// Holds the three statement groups keyed by standardized field name (see
/// [`Field`](crate::Field)), plus the list of available fiscal years sorted
/// newest-first.
///
/// # Invariant
///
/// `years` is the union of years with at least one defined value across all
/// three statements, sorted descending. [`StatementSet::new`] establishes
/// the invariant and [`StatementSet::recompute_years`] restores it after
/// deserialization, since a serialized document may carry a stale list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSet {
    /// Available fiscal years, newest first.
    #[serde(default)]
    pub years: Vec<Year>,
    /// Income statement items keyed by standardized field name.
    #[serde(default)]
    pub income_statement: BTreeMap<String, LineItem>,
    /// Balance sheet items keyed by standardized field name.
    #[serde(default)]
    pub balance_sheet: BTreeMap<String, LineItem>,
    /// Cash-flow statement items keyed by standardized field name.
    #[serde(default)]
    pub cash_flow_statement: BTreeMap<String, LineItem>,
}

impl StatementSet {
    /// Build a statement set from the three statement groups, computing the
    /// year list from the union of defined values.
    #[must_use]
    pub fn new(
        income_statement: BTreeMap<String, LineItem>,
        balance_sheet: BTreeMap<String, LineItem>,
        cash_flow_statement: BTreeMap<String, LineItem>,
    ) -> Self {
        let mut set = Self {
            years: Vec::new(),
            income_statement,
            balance_sheet,
            cash_flow_statement,
        };
        set.recompute_years();
        set
    }

    /// The statement group for a [`StatementKind`].
    #[must_use]
    pub const fn statement(&self, kind: StatementKind) -> &BTreeMap<String, LineItem> {
        match kind {
            StatementKind::Income => &self.income_statement,
            StatementKind::Balance => &self.balance_sheet,
            StatementKind::CashFlow => &self.cash_flow_statement,
        }
    }

    /// Recompute the `years` list from the line items.
    ///
    /// The result is the union of years holding at least one defined value
    /// across all three statements, sorted newest-first.
    pub fn recompute_years(&mut self) {
        let mut years: BTreeSet<Year> = BTreeSet::new();
        for statement in [
            &self.income_statement,
            &self.balance_sheet,
            &self.cash_flow_statement,
        ] {
            for item in statement.values() {
                years.extend(item.defined_years());
            }
        }
        self.years = years.into_iter().rev().collect();
    }

    /// Whether the set contains no line items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.income_statement.is_empty()
            && self.balance_sheet.is_empty()
            && self.cash_flow_statement.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, values: &[(Year, Option<f64>)]) -> LineItem {
        LineItem::new(name, values.iter().copied().collect())
    }

    #[test]
    fn test_line_item_value() {
        let revenue = item("Revenue", &[(2023, Some(100.0)), (2024, None)]);
        assert_eq!(revenue.value(2023), Some(100.0));
        assert_eq!(revenue.value(2024), None);
        assert_eq!(revenue.value(2022), None);
    }

    #[test]
    fn test_years_union_newest_first() {
        let mut income = BTreeMap::new();
        income.insert(
            "revenue".to_string(),
            item("Revenue", &[(2022, Some(90.0)), (2023, Some(100.0))]),
        );
        let mut balance = BTreeMap::new();
        balance.insert(
            "total_assets".to_string(),
            item("Total Assets", &[(2024, Some(500.0))]),
        );
        let set = StatementSet::new(income, balance, BTreeMap::new());
        assert_eq!(set.years, vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_years_ignore_undefined_entries() {
        let mut income = BTreeMap::new();
        income.insert(
            "revenue".to_string(),
            item("Revenue", &[(2023, Some(100.0)), (2024, None)]),
        );
        let set = StatementSet::new(income, BTreeMap::new(), BTreeMap::new());
        assert_eq!(set.years, vec![2023]);
    }

    #[test]
    fn test_recompute_years_after_deserialize() {
        let doc = serde_json::json!({
            "years": [1999],
            "income_statement": {
                "revenue": {
                    "name": "Revenue",
                    "values": { "2023": 100.0, "2024": 120.0 }
                }
            }
        });
        let mut set: StatementSet = serde_json::from_value(doc).unwrap();
        assert_eq!(set.years, vec![1999]);
        set.recompute_years();
        assert_eq!(set.years, vec![2024, 2023]);
    }

    #[test]
    fn test_empty_set() {
        let set = StatementSet::default();
        assert!(set.is_empty());
        assert!(set.years.is_empty());
    }
}
