//! Standardized line-item fields.
//!
//! Upstream normalizers key statement rows by a fixed set of standardized
//! snake_case names. [`Field`] enumerates the names the analytics consume,
//! each tagged with the statement group it lives in, replacing any kind of
//! string-based attribute dispatch.

use serde::{Deserialize, Serialize};

use crate::statement::StatementKind;

/// A standardized line-item identifier.
///
/// Each variant knows its statement group and its snake_case key, so lookups
/// never carry free-form strings through the computation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    // Income statement
    /// Total revenue.
    Revenue,
    /// Cost of revenue (COGS).
    CostOfRevenue,
    /// Gross profit.
    GrossProfit,
    /// Operating income (EBIT).
    OperatingIncome,
    /// Interest expense.
    InterestExpense,
    /// Pre-tax income.
    PretaxIncome,
    /// Income tax expense.
    IncomeTax,
    /// Net income.
    NetIncome,

    // Balance sheet
    /// Cash and equivalents.
    Cash,
    /// Accounts receivable.
    AccountsReceivable,
    /// Inventory.
    Inventory,
    /// Total assets.
    TotalAssets,
    /// Accounts payable.
    AccountsPayable,
    /// Short-term debt.
    ShortTermDebt,
    /// Long-term debt.
    LongTermDebt,
    /// Total shareholders' equity.
    TotalEquity,

    // Cash-flow statement
    /// Depreciation and amortization.
    Depreciation,
    /// Capital expenditures.
    Capex,
}

impl Field {
    /// The standardized snake_case key used by statement documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::CostOfRevenue => "cost_of_revenue",
            Self::GrossProfit => "gross_profit",
            Self::OperatingIncome => "operating_income",
            Self::InterestExpense => "interest_expense",
            Self::PretaxIncome => "pretax_income",
            Self::IncomeTax => "income_tax",
            Self::NetIncome => "net_income",
            Self::Cash => "cash",
            Self::AccountsReceivable => "accounts_receivable",
            Self::Inventory => "inventory",
            Self::TotalAssets => "total_assets",
            Self::AccountsPayable => "accounts_payable",
            Self::ShortTermDebt => "short_term_debt",
            Self::LongTermDebt => "long_term_debt",
            Self::TotalEquity => "total_equity",
            Self::Depreciation => "depreciation",
            Self::Capex => "capex",
        }
    }

    /// The statement group this field belongs to.
    #[must_use]
    pub const fn statement(&self) -> StatementKind {
        match self {
            Self::Revenue
            | Self::CostOfRevenue
            | Self::GrossProfit
            | Self::OperatingIncome
            | Self::InterestExpense
            | Self::PretaxIncome
            | Self::IncomeTax
            | Self::NetIncome => StatementKind::Income,
            Self::Cash
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::TotalAssets
            | Self::AccountsPayable
            | Self::ShortTermDebt
            | Self::LongTermDebt
            | Self::TotalEquity => StatementKind::Balance,
            Self::Depreciation | Self::Capex => StatementKind::CashFlow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::Revenue.as_str(), "revenue");
        assert_eq!(Field::OperatingIncome.as_str(), "operating_income");
        assert_eq!(Field::AccountsReceivable.as_str(), "accounts_receivable");
        assert_eq!(Field::Capex.as_str(), "capex");
    }

    #[test]
    fn test_field_statement_groups() {
        assert_eq!(Field::Revenue.statement(), StatementKind::Income);
        assert_eq!(Field::TotalEquity.statement(), StatementKind::Balance);
        assert_eq!(Field::Depreciation.statement(), StatementKind::CashFlow);
    }
}
