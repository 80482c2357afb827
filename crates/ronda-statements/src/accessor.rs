//! Read-only statement lookup.

use crate::field::Field;
use crate::statement::{StatementSet, Year};

/// Read-only lookup of line-item values across a [`StatementSet`].
///
/// The accessor tolerates missing items and missing years: every lookup
/// returns `Option<f64>` and absence is never an error. All downstream
/// formulas go through this single lookup point.
#[derive(Debug, Clone, Copy)]
pub struct StatementAccessor<'a> {
    statements: &'a StatementSet,
}

impl<'a> StatementAccessor<'a> {
    /// Create an accessor over a statement set.
    #[must_use]
    pub const fn new(statements: &'a StatementSet) -> Self {
        Self { statements }
    }

    /// The underlying statement set.
    #[must_use]
    pub const fn statements(&self) -> &'a StatementSet {
        self.statements
    }

    /// Available fiscal years, newest first.
    #[must_use]
    pub fn years(&self) -> &'a [Year] {
        &self.statements.years
    }

    /// The value of a standardized field for a year, `None` when the item
    /// or the year is absent.
    #[must_use]
    pub fn value(&self, field: Field, year: Year) -> Option<f64> {
        self.statements
            .statement(field.statement())
            .get(field.as_str())
            .and_then(|item| item.value(year))
    }

    /// Like [`value`](Self::value), but treats a missing value as zero.
    ///
    /// Used for balance-sheet components that legitimately default to zero
    /// in derived sums (debt, cash in invested capital).
    #[must_use]
    pub fn value_or_zero(&self, field: Field, year: Year) -> f64 {
        self.value(field, year).unwrap_or(0.0)
    }
}
