//! Serializable digest of a validation run.

use serde::Serialize;

use crate::issue::{Severity, ValidationResult};

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    /// Field name within its category, `"all"` for whole-section findings.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// The report document written for a validation run.
///
/// Flattens the issue list into counts plus error and warning entries, the
/// shape consumers read without walking individual issues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationSummary {
    /// Whether the assumption set passed with no errors.
    pub is_valid: bool,
    /// Number of error findings.
    pub error_count: usize,
    /// Number of warning findings.
    pub warning_count: usize,
    /// Number of informational findings.
    pub info_count: usize,
    /// Error findings in check order.
    pub errors: Vec<SummaryEntry>,
    /// Warning findings in check order.
    pub warnings: Vec<SummaryEntry>,
    /// Qualified paths of fields whose absence or invalidity caused errors.
    pub missing_required: Vec<String>,
}

impl ValidationSummary {
    /// Build a summary from a completed validation run.
    #[must_use]
    pub fn from_result(result: &ValidationResult) -> Self {
        let entries = |severity| {
            result
                .issues_with(severity)
                .map(|issue| SummaryEntry {
                    field: issue.field.clone(),
                    message: issue.message.clone(),
                })
                .collect::<Vec<_>>()
        };
        let errors = entries(Severity::Error);
        let warnings = entries(Severity::Warning);
        let info_count = result.issues_with(Severity::Info).count();

        Self {
            is_valid: result.is_valid,
            error_count: errors.len(),
            warning_count: warnings.len(),
            info_count,
            errors,
            warnings,
            missing_required: result.missing_required.clone(),
        }
    }
}
