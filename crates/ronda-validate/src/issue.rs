//! Validation issues and the accumulated result.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed; the model will not work.
    #[display("error")]
    Error,
    /// Should be reviewed; may affect accuracy.
    #[display("warning")]
    Warning,
    /// FYI; could be improved.
    #[display("info")]
    Info,
}

impl Severity {
    /// Whether an issue of this severity makes the overall result invalid.
    ///
    /// The validity rule lives on the tag itself rather than being
    /// scattered through the checks: only [`Severity::Error`] invalidates.
    #[must_use]
    pub const fn invalidates(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// A single validation finding.
///
/// Created once and appended to the result's issue list; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Assumption category, e.g. `capital_structure`.
    pub category: String,
    /// Field within the category, or `all` for whole-section findings.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Finding severity.
    pub severity: Severity,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// The accumulated outcome of a validation run.
///
/// Issues appear in validation-pass order, which is stable across runs.
/// `is_valid` latches false on the first error and never reverts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the assumption set passed (no error-severity issues).
    pub is_valid: bool,
    /// All findings, in check order.
    pub issues: Vec<ValidationIssue>,
    /// `"category.field"` for every error-severity issue.
    ///
    /// Every error lands here, including enum violations and the
    /// growth-vs-discount-rate error, not only genuinely missing fields.
    /// Downstream consumers depend on that shape.
    pub missing_required: Vec<String>,
    /// Formatted `"category.field: message"` strings for warnings.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A fresh, passing result with no issues.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_valid: true,
            ..Self::default()
        }
    }

    /// Record a finding and apply its severity effect.
    pub fn push(&mut self, issue: ValidationIssue) {
        if issue.severity.invalidates() {
            self.is_valid = false;
        }
        match issue.severity {
            Severity::Error => {
                self.missing_required
                    .push(format!("{}.{}", issue.category, issue.field));
            }
            Severity::Warning => {
                self.warnings.push(format!(
                    "{}.{}: {}",
                    issue.category, issue.field, issue.message
                ));
            }
            Severity::Info => {}
        }
        self.issues.push(issue);
    }

    /// Findings of a given severity, in check order.
    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ValidationIssue {
        ValidationIssue {
            category: "capital_structure".to_string(),
            field: "beta".to_string(),
            message: "test".to_string(),
            severity,
            suggestion: None,
        }
    }

    #[test]
    fn test_severity_invalidates() {
        assert!(Severity::Error.invalidates());
        assert!(!Severity::Warning.invalidates());
        assert!(!Severity::Info.invalidates());
    }

    #[test]
    fn test_error_latches_invalid() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid);
        result.push(issue(Severity::Error));
        assert!(!result.is_valid);
        result.push(issue(Severity::Info));
        assert!(!result.is_valid);
        assert_eq!(result.missing_required, vec!["capital_structure.beta"]);
    }

    #[test]
    fn test_warning_formats_but_keeps_valid() {
        let mut result = ValidationResult::new();
        result.push(issue(Severity::Warning));
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["capital_structure.beta: test"]);
        assert!(result.missing_required.is_empty());
    }

    #[test]
    fn test_info_affects_nothing() {
        let mut result = ValidationResult::new();
        result.push(issue(Severity::Info));
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert!(result.missing_required.is_empty());
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_validity_follows_invalidates() {
        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            let mut result = ValidationResult::new();
            result.push(issue(severity));
            assert_eq!(result.is_valid, !severity.invalidates(), "{severity}");
        }
    }

    #[test]
    fn test_issue_order_is_stable() {
        let mut result = ValidationResult::new();
        result.push(issue(Severity::Warning));
        result.push(issue(Severity::Error));
        result.push(issue(Severity::Info));
        let severities: Vec<Severity> = result.issues.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Warning, Severity::Error, Severity::Info]
        );
    }
}
