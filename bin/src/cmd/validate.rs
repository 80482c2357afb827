//! `ronda validate` subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ronda::{AssumptionSet, AssumptionValidator, ValidationSummary};
use serde_json::Value;

/// Validate an assumptions document, print the findings, and write the
/// summary. Returns whether the set passed.
pub(crate) fn run(input: &Path, output: Option<&Path>) -> Result<bool> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let doc: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    let assumptions = AssumptionSet::from_value(doc)?;

    let result = AssumptionValidator::new(&assumptions).validate();
    let summary = ValidationSummary::from_result(&result);

    println!(
        "\nValidation {}",
        if summary.is_valid { "PASSED" } else { "FAILED" }
    );
    println!("  Errors: {}", summary.error_count);
    println!("  Warnings: {}", summary.warning_count);
    println!("  Info: {}", summary.info_count);

    if !summary.errors.is_empty() {
        println!("\nErrors (must fix):");
        for entry in &summary.errors {
            println!("  - {}: {}", entry.field, entry.message);
        }
    }

    if !summary.warnings.is_empty() {
        println!("\nWarnings (review recommended):");
        for entry in &summary.warnings {
            println!("  - {}: {}", entry.field, entry.message);
        }
    }

    let output_path = output.map_or_else(|| default_output(input), Path::to_path_buf);
    fs::write(&output_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    println!("\nDetailed results saved to: {}", output_path.display());

    Ok(summary.is_valid)
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("assumptions");
    input.with_file_name(format!("{stem}_validation.json"))
}
