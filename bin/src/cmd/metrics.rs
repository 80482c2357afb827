//! `ronda metrics` subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ronda::{MetricAverages, MetricsEngine, MetricsReport, StatementSet};
use serde::Serialize;
use serde_json::{Map, Value};

/// Output document: metadata passed through, rounded report, averages.
#[derive(Serialize)]
struct MetricsOutput {
    company: Map<String, Value>,
    metrics: MetricsReport,
    averages: MetricAverages,
}

pub(crate) fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let (company, mut statements) = parse_document(&raw)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    // The serialized year list may be stale or absent.
    statements.recompute_years();

    let panel = MetricsEngine::new(&statements).compute();
    let report = MetricsReport::from_panel(&panel);
    let averages = MetricAverages::from_panel(&panel);

    let ticker = company
        .get("ticker")
        .and_then(Value::as_str)
        .unwrap_or("company")
        .to_string();
    let output_path = output.map_or_else(
        || PathBuf::from(format!("{ticker}_metrics.json")),
        Path::to_path_buf,
    );

    let document = MetricsOutput {
        company,
        metrics: report,
        averages,
    };
    fs::write(&output_path, serde_json::to_string_pretty(&document)?)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    println!("Metrics saved to: {}", output_path.display());

    print_averages(&document.averages)?;
    Ok(())
}

/// Split an input document into company metadata and the statement set.
///
/// The statements are deserialized straight from `serde_json::Value` so the
/// string year keys of each line item coerce into integer years. Flattening
/// the statement set into a wrapper struct would buffer those keys through
/// serde's internal content model, which leaves them as strings and rejects
/// the document.
fn parse_document(raw: &str) -> Result<(Map<String, Value>, StatementSet)> {
    let mut doc: Value = serde_json::from_str(raw)?;
    let company = match doc.get_mut("company").map(Value::take) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let statements: StatementSet = serde_json::from_value(doc)?;
    Ok((company, statements))
}

/// Print the period averages with domain-appropriate formatting.
fn print_averages(averages: &MetricAverages) -> Result<()> {
    println!("\nHistorical Averages:");

    let doc = serde_json::to_value(averages)?;
    let Value::Object(map) = doc else {
        return Ok(());
    };
    for (key, value) in &map {
        let Some(value) = value.as_f64() else {
            continue;
        };
        let label = title_case(key.trim_start_matches("avg_"));
        if key.contains("margin") || key.contains("rate") || key.contains("growth") {
            println!("  {label}: {:.1}%", value * 100.0);
        } else if matches!(key.as_str(), "avg_dso" | "avg_dio" | "avg_dpo") {
            println!("  {label}: {value:.0} days");
        } else {
            println!("  {label}: {value:.2}");
        }
    }
    Ok(())
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("revenue_growth"), "Revenue Growth");
        assert_eq!(title_case("roic"), "Roic");
    }

    #[test]
    fn test_parse_document_tolerates_missing_company() {
        let (company, statements) = parse_document(
            r#"{"income_statement": {}, "balance_sheet": {}, "cash_flow_statement": {}}"#,
        )
        .unwrap();
        assert!(company.is_empty());
        assert!(statements.is_empty());
    }

    #[test]
    fn test_parse_document_with_populated_values() {
        let raw = r#"{
            "company": {"ticker": "ACME", "name": "Acme Corp"},
            "income_statement": {
                "revenue": {
                    "name": "Revenue",
                    "values": {"2022": 100.0, "2023": 120.0}
                }
            },
            "balance_sheet": {},
            "cash_flow_statement": {}
        }"#;
        let (company, mut statements) = parse_document(raw).unwrap();
        assert_eq!(company.get("ticker").and_then(Value::as_str), Some("ACME"));

        statements.recompute_years();
        assert_eq!(statements.years, vec![2023, 2022]);
        let revenue = &statements.income_statement["revenue"];
        assert_eq!(revenue.value(2023), Some(120.0));
        assert_eq!(revenue.value(2022), Some(100.0));
    }

    #[test]
    fn test_parsed_document_feeds_engine() {
        let raw = r#"{
            "company": {"ticker": "ACME"},
            "income_statement": {
                "revenue": {"name": "Revenue", "values": {"2022": 100.0, "2023": 120.0}}
            }
        }"#;
        let (_, mut statements) = parse_document(raw).unwrap();
        statements.recompute_years();
        let panel = MetricsEngine::new(&statements).compute();
        let growth = panel.revenue_growth.get(&2023).copied().flatten();
        assert_eq!(growth, Some(0.2));
    }
}
