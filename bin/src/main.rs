//! Ronda CLI binary.
//!
//! Provides command-line interface for the Ronda valuation toolkit.

mod cmd;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Historical financial metrics and DCF assumption validation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute historical metrics from parsed financial statements
    Metrics {
        /// Parsed financial statements (JSON)
        input: PathBuf,

        /// Output file (defaults to <ticker>_metrics.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate DCF model assumptions
    Validate {
        /// Assumptions document (JSON)
        input: PathBuf,

        /// Output file (defaults to <input>_validation.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics { input, output } => {
            cmd::metrics::run(&input, output.as_deref())?;
        }
        Commands::Validate { input, output } => {
            let is_valid = cmd::validate::run(&input, output.as_deref())?;
            if !is_valid {
                process::exit(1);
            }
        }
    }

    Ok(())
}
