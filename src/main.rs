//! topsis-rank CLI - rank alternatives in a decision table with TOPSIS.
//!
//! ```text
//! topsis-rank data.csv "1,1,1,2" "+,+,-,+" result.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use topsis_rank::adapters::cli::{parse_impacts, parse_weights};
use topsis_rank::adapters::file::{sink_for_path, source_for_path};
use topsis_rank::application::{RankAlternativesCommand, RankAlternativesHandler};
use topsis_rank::config::{AppConfig, LoggingConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "topsis-rank")]
#[command(version)]
#[command(about = "Rank alternatives against weighted criteria with TOPSIS")]
struct Cli {
    /// Decision table: CSV, an Excel/OpenDocument workbook, or a JSON/YAML decision document
    input: PathBuf,

    /// Comma-separated criterion weights, e.g. "1,1,2" ("-" to use the input document's)
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, "+" or "-" per criterion ("-" to use the input document's)
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Destination of the ranked table (.csv or .json)
    output: PathBuf,

    /// Decimal places for the closeness column
    #[arg(long)]
    precision: Option<usize>,

    /// CSV cell delimiter
    #[arg(long)]
    delimiter: Option<char>,

    /// Worksheet to read when the input is a workbook (default: first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Write JSON regardless of the output extension
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&logging.filter))
            .context("Invalid log filter")?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(precision) = cli.precision {
        config.output.precision = Some(precision);
    }
    if let Some(delimiter) = cli.delimiter {
        config.input.delimiter = delimiter.to_string();
    }
    if let Some(sheet) = cli.sheet {
        config.input.sheet = Some(sheet);
    }
    if cli.json {
        config.output.format = Some(OutputFormat::Json);
    }
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging, cli.verbose)?;

    let command = RankAlternativesCommand {
        weights: parse_weights(&cli.weights).context("Invalid weights")?,
        impacts: parse_impacts(&cli.impacts).context("Invalid impacts")?,
    };

    let handler = RankAlternativesHandler::new(
        source_for_path(&cli.input, &config.input),
        sink_for_path(&cli.output, &config.input, &config.output),
    );
    let result = handler
        .handle(command)
        .context("TOPSIS analysis failed")?;

    println!(
        "The TOPSIS analysis results have been successfully saved to {}.",
        result.destination
    );
    Ok(())
}
