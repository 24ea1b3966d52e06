//! analyze: BPR congestion report for one snapshot CSV.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rn_congestion::{BprParams, assess_all};
use rn_io::load_records;

#[derive(Parser)]
#[command(name = "analyze", about = "Print a congestion report for a snapshot CSV", long_about = None)]
struct Cli {
    /// Snapshot CSV (`map_HHMM.csv`)
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let records = load_records(&cli.file)
        .with_context(|| format!("loading {}", cli.file.display()))?;
    info!(file = %cli.file.display(), roads = records.len(), "snapshot loaded");

    let assessments = assess_all(&records, &BprParams::default());
    let text = report::render(&cli.file.display().to_string(), &assessments)
        .context("formatting report")?;
    print!("{text}");
    Ok(())
}
