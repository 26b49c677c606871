use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use covbadge::cli;

/// covbadge — Render a shields-style SVG coverage badge from a gocov JSON report.
#[derive(Parser)]
#[command(name = "covbadge", version, about)]
struct Cli {
    /// Path to the gocov JSON report.
    #[arg(long, default_value = "coverage.json")]
    input: PathBuf,

    /// Where to write the SVG badge (overwritten if present).
    #[arg(long, default_value = "coverage.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(input = %cli.input.display(), output = %cli.output.display(), "generating coverage badge");
    let out = cli::cmd_badge(&cli.input, &cli.output).context("Failed to generate coverage badge")?;
    print!("{out}");
    Ok(())
}
