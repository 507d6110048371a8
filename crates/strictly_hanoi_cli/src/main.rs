//! Strictly Hanoi - command-line demonstration
//!
//! Prints the pegs before solving and after every relocation.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_hanoi_cli::{Cli, HanoiConfig, run};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => HanoiConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => HanoiConfig::default(),
    };
    if let Some(order) = cli.order {
        config = config.with_order(order);
    }
    debug!(?config, "Resolved configuration");

    let stdout = std::io::stdout();
    let summary = run(cli.disk_count, &config, cli.format, cli.quiet, &mut stdout.lock())?;
    info!(relocations = summary.relocations, "Done");

    Ok(())
}
