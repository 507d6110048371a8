//! Command-line interface for the `hanoi` binary.

use crate::{OutputFormat, StackOrder};
use clap::Parser;

/// Strictly Hanoi - solve the Tower of Hanoi and print every relocation
#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Solve the Tower of Hanoi and print the pegs after every move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of disks stacked on the first peg
    pub disk_count: usize,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Order in which each peg's disks are listed (overrides the config file)
    #[arg(long, value_enum)]
    pub order: Option<StackOrder>,

    /// Print only the initial and final states
    #[arg(short, long)]
    pub quiet: bool,
}
