//! Strictly Hanoi CLI - presentation layer for the puzzle solver
//!
//! Parses the command line, loads configuration, and prints the pegs
//! before the solve and after every relocation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod render;
mod run;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, HanoiConfig, OutputFormat, StackOrder};

// Crate-level exports - Rendering
pub use render::{Frame, FrameWriter, Renderer};

// Crate-level exports - Entry point
pub use run::{Summary, run};
