//! Drives the solver for one command-line invocation.

use crate::{Frame, FrameWriter, HanoiConfig, OutputFormat, Renderer};
use anyhow::{Context, Result};
use std::io::Write;
use strictly_hanoi::{Game, Puzzle};
use tracing::{info, instrument};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Disks moved from the first peg to the last.
    pub disk_count: usize,
    /// Relocations performed.
    pub relocations: u128,
}

/// Solves a `disk_count`-disk puzzle, writing every state to `out`.
///
/// The initial state is always written. With `quiet`, the final state is
/// written once instead of one frame per relocation.
#[instrument(skip(config, out))]
pub fn run<W: Write>(
    disk_count: usize,
    config: &HanoiConfig,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<Summary> {
    let game = Game::with_max_disk_count(*config.max_disk_count());
    let mut puzzle = Puzzle::new(&game, disk_count, config.peg_name_refs())
        .context("Failed to set up pegs")?;
    let renderer = Renderer::new(config, format);

    let mut writer = FrameWriter::new(out, &renderer, quiet);
    writer.write_frame(&Frame::initial(puzzle.pegs()))?;
    puzzle
        .solve(&game, &mut writer)
        .with_context(|| format!("Failed to move {} disks", disk_count))?;
    let relocations = writer.steps();
    if quiet {
        let frame = Frame {
            step: relocations,
            relocation: None,
            pegs: puzzle.sorted_by_name(),
        };
        writer.write_frame(&frame)?;
    }
    let relocations = writer.finish()?;

    info!(disk_count, relocations, "Puzzle solved");
    Ok(Summary {
        disk_count,
        relocations,
    })
}
