//! Console rendering of peg states.

use crate::{HanoiConfig, OutputFormat, StackOrder};
use serde::Serialize;
use std::io::Write;
use strictly_hanoi::{Disk, Observer, Peg, Relocation, Snapshot};
use tracing::{instrument, warn};

/// One printed state: the pegs after `step` relocations.
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    /// Relocations performed so far.
    pub step: u128,
    /// The relocation that produced this state, absent for the initial state.
    pub relocation: Option<&'a Relocation>,
    /// Pegs ordered by name.
    pub pegs: Vec<&'a Peg>,
}

impl<'a> Frame<'a> {
    /// Builds the frame shown before any relocation.
    pub fn initial(pegs: impl IntoIterator<Item = &'a Peg>) -> Self {
        Self::build(0, None, pegs)
    }

    /// Builds the frame for a solver snapshot.
    pub fn from_snapshot(step: u128, snapshot: &Snapshot<'a>) -> Self {
        Self::build(step, Some(snapshot.relocation()), snapshot.pegs())
    }

    fn build(
        step: u128,
        relocation: Option<&'a Relocation>,
        pegs: impl IntoIterator<Item = &'a Peg>,
    ) -> Self {
        let mut pegs: Vec<&'a Peg> = pegs.into_iter().collect();
        pegs.sort_by(|a, b| a.name().cmp(b.name()));
        Self {
            step,
            relocation,
            pegs,
        }
    }
}

/// Turns frames into text or JSON lines.
#[derive(Debug, Clone)]
pub struct Renderer {
    divider: String,
    separator: String,
    order: StackOrder,
    format: OutputFormat,
}

impl Renderer {
    /// Creates a renderer from the configuration.
    #[instrument(skip(config))]
    pub fn new(config: &HanoiConfig, format: OutputFormat) -> Self {
        Self {
            divider: config.divider().clone(),
            separator: config.separator().clone(),
            order: *config.order(),
            format,
        }
    }

    /// Formats a single peg as `name: sizes`.
    pub fn peg_line(&self, peg: &Peg) -> String {
        let mut disks = peg.disks();
        if self.order == StackOrder::TopToBottom {
            disks.reverse();
        }
        let sizes = disks
            .iter()
            .map(Disk::to_string)
            .collect::<Vec<_>>()
            .join(&self.separator);
        format!("{}: {}", peg.name(), sizes)
    }

    /// Formats a frame, including a trailing newline.
    pub fn render(&self, frame: &Frame<'_>) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => {
                let mut out = format!("{}\n", self.divider);
                for peg in &frame.pegs {
                    out.push_str(&self.peg_line(peg));
                    out.push('\n');
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(frame)?)),
        }
    }
}

/// Observer that prints a frame after every relocation.
///
/// Observers cannot fail or stop the solver, so the first write error is
/// kept and every later frame is skipped. The solve still runs through all
/// `2^n - 1` relocations, only counting steps, and [`FrameWriter::finish`]
/// surfaces the error once it returns.
pub struct FrameWriter<'w, W: Write> {
    out: &'w mut W,
    renderer: &'w Renderer,
    quiet: bool,
    step: u128,
    error: Option<anyhow::Error>,
}

impl<'w, W: Write> FrameWriter<'w, W> {
    /// Creates a writer; `quiet` suppresses per-relocation frames.
    pub fn new(out: &'w mut W, renderer: &'w Renderer, quiet: bool) -> Self {
        Self {
            out,
            renderer,
            quiet,
            step: 0,
            error: None,
        }
    }

    /// Writes a frame immediately.
    pub fn write_frame(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        let text = self.renderer.render(frame)?;
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Returns the number of relocations observed.
    pub fn steps(&self) -> u128 {
        self.step
    }

    /// Returns the first write error, if any, and flushes the output.
    pub fn finish(self) -> anyhow::Result<u128> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.step)
    }
}

impl<W: Write> Observer for FrameWriter<'_, W> {
    fn observe(&mut self, snapshot: &Snapshot<'_>) {
        self.step += 1;
        if self.quiet || self.error.is_some() {
            return;
        }
        let frame = Frame::from_snapshot(self.step, snapshot);
        if let Err(err) = self.write_frame(&frame) {
            warn!(step = self.step, error = %err, "Failed to write frame");
            self.error = Some(err);
        }
    }
}
