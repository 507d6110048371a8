//! Pegs: size-ordered stacks of disks.

use crate::{Disk, HanoiError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A peg upon which disks are stacked.
///
/// Disks are held bottom-to-top; the last disk is the top of the stack.
/// Each disk must be strictly smaller than the one beneath it. Every
/// mutation either preserves that rule or fails without changing the peg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PegRecord", into = "PegRecord")]
pub struct Peg {
    name: String,
    disks: Vec<Disk>,
}

/// Unvalidated wire form of a [`Peg`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PegRecord {
    name: String,
    disks: Vec<Disk>,
}

impl Peg {
    /// Creates a peg holding `disks`, ordered bottom-to-top.
    ///
    /// Fails with [`HanoiError::InvalidState`] if any disk is not strictly
    /// smaller than the disk beneath it.
    #[instrument(skip(name, disks), fields(name = %name.as_ref(), count = disks.len()))]
    pub fn new(name: impl AsRef<str>, disks: Vec<Disk>) -> Result<Self, HanoiError> {
        let name = name.as_ref().to_string();
        if let Some(pair) = disks.windows(2).find(|pair| !pair[1].is_smaller_than(&pair[0])) {
            return Err(HanoiError::InvalidState(format!(
                "peg {} has disk {} on top of disk {}",
                name, pair[1], pair[0]
            )));
        }
        Ok(Self { name, disks })
    }

    /// Builds a peg without checking the placement rule.
    #[cfg(test)]
    pub(crate) fn unchecked(name: impl Into<String>, disks: Vec<Disk>) -> Self {
        Self {
            name: name.into(),
            disks,
        }
    }

    /// Creates an empty peg.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disks: Vec::new(),
        }
    }

    /// Returns the peg name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the disks on the peg, ordered bottom-to-top.
    pub fn disks(&self) -> Vec<Disk> {
        self.disks.clone()
    }

    /// Borrows the disks in place, bottom-to-top.
    pub(crate) fn stack(&self) -> &[Disk] {
        &self.disks
    }

    /// Returns true if no disks are on the peg.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Returns the number of disks on the peg.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Returns the top disk without removing it.
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Returns true if `disk` may be pushed onto this peg.
    pub fn accepts(&self, disk: &Disk) -> bool {
        self.top().is_none_or(|top| disk.is_smaller_than(&top))
    }

    /// Removes and returns the top disk.
    ///
    /// Fails with [`HanoiError::EmptyPeg`] if there are no disks.
    #[instrument(skip(self), fields(peg = %self.name))]
    pub fn pop(&mut self) -> Result<Disk, HanoiError> {
        let disk = self
            .disks
            .pop()
            .ok_or_else(|| HanoiError::empty_peg(&self.name))?;
        debug!(%disk, remaining = self.disks.len(), "Popped disk");
        Ok(disk)
    }

    /// Places `disk` on top of the peg.
    ///
    /// Fails with [`HanoiError::IllegalPlacement`] if the peg is not empty and
    /// `disk` is not strictly smaller than the current top disk.
    #[instrument(skip(self), fields(peg = %self.name))]
    pub fn push(&mut self, disk: Disk) -> Result<(), HanoiError> {
        if let Some(top) = self.top()
            && !disk.is_smaller_than(&top)
        {
            return Err(HanoiError::IllegalPlacement {
                peg: self.name.clone(),
                disk,
                top,
            });
        }
        self.disks.push(disk);
        debug!(%disk, count = self.disks.len(), "Pushed disk");
        Ok(())
    }
}

impl TryFrom<PegRecord> for Peg {
    type Error = HanoiError;

    fn try_from(record: PegRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.disks)
    }
}

impl From<Peg> for PegRecord {
    fn from(peg: Peg) -> Self {
        Self {
            name: peg.name,
            disks: peg.disks,
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sizes = self
            .disks
            .iter()
            .map(Disk::to_string)
            .collect::<Vec<_>>()
            .join(" - ");
        write!(f, "{}: {}", self.name, sizes)
    }
}
