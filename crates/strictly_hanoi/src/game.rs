//! The recursive three-peg solver.

use crate::contracts::{Contract, RelocationContract, Transfer};
use crate::{Disk, HanoiError, NoopObserver, Observer, Peg, Relocation, Snapshot};
use tracing::{debug, info, instrument};

/// Largest disk count a [`Game`] accepts by default.
///
/// Recursion depth equals the disk count.
pub const DEFAULT_MAX_DISK_COUNT: usize = 4096;

/// Facade for the three-peg Tower of Hanoi puzzle.
///
/// The game holds no puzzle state. Each [`Game::move_disks`] call works only
/// on the pegs it is handed, mutating them in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    max_disk_count: usize,
}

impl Game {
    /// Creates a game with the default disk count limit.
    #[instrument]
    pub fn new() -> Self {
        Self {
            max_disk_count: DEFAULT_MAX_DISK_COUNT,
        }
    }

    /// Creates a game that refuses to move more than `max_disk_count` disks.
    #[instrument]
    pub fn with_max_disk_count(max_disk_count: usize) -> Self {
        Self { max_disk_count }
    }

    /// Returns the largest disk count this game will move.
    pub fn max_disk_count(&self) -> usize {
        self.max_disk_count
    }

    /// Number of relocations needed to move `disk_count` disks: `2^n - 1`.
    ///
    /// Returns `None` if the count does not fit in a `u128`.
    pub fn relocation_count(disk_count: usize) -> Option<u128> {
        match disk_count {
            0..128 => Some((1u128 << disk_count) - 1),
            128 => Some(u128::MAX),
            _ => None,
        }
    }

    /// Creates a peg holding `disk_count` disks, largest at the bottom.
    ///
    /// Sizes run `disk_count, disk_count - 1, ..., 1` from bottom to top.
    /// A count of zero yields an empty peg.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn create_peg(&self, name: impl AsRef<str>, disk_count: usize) -> Result<Peg, HanoiError> {
        let largest = u32::try_from(disk_count).map_err(|_| {
            HanoiError::invalid_argument(format!("disk count {} is too large", disk_count))
        })?;
        let disks = (1..=largest)
            .rev()
            .map(Disk::new)
            .collect::<Result<Vec<_>, _>>()?;
        Peg::new(name, disks)
    }

    /// Moves `disk_count` disks from `source` to `destination`, using
    /// `intermediate` as the spare peg.
    ///
    /// The observer is called once after every single-disk relocation, in
    /// the order they happen; `2^n - 1` calls in total.
    ///
    /// Fails with [`HanoiError::InvalidArgument`] if `disk_count` is zero or
    /// above the game's limit. Requesting more disks than `source` holds is
    /// not checked up front: it fails with [`HanoiError::EmptyPeg`] at the
    /// first relocation that finds the source empty. The operation is not
    /// transactional; on failure the pegs keep every completed relocation.
    #[instrument(
        skip(self, source, destination, intermediate, observer),
        fields(
            source = %source.name(),
            destination = %destination.name(),
            intermediate = %intermediate.name(),
        )
    )]
    pub fn move_disks<O>(
        &self,
        disk_count: usize,
        source: &mut Peg,
        destination: &mut Peg,
        intermediate: &mut Peg,
        observer: &mut O,
    ) -> Result<(), HanoiError>
    where
        O: Observer + ?Sized,
    {
        if disk_count == 0 {
            return Err(HanoiError::invalid_argument("disk count must be positive"));
        }
        if disk_count > self.max_disk_count {
            return Err(HanoiError::invalid_argument(format!(
                "disk count {} exceeds the limit of {}",
                disk_count, self.max_disk_count
            )));
        }

        info!(disk_count, "Moving disks");
        Self::move_tower(disk_count, source, destination, intermediate, observer)?;
        info!(disk_count, "Move complete");
        Ok(())
    }

    /// Same as [`Game::move_disks`] without an observer.
    pub fn move_disks_quietly(
        &self,
        disk_count: usize,
        source: &mut Peg,
        destination: &mut Peg,
        intermediate: &mut Peg,
    ) -> Result<(), HanoiError> {
        self.move_disks(disk_count, source, destination, intermediate, &mut NoopObserver)
    }

    fn move_tower<O>(
        disk_count: usize,
        source: &mut Peg,
        destination: &mut Peg,
        intermediate: &mut Peg,
        observer: &mut O,
    ) -> Result<(), HanoiError>
    where
        O: Observer + ?Sized,
    {
        // Clear the n-1 smaller disks onto the spare, with destination as helper.
        if disk_count > 1 {
            Self::move_tower(disk_count - 1, source, intermediate, destination, observer)?;
        }

        Self::relocate(source, destination, intermediate, observer)?;

        // Bring them back on top, with source as helper.
        if disk_count > 1 {
            Self::move_tower(disk_count - 1, intermediate, destination, source, observer)?;
        }

        Ok(())
    }

    fn relocate<O>(
        source: &mut Peg,
        destination: &mut Peg,
        intermediate: &mut Peg,
        observer: &mut O,
    ) -> Result<(), HanoiError>
    where
        O: Observer + ?Sized,
    {
        RelocationContract::pre(&Transfer::new(source, destination))?;

        let disk = source.pop()?;
        destination.push(disk)?;

        let relocation = Relocation::new(disk, source.name(), destination.name());
        debug!(%relocation, "Relocated disk");

        let snapshot = Snapshot::new(&relocation, [&*source, &*destination, &*intermediate]);

        #[cfg(debug_assertions)]
        RelocationContract::post(&snapshot)?;

        observer.observe(&snapshot);
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
