//! Ready-made three-peg setup.

use crate::{Game, HanoiError, Observer, Peg};
use tracing::instrument;

/// Three named pegs with every disk starting on the first.
///
/// Solving moves the tower from the first peg to the last, using the middle
/// peg as the intermediate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    disk_count: usize,
    pegs: [Peg; 3],
}

impl Puzzle {
    /// Builds the pegs for a `disk_count`-disk puzzle.
    ///
    /// `names` are the source, intermediate, and destination pegs in that
    /// order. Fails with [`HanoiError::InvalidArgument`] if any two names
    /// are equal.
    #[instrument(skip(game))]
    pub fn new(game: &Game, disk_count: usize, names: [&str; 3]) -> Result<Self, HanoiError> {
        let [source, intermediate, destination] = names;
        if source == intermediate || intermediate == destination || source == destination {
            return Err(HanoiError::invalid_argument(format!(
                "peg names must be distinct, got {:?}",
                names
            )));
        }

        Ok(Self {
            disk_count,
            pegs: [
                game.create_peg(source, disk_count)?,
                Peg::empty(intermediate),
                Peg::empty(destination),
            ],
        })
    }

    /// Returns the number of disks in the puzzle.
    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// Returns the source, intermediate, and destination pegs.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Returns the pegs ordered by name.
    pub fn sorted_by_name(&self) -> Vec<&Peg> {
        let mut pegs: Vec<&Peg> = self.pegs.iter().collect();
        pegs.sort_by(|a, b| a.name().cmp(b.name()));
        pegs
    }

    /// Returns true once every disk sits on the destination peg.
    pub fn is_solved(&self) -> bool {
        let [source, intermediate, destination] = &self.pegs;
        source.is_empty() && intermediate.is_empty() && destination.len() == self.disk_count
    }

    /// Moves the whole tower to the destination peg, notifying `observer`
    /// after every relocation.
    #[instrument(skip(self, game, observer), fields(disk_count = self.disk_count))]
    pub fn solve<O>(&mut self, game: &Game, observer: &mut O) -> Result<(), HanoiError>
    where
        O: Observer + ?Sized,
    {
        let [source, intermediate, destination] = &mut self.pegs;
        game.move_disks(self.disk_count, source, destination, intermediate, observer)
    }
}
