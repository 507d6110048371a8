//! Descending pegs invariant: every peg is stacked largest to smallest.

use super::Invariant;
use crate::{Peg, Snapshot};

/// Invariant: on every peg each disk is strictly smaller than the one below.
pub struct DescendingPegsInvariant;

impl DescendingPegsInvariant {
    /// Checks a single peg.
    pub fn peg_holds(peg: &Peg) -> bool {
        peg.stack()
            .windows(2)
            .all(|pair| pair[1].is_smaller_than(&pair[0]))
    }
}

impl Invariant<Snapshot<'_>> for DescendingPegsInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        snapshot.pegs().iter().all(|peg| Self::peg_holds(peg))
    }

    fn description() -> &'static str {
        "Every peg holds disks in strictly descending size from bottom to top"
    }
}
