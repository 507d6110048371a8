//! Contract-based validation for relocations.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} relocate {Q}. The precondition is checked before any peg is touched,
//! so a rejected relocation leaves both pegs unchanged.

use crate::invariants::{DescendingPegsInvariant, Invariant};
use crate::{Disk, HanoiError, Peg, Snapshot};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for a transition.
///
/// - Precondition: {P(before)} must hold before the transition
/// - Postcondition: {Q(after)} must hold once it has been applied
pub trait Contract<Before, After> {
    /// Checks preconditions before applying the transition.
    fn pre(before: &Before) -> Result<(), HanoiError>;

    /// Checks postconditions after applying the transition.
    fn post(after: &After) -> Result<(), HanoiError>;
}

/// The two pegs a single relocation reads from and writes to.
#[derive(Debug, Clone, Copy)]
pub struct Transfer<'a> {
    source: &'a Peg,
    destination: &'a Peg,
}

impl<'a> Transfer<'a> {
    /// Creates a transfer from `source` to `destination`.
    pub fn new(source: &'a Peg, destination: &'a Peg) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns the peg the disk leaves.
    pub fn source(&self) -> &'a Peg {
        self.source
    }

    /// Returns the peg the disk lands on.
    pub fn destination(&self) -> &'a Peg {
        self.destination
    }
}

// ─────────────────────────────────────────────────────────────
//  Relocation Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the source peg has a disk to give.
pub struct SourceHasDisk;

impl SourceHasDisk {
    /// Returns the disk that would be moved.
    #[instrument(skip(transfer))]
    pub fn check(transfer: &Transfer<'_>) -> Result<Disk, HanoiError> {
        transfer
            .source
            .top()
            .ok_or_else(|| HanoiError::empty_peg(transfer.source.name()))
    }
}

/// Precondition: the destination peg accepts the disk.
pub struct PlacementIsLegal;

impl PlacementIsLegal {
    /// Fails if `disk` is not smaller than the destination's top disk.
    #[instrument(skip(transfer))]
    pub fn check(transfer: &Transfer<'_>, disk: Disk) -> Result<(), HanoiError> {
        match transfer.destination.top() {
            Some(top) if !disk.is_smaller_than(&top) => Err(HanoiError::IllegalPlacement {
                peg: transfer.destination.name().to_string(),
                disk,
                top,
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: a relocation is legal if the source has a disk
/// and the destination accepts it.
pub struct LegalRelocation;

impl LegalRelocation {
    /// Validates all preconditions, returning the disk that would move.
    #[instrument(skip(transfer))]
    pub fn check(transfer: &Transfer<'_>) -> Result<Disk, HanoiError> {
        let disk = SourceHasDisk::check(transfer)?;
        PlacementIsLegal::check(transfer, disk)?;
        Ok(disk)
    }
}

// ─────────────────────────────────────────────────────────────
//  Relocation Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a single relocation.
///
/// Preconditions:
/// - Source peg is not empty
/// - Destination top disk is larger than the moving disk
///
/// Postconditions:
/// - Every peg stays descending
pub struct RelocationContract;

impl Contract<Transfer<'_>, Snapshot<'_>> for RelocationContract {
    fn pre(transfer: &Transfer<'_>) -> Result<(), HanoiError> {
        LegalRelocation::check(transfer).map(|_| ())
    }

    fn post(snapshot: &Snapshot<'_>) -> Result<(), HanoiError> {
        if DescendingPegsInvariant::holds(snapshot) {
            return Ok(());
        }
        let description = DescendingPegsInvariant::description();
        warn!(relocation = %snapshot.relocation(), description, "Postcondition failed");
        Err(HanoiError::InvariantViolation(format!(
            "Postcondition failed: {}",
            description
        )))
    }
}
