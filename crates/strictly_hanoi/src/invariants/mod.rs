//! First-class invariants for the three-peg puzzle.
//!
//! Invariants are logical properties that must hold after every relocation.
//! They are testable independently and are checked as postconditions in
//! debug builds.
//!
//! Only the placement rule is enforced. Disk sizes may repeat across pegs and
//! peg names are opaque labels, so neither is an invariant of a relocation.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

pub mod descending_pegs;

pub use descending_pegs::DescendingPegsInvariant;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disk, Peg, Relocation, Snapshot};

    fn disk(size: u32) -> Disk {
        Disk::new(size).unwrap()
    }

    #[test]
    fn test_holds_with_shared_sizes_and_names() {
        let relocation = Relocation::new(disk(1), "P", "P");
        let a = Peg::new("P", vec![disk(3), disk(1)]).unwrap();
        let b = Peg::new("P", vec![disk(1)]).unwrap();
        let c = Peg::empty("P");
        let snapshot = Snapshot::new(&relocation, [&a, &b, &c]);
        assert!(DescendingPegsInvariant::holds(&snapshot));
    }

    #[test]
    fn test_description_names_the_rule() {
        assert!(DescendingPegsInvariant::description().contains("descending"));
    }
}
