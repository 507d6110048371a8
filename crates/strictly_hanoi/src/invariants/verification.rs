//! Formal verification of the placement rule using the Kani model checker.
//!
//! These proof harnesses check that a successful push never leaves a peg
//! out of order, for all small pegs.

#[cfg(kani)]
mod proofs {
    use crate::{DescendingPegsInvariant, Disk, Peg};

    /// Verify a push either keeps the peg descending or leaves it untouched.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_push_preserves_descending_order() {
        let mut peg: Peg = kani::any();
        let disk: Disk = kani::any();
        let before = peg.clone();

        match peg.push(disk) {
            Ok(()) => assert!(DescendingPegsInvariant::peg_holds(&peg)),
            Err(_) => assert_eq!(peg, before),
        }
    }

    /// Verify popping a non-empty peg removes exactly its top disk.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_pop_removes_top() {
        let mut peg: Peg = kani::any();
        kani::assume(!peg.is_empty());
        let top = peg.top();
        let len = peg.len();

        assert_eq!(peg.pop().ok(), top);
        assert_eq!(peg.len(), len - 1);
    }
}
