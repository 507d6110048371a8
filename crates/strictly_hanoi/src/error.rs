//! Error types for the Tower of Hanoi puzzle.

use crate::Disk;

/// Error raised by disk construction, peg mutation, or the solver.
///
/// Errors are never caught internally: a failed relocation propagates to the
/// caller of the top-level operation and leaves pegs in whatever state the
/// completed relocations produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HanoiError {
    /// A caller supplied an out-of-domain value.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// A peg was constructed from a disk sequence that breaks the placement rule.
    #[display("Invalid state: {}", _0)]
    InvalidState(String),

    /// A disk was popped from an empty peg.
    #[display("Peg {} is empty", peg)]
    EmptyPeg {
        /// Name of the empty peg.
        peg: String,
    },

    /// A disk was pushed onto a peg whose top disk is not larger.
    #[display("Cannot place disk {} on peg {}: top disk is {}", disk, peg, top)]
    IllegalPlacement {
        /// Name of the peg that rejected the disk.
        peg: String,
        /// The disk that was rejected.
        disk: Disk,
        /// The disk currently on top of the peg.
        top: Disk,
    },

    /// A postcondition check found a broken invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for HanoiError {}

impl HanoiError {
    /// Creates an [`HanoiError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an [`HanoiError::EmptyPeg`] for the named peg.
    pub fn empty_peg(peg: impl Into<String>) -> Self {
        Self::EmptyPeg { peg: peg.into() }
    }
}
