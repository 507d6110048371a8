//! Strictly Hanoi - invariant-checked Tower of Hanoi logic
//!
//! Disks must move from a source peg to a destination peg through an
//! intermediate peg without ever resting on a smaller disk.
//!
//! # Architecture
//!
//! - **Disk**: immutable, ordered by size
//! - **Peg**: a stack that refuses any push breaking the descending order
//! - **Game**: stateless recursive solver that mutates pegs in place
//! - **Observer**: hook called with a [`Snapshot`] after every relocation
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Game, Peg, Snapshot};
//!
//! # fn example() -> Result<(), strictly_hanoi::HanoiError> {
//! let game = Game::new();
//! let mut a = game.create_peg("A", 3)?;
//! let mut b = Peg::empty("B");
//! let mut c = Peg::empty("C");
//!
//! let mut relocations = 0;
//! game.move_disks(3, &mut a, &mut c, &mut b, &mut |_: &Snapshot<'_>| relocations += 1)?;
//!
//! assert_eq!(relocations, 7);
//! assert!(a.is_empty() && b.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod disk;
mod error;
mod game;
mod invariants;
mod kani_support;
mod observer;
mod peg;
mod puzzle;
mod relocation;

// Crate-level exports - Core types
pub use disk::Disk;
pub use error::HanoiError;
pub use peg::Peg;
pub use relocation::Relocation;

// Crate-level exports - Solver
pub use game::{DEFAULT_MAX_DISK_COUNT, Game};
pub use puzzle::Puzzle;

// Crate-level exports - Observation
pub use observer::{NoopObserver, Observer, RecordedSnapshot, Recorder, Snapshot};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    Contract, LegalRelocation, PlacementIsLegal, RelocationContract, SourceHasDisk, Transfer,
};
pub use invariants::{DescendingPegsInvariant, Invariant};
