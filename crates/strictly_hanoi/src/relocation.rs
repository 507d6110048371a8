//! First-class relocation events.
//!
//! A relocation is the atomic act of popping one disk from one peg and
//! pushing it onto another. The solver emits one per step.

use crate::Disk;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single disk moved from one peg to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Relocation {
    /// The disk that was moved.
    disk: Disk,
    /// Name of the peg the disk left.
    #[new(into)]
    source: String,
    /// Name of the peg the disk landed on.
    #[new(into)]
    destination: String,
}

impl Relocation {
    /// Returns the disk that was moved.
    pub fn disk(&self) -> Disk {
        self.disk
    }

    /// Returns the name of the peg the disk left.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the name of the peg the disk landed on.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl std::fmt::Display for Relocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let relocation = Relocation::new(Disk::new(1).unwrap(), "A", "C");
        assert_eq!(relocation.to_string(), "disk 1: A -> C");
    }
}
