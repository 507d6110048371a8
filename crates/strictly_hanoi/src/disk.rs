//! Sized disks stacked on pegs.

use crate::HanoiError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A disk in the Tower of Hanoi puzzle.
///
/// Disks are immutable and ordered by size alone. The size is always
/// strictly positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Disk {
    size: u32,
}

impl Disk {
    /// Creates a disk of the given size.
    ///
    /// Fails with [`HanoiError::InvalidArgument`] if `size` is zero.
    #[instrument]
    pub fn new(size: u32) -> Result<Self, HanoiError> {
        if size == 0 {
            return Err(HanoiError::invalid_argument("disk size must be positive"));
        }
        Ok(Self { size })
    }

    /// Returns the size of the disk.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns true if this disk may rest on `other`.
    pub fn is_smaller_than(&self, other: &Disk) -> bool {
        self.size < other.size
    }
}

impl TryFrom<u32> for Disk {
    type Error = HanoiError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<Disk> for u32 {
    fn from(disk: Disk) -> Self {
        disk.size
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(size: u32) -> Disk {
        Disk::new(size).expect("positive size")
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Disk::new(0), Err(HanoiError::InvalidArgument(_))));
    }

    #[test]
    fn test_size_is_stored() {
        assert_eq!(disk(7).size(), 7);
    }

    #[test]
    fn test_equality_compares_size() {
        assert_eq!(disk(1), disk(1));
        assert_ne!(disk(1), disk(2));
    }

    #[test]
    fn test_smaller_than() {
        assert!(disk(1).is_smaller_than(&disk(2)));
        assert!(!disk(1).is_smaller_than(&disk(1)));
        assert!(!disk(2).is_smaller_than(&disk(1)));
    }

    #[test]
    fn test_ordering_matches_size() {
        let mut disks = vec![disk(3), disk(1), disk(2)];
        disks.sort();
        assert_eq!(disks, vec![disk(1), disk(2), disk(3)]);
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Disk>("0").is_err());
        assert_eq!(serde_json::from_str::<Disk>("4").unwrap(), disk(4));
    }
}
