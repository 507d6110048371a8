//! Observation hook fired once per relocation.
//!
//! Observers are called synchronously on the solver's thread, in the order
//! relocations happen. They receive a [`Snapshot`] of all three pegs. The
//! position of a peg inside the snapshot carries no meaning; identify pegs
//! by name.

use crate::{Peg, Relocation};
use serde::{Deserialize, Serialize};

/// State of the three participating pegs immediately after one relocation.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    relocation: &'a Relocation,
    pegs: [&'a Peg; 3],
}

impl<'a> Snapshot<'a> {
    /// Creates a snapshot from a relocation and the pegs it touched.
    pub fn new(relocation: &'a Relocation, pegs: [&'a Peg; 3]) -> Self {
        Self { relocation, pegs }
    }

    /// Returns the relocation that produced this state.
    pub fn relocation(&self) -> &'a Relocation {
        self.relocation
    }

    /// Returns the three pegs in no particular order.
    pub fn pegs(&self) -> [&'a Peg; 3] {
        self.pegs
    }

    /// Finds a peg by name.
    pub fn peg(&self, name: &str) -> Option<&'a Peg> {
        self.pegs.iter().copied().find(|peg| peg.name() == name)
    }

    /// Returns the pegs ordered by name.
    pub fn sorted_by_name(&self) -> [&'a Peg; 3] {
        let mut pegs = self.pegs;
        pegs.sort_by(|a, b| a.name().cmp(b.name()));
        pegs
    }

    /// Copies the snapshot into an owned record.
    pub fn to_recorded(&self) -> RecordedSnapshot {
        RecordedSnapshot {
            relocation: self.relocation.clone(),
            pegs: self.pegs.map(Peg::clone),
        }
    }
}

/// Owned copy of a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedSnapshot {
    relocation: Relocation,
    pegs: [Peg; 3],
}

impl RecordedSnapshot {
    /// Returns the relocation that produced this state.
    pub fn relocation(&self) -> &Relocation {
        &self.relocation
    }

    /// Returns the three pegs in no particular order.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Finds a peg by name.
    pub fn peg(&self, name: &str) -> Option<&Peg> {
        self.pegs.iter().find(|peg| peg.name() == name)
    }
}

/// Receives a snapshot after every relocation.
pub trait Observer {
    /// Called once per relocation, after the disk has landed.
    fn observe(&mut self, snapshot: &Snapshot<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot<'_>),
{
    fn observe(&mut self, snapshot: &Snapshot<'_>) {
        self(snapshot)
    }
}

/// Observer that ignores every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn observe(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// Observer that keeps an owned copy of every snapshot.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    snapshots: Vec<RecordedSnapshot>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded snapshots in relocation order.
    pub fn snapshots(&self) -> &[RecordedSnapshot] {
        &self.snapshots
    }

    /// Returns the number of relocations observed.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been observed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the recorder, returning its snapshots.
    pub fn into_snapshots(self) -> Vec<RecordedSnapshot> {
        self.snapshots
    }
}

impl Observer for Recorder {
    fn observe(&mut self, snapshot: &Snapshot<'_>) {
        self.snapshots.push(snapshot.to_recorded());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Disk;

    fn fixture() -> (Relocation, Peg, Peg, Peg) {
        let disk = Disk::new(1).unwrap();
        let relocation = Relocation::new(disk, "A", "C");
        let c = Peg::new("C", vec![disk]).unwrap();
        (relocation, Peg::empty("B"), c, Peg::empty("A"))
    }

    #[test]
    fn test_peg_lookup_by_name() {
        let (relocation, b, c, a) = fixture();
        let snapshot = Snapshot::new(&relocation, [&b, &c, &a]);
        assert_eq!(snapshot.peg("C").map(Peg::len), Some(1));
        assert!(snapshot.peg("D").is_none());
    }

    #[test]
    fn test_sorted_by_name() {
        let (relocation, b, c, a) = fixture();
        let snapshot = Snapshot::new(&relocation, [&b, &c, &a]);
        let names: Vec<_> = snapshot.sorted_by_name().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_closure_observer() {
        let (relocation, b, c, a) = fixture();
        let snapshot = Snapshot::new(&relocation, [&b, &c, &a]);
        let mut calls = 0;
        let mut observer = |_: &Snapshot<'_>| calls += 1;
        observer.observe(&snapshot);
        observer.observe(&snapshot);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_recorder_keeps_owned_copies() {
        let (relocation, b, c, a) = fixture();
        let mut recorder = Recorder::new();
        recorder.observe(&Snapshot::new(&relocation, [&b, &c, &a]));
        drop((b, c, a));
        assert_eq!(recorder.len(), 1);
        let recorded = &recorder.snapshots()[0];
        assert_eq!(recorded.relocation().destination(), "C");
        assert_eq!(recorded.peg("C").map(Peg::len), Some(1));
    }
}
