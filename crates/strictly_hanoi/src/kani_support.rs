//! Kani arbitrary implementations for puzzle types.
//!
//! These implementations allow Kani to explore bounded disks and pegs
//! during model checking.

#[cfg(kani)]
use super::{Disk, Peg};

#[cfg(kani)]
impl kani::Arbitrary for Disk {
    fn any() -> Self {
        let size: u32 = kani::any();
        kani::assume(size > 0 && size <= 8);
        match Disk::new(size) {
            Ok(disk) => disk,
            Err(_) => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Peg {
    fn any() -> Self {
        let len: u8 = kani::any();
        kani::assume(len <= 4);
        let mut peg = Peg::empty("kani");
        for _ in 0..len {
            let disk: Disk = kani::any();
            kani::assume(peg.accepts(&disk));
            if peg.push(disk).is_err() {
                unreachable!();
            }
        }
        peg
    }
}
