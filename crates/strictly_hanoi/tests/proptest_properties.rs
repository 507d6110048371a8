//! Property-based tests for solver and peg guarantees.

use proptest::prelude::*;

use strictly_hanoi::{DescendingPegsInvariant, Disk, Game, HanoiError, Peg, Snapshot};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn relocation_count_is_two_to_the_n_minus_one(disk_count in 1usize..=12) {
        let game = Game::new();
        let mut a = game.create_peg("A", disk_count).unwrap();
        let mut b = Peg::empty("B");
        let mut c = Peg::empty("C");
        let mut calls: u128 = 0;

        game.move_disks(disk_count, &mut a, &mut c, &mut b, &mut |_: &Snapshot<'_>| calls += 1)
            .unwrap();

        prop_assert_eq!(Some(calls), Game::relocation_count(disk_count));
    }

    #[test]
    fn solve_leaves_full_tower_on_destination(disk_count in 1usize..=12) {
        let game = Game::new();
        let mut a = game.create_peg("A", disk_count).unwrap();
        let mut b = Peg::empty("B");
        let mut c = Peg::empty("C");

        game.move_disks_quietly(disk_count, &mut a, &mut c, &mut b).unwrap();

        prop_assert!(a.is_empty());
        prop_assert!(b.is_empty());
        prop_assert_eq!(c, game.create_peg("C", disk_count).unwrap());
    }

    #[test]
    fn every_snapshot_keeps_pegs_descending(disk_count in 1usize..=8) {
        let game = Game::new();
        let mut a = game.create_peg("A", disk_count).unwrap();
        let mut b = Peg::empty("B");
        let mut c = Peg::empty("C");
        let mut all_descending = true;

        game.move_disks(disk_count, &mut a, &mut c, &mut b, &mut |s: &Snapshot<'_>| {
            all_descending &= s.pegs().iter().all(|p| DescendingPegsInvariant::peg_holds(p));
        })
        .unwrap();

        prop_assert!(all_descending);
    }

    #[test]
    fn pushes_never_break_descending_order(sizes in prop::collection::vec(1u32..20, 0..40)) {
        let mut peg = Peg::empty("A");

        for size in sizes {
            let disk = Disk::new(size).unwrap();
            let before = peg.clone();
            match peg.push(disk) {
                Ok(()) => prop_assert!(DescendingPegsInvariant::peg_holds(&peg)),
                Err(err) => {
                    prop_assert!(
                        matches!(err, HanoiError::IllegalPlacement { .. }),
                        "unexpected error: {}",
                        err
                    );
                    prop_assert_eq!(&peg, &before);
                }
            }
        }
    }
}
