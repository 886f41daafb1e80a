use segtree::{SegmentTree, SharedSegmentTree, Sum, SumTree};
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_tree_concurrent_readers() {
    let tree = SumTree::build(&[1i64, 2, 3, 4]).unwrap();
    let shared = Arc::new(SharedSegmentTree::new(tree));

    thread::scope(|s| {
        for _ in 0..10 {
            let tree = shared.clone();
            s.spawn(move || {
                let guard = tree.read();
                assert_eq!(guard.query(0, 3), Ok(10));
                assert_eq!(guard.query(1, 2), Ok(5));
            });
        }
    });
}

#[test]
fn test_shared_tree_write_access() {
    let shared = SharedSegmentTree::from(SegmentTree::<Sum<u64>>::build(&[0; 8]).unwrap());

    {
        let mut guard = shared.write();
        for i in 0..8 {
            guard.update(i, 1).unwrap();
        }
    }

    assert_eq!(shared.query(0, 7), Ok(8));
    assert_eq!(shared.len(), 8);
}

#[test]
fn test_shared_tree_mixed_access() {
    const THREADS: usize = 8;
    const ROUNDS: u64 = 200;

    // Each writer owns one leaf and bumps it; readers check the running total
    // never decreases and never exceeds the final value.
    let shared = SharedSegmentTree::new(SegmentTree::<Sum<u64>>::build(&[0; THREADS]).unwrap());
    let final_total = THREADS as u64 * ROUNDS;

    thread::scope(|s| {
        for leaf in 0..THREADS {
            let shared = &shared;
            s.spawn(move || {
                for round in 1..=ROUNDS {
                    shared.update(leaf, round).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let shared = &shared;
            s.spawn(move || {
                let mut last = 0;
                for _ in 0..ROUNDS {
                    let total = shared.fold(..).unwrap();
                    assert!(total >= last);
                    assert!(total <= final_total);
                    last = total;
                }
            });
        }
    });

    assert_eq!(shared.query(0, THREADS - 1), Ok(final_total));
    assert_eq!(shared.into_inner().to_vec(), vec![ROUNDS; THREADS]);
}
