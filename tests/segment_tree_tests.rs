use segtree::{
    AggregateKind, ArithmeticError, BitAnd, BitOr, BitXor, Gcd, Lcm, MaxTree, MinTree,
    MultiSegmentTree, SegmentTree, SegmentTreeError, SumTree,
};

const SAMPLE: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

#[test]
fn test_sample_queries_per_aggregate() {
    assert_eq!(SumTree::build(&SAMPLE).unwrap().query(1, 5), Ok(20));
    assert_eq!(MinTree::build(&SAMPLE).unwrap().query(1, 4), Ok(2));
    assert_eq!(MaxTree::build(&SAMPLE).unwrap().query(1, 4), Ok(5));

    let gcd = SegmentTree::<Gcd<i64>>::build(&SAMPLE).unwrap();
    let lcm = SegmentTree::<Lcm<i64>>::build(&SAMPLE).unwrap();
    let and = SegmentTree::<BitAnd<i64>>::build(&SAMPLE).unwrap();
    let or = SegmentTree::<BitOr<i64>>::build(&SAMPLE).unwrap();
    let xor = SegmentTree::<BitXor<i64>>::build(&SAMPLE).unwrap();
    assert_eq!(gcd.query(1, 4), Ok(1));
    assert_eq!(lcm.query(1, 4), Ok(60));
    assert_eq!(and.query(1, 4), Ok(0));
    assert_eq!(or.query(1, 4), Ok(7));
    assert_eq!(xor.query(1, 4), Ok(0));
}

#[test]
fn test_sample_update() {
    let mut sums = SumTree::build(&SAMPLE).unwrap();
    sums.update(2, 10).unwrap();
    assert_eq!(sums.query(1, 4), Ok(21));
    assert_eq!(sums.get(2), Ok(10));
}

#[test]
fn test_multi_tree_sample() {
    let mut trees = MultiSegmentTree::with_all_kinds(&SAMPLE).unwrap();
    assert_eq!(trees.kinds().count(), AggregateKind::ALL.len());

    let expected = [
        (AggregateKind::Sum, 14),
        (AggregateKind::Min, 2),
        (AggregateKind::Max, 5),
        (AggregateKind::Gcd, 1),
        (AggregateKind::Lcm, 60),
        (AggregateKind::BitAnd, 0),
        (AggregateKind::BitOr, 7),
        (AggregateKind::BitXor, 0),
    ];
    for (kind, want) in expected {
        assert_eq!(trees.query(kind, 1, 4), Ok(want), "{kind}");
    }

    trees.update(2, 10).unwrap();
    assert_eq!(trees.query(AggregateKind::Sum, 1, 4), Ok(21));
    assert_eq!(trees.query(AggregateKind::Max, 1, 4), Ok(10));
    assert_eq!(trees.query(AggregateKind::Lcm, 1, 4), Ok(20));
    assert_eq!(trees.query(AggregateKind::BitOr, 1, 4), Ok(15));
}

#[test]
fn test_and_identity_for_every_width() {
    let narrow = SegmentTree::<BitAnd<u8>>::build(&[0b1010]).unwrap();
    let wide = SegmentTree::<BitAnd<i64>>::build(&[12, 10]).unwrap();

    assert_eq!(narrow.identity(), 0xFF);
    assert_eq!(narrow.fold(0..0), Ok(0xFF));
    assert_eq!(wide.fold(2..), Ok(-1));
    assert_eq!(wide.query(0, 1), Ok(8));
}

#[test]
fn test_errors_do_not_mutate() {
    let mut sums = SumTree::build(&SAMPLE).unwrap();

    assert!(matches!(
        sums.query(0, 10),
        Err(SegmentTreeError::InvalidRange { .. })
    ));
    assert!(matches!(
        sums.update(99, 0),
        Err(SegmentTreeError::IndexOutOfRange { .. })
    ));
    assert_eq!(
        sums.update(0, i64::MAX),
        Err(SegmentTreeError::Arithmetic(ArithmeticError::Overflow))
    );
    assert_eq!(sums.to_vec(), SAMPLE.to_vec());
    assert_eq!(sums.query(0, 9), Ok(55));
}

#[test]
fn test_lcm_zero_pair() {
    let division_by_zero = SegmentTreeError::Arithmetic(ArithmeticError::DivisionByZero);
    let err = MultiSegmentTree::with_all_kinds(&[0i32, 0]).unwrap_err();
    assert_eq!(err, division_by_zero);

    let mut lcms = SegmentTree::<Lcm<i32>>::build(&[0, 3]).unwrap();
    assert_eq!(lcms.query(0, 1), Ok(0));
    assert_eq!(lcms.update(1, 0), Err(division_by_zero));
    assert_eq!(lcms.get(1), Ok(3));
}

#[test]
fn test_large_tree_matches_prefix_sums() {
    let n = 1000;
    let data: Vec<i64> = (0..n).map(|i| (i * 37 % 101) - 50).collect();
    let mut prefix = vec![0i64; data.len() + 1];
    for (i, v) in data.iter().enumerate() {
        prefix[i + 1] = prefix[i] + v;
    }

    let sums = SumTree::build(&data).unwrap();
    for left in (0..data.len()).step_by(37) {
        for right in (left..data.len()).step_by(53) {
            assert_eq!(
                sums.query(left, right),
                Ok(prefix[right + 1] - prefix[left])
            );
        }
    }
}
