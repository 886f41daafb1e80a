//! # `segtree` - Array-Backed Segment Trees
//!
//! Segment trees over a fixed number of integer leaves, answering range
//! aggregate queries and point updates in O(log n).
//!
//! ## Guarantees
//!
//! ### One Tree, One Aggregate
//! - **Consistent nodes**: every internal node stores the merge of its two
//!   children for the aggregate chosen at construction. Queries never mix
//!   aggregates.
//! - **Pluggable merge**: any associative, commutative [`Aggregate`] with a
//!   neutral element can drive a tree: the eight built-ins, a closure
//!   ([`Custom`]), or a kind picked at run time ([`DynAggregate`]).
//!
//! ### Checked Access
//! - **No unchecked indexing in the API**: query ranges and update indices are
//!   validated and rejected with [`SegmentTreeError`].
//! - **No silent overflow**: `Sum` and `Lcm` use checked arithmetic;
//!   `lcm(0, 0)` is an error.
//! - **Atomic updates**: a point update is staged along its root-to-leaf path
//!   and only written once every ancestor has been recomputed.
//!
//! ### Concurrency
//! - [`SegmentTree`] relies on `&`/`&mut` for exclusivity.
//! - [`SharedSegmentTree`] adds a reader-writer lock: concurrent queries,
//!   exclusive updates.
//!
//! ## Layout
//!
//! The node at index `i` covering `[start, end]` has children `2i + 1`
//! (`[start, mid]`) and `2i + 2` (`[mid + 1, end]`), `mid = (start + end) / 2`,
//! in a flat vector of `4n` slots.
//!
//! ## Example
//!
//! ```rust
//! use segtree::{Min, SegmentTree, Sum};
//!
//! let data = [1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! let mut sums = SegmentTree::<Sum<i64>>::build(&data).unwrap();
//! let mins = SegmentTree::<Min<i64>>::build(&data).unwrap();
//!
//! assert_eq!(sums.query(1, 5).unwrap(), 20);
//! assert_eq!(mins.query(1, 4).unwrap(), 2);
//!
//! sums.update(2, 10).unwrap();
//! assert_eq!(sums.query(1, 4).unwrap(), 21);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod aggregate;
pub mod error;
pub mod tree;

pub use aggregate::{
    gcd, lcm, Aggregate, AggregateKind, BitAnd, BitOr, BitXor, Custom, DynAggregate, Gcd, Lcm, Max,
    Min, Sum,
};
pub use error::{ArithmeticError, Result, SegmentTreeError};
pub use tree::{
    MultiSegmentTree, SegmentTree, SegmentTreeReadGuard, SegmentTreeWriteGuard, SharedSegmentTree,
};

/// Range-sum tree.
pub type SumTree<T = i64> = SegmentTree<Sum<T>>;
/// Range-minimum tree.
pub type MinTree<T = i64> = SegmentTree<Min<T>>;
/// Range-maximum tree.
pub type MaxTree<T = i64> = SegmentTree<Max<T>>;

// Compile-time assertions for aggregate layout
const _: () = {
    use core::mem;

    // Built-in aggregates are ZSTs, so a tree is just its node vector and length.
    assert!(mem::size_of::<Sum<i64>>() == 0);
    assert!(mem::size_of::<BitAnd<u128>>() == 0);
    assert!(
        mem::size_of::<SegmentTree<Sum<i64>>>()
            == mem::size_of::<Vec<i64>>() + mem::size_of::<usize>()
    );

    // A runtime-selected aggregate costs one tag byte.
    assert!(
        mem::size_of::<DynAggregate<i64>>() == mem::size_of::<AggregateKind>()
    );
    assert!(mem::size_of::<AggregateKind>() == 1);
};
