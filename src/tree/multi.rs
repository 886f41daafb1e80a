//! `MultiSegmentTree` — several aggregates over the same data.
//!
//! A segment tree's internal nodes only make sense for the aggregate it was
//! built with, so answering sum and min queries over one array needs two
//! trees. `MultiSegmentTree` keeps one tree per [`AggregateKind`] and applies
//! every point update to all of them, or to none.

use super::SegmentTree;
use crate::aggregate::{AggregateKind, DynAggregate};
use crate::error::{Result, SegmentTreeError};
use num_traits::PrimInt;

/// One segment tree per tracked aggregate, all over the same array.
///
/// ```rust
/// use segtree::{AggregateKind, MultiSegmentTree};
///
/// let mut trees =
///     MultiSegmentTree::build(&[4, 8, 6], &[AggregateKind::Sum, AggregateKind::Gcd]).unwrap();
/// assert_eq!(trees.query(AggregateKind::Sum, 0, 2).unwrap(), 18);
/// assert_eq!(trees.query(AggregateKind::Gcd, 0, 2).unwrap(), 2);
///
/// trees.update(1, 9).unwrap();
/// assert_eq!(trees.query(AggregateKind::Gcd, 0, 2).unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MultiSegmentTree<T: PrimInt> {
    trees: Vec<SegmentTree<DynAggregate<T>>>,
}

impl<T: PrimInt> MultiSegmentTree<T> {
    /// Builds one tree for each distinct kind in `kinds`, in the order given.
    ///
    /// # Errors
    /// - [`SegmentTreeError::InvalidArgument`] if `values` or `kinds` is empty.
    /// - [`SegmentTreeError::Arithmetic`] if any tree fails to build.
    pub fn build(values: &[T], kinds: &[AggregateKind]) -> Result<Self> {
        if kinds.is_empty() {
            return Err(SegmentTreeError::InvalidArgument(
                "at least one aggregate kind is required",
            ));
        }

        let mut trees: Vec<SegmentTree<DynAggregate<T>>> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if trees.iter().any(|tree| tree.aggregate().kind() == kind) {
                continue;
            }
            let tree = SegmentTree::with_aggregate(values, DynAggregate::new(kind))?;
            trees.push(tree);
        }
        Ok(Self { trees })
    }

    /// Builds a tree for every [`AggregateKind`].
    ///
    /// # Errors
    /// See [`MultiSegmentTree::build`]. Note that the `lcm` tree rejects two
    /// adjacent zeros.
    pub fn with_all_kinds(values: &[T]) -> Result<Self> {
        Self::build(values, &AggregateKind::ALL)
    }

    /// Number of leaves shared by every tree.
    pub fn len(&self) -> usize {
        self.trees[0].len()
    }

    /// Always `false`; see [`SegmentTree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.trees[0].is_empty()
    }

    /// The tracked aggregates, in build order.
    pub fn kinds(&self) -> impl Iterator<Item = AggregateKind> + '_ {
        self.trees.iter().map(|tree| tree.aggregate().kind())
    }

    /// The tree for `kind`, if tracked.
    pub fn tree(&self, kind: AggregateKind) -> Option<&SegmentTree<DynAggregate<T>>> {
        self.trees
            .iter()
            .find(|tree| tree.aggregate().kind() == kind)
    }

    /// Aggregates `[left, right]` with `kind`.
    ///
    /// # Errors
    /// - [`SegmentTreeError::UntrackedAggregate`] if `kind` was not built.
    /// - Otherwise see [`SegmentTree::query`].
    pub fn query(&self, kind: AggregateKind, left: usize, right: usize) -> Result<T> {
        self.tree(kind)
            .ok_or(SegmentTreeError::UntrackedAggregate(kind))?
            .query(left, right)
    }

    /// Value at leaf `index`.
    ///
    /// # Errors
    /// See [`SegmentTree::get`].
    pub fn get(&self, index: usize) -> Result<T> {
        self.trees[0].get(index)
    }

    /// Sets leaf `index` to `value` in every tree.
    ///
    /// Every tree's new path is computed before any is written; if one fails,
    /// no tree changes.
    ///
    /// # Errors
    /// - [`SegmentTreeError::IndexOutOfRange`] if `index >= len`.
    /// - [`SegmentTreeError::Arithmetic`] if any tree rejects the value.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        let pending = self
            .trees
            .iter()
            .map(|tree| tree.plan_update(index, value))
            .collect::<Result<Vec<_>>>()?;
        for (tree, pending) in self.trees.iter_mut().zip(pending) {
            tree.commit(pending);
        }
        Ok(())
    }
}
