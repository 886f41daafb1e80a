//! `SegmentTree` — an array-backed segment tree over a fixed number of leaves.
//!
//! The tree is laid out implicitly in a flat `Vec`: the root lives at index 0
//! and the node at index `i` covering `[start, end]` has its children at
//! `2 * i + 1` (covering `[start, mid]`) and `2 * i + 2` (covering
//! `[mid + 1, end]`). `4 * n` slots are always enough for `n` leaves.
//!
//! Time Complexity:
//! - Build: O(n)
//! - Query: O(log n)
//! - Update: O(log n)
//!
//! All indices are checked at the API boundary. Updates are staged before
//! they are written, so a failing merge never leaves the tree half-updated.

use crate::aggregate::Aggregate;
use crate::error::{Result, SegmentTreeError};
use core::fmt;
use core::ops::{Bound, RangeBounds};

/// A segment tree answering range queries for one [`Aggregate`].
pub struct SegmentTree<A: Aggregate> {
    nodes: Vec<A::Value>,
    len: usize,
    aggregate: A,
}

/// Node writes computed for a point update, ordered leaf first.
pub(crate) struct PendingUpdate<V> {
    writes: Vec<(usize, V)>,
}

impl<A> SegmentTree<A>
where
    A: Aggregate + Default,
{
    /// Builds a tree over `values` using the default instance of `A`.
    ///
    /// ```rust
    /// use segtree::{SegmentTree, Sum};
    ///
    /// let tree = SegmentTree::<Sum<i64>>::build(&[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(tree.query(1, 3).unwrap(), 9);
    /// ```
    ///
    /// # Errors
    /// See [`SegmentTree::with_aggregate`].
    pub fn build(values: &[A::Value]) -> Result<Self> {
        Self::with_aggregate(values, A::default())
    }
}

impl<A: Aggregate> SegmentTree<A> {
    /// Builds a tree over `values` that summarizes ranges with `aggregate`.
    ///
    /// # Errors
    /// - [`SegmentTreeError::InvalidArgument`] if `values` is empty.
    /// - [`SegmentTreeError::Arithmetic`] if merging two sub-ranges fails.
    pub fn with_aggregate(values: &[A::Value], aggregate: A) -> Result<Self> {
        if values.is_empty() {
            return Err(SegmentTreeError::InvalidArgument(
                "cannot build a segment tree from an empty sequence",
            ));
        }
        let slots = values
            .len()
            .checked_mul(4)
            .ok_or(SegmentTreeError::InvalidArgument("sequence too long"))?;

        let mut tree = Self {
            nodes: vec![aggregate.identity(); slots],
            len: values.len(),
            aggregate,
        };
        if let Err(err) = tree.build_recursive(values, 0, 0, values.len() - 1) {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = values.len(), error = %err, "segment tree build rejected");
            return Err(err);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len = tree.len, slots, "built segment tree");
        Ok(tree)
    }

    fn build_recursive(
        &mut self,
        values: &[A::Value],
        node: usize,
        start: usize,
        end: usize,
    ) -> Result<()> {
        if start == end {
            self.nodes[node] = values[start].clone();
            return Ok(());
        }

        let mid = start + (end - start) / 2;
        let left_child = 2 * node + 1;
        let right_child = 2 * node + 2;

        self.build_recursive(values, left_child, start, mid)?;
        self.build_recursive(values, right_child, mid + 1, end)?;

        self.nodes[node] = self
            .aggregate
            .merge(&self.nodes[left_child], &self.nodes[right_child])?;
        Ok(())
    }

    /// Number of leaves. Fixed at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a tree cannot be built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The aggregate this tree was built with.
    pub fn aggregate(&self) -> &A {
        &self.aggregate
    }

    /// The aggregate's neutral element, the result of folding an empty range.
    pub fn identity(&self) -> A::Value {
        self.aggregate.identity()
    }

    /// Aggregates the closed range `[left, right]`.
    ///
    /// # Errors
    /// - [`SegmentTreeError::InvalidRange`] unless `left <= right < len`.
    /// - [`SegmentTreeError::Arithmetic`] if merging partial results fails.
    pub fn query(&self, left: usize, right: usize) -> Result<A::Value> {
        if left > right || right >= self.len {
            #[cfg(feature = "tracing")]
            tracing::trace!(left, right, len = self.len, "query range rejected");
            return Err(SegmentTreeError::InvalidRange {
                start: left,
                end: right.saturating_add(1),
                len: self.len,
            });
        }
        self.query_recursive(0, 0, self.len - 1, left, right)
    }

    fn query_recursive(
        &self,
        node: usize,
        start: usize,
        end: usize,
        left: usize,
        right: usize,
    ) -> Result<A::Value> {
        if left <= start && end <= right {
            return Ok(self.nodes[node].clone());
        }

        let mid = start + (end - start) / 2;
        let left_child = 2 * node + 1;
        let right_child = 2 * node + 2;

        // A child disjoint from the query would contribute the identity; skip it.
        if right <= mid {
            return self.query_recursive(left_child, start, mid, left, right);
        }
        if left > mid {
            return self.query_recursive(right_child, mid + 1, end, left, right);
        }

        let l_res = self.query_recursive(left_child, start, mid, left, right)?;
        let r_res = self.query_recursive(right_child, mid + 1, end, left, right)?;
        Ok(self.aggregate.merge(&l_res, &r_res)?)
    }

    /// Aggregates any Rust range of leaf indices.
    ///
    /// An empty range inside the tree yields [`identity`](Self::identity).
    ///
    /// ```rust
    /// use segtree::{BitAnd, SegmentTree};
    ///
    /// let tree = SegmentTree::<BitAnd<u8>>::build(&[0b1110, 0b0111, 0b0110]).unwrap();
    /// assert_eq!(tree.fold(..2).unwrap(), 0b0110);
    /// assert_eq!(tree.fold(1..1).unwrap(), u8::MAX);
    /// ```
    ///
    /// # Errors
    /// - [`SegmentTreeError::InvalidRange`] if the range is inverted or extends past `len`.
    /// - [`SegmentTreeError::Arithmetic`] if merging partial results fails.
    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<A::Value> {
        let (start, end) = self.resolve(&range)?;
        if start == end {
            return Ok(self.identity());
        }
        self.query_recursive(0, 0, self.len - 1, start, end - 1)
    }

    /// Converts `range` to a checked half-open `[start, end)`.
    fn resolve<R: RangeBounds<usize>>(&self, range: &R) -> Result<(usize, usize)> {
        let invalid = |start: usize, end: usize| SegmentTreeError::InvalidRange {
            start,
            end,
            len: self.len,
        };
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or(invalid(s, s))?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1).ok_or(invalid(start, e))?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len,
        };
        if start > end || end > self.len {
            return Err(invalid(start, end));
        }
        Ok((start, end))
    }

    /// Returns the value stored at leaf `index`.
    ///
    /// # Errors
    /// [`SegmentTreeError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<A::Value> {
        self.check_index(index)?;
        let (mut node, mut start, mut end) = (0, 0, self.len - 1);
        while start != end {
            let mid = start + (end - start) / 2;
            if index <= mid {
                node = 2 * node + 1;
                end = mid;
            } else {
                node = 2 * node + 2;
                start = mid + 1;
            }
        }
        Ok(self.nodes[node].clone())
    }

    /// Collects the leaves in index order.
    pub fn to_vec(&self) -> Vec<A::Value> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_leaves(0, 0, self.len - 1, &mut out);
        out
    }

    fn collect_leaves(&self, node: usize, start: usize, end: usize, out: &mut Vec<A::Value>) {
        if start == end {
            out.push(self.nodes[node].clone());
            return;
        }
        let mid = start + (end - start) / 2;
        self.collect_leaves(2 * node + 1, start, mid, out);
        self.collect_leaves(2 * node + 2, mid + 1, end, out);
    }

    /// Sets leaf `index` to `value` and recomputes its ancestors.
    ///
    /// The update is all-or-nothing: if any ancestor cannot be recomputed the
    /// tree is left untouched.
    ///
    /// # Errors
    /// - [`SegmentTreeError::IndexOutOfRange`] if `index >= len`.
    /// - [`SegmentTreeError::Arithmetic`] if recomputing an ancestor fails.
    pub fn update(&mut self, index: usize, value: A::Value) -> Result<()> {
        let pending = self.plan_update(index, value)?;
        self.commit(pending);
        Ok(())
    }

    /// Computes the node writes for `update(index, value)` without applying them.
    pub(crate) fn plan_update(
        &self,
        index: usize,
        value: A::Value,
    ) -> Result<PendingUpdate<A::Value>> {
        self.check_index(index)?;

        // Root-to-leaf path of internal nodes.
        let mut path = Vec::new();
        let (mut node, mut start, mut end) = (0, 0, self.len - 1);
        while start != end {
            path.push(node);
            let mid = start + (end - start) / 2;
            if index <= mid {
                node = 2 * node + 1;
                end = mid;
            } else {
                node = 2 * node + 2;
                start = mid + 1;
            }
        }

        let mut writes = Vec::with_capacity(path.len() + 1);
        writes.push((node, value));

        // Pull up
        for &parent in path.iter().rev() {
            let (child, current) = &writes[writes.len() - 1];
            let merged = if *child == 2 * parent + 1 {
                self.aggregate.merge(current, &self.nodes[child + 1])
            } else {
                self.aggregate.merge(&self.nodes[child - 1], current)
            };
            match merged {
                Ok(merged) => writes.push((parent, merged)),
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(index, error = %err, "point update rejected");
                    return Err(err.into());
                }
            }
        }

        Ok(PendingUpdate { writes })
    }

    /// Applies writes produced by [`plan_update`](Self::plan_update) on this tree.
    pub(crate) fn commit(&mut self, pending: PendingUpdate<A::Value>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(nodes = pending.writes.len(), "committing point update");
        for (node, value) in pending.writes {
            self.nodes[node] = value;
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(SegmentTreeError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<A> Clone for SegmentTree<A>
where
    A: Aggregate + Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            len: self.len,
            aggregate: self.aggregate.clone(),
        }
    }
}

impl<A> fmt::Debug for SegmentTree<A>
where
    A: Aggregate + fmt::Debug,
    A::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("aggregate", &self.aggregate)
            .field("leaves", &self.to_vec())
            .finish_non_exhaustive()
    }
}
