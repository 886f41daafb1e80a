//! `SharedSegmentTree` — a thread-safe handle for sharing one tree.
//!
//! It acts as an `RwLock` over the tree, allowing:
//! - Multiple concurrent readers (queries)
//! - One exclusive writer (updates)
//!
//! Share it across threads with `Arc` or scoped threads.

use super::SegmentTree;
use crate::aggregate::Aggregate;
use crate::error::Result;
use core::fmt;
use core::ops::{Deref, DerefMut, RangeBounds};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

/// A segment tree behind a reader-writer lock.
pub struct SharedSegmentTree<A: Aggregate> {
    lock: RwLock<SegmentTree<A>>,
}

impl<A: Aggregate> SharedSegmentTree<A> {
    /// Wraps an existing tree.
    pub fn new(tree: SegmentTree<A>) -> Self {
        Self {
            lock: RwLock::new(tree),
        }
    }

    /// Acquires shared read access.
    ///
    /// While the guard is held, other readers may proceed but writers block.
    /// A lock poisoned by a panicking holder is recovered: updates are
    /// staged before they are written, so the tree is never left half-updated.
    pub fn read(&self) -> SegmentTreeReadGuard<'_, A> {
        SegmentTreeReadGuard {
            guard: self.lock.read().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Acquires exclusive write access.
    pub fn write(&self) -> SegmentTreeWriteGuard<'_, A> {
        SegmentTreeWriteGuard {
            guard: self.lock.write().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Always `false`; see [`SegmentTree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Shared-lock [`SegmentTree::query`].
    ///
    /// # Errors
    /// See [`SegmentTree::query`].
    pub fn query(&self, left: usize, right: usize) -> Result<A::Value> {
        self.read().query(left, right)
    }

    /// Shared-lock [`SegmentTree::fold`].
    ///
    /// # Errors
    /// See [`SegmentTree::fold`].
    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<A::Value> {
        self.read().fold(range)
    }

    /// Shared-lock [`SegmentTree::get`].
    ///
    /// # Errors
    /// See [`SegmentTree::get`].
    pub fn get(&self, index: usize) -> Result<A::Value> {
        self.read().get(index)
    }

    /// Exclusive-lock [`SegmentTree::update`].
    ///
    /// The new path is computed under the write lock, so a concurrent reader
    /// sees either the old or the new tree, never a mix.
    ///
    /// # Errors
    /// See [`SegmentTree::update`].
    pub fn update(&self, index: usize, value: A::Value) -> Result<()> {
        self.write().update(index, value)
    }

    /// Consumes the handle, returning the tree.
    pub fn into_inner(self) -> SegmentTree<A> {
        self.lock
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A: Aggregate> From<SegmentTree<A>> for SharedSegmentTree<A> {
    fn from(tree: SegmentTree<A>) -> Self {
        Self::new(tree)
    }
}

impl<A> fmt::Debug for SharedSegmentTree<A>
where
    A: Aggregate + fmt::Debug,
    A::Value: fmt::Debug,
{
    // Never blocks; a write-locked tree is shown as `<locked>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("SharedSegmentTree");
        match self.lock.try_read() {
            Ok(guard) => d.field("tree", &*guard),
            Err(TryLockError::Poisoned(err)) => d.field("tree", &*err.into_inner()),
            Err(TryLockError::WouldBlock) => d.field("tree", &format_args!("<locked>")),
        };
        d.finish()
    }
}

/// RAII guard for shared read access to a tree.
pub struct SegmentTreeReadGuard<'a, A: Aggregate> {
    guard: RwLockReadGuard<'a, SegmentTree<A>>,
}

impl<A: Aggregate> Deref for SegmentTreeReadGuard<'_, A> {
    type Target = SegmentTree<A>;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// RAII guard for exclusive write access to a tree.
pub struct SegmentTreeWriteGuard<'a, A: Aggregate> {
    guard: RwLockWriteGuard<'a, SegmentTree<A>>,
}

impl<A: Aggregate> Deref for SegmentTreeWriteGuard<'_, A> {
    type Target = SegmentTree<A>;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl<A: Aggregate> DerefMut for SegmentTreeWriteGuard<'_, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Sum;

    #[test]
    fn test_guards() {
        let shared = SharedSegmentTree::new(SegmentTree::<Sum<i64>>::build(&[1, 2, 3]).unwrap());
        {
            let mut guard = shared.write();
            guard.update(0, 10).unwrap();
            guard.update(2, 30).unwrap();
        }
        {
            let a = shared.read();
            let b = shared.read();
            assert_eq!(a.query(0, 2), Ok(42));
            assert_eq!(b.get(1), Ok(2));
        }
        assert_eq!(shared.len(), 3);
        assert_eq!(shared.into_inner().to_vec(), vec![10, 2, 30]);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let shared = SharedSegmentTree::new(SegmentTree::<Sum<i64>>::build(&[1, 2, 3]).unwrap());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = shared.write();
            panic!("writer panicked");
        }));
        assert!(result.is_err());
        assert!(format!("{shared:?}").contains("leaves: [1, 2, 3]"));
        assert_eq!(shared.query(0, 2), Ok(6));
        shared.update(1, 5).unwrap();
        assert_eq!(shared.fold(..), Ok(9));
    }

    #[test]
    fn test_debug_reads_through_lock() {
        let shared = SharedSegmentTree::new(SegmentTree::<Sum<i64>>::build(&[1, 2, 3]).unwrap());
        assert_eq!(
            format!("{shared:?}"),
            "SharedSegmentTree { tree: SegmentTree { aggregate: Sum, leaves: [1, 2, 3], .. } }"
        );

        let guard = shared.write();
        assert_eq!(
            format!("{shared:?}"),
            "SharedSegmentTree { tree: <locked> }"
        );
        drop(guard);
    }
}
