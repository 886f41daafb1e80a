//! Error types for segment tree construction, queries and updates.

use crate::aggregate::AggregateKind;
use thiserror::Error;

/// Failure of an aggregate's merge function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A division had a zero divisor (e.g. `lcm(0, 0)`).
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in the value type.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Errors reported by segment tree operations.
///
/// Every error is detected before the tree is touched, so an operation that
/// returns `Err` leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentTreeError {
    /// Construction input was rejected (empty sequence, no aggregates, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A point index outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of leaves in the tree.
        len: usize,
    },

    /// A query range that is inverted or extends past the last leaf.
    ///
    /// `start` and `end` are reported as a half-open range `[start, end)`.
    #[error("range {start}..{end} out of range for length {len}")]
    InvalidRange {
        /// Inclusive lower bound.
        start: usize,
        /// Exclusive upper bound.
        end: usize,
        /// Number of leaves in the tree.
        len: usize,
    },

    /// Merging two values failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// The requested aggregate was not built into a `MultiSegmentTree`.
    #[error("aggregate `{0}` is not tracked by this tree")]
    UntrackedAggregate(AggregateKind),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SegmentTreeError>;
