//! Segment trees and their shared and multi-aggregate wrappers.
//!
//! - `segment_tree`: the array-backed tree for one aggregate
//! - `multi`: one tree per aggregate kind over the same array
//! - `shared`: a reader-writer-locked tree for multi-threaded use

pub mod multi;
pub mod segment_tree;
pub mod shared;

pub use multi::MultiSegmentTree;
pub use segment_tree::SegmentTree;
pub use shared::{SegmentTreeReadGuard, SegmentTreeWriteGuard, SharedSegmentTree};
