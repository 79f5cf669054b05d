//! Segment spatial index.
//!
//! Purpose
//! - `SpatialIndex<T>`: box-keyed store answering "which entries might overlap
//!   this box" (false positives allowed, no false negatives).
//! - `LineSegmentIndex<T>`: segment-level add/remove/query on top of any
//!   backend, with an exact envelope filter on the way out.
//!
//! Why this design
//! - The hull and the simplifier delete as often as they insert, so the
//!   default backend is a dynamic R-tree (`rstar`), not a bulk-loaded one.
//! - Entries own their envelope; dropping the index frees everything, also on
//!   early `?` returns in callers.
//!
//! References
//! - Code cross-refs: `hull::RingHull::is_removable`,
//!   `simplify::TaggedLineStringSimplifier`

mod segment_index;
mod spatial;

pub use segment_index::LineSegmentIndex;
pub use spatial::{IndexEntry, RTreeIndex, ScanIndex, SpatialIndex};
