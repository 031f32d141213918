//! `ix-spatial`: canonical points and raw segments on a 0.01° grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`bucket`]  | `BucketKey`, coordinate → cell mapping, segment cell walk  |
//! | [`point`]   | `Point`, `PointStore` (exact-coordinate deduplication)     |
//! | [`segment`] | `Segment`, `SegmentGraph`, segment/segment intersection    |
//!
//! Points are deduplicated by exact coordinate equality inside one grid
//! cell.  Segments are registered in every cell they pass through, so two
//! segments that cross always share at least one cell.

pub mod bucket;
pub mod point;
pub mod segment;

#[cfg(test)]
mod tests;

pub use bucket::{BucketKey, cell_index, cells_along, first_shared};
pub use point::{Point, PointStore};
pub use segment::{Segment, SegmentGraph, intersection};
