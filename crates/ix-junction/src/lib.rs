//! `ix-junction`: group connected crossing points into junctions and
//! describe each junction by its terminal points.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`junction`] | `Junction`, `JunctionMetrics`                            |
//! | [`group`]    | `group_junctions`: connected components of crossings    |
//! | [`classify`] | `PointType`, `classify_point`, `classify_junctions`      |
//! | [`filter`]   | `Requirement`, `JunctionFilter`                          |
//! | [`error`]    | `FilterError`                                            |
//!
//! Run `group_junctions` after the connection search, then
//! `classify_junctions` to fill in point types and metrics.

pub mod classify;
pub mod error;
pub mod filter;
pub mod group;
pub mod junction;


pub use classify::{PointType, classify_junction, classify_junctions, classify_point};
pub use error::FilterError;
pub use filter::{JunctionFilter, Requirement};
pub use group::group_junctions;
pub use junction::{Junction, JunctionMetrics};
