//! `ix-core`: foundational types for the interchange detector.
//!
//! Every other `ix-*` crate depends on this one.  It has no `ix-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`ids`]         | `PointId`, `SegmentId`, `RoadId`, `CrossingId`, `JunctionId` |
//! | [`geo`]         | `GeoPoint`, haversine distance, bearings                |
//! | [`direction`]   | `Direction` (input traffic code), `TrafficHand`         |
//! | [`config`]      | `AnalysisConfig`, `SearchBounds`                        |
//! | [`progress`]    | `Stage`, `Progress` observer, `NoProgress`              |
//! | [`error`]       | `IxError`, `IxResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod progress;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AnalysisConfig, SearchBounds};
pub use direction::{Direction, TrafficHand};
pub use error::{IxError, IxResult};
pub use geo::GeoPoint;
pub use ids::{CrossingId, JunctionId, PointId, RoadId, SegmentId};
pub use progress::{NoProgress, Progress, Stage};
