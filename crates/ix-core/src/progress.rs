//! Stage progress reporting.
//!
//! The pipeline stages call into a [`Progress`] implementation at their
//! boundaries and periodically while they run.  All methods default to
//! no-ops, so implementors override only what they care about.
//!
//! # Example: log every stage
//!
//! ```rust,ignore
//! struct StageLogger;
//!
//! impl Progress for StageLogger {
//!     fn on_stage_end(&mut self, stage: Stage, produced: usize) {
//!         log::info!("{stage}: {produced}");
//!     }
//! }
//! ```

use std::fmt;

/// The batch stages, in execution order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Segments → roads.
    Aggregate,
    /// Bucket scan for grade-separated intersections.
    DetectCrossings,
    /// Shadow roads for both-way roads.
    SplitBothWay,
    /// Bounded search per crossing point.
    SearchConnections,
    /// Connected components of linked crossing points.
    GroupJunctions,
    /// Point types and metrics per junction.
    ClassifyJunctions,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Aggregate         => "aggregate",
            Stage::DetectCrossings   => "detect-crossings",
            Stage::SplitBothWay      => "split-both-way",
            Stage::SearchConnections => "search-connections",
            Stage::GroupJunctions    => "group-junctions",
            Stage::ClassifyJunctions => "classify-junctions",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callbacks invoked by the pipeline stages.
pub trait Progress {
    /// Called before a stage starts.  `total` is the number of work items
    /// the stage will visit.
    fn on_stage_start(&mut self, _stage: Stage, _total: usize) {}

    /// Called while a stage runs with the number of work items done so far.
    fn on_progress(&mut self, _stage: Stage, _done: usize, _total: usize) {}

    /// Called after a stage completes.  `produced` is the number of entities
    /// (roads, crossing points, junctions…) the stage created or marked.
    fn on_stage_end(&mut self, _stage: Stage, _produced: usize) {}
}

/// A [`Progress`] that ignores every callback.
pub struct NoProgress;

impl Progress for NoProgress {}
