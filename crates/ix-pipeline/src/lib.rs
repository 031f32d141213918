//! `ix-pipeline`: end-to-end interchange detection.
//!
//! ```text
//! load table → build network → search connections → group → classify
//!            → write selected tables
//! ```
//!
//! [`Analysis`] owns a built network and its junctions; detection can be
//! re-run with new search bounds without reloading.  [`run_file`] is the
//! one-call path used by the `ix` binary.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`analysis`] | `Analysis`                                             |
//! | [`run`]      | `run_file`                                             |
//! | [`output`]   | `OutputSet`, `write_outputs`, `OutputReport`           |
//! | [`progress`] | `LogProgress`: stage progress through `log`           |
//! | [`error`]    | `PipelineError`, `PipelineResult<T>`                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_core::AnalysisConfig;
//! use ix_junction::JunctionFilter;
//! use ix_pipeline::{LogProgress, OutputSet, run_file, write_outputs};
//!
//! let analysis = run_file(Path::new("roads.csv"), AnalysisConfig::default(), &mut LogProgress::new())?;
//! let report = write_outputs(&analysis, Path::new("out/roads.csv"), &"rj".parse()?, &JunctionFilter::any());
//! ```

pub mod analysis;
pub mod error;
pub mod output;
pub mod progress;
pub mod run;

#[cfg(test)]
mod tests;

pub use analysis::Analysis;
pub use error::{PipelineError, PipelineResult};
pub use output::{OutputReport, OutputSet, write_outputs};
pub use progress::LogProgress;
pub use run::run_file;
