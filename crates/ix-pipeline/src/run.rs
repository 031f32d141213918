//! One-call load-and-detect.

use std::path::Path;

use ix_core::{AnalysisConfig, Progress};
use ix_io::load_network_csv;

use crate::{Analysis, PipelineResult};

/// Load the road table at `input`, build the network and run detection.
///
/// Fails only when the configuration is invalid or the table cannot be
/// read; malformed rows are skipped by the loader.
pub fn run_file<P: Progress + ?Sized>(
    input:    &Path,
    config:   AnalysisConfig,
    progress: &mut P,
) -> PipelineResult<Analysis> {
    config.validate()?;
    let (builder, _summary) = load_network_csv(input)?;
    let network = builder.build_observed(progress);

    let mut analysis = Analysis::new(config, network)?;
    analysis.detect(progress);
    Ok(analysis)
}
