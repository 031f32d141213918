//! A built network together with its detected junctions.

use log::info;

use ix_core::{AnalysisConfig, Progress};
use ix_junction::{Junction, JunctionFilter, classify_junctions, group_junctions};
use ix_network::RoadNetwork;
use ix_search::{BoundedSearch, ConnectionFinder, clear_connections, connect_all};

use crate::PipelineResult;

/// Runs connection search, grouping and classification over one network.
///
/// The finder defaults to [`BoundedSearch`]; supply another
/// [`ConnectionFinder`] through [`with_finder`](Self::with_finder).
pub struct Analysis<F: ConnectionFinder = BoundedSearch> {
    config:    AnalysisConfig,
    network:   RoadNetwork,
    junctions: Vec<Junction>,
    finder:    F,
}

impl Analysis<BoundedSearch> {
    /// Validate `config` and wrap `network`.  No detection runs yet.
    pub fn new(config: AnalysisConfig, network: RoadNetwork) -> PipelineResult<Self> {
        Self::with_finder(config, network, BoundedSearch)
    }
}

impl<F: ConnectionFinder> Analysis<F> {
    pub fn with_finder(config: AnalysisConfig, network: RoadNetwork, finder: F) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self { config, network, junctions: Vec::new(), finder })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Replace the configuration.  Takes effect on the next
    /// [`detect`](Self::detect).
    pub fn reconfigure(&mut self, config: AnalysisConfig) -> PipelineResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Search connections, group junctions and classify them, discarding
    /// any previous results.  Returns the number of junctions.
    pub fn detect<P: Progress + ?Sized>(&mut self, progress: &mut P) -> usize {
        clear_connections(&mut self.network);
        self.junctions.clear();

        connect_all(&mut self.network, &self.finder, &self.config.search, progress);
        let mut junctions = group_junctions(&mut self.network, progress);
        classify_junctions(&self.network, &mut junctions, self.config.traffic, progress);
        self.junctions = junctions;

        info!(
            "{} junctions (max depth {}, max length {} m, {} traffic)",
            self.junctions.len(),
            self.config.search.max_depth,
            self.config.search.max_length_m,
            self.config.traffic,
        );
        self.junctions.len()
    }

    /// Junctions whose metrics pass `filter`, in number order.
    pub fn junctions_matching<'a>(&'a self, filter: &'a JunctionFilter) -> impl Iterator<Item = &'a Junction> + 'a {
        self.junctions.iter().filter(move |j| filter.matches(&j.metrics))
    }
}
