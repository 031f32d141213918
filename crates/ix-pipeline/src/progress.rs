//! Stage progress through the `log` facade.

use std::time::Instant;

use log::{debug, info};

use ix_core::{Progress, Stage};

/// Logs each stage's result and duration at info level, and periodic
/// progress at debug level.
pub struct LogProgress {
    started: Option<(Stage, Instant)>,
}

impl LogProgress {
    pub fn new() -> Self {
        Self { started: None }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn on_stage_start(&mut self, stage: Stage, total: usize) {
        debug!("{stage}: starting over {total} items");
        self.started = Some((stage, Instant::now()));
    }

    fn on_progress(&mut self, stage: Stage, done: usize, total: usize) {
        debug!("{stage}: {done}/{total}");
    }

    fn on_stage_end(&mut self, stage: Stage, produced: usize) {
        match self.started.take() {
            Some((s, t)) if s == stage => {
                info!("{stage}: {produced} in {:.3} s", t.elapsed().as_secs_f64());
            }
            _ => info!("{stage}: {produced}"),
        }
    }
}
