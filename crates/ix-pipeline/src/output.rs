//! Writing the selected result tables next to a base output path.
//!
//! Each table goes to its own file.  A file that cannot be written is
//! logged and recorded in the report; the remaining files are still
//! attempted.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{error, info};

use ix_io::{
    TableError, TableResult, junction_file_name, output_path, write_connections, write_crossing_points,
    write_junction, write_roads,
};
use ix_junction::JunctionFilter;
use ix_search::ConnectionFinder;

use crate::{Analysis, PipelineError};

/// Which tables to write.
///
/// Parsed from a selector string of letters: `c` connections, `j`
/// junctions, `r` roads, `x` crossing points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputSet {
    pub connections: bool,
    pub junctions: bool,
    pub roads: bool,
    pub crossing_points: bool,
}

impl OutputSet {
    pub fn all() -> Self {
        Self { connections: true, junctions: true, roads: true, crossing_points: true }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for OutputSet {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = OutputSet::default();
        for ch in s.trim().chars() {
            match ch {
                'c' => set.connections = true,
                'j' => set.junctions = true,
                'r' => set.roads = true,
                'x' => set.crossing_points = true,
                other => return Err(PipelineError::OutputSelector(other)),
            }
        }
        Ok(set)
    }
}

/// Files written and files that failed.
#[derive(Debug, Default)]
pub struct OutputReport {
    /// Path and data row count of every file written.
    pub written: Vec<(PathBuf, usize)>,
    pub failed: Vec<(PathBuf, TableError)>,
}

impl OutputReport {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: TableResult<usize>) {
        match result {
            Ok(rows) => {
                info!("wrote {} ({rows} rows)", path.display());
                self.written.push((path, rows));
            }
            Err(e) => {
                error!("cannot write {}: {e}", path.display());
                self.failed.push((path, e));
            }
        }
    }
}

fn to_file<T>(path: &Path, write: impl FnOnce(BufWriter<File>) -> TableResult<T>) -> TableResult<T> {
    let file = File::create(path)?;
    write(BufWriter::new(file))
}

/// Write every table in `set` next to `base`: `<stem>_roads.<ext>`,
/// `<stem>_crossing_points.<ext>`, `<stem>_connections.<ext>`, and one
/// `<stem>_junction_s.._l.._x.._c.._i.._<n>.<ext>` per junction passing
/// `filter`.
pub fn write_outputs<F: ConnectionFinder>(
    analysis: &Analysis<F>,
    base:     &Path,
    set:      &OutputSet,
    filter:   &JunctionFilter,
) -> OutputReport {
    let net = analysis.network();
    let junctions = analysis.junctions();
    let mut report = OutputReport::default();

    if set.roads {
        let path = output_path(base, "roads");
        let result = to_file(&path, |w| write_roads(net, w));
        report.record(path, result);
    }
    if set.crossing_points {
        let path = output_path(base, "crossing_points");
        let result = to_file(&path, |w| write_crossing_points(net, junctions, w));
        report.record(path, result);
    }
    if set.connections {
        let path = output_path(base, "connections");
        let result = to_file(&path, |w| write_connections(net, junctions, w));
        report.record(path, result);
    }
    if set.junctions {
        let mut matched = 0usize;
        for junction in analysis.junctions_matching(filter) {
            let path = output_path(base, &junction_file_name(junction));
            let result = to_file(&path, |w| write_junction(net, junction, w));
            report.record(path, result);
            matched += 1;
        }
        info!("{matched} of {} junctions pass the filter", junctions.len());
    }
    report
}
