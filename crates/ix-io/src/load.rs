//! Road table loader.

use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use ix_core::Direction;
use ix_network::NetworkBuilder;

use crate::{RowError, TableError, TableResult, geometry};

/// Functional classes kept when the table has an `fclass` column.  A blank
/// class is kept too.
pub const ROAD_CLASSES: &[&str] = &[
    "motorway",
    "motorway_link",
    "primary",
    "primary_link",
    "secondary",
    "secondary_link",
    "tertiary",
    "tertiary_link",
    "trunk",
    "trunk_link",
    "unclassified",
    "unknown",
];

const GEOMETRY: &str = "WKT";
const ONEWAY: &str = "oneway";
const LAYER: &str = "layer";

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoadRecord {
    #[serde(rename = "WKT")]
    wkt:    String,
    oneway: String,
    layer:  String,
    #[serde(default)]
    fclass: Option<String>,
}

/// Row counts from one load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Data rows read, excluding the header.
    pub rows: usize,
    /// Rows dropped by the `fclass` allow-list.
    pub filtered: usize,
    /// Malformed rows.
    pub skipped: usize,
    /// Segments added to the builder.
    pub segments: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road table from a file.
pub fn load_network_csv(path: &Path) -> TableResult<(NetworkBuilder, LoadSummary)> {
    let file = std::fs::File::open(path)?;
    load_network_reader(file, &path.display().to_string())
}

/// Like [`load_network_csv`] but accepts any `Read` source.  `source_name`
/// only labels diagnostics.
///
/// Malformed rows, including records that are not valid UTF-8, are logged
/// at warn level and skipped.  A header without the required columns, or
/// with the geometry column not first, fails the whole load, as does an
/// I/O error from the reader.
pub fn load_network_reader<R: Read>(
    reader:      R,
    source_name: &str,
) -> TableResult<(NetworkBuilder, LoadSummary)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_headers(&headers, source_name)?;
    let has_class = headers.iter().any(|h| h == "fclass");

    let mut builder = NetworkBuilder::new();
    let mut summary = LoadSummary::default();

    for result in csv_reader.records() {
        summary.rows += 1;
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                warn!("{source_name}, line {line}: {}", RowError::from(e));
                summary.skipped += 1;
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());

        let row: RoadRecord = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                warn!("{source_name}, line {line}: {}", RowError::from(e));
                summary.skipped += 1;
                continue;
            }
        };

        if has_class && !is_road_class(row.fclass.as_deref().unwrap_or("")) {
            summary.filtered += 1;
            continue;
        }

        match add_row(&mut builder, &row) {
            Ok(n) => summary.segments += n,
            Err(e) => {
                warn!("{source_name}, line {line}: {e}");
                summary.skipped += 1;
            }
        }
    }

    info!(
        "{source_name}: {} rows, {} segments ({} skipped, {} filtered by class)",
        summary.rows, summary.segments, summary.skipped, summary.filtered
    );
    Ok((builder, summary))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_headers(headers: &csv::StringRecord, source_name: &str) -> TableResult<()> {
    for column in [GEOMETRY, ONEWAY, LAYER] {
        if !headers.iter().any(|h| h == column) {
            return Err(TableError::MissingColumn { table: source_name.to_owned(), column });
        }
    }
    if headers.get(0) != Some(GEOMETRY) {
        return Err(TableError::GeometryNotFirst { table: source_name.to_owned(), column: GEOMETRY });
    }
    Ok(())
}

fn is_road_class(class: &str) -> bool {
    let class = class.trim();
    class.is_empty() || ROAD_CLASSES.contains(&class)
}

fn add_row(builder: &mut NetworkBuilder, row: &RoadRecord) -> Result<usize, RowError> {
    let layer: i32 = row.layer.trim().parse().map_err(|_| RowError::Layer(row.layer.clone()))?;
    let direction = Direction::from_code(&row.oneway).ok_or_else(|| RowError::Direction(row.oneway.clone()))?;
    let coords = geometry::parse_line(&row.wkt)?;
    Ok(builder.add_polyline(&coords, direction, layer)?)
}
