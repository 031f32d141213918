//! `ix-io`: read road tables, write result tables.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`load`]     | `load_network_csv`, `load_network_reader`, `LoadSummary`  |
//! | [`write`]    | roads, crossing points, connections and junction tables   |
//! | [`geometry`] | `LINESTRING`/`MULTILINESTRING` parsing, WKT formatting    |
//! | [`error`]    | `TableError`, `TableResult<T>`, `RowError`                |
//!
//! # Input format
//!
//! ```csv
//! WKT,oneway,layer,fclass
//! "MULTILINESTRING ((45.0 9.99, 45.0 10.01))",B,1,motorway
//! "LINESTRING (44.99 10.0, 45.01 10.0)",F,0,primary
//! ```
//!
//! `WKT` must be the first column.  Coordinates are read as `lat lon`.
//! `oneway` is `F` (forward), `T` (reverse) or `B` (both ways); only the
//! first character counts.  `fclass` is optional; when present, rows of
//! non-road classes are dropped.

pub mod error;
pub mod geometry;
pub mod load;
pub mod write;


pub use error::{RowError, TableError, TableResult};
pub use load::{LoadSummary, ROAD_CLASSES, load_network_csv, load_network_reader};
pub use write::{
    junction_file_name, output_path, write_connections, write_crossing_points, write_junction,
    write_roads,
};
