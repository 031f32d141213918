//! Line geometry in, point and multi-line WKT text out.
//!
//! Parsing goes through the `wkt` crate into `geo_types`; the first ordinate
//! is latitude.  Output is written by hand because result tables carry a
//! fixed six decimal places.

use std::fmt::Write;

use geo_types::Geometry;
use ix_core::GeoPoint;
use wkt::TryFromWkt;

use crate::RowError;

/// Coordinates of a `LINESTRING (...)` or a single-part
/// `MULTILINESTRING ((...))`.  Extra ordinates are ignored.
pub fn parse_line(text: &str) -> Result<Vec<GeoPoint>, RowError> {
    let geometry = Geometry::<f64>::try_from_wkt_str(text)
        .map_err(|e| RowError::Geometry(format!("{e}")))?;

    let line = match geometry {
        Geometry::LineString(line) => line,
        Geometry::MultiLineString(multi) => {
            let count = multi.0.len();
            let mut parts = multi.0.into_iter();
            match (parts.next(), parts.next()) {
                (Some(line), None) => line,
                _ => return Err(RowError::Geometry(format!("{count} line parts, expected 1"))),
            }
        }
        _ => return Err(RowError::Geometry("not a line geometry".to_owned())),
    };
    Ok(line.coords().map(|c| GeoPoint::new(c.x, c.y)).collect())
}

fn push_coords(out: &mut String, points: impl IntoIterator<Item = GeoPoint>) {
    for (i, p) in points.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // writing to a String cannot fail
        let _ = write!(out, "{:.6} {:.6}", p.lat, p.lon);
    }
}

/// `MULTILINESTRING ((lat lon, ...))` with six decimal places.
pub fn multi_line(points: impl IntoIterator<Item = GeoPoint>) -> String {
    let mut out = String::from("MULTILINESTRING ((");
    push_coords(&mut out, points);
    out.push_str("))");
    out
}

/// `POINT (lat lon)` with six decimal places.
pub fn point(p: GeoPoint) -> String {
    format!("POINT ({:.6} {:.6})", p.lat, p.lon)
}
