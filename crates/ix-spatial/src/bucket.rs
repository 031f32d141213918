//! Grid cells.
//!
//! A coordinate `c` falls in cell `ceil(c * 100)`, i.e. cell `k` covers the
//! half-open interval `((k - 1) / 100, k / 100]`.  A value exactly on a cell
//! edge lands in the same cell as the values just below it.

use ix_core::GeoPoint;

/// Cells per degree along each axis.
pub const CELLS_PER_DEGREE: f64 = 100.0;

/// Cell index of one coordinate.
#[inline]
pub fn cell_index(coordinate: f64) -> i32 {
    (coordinate * CELLS_PER_DEGREE).ceil() as i32
}

/// A grid cell.  Orders by latitude index, then longitude index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct BucketKey {
    pub lat: i32,
    pub lon: i32,
}

impl BucketKey {
    #[inline]
    pub fn of(pos: GeoPoint) -> Self {
        Self { lat: cell_index(pos.lat), lon: cell_index(pos.lon) }
    }
}

/// Cells crossed by the straight segment `a → b`, in ascending key order.
///
/// The segment is walked one latitude row at a time; within a row it covers
/// the longitude cells between its entry and exit points.  Band edges are
/// treated as closed, so a segment running along a cell edge or through a
/// cell corner is registered on both sides.  The result is proportional to
/// the cells actually crossed, never to the bounding rectangle.
pub fn cells_along(a: GeoPoint, b: GeoPoint) -> Vec<BucketKey> {
    let (lat_lo, lat_hi) = (a.lat.min(b.lat), a.lat.max(b.lat));
    let lon_at = |lat: f64| {
        if a.lat == b.lat {
            a.lon
        } else {
            a.lon + (lat - a.lat) / (b.lat - a.lat) * (b.lon - a.lon)
        }
    };

    let mut out = Vec::new();
    for row in cell_index(lat_lo)..=cell_index(lat_hi) {
        let (lon_lo, lon_hi) = if a.lat == b.lat {
            (a.lon.min(b.lon), a.lon.max(b.lon))
        } else {
            let enter = lon_at((f64::from(row - 1) / CELLS_PER_DEGREE).max(lat_lo));
            let leave = lon_at((f64::from(row) / CELLS_PER_DEGREE).min(lat_hi));
            (enter.min(leave), enter.max(leave))
        };
        out.extend((cell_index(lon_lo)..=cell_index(lon_hi)).map(|lon| BucketKey { lat: row, lon }));
    }
    out
}

/// Smallest cell present in both ascending cell lists, if any.
pub fn first_shared(a: &[BucketKey], b: &[BucketKey]) -> Option<BucketKey> {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return Some(a[i]),
        }
    }
    None
}
