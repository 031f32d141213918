//! Result tables.
//!
//! Every writer takes any `io::Write` sink, writes a header row and returns
//! the number of data rows written.

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::Writer;

use ix_core::RoadId;
use ix_junction::Junction;
use ix_network::{Road, RoadNetwork};

use crate::{TableResult, geometry};

const ROAD_HEADER: [&str; 6] = ["WKT", "roadID", "oneway", "layer", "crossedRoads", "length"];
const CROSSING_HEADER: [&str; 5] = ["WKT", "layer", "topRoad", "bottomRoad", "junction"];
const CONNECTION_HEADER: [&str; 7] =
    ["WKT", "connectionID", "oneway", "layer", "crossedRoads", "length", "junction"];

// ── File naming ───────────────────────────────────────────────────────────────

/// `dir/stem_suffix.ext` for an input at `dir/stem.ext`.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    input.with_file_name(name)
}

/// Suffix naming a junction file by its metrics and number, e.g.
/// `junction_s4_l2_x4_c0_i0_1`.
pub fn junction_file_name(junction: &Junction) -> String {
    let m = &junction.metrics;
    format!(
        "junction_s{}_l{}_x{}_c{}_i{}_{}",
        m.sides, m.levels, m.crossing_points, m.conflict_roads, m.intersection_points, junction.number
    )
}

// ── Rows ──────────────────────────────────────────────────────────────────────

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|i| i.to_string()).collect::<Vec<_>>().join(";")
}

fn road_row(net: &RoadNetwork, road: &Road) -> [String; 6] {
    let crossed = road.crossings.iter().map(|r| {
        let c = net.crossing(r.crossing);
        net.road(c.other_road(r.is_top)).number
    });
    [
        geometry::multi_line(road.polyline.iter().map(|&p| net.pos(p))),
        road.number.to_string(),
        road.direction_code().to_string(),
        join(&road.layers),
        join(crossed),
        format!("{:.0}", road.length_m),
    ]
}

fn junction_number(junctions: &[Junction], net: &RoadNetwork, crossing: usize) -> String {
    net.crossings[crossing]
        .junction
        .and_then(|id| junctions.get(id.index()))
        .map(|j| j.number.to_string())
        .unwrap_or_default()
}

// ── Tables ────────────────────────────────────────────────────────────────────

/// Every aggregated road; shadow copies are left out.
pub fn write_roads<W: Write>(net: &RoadNetwork, out: W) -> TableResult<usize> {
    let mut w = Writer::from_writer(out);
    w.write_record(ROAD_HEADER)?;
    let mut rows = 0;
    for (_, road) in net.original_roads() {
        w.write_record(road_row(net, road))?;
        rows += 1;
    }
    w.flush()?;
    Ok(rows)
}

/// Connected crossing points with the numbers of their roads and junction.
pub fn write_crossing_points<W: Write>(
    net:       &RoadNetwork,
    junctions: &[Junction],
    out:       W,
) -> TableResult<usize> {
    let mut w = Writer::from_writer(out);
    w.write_record(CROSSING_HEADER)?;
    let mut rows = 0;
    for (id, c) in net.connected_crossings() {
        w.write_record([
            geometry::point(net.pos(c.point)),
            "0".to_owned(),
            net.road(c.top).number.to_string(),
            net.road(c.bottom).number.to_string(),
            junction_number(junctions, net, id.index()),
        ])?;
        rows += 1;
    }
    w.flush()?;
    Ok(rows)
}

/// One row per connecting path of every crossing point in a junction.
/// Connection ids restart from 0 for each crossing point.
pub fn write_connections<W: Write>(
    net:       &RoadNetwork,
    junctions: &[Junction],
    out:       W,
) -> TableResult<usize> {
    let mut w = Writer::from_writer(out);
    w.write_record(CONNECTION_HEADER)?;
    let mut rows = 0;
    for (id, c) in net.connected_crossings() {
        if c.junction.is_none() {
            continue;
        }
        let junction = junction_number(junctions, net, id.index());
        for (i, path) in c.connections.iter().enumerate() {
            w.write_record([
                geometry::multi_line(path.iter().map(|&p| net.pos(p))),
                i.to_string(),
                "X".to_owned(),
                "0".to_owned(),
                String::new(),
                format!("{:.0}", net.polyline_length_m(path)),
                junction.clone(),
            ])?;
            rows += 1;
        }
    }
    w.flush()?;
    Ok(rows)
}

/// Member roads of one junction in the roads table layout.
///
/// A shadow copy is written only when its aggregated original is not itself
/// a member, so each physical road appears once.
pub fn write_junction<W: Write>(net: &RoadNetwork, junction: &Junction, out: W) -> TableResult<usize> {
    let is_member = |id: Option<RoadId>| id.is_some_and(|id| junction.roads.contains(&id));

    let mut w = Writer::from_writer(out);
    w.write_record(ROAD_HEADER)?;
    let mut rows = 0;
    for &id in &junction.roads {
        let road = net.road(id);
        if road.is_copy && is_member(net.original_by_number(road.number)) {
            continue;
        }
        w.write_record(road_row(net, road))?;
        rows += 1;
    }
    w.flush()?;
    Ok(rows)
}
