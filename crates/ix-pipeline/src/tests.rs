//! Unit tests for ix-pipeline.

use std::path::{Path, PathBuf};

use ix_core::{AnalysisConfig, SearchBounds, TrafficHand};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A both-way motorway on layer 1 over a both-way arterial, linked by four
/// one-way ramps that meet each road 200 m from the crossing.
const DIAMOND_CSV: &str = "\
WKT,oneway,layer,fclass
\"MULTILINESTRING ((45.0 9.990, 45.0 9.998, 45.0 10.002, 45.0 10.010))\",B,1,motorway
\"MULTILINESTRING ((44.990 10.0, 44.998 10.0, 45.002 10.0, 45.010 10.0))\",B,0,primary
\"MULTILINESTRING ((45.0 9.998, 45.002 10.0))\",F,0,motorway_link
\"MULTILINESTRING ((45.002 10.0, 45.0 10.002))\",F,0,motorway_link
\"MULTILINESTRING ((45.0 10.002, 44.998 10.0))\",F,0,motorway_link
\"MULTILINESTRING ((44.998 10.0, 45.0 9.998))\",F,0,motorway_link
\"MULTILINESTRING ((45.0 10.1, 45.001 10.1))\",F,0,footway
";

fn config(max_depth: usize, max_length_m: f64) -> AnalysisConfig {
    AnalysisConfig::new(TrafficHand::Right, SearchBounds::new(max_depth, max_length_m))
}

fn diamond_file(dir: &Path) -> PathBuf {
    let path = dir.join("diamond.csv");
    std::fs::write(&path, DIAMOND_CSV).unwrap();
    path
}

#[cfg(test)]
mod analysis_tests {
    use super::*;
    use crate::{Analysis, PipelineError, run_file};
    use ix_core::NoProgress;
    use ix_junction::{JunctionFilter, JunctionMetrics, Requirement};

    #[test]
    fn diamond_is_one_four_sided_junction() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = run_file(&diamond_file(dir.path()), config(3, 300.0), &mut NoProgress).unwrap();

        assert_eq!(analysis.network().roads.len(), 16);
        assert_eq!(analysis.network().crossings.len(), 4);
        assert_eq!(analysis.junctions().len(), 1);
        assert_eq!(analysis.junctions()[0].metrics, JunctionMetrics {
            crossing_points:     4,
            sides:               4,
            levels:              2,
            conflict_roads:      0,
            intersection_points: 0,
        });
    }

    #[test]
    fn filter_selects_junctions() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = run_file(&diamond_file(dir.path()), config(3, 300.0), &mut NoProgress).unwrap();

        let four_sided = JunctionFilter { sides: Requirement::Equal(4), ..JunctionFilter::any() };
        assert_eq!(analysis.junctions_matching(&four_sided).count(), 1);

        let bigger = JunctionFilter { crossing_points: Requirement::Greater(4), ..JunctionFilter::any() };
        assert_eq!(analysis.junctions_matching(&bigger).count(), 0);
    }

    #[test]
    fn detection_reruns_with_new_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut analysis = run_file(&diamond_file(dir.path()), config(3, 300.0), &mut NoProgress).unwrap();
        let before = analysis.junctions()[0].metrics;

        analysis.reconfigure(config(2, 10.0)).unwrap();
        assert_eq!(analysis.detect(&mut NoProgress), 0);
        assert!(analysis.network().crossings.iter().all(|c| !c.connection_exists && c.junction.is_none()));

        analysis.reconfigure(config(3, 300.0)).unwrap();
        assert_eq!(analysis.detect(&mut NoProgress), 1);
        assert_eq!(analysis.junctions()[0].metrics, before);
    }

    #[test]
    fn length_budget_alone_finds_the_diamond() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = run_file(&diamond_file(dir.path()), config(1, 900.0), &mut NoProgress).unwrap();

        assert!(analysis.network().crossings.iter().all(|c| c.connection_exists));
        assert_eq!(analysis.junctions().len(), 1);
        assert_eq!(analysis.junctions()[0].metrics.sides, 4);
        assert_eq!(analysis.junctions()[0].metrics.crossing_points, 4);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_file(&diamond_file(dir.path()), config(3, -300.0), &mut NoProgress);
        assert!(matches!(result, Err(PipelineError::Config(_))));

        let net = ix_network::NetworkBuilder::new().build();
        assert!(Analysis::new(config(3, f64::NAN), net).is_err());
    }

    #[test]
    fn missing_input_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_file(&dir.path().join("absent.csv"), config(3, 300.0), &mut NoProgress);
        assert!(matches!(result, Err(PipelineError::Load(_))));
    }
}

#[cfg(test)]
mod output_tests {
    use super::*;
    use crate::{LogProgress, OutputSet, PipelineError, run_file, write_outputs};
    use ix_junction::{JunctionFilter, Requirement};

    #[test]
    fn selector_letters() {
        let set: OutputSet = "rx".parse().unwrap();
        assert!(set.roads && set.crossing_points);
        assert!(!set.connections && !set.junctions);
        assert_eq!("cjrx".parse::<OutputSet>().unwrap(), OutputSet::all());
        assert!("".parse::<OutputSet>().unwrap().is_empty());
        assert!(matches!("rq".parse::<OutputSet>(), Err(PipelineError::OutputSelector('q'))));
    }

    #[test]
    fn writes_every_selected_table() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = run_file(&diamond_file(dir.path()), config(3, 300.0), &mut LogProgress::new()).unwrap();

        let base = dir.path().join("out.csv");
        let report = write_outputs(&analysis, &base, &OutputSet::all(), &JunctionFilter::any());
        assert!(report.is_ok());

        let rows = |name: &str| {
            report
                .written
                .iter()
                .find(|(p, _)| p.file_name().is_some_and(|f| f == name))
                .map(|&(_, n)| n)
        };
        assert_eq!(rows("out_roads.csv"), Some(10));
        assert_eq!(rows("out_crossing_points.csv"), Some(4));
        // Eight member roads, two of them shadows of other members.
        assert_eq!(rows("out_junction_s4_l2_x4_c0_i0_1.csv"), Some(6));
        assert_eq!(rows("out_connections.csv"), Some(16));
        for (path, _) in &report.written {
            assert!(path.exists());
        }
    }

    #[test]
    fn filtered_junctions_get_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = run_file(&diamond_file(dir.path()), config(3, 300.0), &mut LogProgress::new()).unwrap();

        let set = OutputSet { junctions: true, ..OutputSet::default() };
        let filter = JunctionFilter { levels: Requirement::Greater(2), ..JunctionFilter::any() };
        let report = write_outputs(&analysis, &dir.path().join("out.csv"), &set, &filter);
        assert!(report.written.is_empty());
        assert!(report.is_ok());
    }

    #[test]
    fn unwritable_file_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = run_file(&diamond_file(dir.path()), config(3, 300.0), &mut LogProgress::new()).unwrap();

        // A directory where the roads file should go makes that one write fail.
        std::fs::create_dir(dir.path().join("out_roads.csv")).unwrap();
        let set: OutputSet = "rx".parse().unwrap();
        let report = write_outputs(&analysis, &dir.path().join("out.csv"), &set, &JunctionFilter::any());

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.written.len(), 1);
        assert!(report.written[0].0.ends_with("out_crossing_points.csv"));
    }
}
