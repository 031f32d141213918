//! ix: find road interchanges in a road table.
//!
//! ```text
//! ix -I roads.csv -T r -R 6 -L 900 -O out/roads.csv -P cjrx -s 4 -l 2-3
//! ```
//!
//! Loads the table, detects and classifies junctions, then writes the
//! tables selected with `-P` next to the `-O` path.  Log verbosity follows
//! `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info};

use ix_core::{AnalysisConfig, SearchBounds, TrafficHand};
use ix_junction::{JunctionFilter, Requirement};
use ix_pipeline::{LogProgress, OutputSet, run_file, write_outputs};

#[derive(Parser, Debug)]
#[command(name = "ix", version, about = "Detect grade-separated road interchanges")]
#[command(long_about = "Detect grade-separated road interchanges in a road table.

Output selectors for -P:
  c  connections        <stem>_connections.<ext>
  j  junctions          <stem>_junction_s<S>_l<L>_x<X>_c<C>_i<I>_<n>.<ext>
  r  roads              <stem>_roads.<ext>
  x  crossing points    <stem>_crossing_points.<ext>

Junction filters (-x -s -l -c -i) take =N, <N, >N, N or A-B.")]
struct Cli {
    /// Road table (CSV with WKT, oneway, layer and optional fclass columns)
    #[arg(short = 'I', long)]
    input: PathBuf,

    /// Traffic hand: r (right) or l (left)
    #[arg(short = 'T', long, default_value = "r")]
    traffic: TrafficHand,

    /// Depth limit in roads for the connection search
    #[arg(short = 'R', long, default_value_t = 6)]
    max_depth: usize,

    /// Length in metres below which the search continues regardless of depth
    #[arg(short = 'L', long, default_value_t = 900.0)]
    max_length: f64,

    /// Base path for output tables; defaults to the input path
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,

    /// Tables to write, any of the letters c, j, r, x
    #[arg(short = 'P', long, default_value = "")]
    print: OutputSet,

    /// Filter on crossing points per junction
    #[arg(short = 'x', long, default_value = "")]
    crossings: Requirement,

    /// Filter on sides
    #[arg(short = 's', long, default_value = "")]
    sides: Requirement,

    /// Filter on levels
    #[arg(short = 'l', long, default_value = "")]
    levels: Requirement,

    /// Filter on conflict roads
    #[arg(short = 'c', long, default_value = "")]
    conflicts: Requirement,

    /// Filter on at-grade intersection points
    #[arg(short = 'i', long, default_value = "")]
    intersections: Requirement,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig::new(self.traffic, SearchBounds::new(self.max_depth, self.max_length))
    }

    fn filter(&self) -> JunctionFilter {
        JunctionFilter {
            crossing_points:     self.crossings,
            sides:               self.sides,
            levels:              self.levels,
            conflict_roads:      self.conflicts,
            intersection_points: self.intersections,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let started = Instant::now();

    let analysis = run_file(&cli.input, cli.config(), &mut LogProgress::new())
        .with_context(|| format!("analysing {}", cli.input.display()))?;

    let filter = cli.filter();
    for j in analysis.junctions_matching(&filter) {
        let m = &j.metrics;
        info!(
            "junction {}: {} crossing points, {} sides, {} levels, {} conflict roads, {} intersections",
            j.number, m.crossing_points, m.sides, m.levels, m.conflict_roads, m.intersection_points
        );
    }

    if !cli.print.is_empty() {
        let base = cli.output.as_ref().unwrap_or(&cli.input);
        let report = write_outputs(&analysis, base, &cli.print, &filter);
        if !report.is_ok() {
            bail!("{} of {} output files could not be written", report.failed.len(), report.failed.len() + report.written.len());
        }
    }

    info!("done in {:.3} s", started.elapsed().as_secs_f64());
    Ok(())
}
