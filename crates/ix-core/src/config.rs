//! Analysis configuration.
//!
//! Built by the application (the `ix` binary maps its flags onto it) and
//! passed to the pipeline.  All fields are plain data; call
//! [`AnalysisConfig::validate`] before a run.

use crate::{IxError, IxResult, TrafficHand};

// ── SearchBounds ──────────────────────────────────────────────────────────────

/// Limits for the bounded connection search between the two roads of a
/// crossing point.
///
/// A branch stays alive while
///
/// ```text
/// (roads_on_branch <= max_depth AND length < length_cap_m) OR length < max_length_m
/// ```
///
/// so `max_length_m` admits long chains of short roads and `max_depth`
/// admits a few long roads, with `length_cap_m` as the outer limit for the
/// latter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchBounds {
    /// Maximum number of roads on a branch, seed included.
    pub max_depth: usize,

    /// Accumulated length (metres, seed excluded) below which a branch is
    /// always kept.
    pub max_length_m: f64,

    /// How many times a branch may switch between forward and backward
    /// traversal.
    pub direction_changes: u8,

    /// Accumulated length above which `max_depth` no longer keeps a branch
    /// alive.
    pub length_cap_m: f64,
}

impl SearchBounds {
    pub const DEFAULT_DIRECTION_CHANGES: u8 = 2;
    pub const DEFAULT_LENGTH_CAP_M: f64 = 10_000.0;

    /// Bounds with the given depth and length and default budget and cap.
    pub fn new(max_depth: usize, max_length_m: f64) -> Self {
        Self {
            max_depth,
            max_length_m,
            direction_changes: Self::DEFAULT_DIRECTION_CHANGES,
            length_cap_m:      Self::DEFAULT_LENGTH_CAP_M,
        }
    }

    /// Whether a branch holding `depth` roads and `length_m` metres may
    /// continue.
    #[inline]
    pub fn admits(&self, depth: usize, length_m: f64) -> bool {
        (depth <= self.max_depth && length_m < self.length_cap_m) || length_m < self.max_length_m
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self::new(6, 900.0)
    }
}

// ── AnalysisConfig ────────────────────────────────────────────────────────────

/// Top-level configuration for one detection run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Traffic-hand convention used when classifying junction points.
    pub traffic: TrafficHand,

    /// Connection search limits.
    pub search: SearchBounds,
}

impl AnalysisConfig {
    pub fn new(traffic: TrafficHand, search: SearchBounds) -> Self {
        Self { traffic, search }
    }

    /// Reject lengths that are not usable numbers.  Any `max_depth` is
    /// accepted: `max_length_m` alone can keep a branch alive.
    pub fn validate(&self) -> IxResult<()> {
        let s = &self.search;
        if !s.max_length_m.is_finite() || s.max_length_m < 0.0 {
            return Err(IxError::Config(format!(
                "max_length_m must be a non-negative number, got {}",
                s.max_length_m
            )));
        }
        if !s.length_cap_m.is_finite() || s.length_cap_m <= 0.0 {
            return Err(IxError::Config(format!(
                "length_cap_m must be positive, got {}",
                s.length_cap_m
            )));
        }
        Ok(())
    }
}
