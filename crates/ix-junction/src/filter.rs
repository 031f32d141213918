//! Junction filters over metric values.
//!
//! A requirement is written as `=N`, `>N`, `<N`, a bare `N` (same as `=N`),
//! or an inclusive range `A-B`.  An empty requirement admits everything.

use std::str::FromStr;

use crate::{FilterError, JunctionMetrics};

/// Constraint on one metric.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Requirement {
    #[default]
    Any,
    /// Inclusive on both ends.
    Between(usize, usize),
    Equal(usize),
    Less(usize),
    Greater(usize),
}

impl Requirement {
    pub fn matches(self, value: usize) -> bool {
        match self {
            Requirement::Any => true,
            Requirement::Between(from, to) => (from..=to).contains(&value),
            Requirement::Equal(n) => value == n,
            Requirement::Less(n) => value < n,
            Requirement::Greater(n) => value > n,
        }
    }
}

fn number(s: &str) -> Result<usize, FilterError> {
    s.trim().parse().map_err(|_| FilterError::Number(s.to_owned()))
}

impl FromStr for Requirement {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Requirement::Any);
        }

        if let Some(dash) = s.find('-').filter(|&i| i > 0) {
            let (from, to) = (&s[..dash], &s[dash + 1..]);
            let (from, to) = match (number(from), number(to)) {
                (Ok(f), Ok(t)) => (f, t),
                _ => return Err(FilterError::Range(s.to_owned())),
            };
            if from > to {
                return Err(FilterError::Range(s.to_owned()));
            }
            return Ok(Requirement::Between(from, to));
        }

        match s.as_bytes()[0] {
            b'=' => number(&s[1..]).map(Requirement::Equal),
            b'>' => number(&s[1..]).map(Requirement::Greater),
            b'<' => number(&s[1..]).map(Requirement::Less),
            _ => number(s).map(Requirement::Equal),
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Requirement::Any => Ok(()),
            Requirement::Between(from, to) => write!(f, "{from}-{to}"),
            Requirement::Equal(n) => write!(f, "={n}"),
            Requirement::Less(n) => write!(f, "<{n}"),
            Requirement::Greater(n) => write!(f, ">{n}"),
        }
    }
}

/// One requirement per metric; a junction passes when it meets all of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct JunctionFilter {
    pub crossing_points: Requirement,
    pub sides: Requirement,
    pub levels: Requirement,
    pub conflict_roads: Requirement,
    pub intersection_points: Requirement,
}

impl JunctionFilter {
    /// A filter that admits every junction.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, m: &JunctionMetrics) -> bool {
        self.crossing_points.matches(m.crossing_points)
            && self.sides.matches(m.sides)
            && self.levels.matches(m.levels)
            && self.conflict_roads.matches(m.conflict_roads)
            && self.intersection_points.matches(m.intersection_points)
    }
}
