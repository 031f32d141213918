//! Direction codes carried by input rows, and the traffic-hand convention
//! used during classification.

use std::str::FromStr;

use crate::IxError;

/// Traffic direction of one input polyline.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Drivable from the first vertex to the last (`F`).
    Forward,
    /// Drivable from the last vertex to the first (`T`).
    Reverse,
    /// Drivable both ways (`B`).
    Both,
}

impl Direction {
    /// Parse a direction code.  Only the first character is significant.
    pub fn from_code(code: &str) -> Option<Direction> {
        match code.trim().chars().next()? {
            'F' => Some(Direction::Forward),
            'T' => Some(Direction::Reverse),
            'B' => Some(Direction::Both),
            _   => None,
        }
    }

    #[inline]
    pub fn is_both_way(self) -> bool {
        matches!(self, Direction::Both)
    }
}

/// Side of the road vehicles keep to.  Decides whether a diverging pair of
/// ramps reads as a split/join or as a plain intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficHand {
    #[default]
    Right,
    Left,
}

impl TrafficHand {
    #[inline]
    pub fn is_right(self) -> bool {
        matches!(self, TrafficHand::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrafficHand::Right => "right",
            TrafficHand::Left  => "left",
        }
    }
}

impl FromStr for TrafficHand {
    type Err = IxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "right" => Ok(TrafficHand::Right),
            "l" | "left"  => Ok(TrafficHand::Left),
            other => Err(IxError::Parse(format!(
                "invalid traffic hand {other:?}: expected \"r\" or \"l\""
            ))),
        }
    }
}

impl std::fmt::Display for TrafficHand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
