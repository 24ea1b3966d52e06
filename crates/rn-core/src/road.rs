//! Road types shared by the generator, the analyzer, and the router.
//!
//! Two shapes exist for the same physical road:
//!
//! - [`Road`]: the generator's view: endpoints are `NodeId`s into the
//!   scenario's point list and all attributes are known-valid.
//! - [`RoadRecord`]: the persisted row: endpoints are names, lanes are
//!   signed and direction is optional, so that degenerate or partial rows
//!   from hand-edited CSV files still load and can be reported on.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, NodeId, RoadId};

// ── Direction ─────────────────────────────────────────────────────────────────

/// Traversal mode of a road.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    /// Traversable from start to end only.
    OneWay,
    /// Traversable in both directions.
    #[default]
    TwoWay,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::OneWay => "one-way",
            Direction::TwoWay => "two-way",
        }
    }

    #[inline]
    pub fn is_two_way(self) -> bool {
        matches!(self, Direction::TwoWay)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    /// Accepts the English labels and the legacy fixture labels
    /// (`单向` / `双向`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "one-way" | "oneway" | "单向" => Ok(Direction::OneWay),
            "two-way" | "twoway" | "双向" => Ok(Direction::TwoWay),
            other => Err(CoreError::InvalidDirection(other.to_owned())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Direction {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Direction {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(d)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// A generated road between two points of a scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub id:        RoadId,
    pub from:      NodeId,
    pub to:        NodeId,
    /// Physical length in metres (> 0).
    pub length_m:  f64,
    /// Lane count (≥ 1).
    pub lanes:     u8,
    /// Speed limit in km/h (> 0).
    pub speed_kmh: f64,
    pub direction: Direction,
}

impl Road {
    /// `true` if `node` is either endpoint.
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

// ── RoadRecord ────────────────────────────────────────────────────────────────

/// One row of a snapshot file.
///
/// Column names follow the fixture header
/// `road_id,start,end,direction,length_m,speed_limit_kmh,lanes,vehicles`;
/// the legacy Chinese headers are accepted as aliases when reading.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadRecord {
    #[cfg_attr(feature = "serde", serde(alias = "道路ID"))]
    pub road_id:         String,

    #[cfg_attr(feature = "serde", serde(alias = "起始地点"))]
    pub start:           String,

    #[cfg_attr(feature = "serde", serde(alias = "目标地点"))]
    pub end:             String,

    /// Optional for the analyzer, required by the router.
    #[cfg_attr(feature = "serde", serde(default, alias = "道路方向"))]
    pub direction:       Option<Direction>,

    #[cfg_attr(feature = "serde", serde(alias = "道路长度(米)"))]
    pub length_m:        f64,

    #[cfg_attr(feature = "serde", serde(alias = "道路限速(km/h)"))]
    pub speed_limit_kmh: f64,

    /// Signed so that `0` and negative counts load as degenerate rows.
    #[cfg_attr(feature = "serde", serde(alias = "车道数"))]
    pub lanes:           i32,

    /// Vehicles currently on the road (occupancy).
    #[cfg_attr(feature = "serde", serde(alias = "现有车辆数"))]
    pub vehicles:        u32,
}
