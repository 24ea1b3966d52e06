//! Complexity profiles and their generation settings.
//!
//! | Profile   | Points | Roads  | Snapshots            | One-way share |
//! |-----------|--------|--------|----------------------|---------------|
//! | `Simple`  | 16     | 30–35  | 12:00                | 3/11          |
//! | `Medium`  | 17     | 40–45  | 08:00, 14:00         | 5/11          |
//! | `Complex` | 17     | 50–55  | 08:00, 14:00, 18:30  | 7/11          |
//!
//! `Simple` leaves out the far-suburb point; only `Complex` draws long
//! far-suburb roads from a separate distance range.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rn_core::TimeOfDay;

use crate::catalog::{self, Poi};
use crate::{GenError, GenResult};

/// Connectivity attempt budget for start/end selection.
pub const DEFAULT_ENDPOINT_ATTEMPTS: u32 = 200;

/// Lane counts available to core↔core roads, weighted by
/// [`ProfileConfig::core_lane_weights`].
pub const CORE_LANES: [u8; 3] = [3, 4, 5];

// ── Profile ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Profile {
    Simple,
    Medium,
    Complex,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Simple, Profile::Medium, Profile::Complex];

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Simple  => "simple",
            Profile::Medium  => "medium",
            Profile::Complex => "complex",
        }
    }

    /// Fixture directory name for this profile.
    pub fn case_dir(self) -> &'static str {
        match self {
            Profile::Simple  => "case1_simple",
            Profile::Medium  => "case2_medium",
            Profile::Complex => "case3_complex",
        }
    }

    /// The built-in settings for this profile.
    pub fn config(self) -> ProfileConfig {
        match self {
            Profile::Simple => ProfileConfig {
                description: "Simple case: one snapshot, no traffic lights, \
                              several alternative routes through the core.",
                points:            catalog::points(false),
                road_count:        30..=35,
                snapshots:         vec![TimeOfDay::hm(12, 0)],
                one_way_prob:      3.0 / 11.0,
                core_lane_weights: [8, 3, 0],
                random_km:         3..=10,
                far_km:            None,
                ..ProfileConfig::base()
            },
            Profile::Medium => ProfileConfig {
                description: "Medium case: two snapshots, no traffic lights, \
                              core and outlying points fully covered.",
                points:            catalog::points(true),
                road_count:        40..=45,
                snapshots:         vec![TimeOfDay::hm(8, 0), TimeOfDay::hm(14, 0)],
                one_way_prob:      5.0 / 11.0,
                core_lane_weights: [1, 1, 1],
                random_km:         3..=15,
                far_km:            None,
                ..ProfileConfig::base()
            },
            Profile::Complex => ProfileConfig {
                description: "Complex case: three snapshots, no traffic lights, \
                              far suburbs connected to the core.",
                points:            catalog::points(true),
                road_count:        50..=55,
                snapshots:         vec![
                    TimeOfDay::hm(8, 0),
                    TimeOfDay::hm(14, 0),
                    TimeOfDay::hm(18, 30),
                ],
                one_way_prob:      7.0 / 11.0,
                core_lane_weights: [5, 6, 0],
                random_km:         3..=20,
                far_km:            Some(45..=60),
                ..ProfileConfig::base()
            },
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenError::Config(format!("unknown profile {s:?}")))
    }
}

// ── DirectionRule ─────────────────────────────────────────────────────────────

/// How road directions are treated by the connectivity check.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DirectionRule {
    /// Check with the direction each road was created with.  The persisted
    /// scenario is then reachable exactly as validated.
    #[default]
    Fixed,
    /// Re-draw a road's direction at every hop of the check, each time it
    /// is scanned from a reached endpoint.  The check no longer describes the
    /// persisted directions.
    Resample,
}

// ── ProfileConfig ─────────────────────────────────────────────────────────────

/// Generation settings for one profile.
#[derive(Clone, Debug)]
pub struct ProfileConfig {
    pub description:           &'static str,
    /// Point set, indexed by `NodeId`.
    pub points:                Vec<&'static Poi>,
    /// Target road count, sampled uniformly.
    pub road_count:            RangeInclusive<usize>,
    /// One CSV file per entry.
    pub snapshots:             Vec<TimeOfDay>,
    /// Probability that a road is one-way.
    pub one_way_prob:          f64,
    /// Weights over [`CORE_LANES`].
    pub core_lane_weights:     [u32; 3],
    /// Base distance range (km) for pairs without a reference distance.
    pub random_km:             RangeInclusive<u32>,
    /// Distance range (km) for pairs touching a far-suburb point.
    pub far_km:                Option<RangeInclusive<u32>>,
    pub direction_rule:        DirectionRule,
    pub max_endpoint_attempts: u32,
}

impl ProfileConfig {
    fn base() -> Self {
        ProfileConfig {
            description:           "",
            points:                Vec::new(),
            road_count:            0..=0,
            snapshots:             Vec::new(),
            one_way_prob:          0.0,
            core_lane_weights:     [1, 1, 1],
            random_km:             1..=1,
            far_km:                None,
            direction_rule:        DirectionRule::Fixed,
            max_endpoint_attempts: DEFAULT_ENDPOINT_ATTEMPTS,
        }
    }

    /// Reject settings that cannot produce a scenario.
    pub fn validate(&self) -> GenResult<()> {
        let fail = |msg: String| Err(GenError::Config(msg));

        if self.points.len() < 2 {
            return fail(format!("need at least 2 points, got {}", self.points.len()));
        }
        if self.road_count.is_empty() || *self.road_count.start() == 0 {
            return fail(format!("road count range {:?} is empty", self.road_count));
        }
        if !(0.0..=1.0).contains(&self.one_way_prob) {
            return fail(format!("one-way probability {} outside [0, 1]", self.one_way_prob));
        }
        if self.core_lane_weights.iter().all(|&w| w == 0) {
            return fail("core lane weights are all zero".to_owned());
        }
        if self.random_km.is_empty() || *self.random_km.start() == 0 {
            return fail(format!("random distance range {:?} is empty", self.random_km));
        }
        if let Some(far) = &self.far_km {
            if far.is_empty() || *far.start() == 0 {
                return fail(format!("far-suburb distance range {far:?} is empty"));
            }
        }
        if self.max_endpoint_attempts == 0 {
            return fail("endpoint attempt budget is zero".to_owned());
        }
        if !self.points.iter().any(|p| p.anchor) {
            return fail("point set has no repair anchor".to_owned());
        }
        Ok(())
    }
}
