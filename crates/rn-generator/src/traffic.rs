//! Per-snapshot vehicle occupancy.
//!
//! Occupancy of a road at time `t` is
//!
//! ```text
//! clamp(round(base(t)) + U[-4, 4] + lane_bonus(lanes), 1, 8 · lanes)
//! ```
//!
//! where `base(t)` is a 24-hour demand curve interpolated linearly between
//! the anchors below (wrapping at midnight).

use rn_core::{GenRng, Road, TimeOfDay};

/// `(minutes since midnight, base vehicles per road)`, ascending.
const DEMAND_ANCHORS: [(u16, f64); 8] = [
    (0, 3.0),
    (5 * 60, 3.0),
    (8 * 60, 18.0),
    (12 * 60, 8.0),
    (14 * 60, 6.0),
    (18 * 60 + 30, 20.0),
    (22 * 60, 8.0),
    (24 * 60, 3.0),
];

/// Half-width of the uniform per-road noise.
pub const NOISE: i64 = 4;

/// Occupancy never exceeds this many vehicles per lane.
pub const MAX_PER_LANE: i64 = 8;

/// Base vehicles per road at `t`.
pub fn base_vehicles(t: TimeOfDay) -> f64 {
    let m = t.minutes_since_midnight();
    for pair in DEMAND_ANCHORS.windows(2) {
        let ((m0, v0), (m1, v1)) = (pair[0], pair[1]);
        if m >= m0 && m <= m1 {
            let frac = f64::from(m - m0) / f64::from(m1 - m0);
            return v0 + (v1 - v0) * frac;
        }
    }
    DEMAND_ANCHORS[0].1
}

/// Extra vehicles on wider roads.
pub fn lane_bonus(lanes: u8) -> i64 {
    match lanes {
        3 => 2,
        4 => 4,
        _ => 0,
    }
}

/// Vehicles on `road` at `t`.
pub fn occupancy(road: &Road, t: TimeOfDay, rng: &mut GenRng) -> u32 {
    let noise = rng.gen_range(-NOISE..=NOISE);
    let raw = base_vehicles(t).round() as i64 + noise + lane_bonus(road.lanes);
    let cap = (i64::from(road.lanes) * MAX_PER_LANE).max(1);
    raw.clamp(1, cap) as u32
}

/// Occupancy of every road at one time of day.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub time:     TimeOfDay,
    /// Indexed by `RoadId`.
    pub vehicles: Vec<u32>,
}

impl Snapshot {
    pub fn draw(roads: &[Road], time: TimeOfDay, rng: &mut GenRng) -> Self {
        let vehicles = roads.iter().map(|r| occupancy(r, time, rng)).collect();
        Snapshot { time, vehicles }
    }
}
