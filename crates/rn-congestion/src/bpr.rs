//! Bureau of Public Roads volume-delay function.
//!
//! ```text
//! multiplier = 1 + α · (V / C)^β
//! ```
//!
//! `V` is not observed directly.  Fixtures record *occupancy* (vehicles on
//! the road right now); it is turned into an hourly flow by assuming the
//! whole occupancy passes the road in one free-flow traversal:
//!
//! ```text
//! flow_vph = occupancy / (free_flow_secs / 3600)
//! ```
//!
//! Degenerate inputs (no lanes, no speed, no length) yield
//! `f64::INFINITY` from the scalar helpers here; [`crate::assess`] lifts that
//! into the explicit `Congestion::Unbounded` variant.

/// Standard BPR sensitivity coefficient.
pub const DEFAULT_ALPHA: f64 = 0.15;
/// Standard BPR exponent.
pub const DEFAULT_BETA: f64 = 4.0;
/// Hourly throughput of one lane, vehicles/hour.
pub const DEFAULT_LANE_CAPACITY_VPH: f64 = 1_800.0;

/// Tunable BPR coefficients.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BprParams {
    pub alpha:             f64,
    pub beta:              f64,
    pub lane_capacity_vph: f64,
}

impl Default for BprParams {
    fn default() -> Self {
        Self {
            alpha:             DEFAULT_ALPHA,
            beta:              DEFAULT_BETA,
            lane_capacity_vph: DEFAULT_LANE_CAPACITY_VPH,
        }
    }
}

/// Free-flow traversal time in seconds.  Infinite for a non-positive speed.
#[inline]
pub fn free_flow_secs(length_m: f64, speed_kmh: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return f64::INFINITY;
    }
    let speed_mps = speed_kmh * 1000.0 / 3600.0;
    length_m / speed_mps
}

/// Hourly flow implied by `vehicles` currently on a road whose free-flow
/// traversal takes `free_flow_secs`.
#[inline]
pub fn implied_flow_vph(vehicles: u32, free_flow_secs: f64) -> f64 {
    vehicles as f64 / (free_flow_secs / 3600.0)
}

impl BprParams {
    /// Road capacity in vehicles/hour.
    #[inline]
    pub fn capacity_vph(&self, lanes: i32) -> f64 {
        lanes as f64 * self.lane_capacity_vph
    }

    /// `true` when the road attributes admit a finite multiplier.
    #[inline]
    pub fn is_well_formed(lanes: i32, length_m: f64, speed_kmh: f64) -> bool {
        lanes > 0
            && speed_kmh.is_finite()
            && length_m.is_finite()
            && speed_kmh > 0.0
            && length_m > 0.0
    }

    /// Volume/capacity ratio; infinite for degenerate attributes.
    pub fn vc_ratio(&self, vehicles: u32, lanes: i32, length_m: f64, speed_kmh: f64) -> f64 {
        if !Self::is_well_formed(lanes, length_m, speed_kmh) {
            return f64::INFINITY;
        }
        let flow = implied_flow_vph(vehicles, free_flow_secs(length_m, speed_kmh));
        flow / self.capacity_vph(lanes)
    }

    /// Multiplier for a known V/C ratio.  `≥ 1.0` for any `ratio ≥ 0`.
    #[inline]
    pub fn multiplier_for_ratio(&self, ratio: f64) -> f64 {
        1.0 + self.alpha * ratio.powf(self.beta)
    }

    /// Congestion multiplier for a road, `f64::INFINITY` if degenerate.
    pub fn congestion_factor(&self, vehicles: u32, lanes: i32, length_m: f64, speed_kmh: f64) -> f64 {
        let ratio = self.vc_ratio(vehicles, lanes, length_m, speed_kmh);
        if ratio.is_infinite() {
            return f64::INFINITY;
        }
        self.multiplier_for_ratio(ratio)
    }

    /// Congested travel time in seconds (free-flow × multiplier).
    pub fn travel_time_secs(&self, vehicles: u32, lanes: i32, length_m: f64, speed_kmh: f64) -> f64 {
        free_flow_secs(length_m, speed_kmh)
            * self.congestion_factor(vehicles, lanes, length_m, speed_kmh)
    }
}
