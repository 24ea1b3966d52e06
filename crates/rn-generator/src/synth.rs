//! Attribute synthesis for a single road.

use rand::distributions::{Distribution, WeightedIndex};

use rn_core::{AreaCategory, Direction, GenRng, NodeId, Road, RoadClass, RoadId};

use crate::catalog::{self, Poi};
use crate::profile::{CORE_LANES, ProfileConfig};
use crate::{GenError, GenResult};

/// Length multiplier range applied to every synthesized road.
pub const JITTER_MIN: f64 = 0.90;
pub const JITTER_MAX: f64 = 1.10;

const SUBURB_MAIN_LANES:  [u8; 3] = [2, 3, 4];
const SUBURB_MINOR_LANES: [u8; 2] = [2, 3];

/// Speed limits in km/h per road class.
pub const CORE_SPEED_KMH:         f64 = 60.0;
pub const SUBURB_MAIN_SPEED_KMH:  f64 = 80.0;
pub const SUBURB_MINOR_SPEED_KMH: f64 = 70.0;

/// Road length in whole metres.
///
/// Uses the reference distance when the pair has one; otherwise draws an
/// integer number of kilometres from the profile's range (the far-suburb
/// range when the profile has one and either end is a far-suburb point).
pub fn road_length_m(a: &Poi, b: &Poi, cfg: &ProfileConfig, rng: &mut GenRng) -> f64 {
    let km = match catalog::reference_km(a.name, b.name) {
        Some(km) => km,
        None => {
            let far = a.area.is_far_suburb() || b.area.is_far_suburb();
            match &cfg.far_km {
                Some(range) if far => rng.gen_range(range.clone()),
                _ => rng.gen_range(cfg.random_km.clone()),
            }
        }
    };
    let jitter = rng.gen_range(JITTER_MIN..=JITTER_MAX);
    (f64::from(km) * 1_000.0 * jitter).round()
}

/// Lane count and speed limit for a road between areas `a` and `b`.
pub fn lanes_and_speed(
    a: AreaCategory,
    b: AreaCategory,
    cfg: &ProfileConfig,
    rng: &mut GenRng,
) -> GenResult<(u8, f64)> {
    let drawn = match RoadClass::between(a, b) {
        RoadClass::Core => {
            let dist = WeightedIndex::new(&cfg.core_lane_weights)
                .map_err(|e| GenError::Config(format!("core lane weights: {e}")))?;
            (CORE_LANES[dist.sample(rng.inner())], CORE_SPEED_KMH)
        }
        RoadClass::SuburbMain => (pick(&SUBURB_MAIN_LANES, rng), SUBURB_MAIN_SPEED_KMH),
        RoadClass::SuburbMinor => (pick(&SUBURB_MINOR_LANES, rng), SUBURB_MINOR_SPEED_KMH),
    };
    Ok(drawn)
}

fn pick(lanes: &[u8], rng: &mut GenRng) -> u8 {
    lanes[rng.gen_range(0..lanes.len())]
}

/// One-way with the profile's probability, two-way otherwise.
pub fn direction(one_way_prob: f64, rng: &mut GenRng) -> Direction {
    if rng.gen_bool(one_way_prob) { Direction::OneWay } else { Direction::TwoWay }
}

/// Synthesize a complete road `from → to` over `cfg.points`.
pub fn road(
    id: RoadId,
    from: NodeId,
    to: NodeId,
    cfg: &ProfileConfig,
    rng: &mut GenRng,
) -> GenResult<Road> {
    let (a, b) = (cfg.points[from.index()], cfg.points[to.index()]);
    let length_m = road_length_m(a, b, cfg, rng);
    let (lanes, speed_kmh) = lanes_and_speed(a.area, b.area, cfg, rng)?;
    let direction = direction(cfg.one_way_prob, rng);
    Ok(Road { id, from, to, length_m, lanes, speed_kmh, direction })
}
