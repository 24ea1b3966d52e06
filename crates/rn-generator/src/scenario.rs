//! Start/end selection and full scenario generation.

use tracing::{debug, info};

use rn_core::{GenRng, NodeId, Road, RoadRecord};
use rn_network::is_reachable;

use crate::builder::RoadSetBuilder;
use crate::catalog::Poi;
use crate::profile::{DirectionRule, Profile, ProfileConfig};
use crate::traffic::Snapshot;
use crate::{GenError, GenResult, synth};

/// A connected start/end pair.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Endpoints {
    pub start:    NodeId,
    pub end:      NodeId,
    /// Connectivity checks run, including the successful one.
    pub attempts: u32,
}

/// Draw `(start, end)` pairs until `end` is reachable from `start`.
///
/// Pairs with `start == end` are redrawn without counting as an attempt.
/// After `cfg.max_endpoint_attempts` failed checks this returns
/// [`GenError::Disconnected`].
pub fn select_endpoints(
    cfg: &ProfileConfig,
    roads: &[Road],
    rng: &mut GenRng,
) -> GenResult<Endpoints> {
    let n = cfg.points.len();
    if n < 2 {
        return Err(GenError::Config(format!("need at least 2 points, got {n}")));
    }

    let mut attempts = 0;
    while attempts < cfg.max_endpoint_attempts {
        let start = NodeId::from_index(rng.gen_range(0..n));
        let end = NodeId::from_index(rng.gen_range(0..n));
        if start == end {
            continue;
        }
        attempts += 1;

        let connected = match cfg.direction_rule {
            DirectionRule::Fixed => is_reachable(n, roads, start, end, |r| r.direction),
            DirectionRule::Resample => {
                is_reachable(n, roads, start, end, |_| synth::direction(cfg.one_way_prob, rng))
            }
        };
        if connected {
            return Ok(Endpoints { start, end, attempts });
        }
    }

    Err(GenError::Disconnected { attempts })
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A generated fixture: roads, a connected demand pair, and one occupancy
/// snapshot per configured time of day.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub profile:            Profile,
    pub description:        &'static str,
    pub points:             Vec<&'static Poi>,
    pub roads:              Vec<Road>,
    pub endpoints:          Endpoints,
    pub snapshots:          Vec<Snapshot>,
    pub touches_far_suburb: bool,
}

impl Scenario {
    pub fn point_name(&self, node: NodeId) -> &'static str {
        self.points[node.index()].name
    }

    pub fn start_name(&self) -> &'static str {
        self.point_name(self.endpoints.start)
    }

    pub fn end_name(&self) -> &'static str {
        self.point_name(self.endpoints.end)
    }

    /// Rows of the snapshot file for `snapshot`, in road order.
    pub fn records(&self, snapshot: &Snapshot) -> Vec<RoadRecord> {
        self.roads
            .iter()
            .zip(&snapshot.vehicles)
            .map(|(road, &vehicles)| RoadRecord {
                road_id:         road.id.label(),
                start:           self.point_name(road.from).to_owned(),
                end:             self.point_name(road.to).to_owned(),
                direction:       Some(road.direction),
                length_m:        road.length_m,
                speed_limit_kmh: road.speed_kmh,
                lanes:           i32::from(road.lanes),
                vehicles,
            })
            .collect()
    }
}

/// Generate a scenario with the built-in settings of `profile`.
pub fn generate_scenario(profile: Profile, rng: &mut GenRng) -> GenResult<Scenario> {
    generate_scenario_with(profile, &profile.config(), rng)
}

/// Generate a scenario with explicit settings.
pub fn generate_scenario_with(
    profile: Profile,
    cfg: &ProfileConfig,
    rng: &mut GenRng,
) -> GenResult<Scenario> {
    let set = RoadSetBuilder::new(cfg).build(rng)?;
    let endpoints = select_endpoints(cfg, &set.roads, rng)?;

    let snapshots: Vec<Snapshot> =
        cfg.snapshots.iter().map(|&t| Snapshot::draw(&set.roads, t, rng)).collect();

    let scenario = Scenario {
        profile,
        description: cfg.description,
        points: cfg.points.clone(),
        roads: set.roads,
        endpoints,
        snapshots,
        touches_far_suburb: set.touches_far_suburb,
    };

    debug!(profile = %profile, snapshots = scenario.snapshots.len(), "snapshots drawn");
    info!(
        profile = %profile,
        roads = scenario.roads.len(),
        start = scenario.start_name(),
        end = scenario.end_name(),
        attempts = endpoints.attempts,
        "scenario generated"
    );
    Ok(scenario)
}
