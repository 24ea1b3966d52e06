//! Road-set construction.
//!
//! # Phases
//!
//! | Phase  | Pairs drawn from          | Stops at                         |
//! |--------|---------------------------|----------------------------------|
//! | edge   | non-hub points            | ⌊30 % of target⌋ roads           |
//! | fill   | all points                | target roads                     |
//! | repair | isolated point → anchor   | no isolated points               |
//!
//! Every road has distinct endpoints and every ordered `(from, to)` pair is
//! used at most once.  The reverse pair is a different road.

use rustc_hash::FxHashSet;
use tracing::debug;

use rn_core::{GenRng, NodeId, Road, RoadId};

use crate::profile::ProfileConfig;
use crate::{GenError, GenResult, synth};

/// Percentage of the target reserved for roads between non-hub points.
pub const EDGE_ROAD_PERCENT: usize = 30;

/// Pair draws allowed per road before a phase gives up.
pub const SAMPLE_ATTEMPTS_PER_ROAD: usize = 200;

/// The generated roads of one scenario.
#[derive(Clone, Debug)]
pub struct RoadSet {
    pub roads:              Vec<Road>,
    /// Sampled target count (roads from the edge and fill phases).
    pub target:             usize,
    pub edge_roads:         usize,
    /// Roads added to connect isolated points.
    pub repair_roads:       usize,
    /// Any road has a far-suburb endpoint.  Informational only.
    pub touches_far_suburb: bool,
}

/// Builds a [`RoadSet`] over the point set of a [`ProfileConfig`].
///
/// ```
/// use rn_core::GenRng;
/// use rn_generator::{Profile, RoadSetBuilder};
///
/// let cfg = Profile::Simple.config();
/// let set = RoadSetBuilder::new(&cfg).build(&mut GenRng::new(1)).unwrap();
/// assert!(set.roads.len() >= set.target);
/// ```
pub struct RoadSetBuilder<'a> {
    cfg:     &'a ProfileConfig,
    roads:   Vec<Road>,
    pairs:   FxHashSet<(NodeId, NodeId)>,
    touched: Vec<bool>,
}

impl<'a> RoadSetBuilder<'a> {
    pub fn new(cfg: &'a ProfileConfig) -> Self {
        Self {
            cfg,
            roads:   Vec::new(),
            pairs:   FxHashSet::default(),
            touched: vec![false; cfg.points.len()],
        }
    }

    pub fn build(mut self, rng: &mut GenRng) -> GenResult<RoadSet> {
        self.cfg.validate()?;

        let target = rng.gen_range(self.cfg.road_count.clone());
        let edge_target = target * EDGE_ROAD_PERCENT / 100;

        // ── Edge phase ────────────────────────────────────────────────────
        let quiet: Vec<NodeId> = self
            .cfg
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.hub)
            .map(|(i, _)| NodeId::from_index(i))
            .collect();
        if quiet.len() >= 2 {
            self.sample_until(edge_target, &quiet, rng)?;
        }
        let edge_roads = self.roads.len();

        // ── Fill phase ────────────────────────────────────────────────────
        let all: Vec<NodeId> = (0..self.cfg.points.len()).map(|i| NodeId::from_index(i)).collect();
        self.sample_until(target, &all, rng)?;

        // ── Repair phase ──────────────────────────────────────────────────
        let before_repair = self.roads.len();
        for point in all.iter().copied() {
            if self.touched[point.index()] {
                continue;
            }
            let anchor = self.pick_anchor(point, rng);
            self.push(point, anchor, rng)?;
        }
        let repair_roads = self.roads.len() - before_repair;

        let points = &self.cfg.points;
        let touches_far_suburb = self.roads.iter().any(|r| {
            points[r.from.index()].area.is_far_suburb() || points[r.to.index()].area.is_far_suburb()
        });

        debug!(
            target,
            edge_roads,
            repair_roads,
            total = self.roads.len(),
            touches_far_suburb,
            "road set built"
        );

        Ok(RoadSet { roads: self.roads, target, edge_roads, repair_roads, touches_far_suburb })
    }

    /// Draw pairs from `candidates` until `goal` roads exist in total.
    fn sample_until(&mut self, goal: usize, candidates: &[NodeId], rng: &mut GenRng) -> GenResult<()> {
        let wanted = goal.saturating_sub(self.roads.len());
        let budget = wanted * SAMPLE_ATTEMPTS_PER_ROAD;
        let mut draws = 0;

        while self.roads.len() < goal {
            if draws == budget {
                return Err(GenError::Saturated { placed: self.roads.len(), target: goal, draws });
            }
            draws += 1;

            let (Some(&from), Some(&to)) = (rng.choose(candidates), rng.choose(candidates)) else {
                break;
            };
            if from == to || self.pairs.contains(&(from, to)) {
                continue;
            }
            self.push(from, to, rng)?;
        }
        Ok(())
    }

    /// A random anchor other than `point`, or any other point if there is none.
    fn pick_anchor(&self, point: NodeId, rng: &mut GenRng) -> NodeId {
        let others = |anchors_only: bool| -> Vec<NodeId> {
            self.cfg
                .points
                .iter()
                .enumerate()
                .filter(|&(i, p)| i != point.index() && (p.anchor || !anchors_only))
                .map(|(i, _)| NodeId::from_index(i))
                .collect()
        };
        let mut pool = others(true);
        if pool.is_empty() {
            pool = others(false);
        }
        // validate() guarantees at least two points, so the pool is non-empty.
        rng.choose(&pool).copied().unwrap_or(point)
    }

    fn push(&mut self, from: NodeId, to: NodeId, rng: &mut GenRng) -> GenResult<()> {
        let id = RoadId::from_index(self.roads.len());
        let road = synth::road(id, from, to, self.cfg, rng)?;
        self.pairs.insert((from, to));
        self.touched[from.index()] = true;
        self.touched[to.index()] = true;
        self.roads.push(road);
        Ok(())
    }
}
