//! Routing trait and default Dijkstra implementation.
//!
//! # Weight modes
//!
//! | Mode       | Edge cost                    | Integer unit  |
//! |------------|------------------------------|---------------|
//! | `Time`     | `edge_travel_secs`           | milliseconds  |
//! | `Distance` | `edge_length_m`              | millimetres   |
//! | `Balanced` | `edge_balanced`              | 1e-6 score    |
//!
//! Costs are rounded to `u64` in the unit above so the heap orders on exact
//! integers.  Non-finite costs mark an edge impassable for that mode.
//!
//! Whatever the mode, a [`Route`] reports both its total travel time and its
//! total length.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use rn_core::{EdgeId, NodeId};

use crate::network::RoadNetwork;
use crate::{NetworkError, NetworkResult};

// ── WeightMode ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum WeightMode {
    /// Fastest under current congestion.
    Time,
    /// Shortest physical length.
    Distance,
    /// Blend of normalised time and length.
    Balanced,
}

impl WeightMode {
    pub const ALL: [WeightMode; 3] = [WeightMode::Time, WeightMode::Distance, WeightMode::Balanced];

    pub fn as_str(self) -> &'static str {
        match self {
            WeightMode::Time     => "fastest",
            WeightMode::Distance => "shortest",
            WeightMode::Balanced => "balanced",
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone)]
pub struct Route {
    pub from:            NodeId,
    /// Edges to traverse in order, from source to destination.
    pub edges:           Vec<EdgeId>,
    pub total_time_secs: f64,
    pub total_length_m:  f64,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Visited nodes in order, source first.
    pub fn nodes(&self, network: &RoadNetwork) -> Vec<NodeId> {
        std::iter::once(self.from)
            .chain(self.edges.iter().map(|e| network.edge_to[e.index()]))
            .collect()
    }

    /// Name-level summary suitable for printing and caching.
    pub fn summary(&self, network: &RoadNetwork) -> PathSummary {
        PathSummary {
            nodes: self
                .nodes(network)
                .into_iter()
                .map(|n| network.node_names[n.index()].clone())
                .collect(),
            total_time_secs: self.total_time_secs,
            total_length_m:  self.total_length_m,
        }
    }
}

/// A route by node names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSummary {
    pub nodes:           Vec<String>,
    pub total_time_secs: f64,
    pub total_length_m:  f64,
}

/// One route per weight mode; `None` where no route exists.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPath {
    pub fastest:  Option<PathSummary>,
    pub shortest: Option<PathSummary>,
    pub balanced: Option<PathSummary>,
}

impl MultiPath {
    pub fn get(&self, mode: WeightMode) -> Option<&PathSummary> {
        match mode {
            WeightMode::Time     => self.fastest.as_ref(),
            WeightMode::Distance => self.shortest.as_ref(),
            WeightMode::Balanced => self.balanced.as_ref(),
        }
    }

    fn slot(&mut self, mode: WeightMode) -> &mut Option<PathSummary> {
        match mode {
            WeightMode::Time     => &mut self.fastest,
            WeightMode::Distance => &mut self.shortest,
            WeightMode::Balanced => &mut self.balanced,
        }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `from` to `to` under `mode`.
    ///
    /// `from == to` yields an empty route; no path yields
    /// [`NetworkError::NoRoute`].
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        mode: WeightMode,
    ) -> NetworkResult<Route>;
}

/// Route `from_name → to_name` under every weight mode.
pub fn plan_all<R: Router>(
    router: &R,
    network: &RoadNetwork,
    from_name: &str,
    to_name: &str,
) -> NetworkResult<MultiPath> {
    let from = network.node_id(from_name)?;
    let to = network.node_id(to_name)?;

    let mut paths = MultiPath::default();
    for mode in WeightMode::ALL {
        match router.route(network, from, to, mode) {
            Ok(route) => *paths.slot(mode) = Some(route.summary(network)),
            Err(NetworkError::NoRoute { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(paths)
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        mode: WeightMode,
    ) -> NetworkResult<Route> {
        for node in [from, to] {
            if node.index() >= network.node_count() {
                return Err(NetworkError::NodeNotFound(node));
            }
        }
        dijkstra(network, from, to, mode)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Integer edge cost for `mode`, or `None` if the edge is impassable.
#[inline]
fn edge_cost(network: &RoadNetwork, edge: EdgeId, mode: WeightMode) -> Option<u64> {
    let i = edge.index();
    let raw = match mode {
        WeightMode::Time     => network.edge_travel_secs[i] * 1_000.0,
        WeightMode::Distance => network.edge_length_m[i] * 1_000.0,
        WeightMode::Balanced => network.edge_balanced[i] * 1_000_000.0,
    };
    (raw.is_finite() && raw >= 0.0).then(|| raw.round() as u64)
}

fn dijkstra(
    network: &RoadNetwork,
    from: NodeId,
    to: NodeId,
    mode: WeightMode,
) -> NetworkResult<Route> {
    if from == to {
        return Ok(Route { from, edges: vec![], total_time_secs: 0.0, total_length_m: 0.0 });
    }

    let n = network.node_count();
    let mut dist      = vec![u64::MAX; n];
    let mut prev_edge = vec![EdgeId::NONE; n];

    dist[from.index()] = 0;

    // Min-heap via Reverse; NodeId as secondary key keeps ties deterministic.
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, &prev_edge, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let Some(step) = edge_cost(network, edge, mode) else {
                continue;
            };
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost.saturating_add(step);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(NetworkError::NoRoute { from, to })
}

fn reconstruct(network: &RoadNetwork, prev_edge: &[EdgeId], from: NodeId, to: NodeId) -> Route {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        if e == EdgeId::NONE {
            break;
        }
        edges.push(e);
        cur = network.edge_from[e.index()];
    }
    edges.reverse();

    let total_time_secs = edges.iter().map(|e| network.edge_travel_secs[e.index()]).sum();
    let total_length_m = edges.iter().map(|e| network.edge_length_m[e.index()]).sum();

    Route { from, edges, total_time_secs, total_length_m }
}
