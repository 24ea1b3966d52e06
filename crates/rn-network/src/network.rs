//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`.
//!
//! # Edge weights
//!
//! Each directed edge carries three costs, one per [`WeightMode`]:
//!
//! - `edge_travel_secs`: BPR-congested travel time (infinite if the road's
//!   attributes are degenerate; such edges are impassable by time);
//! - `edge_length_m`: physical length;
//! - `edge_balanced`: `time_w · norm(time) + distance_w · norm(length)`,
//!   each term min–max normalised over all edges with a finite time.
//!
//! [`WeightMode`]: crate::WeightMode

use rustc_hash::FxHashMap;
use tracing::warn;

use rn_congestion::BprParams;
use rn_core::{Direction, EdgeId, NodeId, RoadRecord};

use crate::{NetworkError, NetworkResult};

// ── PathWeights ───────────────────────────────────────────────────────────────

/// Blend factors for the balanced score.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathWeights {
    pub time:     f64,
    pub distance: f64,
}

impl Default for PathWeights {
    fn default() -> Self {
        Self { time: 0.6, distance: 0.4 }
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format with named nodes.
///
/// Edge fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`] or
/// [`RoadNetwork::from_records`].
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Name of each node.  Indexed by `NodeId`.
    pub node_names: Vec<String>,
    name_index:     FxHashMap<String, NodeId>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    pub edge_from:        Vec<NodeId>,
    pub edge_to:          Vec<NodeId>,
    pub edge_length_m:    Vec<f64>,
    pub edge_travel_secs: Vec<f64>,
    pub edge_balanced:    Vec<f64>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    /// Build a network from snapshot rows.
    ///
    /// One-way rows add `start → end`; two-way rows add both directions.
    /// Rows without a direction cannot be routed and are skipped with a
    /// warning.  Edge travel time is the BPR-congested time under `bpr`.
    pub fn from_records(records: &[RoadRecord], bpr: &BprParams, weights: PathWeights) -> Self {
        let mut b = RoadNetworkBuilder::with_capacity(records.len(), records.len() * 2).weights(weights);

        for rec in records {
            let Some(direction) = rec.direction else {
                warn!(road = %rec.road_id, "road has no direction; left out of the network");
                continue;
            };

            let from = b.node(&rec.start);
            let to = b.node(&rec.end);
            let travel_secs =
                bpr.travel_time_secs(rec.vehicles, rec.lanes, rec.length_m, rec.speed_limit_kmh);

            match direction {
                Direction::OneWay => b.add_directed_edge(from, to, rec.length_m, travel_secs),
                Direction::TwoWay => b.add_road(from, to, rec.length_m, travel_secs),
            }
        }

        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_names.is_empty()
    }

    // ── Names ─────────────────────────────────────────────────────────────

    /// Resolve a node name.
    pub fn node_id(&self, name: &str) -> NetworkResult<NodeId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownNode(name.to_owned()))
    }

    pub fn node_name(&self, node: NodeId) -> NetworkResult<&str> {
        self.node_names
            .get(node.index())
            .map(String::as_str)
            .ok_or(NetworkError::NodeNotFound(node))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(EdgeId::from_index)
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// Nodes are interned by name; edges may be added in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, and computes the
/// balanced score of every edge.
///
/// # Example
///
/// ```
/// use rn_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.node("People's Square");
/// let c = b.node("The Bund");
/// b.add_road(a, c, 1_600.0, 150.0);
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // two-way
/// ```
pub struct RoadNetworkBuilder {
    nodes:      Vec<String>,
    name_index: FxHashMap<String, NodeId>,
    raw_edges:  Vec<RawEdge>,
    weights:    PathWeights,
}

struct RawEdge {
    from:        NodeId,
    to:          NodeId,
    length_m:    f64,
    travel_secs: f64,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:      Vec::with_capacity(nodes),
            name_index: FxHashMap::default(),
            raw_edges:  Vec::with_capacity(edges),
            weights:    PathWeights::default(),
        }
    }

    /// Override the balanced-score blend.
    pub fn weights(mut self, weights: PathWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Return the `NodeId` for `name`, adding the node on first sight.
    pub fn node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_index.get(name) {
            return id;
        }
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(name.to_owned());
        self.name_index.insert(name.to_owned(), id);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length_m: f64, travel_secs: f64) {
        self.raw_edges.push(RawEdge { from, to, length_m, travel_secs });
    }

    /// Add edges in **both directions** for a two-way road.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f64, travel_secs: f64) {
        self.add_directed_edge(a, b, length_m, travel_secs);
        self.add_directed_edge(b, a, length_m, travel_secs);
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Stable sort keeps insertion order among a node's edges.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:        Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:          Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_m:    Vec<f64>    = raw.iter().map(|e| e.length_m).collect();
        let edge_travel_secs: Vec<f64>    = raw.iter().map(|e| e.travel_secs).collect();
        let edge_balanced = balanced_scores(&edge_travel_secs, &edge_length_m, self.weights);

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        RoadNetwork {
            node_names: self.nodes,
            name_index: self.name_index,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            edge_travel_secs,
            edge_balanced,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Balanced score ────────────────────────────────────────────────────────────

/// Min–max range over the finite values of a series; `None` if there are none.
fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn normalise(v: f64, range: Option<(f64, f64)>) -> f64 {
    match range {
        Some((lo, hi)) if hi > lo => (v - lo) / (hi - lo),
        _ => 0.0,
    }
}

fn balanced_scores(times: &[f64], lengths: &[f64], w: PathWeights) -> Vec<f64> {
    let time_range = finite_range(times);
    let length_range = finite_range(lengths);

    times
        .iter()
        .zip(lengths)
        .map(|(&t, &l)| {
            if !t.is_finite() {
                return f64::INFINITY;
            }
            w.time * normalise(t, time_range) + w.distance * normalise(l, length_range)
        })
        .collect()
}
