//! Unit tests for rn-network.
//!
//! All tests use hand-crafted networks so they run without any fixture file.

#[cfg(test)]
mod helpers {
    use rn_core::{Direction, NodeId, Road, RoadId, RoadRecord};

    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Five named nodes:
    ///
    /// ```text
    ///   A ── B ── C
    ///   │ ╲       │
    ///   D  ╲──────E      (A–E is short but slow)
    ///    ╲_______/
    /// ```
    ///
    /// Two-way edges `(length_m, travel_secs)`:
    ///   A-B (100, 10), B-C (100, 10), C-E (100, 10)   → A→E 300 m, 30 s
    ///   A-D (500, 50), D-E (100, 10)                  → A→E 600 m, 60 s
    ///   A-E (250, 100)                                → A→E 250 m, 100 s
    pub fn grid_network() -> (RoadNetwork, [NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();
        let a = b.node("A");
        let bb = b.node("B");
        let c = b.node("C");
        let d = b.node("D");
        let e = b.node("E");

        b.add_road(a, bb, 100.0, 10.0);
        b.add_road(bb, c, 100.0, 10.0);
        b.add_road(c, e, 100.0, 10.0);
        b.add_road(a, d, 500.0, 50.0);
        b.add_road(d, e, 100.0, 10.0);
        b.add_road(a, e, 250.0, 100.0);

        (b.build(), [a, bb, c, d, e])
    }

    pub fn road(id: u32, from: u32, to: u32, direction: Direction) -> Road {
        Road {
            id:        RoadId(id),
            from:      NodeId(from),
            to:        NodeId(to),
            length_m:  1_000.0,
            lanes:     2,
            speed_kmh: 40.0,
            direction,
        }
    }

    pub fn record(id: &str, start: &str, end: &str, direction: Option<Direction>) -> RoadRecord {
        RoadRecord {
            road_id:         id.to_owned(),
            start:           start.to_owned(),
            end:             end.to_owned(),
            direction,
            length_m:        1_000.0,
            speed_limit_kmh: 60.0,
            lanes:           2,
            vehicles:        10,
        }
    }
}

// ── Reachability ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reach {
    use rn_core::{Direction, NodeId};

    use super::helpers::road;
    use crate::is_reachable;

    #[test]
    fn one_way_chain_forward_only() {
        let roads = [road(0, 0, 1, Direction::OneWay), road(1, 1, 2, Direction::OneWay)];
        assert!(is_reachable(3, &roads, NodeId(0), NodeId(2), |r| r.direction));
        assert!(!is_reachable(3, &roads, NodeId(2), NodeId(0), |r| r.direction));
    }

    #[test]
    fn two_way_traversed_backwards() {
        let roads = [road(0, 0, 1, Direction::TwoWay), road(1, 2, 1, Direction::TwoWay)];
        assert!(is_reachable(3, &roads, NodeId(0), NodeId(2), |r| r.direction));
        assert!(is_reachable(3, &roads, NodeId(2), NodeId(0), |r| r.direction));
    }

    #[test]
    fn rule_overrides_stored_direction() {
        let roads = [road(0, 0, 1, Direction::OneWay)];
        assert!(!is_reachable(2, &roads, NodeId(1), NodeId(0), |r| r.direction));
        assert!(is_reachable(2, &roads, NodeId(1), NodeId(0), |_| Direction::TwoWay));
    }

    #[test]
    fn rule_evaluated_per_hop() {
        let roads = [
            road(0, 0, 1, Direction::OneWay),
            road(1, 1, 2, Direction::OneWay),
            road(2, 3, 4, Direction::OneWay),
        ];
        let mut seen = Vec::new();
        let found = is_reachable(5, &roads, NodeId(0), NodeId(4), |r| {
            seen.push(r.id.0);
            r.direction
        });
        assert!(!found);
        // Road 0 is scanned from node 0 and again from node 1; road 2 is
        // never reached.
        assert_eq!(seen, [0, 0, 1, 1]);
    }

    #[test]
    fn rule_may_differ_between_hops() {
        // 0 -> 1 -> 2, where the second hop needs road 1 (2 -> 1) to be
        // two-way.  The rule answers two-way only on its third call, so a
        // road is re-rolled per hop, not once per search.
        let roads = [road(0, 0, 1, Direction::OneWay), road(1, 2, 1, Direction::OneWay)];
        let mut calls = 0;
        let found = is_reachable(3, &roads, NodeId(0), NodeId(2), |_| {
            calls += 1;
            if calls == 3 { Direction::TwoWay } else { Direction::OneWay }
        });
        assert!(found);
        assert_eq!(calls, 3);
    }

    #[test]
    fn disconnected_components() {
        let roads = [road(0, 0, 1, Direction::TwoWay), road(1, 2, 3, Direction::TwoWay)];
        assert!(!is_reachable(4, &roads, NodeId(0), NodeId(3), |r| r.direction));
    }

    #[test]
    fn trivial_and_out_of_range() {
        assert!(is_reachable(1, &[], NodeId(0), NodeId(0), |r| r.direction));
        assert!(!is_reachable(2, &[], NodeId(0), NodeId(5), |r| r.direction));
        // Roads pointing outside the node range are ignored.
        let roads = [road(0, 0, 9, Direction::TwoWay)];
        assert!(!is_reachable(2, &roads, NodeId(0), NodeId(1), |r| r.direction));
    }

    #[test]
    fn cycle_terminates() {
        let roads = [
            road(0, 0, 1, Direction::OneWay),
            road(1, 1, 2, Direction::OneWay),
            road(2, 2, 0, Direction::OneWay),
        ];
        assert!(!is_reachable(4, &roads, NodeId(0), NodeId(3), |r| r.direction));
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::{NetworkError, RoadNetwork, RoadNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = RoadNetwork::empty();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn nodes_are_interned() {
        let mut b = RoadNetworkBuilder::new();
        let a1 = b.node("Lujiazui");
        let a2 = b.node("Lujiazui");
        assert_eq!(a1, a2);
        assert_eq!(b.node_count(), 1);
    }

    #[test]
    fn csr_out_edges() {
        let (net, [a, b, c, d, e]) = super::helpers::grid_network();
        assert_eq!(net.out_degree(a), 3); // B, D, E
        assert_eq!(net.out_degree(b), 2);
        assert_eq!(net.out_degree(c), 2);
        assert_eq!(net.out_degree(d), 2);
        assert_eq!(net.out_degree(e), 3);
        for edge in net.out_edges(a) {
            assert_eq!(net.edge_from[edge.index()], a);
        }
    }

    #[test]
    fn name_lookup() {
        let (net, [a, ..]) = super::helpers::grid_network();
        assert_eq!(net.node_id("A").unwrap(), a);
        assert_eq!(net.node_name(a).unwrap(), "A");
        assert_eq!(net.node_id("Z"), Err(NetworkError::UnknownNode("Z".into())));
    }

    #[test]
    fn balanced_scores_are_normalised() {
        let (net, _) = super::helpers::grid_network();
        for &s in &net.edge_balanced {
            assert!((0.0..=1.0).contains(&s), "score {s}");
        }
        // The slowest edge (A-E, 100 s) scores 0.6·1 + 0.4·(150/400).
        let max = net.edge_balanced.iter().copied().fold(0.0, f64::max);
        assert!((max - 0.75).abs() < 1e-12, "max {max}");
    }
}

// ── Loading from records ──────────────────────────────────────────────────────

#[cfg(test)]
mod from_records {
    use rn_congestion::BprParams;
    use rn_core::Direction;

    use super::helpers::record;
    use crate::{PathWeights, RoadNetwork};

    #[test]
    fn directions_expand_edges() {
        let recs = [
            record("R1", "A", "B", Some(Direction::OneWay)),
            record("R2", "B", "C", Some(Direction::TwoWay)),
        ];
        let net = RoadNetwork::from_records(&recs, &BprParams::default(), PathWeights::default());
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.edge_count(), 3);
        let b = net.node_id("B").unwrap();
        assert_eq!(net.out_degree(b), 1); // B→C only; A→B is one-way
    }

    #[test]
    fn rows_without_direction_skipped() {
        let recs = [
            record("R1", "A", "B", None),
            record("R2", "B", "C", Some(Direction::OneWay)),
        ];
        let net = RoadNetwork::from_records(&recs, &BprParams::default(), PathWeights::default());
        assert_eq!(net.edge_count(), 1);
        assert!(net.node_id("A").is_err());
    }

    #[test]
    fn travel_time_is_congested() {
        let mut rec = record("R1", "A", "B", Some(Direction::OneWay));
        rec.vehicles = 0;
        let free = RoadNetwork::from_records(&[rec.clone()], &BprParams::default(), PathWeights::default());
        // 1 km at 60 km/h = 60 s
        assert!((free.edge_travel_secs[0] - 60.0).abs() < 1e-9);

        rec.vehicles = 80;
        let busy = RoadNetwork::from_records(&[rec], &BprParams::default(), PathWeights::default());
        assert!(busy.edge_travel_secs[0] > 60.0);
    }

    #[test]
    fn degenerate_rows_have_infinite_time() {
        let mut rec = record("R1", "A", "B", Some(Direction::OneWay));
        rec.lanes = 0;
        let net = RoadNetwork::from_records(&[rec], &BprParams::default(), PathWeights::default());
        assert!(net.edge_travel_secs[0].is_infinite());
        assert!(net.edge_balanced[0].is_infinite());
    }
}

// ── Dijkstra routing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use rn_congestion::BprParams;
    use rn_core::{Direction, NodeId};

    use super::helpers::record;
    use crate::{
        DijkstraRouter, NetworkError, PathWeights, RoadNetwork, RoadNetworkBuilder, Router,
        WeightMode, plan_all,
    };

    #[test]
    fn trivial_same_node() {
        let (net, [a, ..]) = super::helpers::grid_network();
        let r = DijkstraRouter.route(&net, a, a, WeightMode::Time).unwrap();
        assert!(r.is_trivial());
        assert_eq!(r.total_time_secs, 0.0);
        assert_eq!(r.nodes(&net), vec![a]);
    }

    #[test]
    fn fastest_path() {
        let (net, [a, b, c, _, e]) = super::helpers::grid_network();
        let route = DijkstraRouter.route(&net, a, e, WeightMode::Time).unwrap();
        assert_eq!(route.nodes(&net), vec![a, b, c, e]);
        assert_eq!(route.total_time_secs, 30.0);
        assert_eq!(route.total_length_m, 300.0);
    }

    #[test]
    fn shortest_path_differs_from_fastest() {
        let (net, [a, _, _, _, e]) = super::helpers::grid_network();
        let route = DijkstraRouter.route(&net, a, e, WeightMode::Distance).unwrap();
        assert_eq!(route.nodes(&net), vec![a, e]);
        assert_eq!(route.total_length_m, 250.0);
        // Time is still reported for a distance route.
        assert_eq!(route.total_time_secs, 100.0);
    }

    #[test]
    fn balanced_avoids_slow_short_edge() {
        let (net, [a, b, c, _, e]) = super::helpers::grid_network();
        let route = DijkstraRouter.route(&net, a, e, WeightMode::Balanced).unwrap();
        assert_eq!(route.nodes(&net), vec![a, b, c, e]);
    }

    #[test]
    fn directed_one_way_blocks_return() {
        let mut b = RoadNetworkBuilder::new();
        let x = b.node("X");
        let y = b.node("Y");
        b.add_directed_edge(x, y, 100.0, 10.0);
        let net = b.build();

        assert!(DijkstraRouter.route(&net, x, y, WeightMode::Time).is_ok());
        assert_eq!(
            DijkstraRouter.route(&net, y, x, WeightMode::Time).unwrap_err(),
            NetworkError::NoRoute { from: y, to: x }
        );
    }

    #[test]
    fn out_of_range_node() {
        let (net, [a, ..]) = super::helpers::grid_network();
        let err = DijkstraRouter.route(&net, a, NodeId(99), WeightMode::Time).unwrap_err();
        assert_eq!(err, NetworkError::NodeNotFound(NodeId(99)));
    }

    #[test]
    fn impassable_by_time_but_not_by_distance() {
        let mut broken = record("R1", "A", "B", Some(Direction::OneWay));
        broken.lanes = 0;
        let net = RoadNetwork::from_records(&[broken], &BprParams::default(), PathWeights::default());
        let (a, b) = (net.node_id("A").unwrap(), net.node_id("B").unwrap());
        assert!(DijkstraRouter.route(&net, a, b, WeightMode::Time).is_err());
        assert!(DijkstraRouter.route(&net, a, b, WeightMode::Balanced).is_err());
        assert!(DijkstraRouter.route(&net, a, b, WeightMode::Distance).is_ok());
    }

    #[test]
    fn plan_all_modes() {
        let (net, _) = super::helpers::grid_network();
        let paths = plan_all(&DijkstraRouter, &net, "A", "E").unwrap();
        assert_eq!(paths.get(WeightMode::Time).unwrap().nodes, ["A", "B", "C", "E"]);
        assert_eq!(paths.get(WeightMode::Distance).unwrap().nodes, ["A", "E"]);
        assert_eq!(paths.get(WeightMode::Balanced).unwrap().nodes, ["A", "B", "C", "E"]);
    }

    #[test]
    fn plan_all_missing_route_is_none() {
        let mut b = RoadNetworkBuilder::new();
        let x = b.node("X");
        let y = b.node("Y");
        b.add_directed_edge(x, y, 100.0, 10.0);
        let net = b.build();
        let paths = plan_all(&DijkstraRouter, &net, "Y", "X").unwrap();
        assert!(paths.fastest.is_none() && paths.shortest.is_none() && paths.balanced.is_none());
    }

    #[test]
    fn plan_all_unknown_name() {
        let (net, _) = super::helpers::grid_network();
        assert_eq!(
            plan_all(&DijkstraRouter, &net, "A", "Nowhere").unwrap_err(),
            NetworkError::UnknownNode("Nowhere".into())
        );
    }
}
