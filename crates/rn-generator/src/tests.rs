//! Unit tests for rn-generator.

#[cfg(test)]
mod helpers {
    use rn_core::{Direction, NodeId, Road, RoadId};

    use crate::catalog;
    use crate::{Poi, Profile, ProfileConfig};

    pub fn poi(name: &str) -> &'static Poi {
        catalog::lookup(name).unwrap_or_else(|| panic!("{name} not in catalog"))
    }

    /// Simple-profile settings over an explicit point list.
    pub fn config_with(points: &[&str]) -> ProfileConfig {
        ProfileConfig {
            points: points.iter().map(|n| poi(n)).collect(),
            ..Profile::Simple.config()
        }
    }

    /// One-way chain `0 → 1 → … → n-1`.
    pub fn one_way_chain(n: u32) -> Vec<Road> {
        (0..n - 1)
            .map(|i| Road {
                id:        RoadId(i),
                from:      NodeId(i),
                to:        NodeId(i + 1),
                length_m:  1_000.0,
                lanes:     2,
                speed_kmh: 60.0,
                direction: Direction::OneWay,
            })
            .collect()
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use rustc_hash::FxHashSet;

    use crate::catalog::{CATALOG, REFERENCE_KM, lookup, points, reference_km};

    #[test]
    fn names_unique() {
        let names: FxHashSet<_> = CATALOG.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 17);
    }

    #[test]
    fn anchors_are_hubs() {
        assert_eq!(CATALOG.iter().filter(|p| p.hub).count(), 6);
        assert_eq!(CATALOG.iter().filter(|p| p.anchor).count(), 4);
        assert!(CATALOG.iter().filter(|p| p.anchor).all(|p| p.hub));
    }

    #[test]
    fn reference_table_names_exist() {
        for &(a, b, km) in REFERENCE_KM {
            assert!(lookup(a).is_some(), "{a}");
            assert!(lookup(b).is_some(), "{b}");
            assert!(km > 0);
        }
    }

    #[test]
    fn reference_lookup_is_symmetric() {
        assert_eq!(reference_km("People's Square", "The Bund"), Some(2));
        assert_eq!(reference_km("The Bund", "People's Square"), Some(2));
        assert_eq!(reference_km("Tianzifang", "Century Park"), None);
    }

    #[test]
    fn far_suburb_filter() {
        assert_eq!(points(true).len(), 17);
        let near = points(false);
        assert_eq!(near.len(), 16);
        assert!(near.iter().all(|p| !p.area.is_far_suburb()));
    }
}

// ── Profiles ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod profile {
    use rn_core::TimeOfDay;

    use super::helpers::config_with;
    use crate::{DirectionRule, GenError, Profile};

    #[test]
    fn built_in_configs_validate() {
        for p in Profile::ALL {
            p.config().validate().unwrap_or_else(|e| panic!("{p}: {e}"));
            assert_eq!(p.config().direction_rule, DirectionRule::Fixed);
            assert_eq!(p.config().max_endpoint_attempts, 200);
        }
    }

    #[test]
    fn snapshot_counts() {
        assert_eq!(Profile::Simple.config().snapshots, [TimeOfDay::hm(12, 0)]);
        assert_eq!(Profile::Medium.config().snapshots.len(), 2);
        assert_eq!(Profile::Complex.config().snapshots.len(), 3);
    }

    #[test]
    fn parse_and_case_dir() {
        assert_eq!("Complex".parse::<Profile>().unwrap(), Profile::Complex);
        assert_eq!(" simple ".parse::<Profile>().unwrap(), Profile::Simple);
        assert!(matches!("huge".parse::<Profile>(), Err(GenError::Config(_))));
        assert_eq!(Profile::Medium.case_dir(), "case2_medium");
    }

    #[test]
    fn validate_rejects_degenerate_settings() {
        let bad = [
            config_with(&["People's Square"]),
            config_with(&["Yu Garden", "Tianzifang"]), // no anchor
            { let mut c = Profile::Simple.config(); c.road_count = 5..=4; c },
            { let mut c = Profile::Simple.config(); c.one_way_prob = 1.5; c },
            { let mut c = Profile::Simple.config(); c.one_way_prob = f64::NAN; c },
            { let mut c = Profile::Simple.config(); c.core_lane_weights = [0, 0, 0]; c },
            { let mut c = Profile::Simple.config(); c.max_endpoint_attempts = 0; c },
            { let mut c = Profile::Complex.config(); c.far_km = Some(0..=0); c },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(GenError::Config(_))), "{cfg:?}");
        }
    }
}

// ── Road synthesis ────────────────────────────────────────────────────────────

#[cfg(test)]
mod synth {
    use rn_core::{AreaCategory, Direction, GenRng};

    use super::helpers::poi;
    use crate::Profile;
    use crate::synth::{
        CORE_SPEED_KMH, SUBURB_MAIN_SPEED_KMH, SUBURB_MINOR_SPEED_KMH, direction, lanes_and_speed,
        road_length_m,
    };

    #[test]
    fn reference_distance_with_jitter() {
        let cfg = Profile::Medium.config();
        let mut rng = GenRng::new(3);
        for _ in 0..200 {
            let (a, b) = (poi("People's Square"), poi("The Bund"));
            for len in [road_length_m(a, b, &cfg, &mut rng), road_length_m(b, a, &cfg, &mut rng)] {
                assert!((1_800.0..=2_200.0).contains(&len), "{len}");
                assert_eq!(len, len.round());
            }
        }
    }

    #[test]
    fn random_range_without_reference() {
        let cfg = Profile::Simple.config();
        let mut rng = GenRng::new(4);
        for _ in 0..200 {
            let len = road_length_m(poi("Tianzifang"), poi("Century Park"), &cfg, &mut rng);
            assert!((2_700.0..=11_000.0).contains(&len), "{len}");
        }
    }

    #[test]
    fn far_suburb_uses_far_range_in_complex() {
        let mut rng = GenRng::new(5);
        let complex = Profile::Complex.config();
        let medium = Profile::Medium.config();
        for _ in 0..200 {
            let far = road_length_m(poi("Yu Garden"), poi("Donglin Temple"), &complex, &mut rng);
            assert!((40_500.0..=66_000.0).contains(&far), "{far}");
            let near = road_length_m(poi("Yu Garden"), poi("Donglin Temple"), &medium, &mut rng);
            assert!(near <= 16_500.0, "{near}");
        }
    }

    #[test]
    fn lanes_and_speed_by_class() {
        let mut cfg = Profile::Medium.config();
        cfg.core_lane_weights = [0, 1, 0];
        let mut rng = GenRng::new(6);
        for _ in 0..100 {
            let (lanes, speed) =
                lanes_and_speed(AreaCategory::Core, AreaCategory::Core, &cfg, &mut rng).unwrap();
            assert_eq!((lanes, speed), (4, CORE_SPEED_KMH));

            let (lanes, speed) =
                lanes_and_speed(AreaCategory::Edge, AreaCategory::Core, &cfg, &mut rng).unwrap();
            assert!((2..=4).contains(&lanes));
            assert_eq!(speed, SUBURB_MAIN_SPEED_KMH);

            let (lanes, speed) =
                lanes_and_speed(AreaCategory::SuburbMain, AreaCategory::Edge, &cfg, &mut rng)
                    .unwrap();
            assert!((2..=3).contains(&lanes));
            assert_eq!(speed, SUBURB_MINOR_SPEED_KMH);
        }
    }

    #[test]
    fn direction_extremes() {
        let mut rng = GenRng::new(7);
        assert!((0..50).all(|_| direction(0.0, &mut rng) == Direction::TwoWay));
        assert!((0..50).all(|_| direction(1.0, &mut rng) == Direction::OneWay));
    }
}

// ── Road-set construction ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rustc_hash::FxHashSet;

    use rn_core::{GenRng, NodeId, RoadId};

    use super::helpers::config_with;
    use crate::{GenError, Profile, RoadSetBuilder};

    #[test]
    fn invariants_hold_across_seeds() {
        for profile in Profile::ALL {
            let cfg = profile.config();
            for seed in 0..20 {
                let set = RoadSetBuilder::new(&cfg).build(&mut GenRng::new(seed)).unwrap();

                assert!(cfg.road_count.contains(&set.target), "{profile} seed {seed}");
                assert_eq!(set.roads.len(), set.target + set.repair_roads);

                let mut pairs = FxHashSet::default();
                let mut touched = vec![false; cfg.points.len()];
                for (i, r) in set.roads.iter().enumerate() {
                    assert_eq!(r.id, RoadId(i as u32));
                    assert_ne!(r.from, r.to);
                    assert!(pairs.insert((r.from, r.to)), "duplicate pair {r:?}");
                    assert!(r.length_m > 0.0 && r.lanes >= 1 && r.speed_kmh > 0.0);
                    touched[r.from.index()] = true;
                    touched[r.to.index()] = true;
                }
                assert!(touched.iter().all(|&t| t), "{profile} seed {seed}: isolated point");
            }
        }
    }

    #[test]
    fn edge_phase_avoids_hubs() {
        let cfg = Profile::Medium.config();
        let set = RoadSetBuilder::new(&cfg).build(&mut GenRng::new(11)).unwrap();
        assert_eq!(set.edge_roads, set.target * 3 / 10);
        for r in &set.roads[..set.edge_roads] {
            assert!(!cfg.points[r.from.index()].hub);
            assert!(!cfg.points[r.to.index()].hub);
        }
    }

    #[test]
    fn repair_wires_isolated_points_to_anchors() {
        let mut cfg = Profile::Simple.config();
        cfg.road_count = 1..=1;
        let set = RoadSetBuilder::new(&cfg).build(&mut GenRng::new(12)).unwrap();

        assert_eq!(set.target, 1);
        // Isolated anchors may be wired up by another point's repair road.
        assert!(set.repair_roads >= cfg.points.len() - 2 - 4);
        for r in &set.roads[1..] {
            assert!(cfg.points[r.to.index()].anchor, "{r:?}");
            assert_ne!(r.from, r.to);
        }
    }

    #[test]
    fn saturated_point_set() {
        let mut cfg = config_with(&["People's Square", "The Bund"]);
        cfg.road_count = 5..=5;
        let err = RoadSetBuilder::new(&cfg).build(&mut GenRng::new(13)).unwrap_err();
        assert!(matches!(err, GenError::Saturated { placed: 2, target: 5, .. }), "{err:?}");
    }

    #[test]
    fn far_suburb_flag() {
        let simple = Profile::Simple.config();
        let set = RoadSetBuilder::new(&simple).build(&mut GenRng::new(14)).unwrap();
        assert!(!set.touches_far_suburb);

        // Repair guarantees the far-suburb point gets a road.
        let complex = Profile::Complex.config();
        let set = RoadSetBuilder::new(&complex).build(&mut GenRng::new(14)).unwrap();
        assert!(set.touches_far_suburb);
        let far = NodeId(complex.points.iter().position(|p| p.area.is_far_suburb()).unwrap() as u32);
        assert!(set.roads.iter().any(|r| r.touches(far)));
    }
}

// ── Start/end selection ───────────────────────────────────────────────────────

#[cfg(test)]
mod endpoints {
    use rn_core::GenRng;
    use rn_network::is_reachable;

    use super::helpers::one_way_chain;
    use crate::{DirectionRule, GenError, Profile, RoadSetBuilder, select_endpoints};

    #[test]
    fn accepted_pair_is_reachable() {
        for profile in Profile::ALL {
            let cfg = profile.config();
            for seed in 0..10 {
                let mut rng = GenRng::new(seed);
                let set = RoadSetBuilder::new(&cfg).build(&mut rng).unwrap();
                let ep = select_endpoints(&cfg, &set.roads, &mut rng).unwrap();
                assert_ne!(ep.start, ep.end);
                assert!(ep.attempts >= 1 && ep.attempts <= cfg.max_endpoint_attempts);
                assert!(is_reachable(cfg.points.len(), &set.roads, ep.start, ep.end, |r| r.direction));
            }
        }
    }

    #[test]
    fn budget_exhausted_exactly() {
        let mut cfg = Profile::Simple.config();
        let err = select_endpoints(&cfg, &[], &mut GenRng::new(1)).unwrap_err();
        assert_eq!(err, GenError::Disconnected { attempts: 200 });

        cfg.max_endpoint_attempts = 7;
        let err = select_endpoints(&cfg, &[], &mut GenRng::new(1)).unwrap_err();
        assert_eq!(err, GenError::Disconnected { attempts: 7 });
    }

    #[test]
    fn fixed_rule_respects_stored_direction() {
        let cfg = Profile::Simple.config();
        let roads = one_way_chain(cfg.points.len() as u32);
        for seed in 0..20 {
            let ep = select_endpoints(&cfg, &roads, &mut GenRng::new(seed)).unwrap();
            assert!(ep.start < ep.end, "{ep:?}");
        }
    }

    #[test]
    fn resample_rule_redraws_directions() {
        let mut cfg = Profile::Simple.config();
        cfg.direction_rule = DirectionRule::Resample;
        cfg.one_way_prob = 0.0;
        // Every road re-drawn as two-way: the first check always succeeds.
        let roads = one_way_chain(cfg.points.len() as u32);
        for seed in 0..20 {
            let ep = select_endpoints(&cfg, &roads, &mut GenRng::new(seed)).unwrap();
            assert_eq!(ep.attempts, 1);
        }
    }
}

// ── Traffic ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use rn_core::{GenRng, TimeOfDay};

    use super::helpers::one_way_chain;
    use crate::Snapshot;
    use crate::traffic::{base_vehicles, lane_bonus, occupancy};

    #[test]
    fn demand_curve_passes_through_anchors() {
        assert_eq!(base_vehicles(TimeOfDay::hm(8, 0)), 18.0);
        assert_eq!(base_vehicles(TimeOfDay::hm(12, 0)), 8.0);
        assert_eq!(base_vehicles(TimeOfDay::hm(14, 0)), 6.0);
        assert_eq!(base_vehicles(TimeOfDay::hm(18, 30)), 20.0);
    }

    #[test]
    fn demand_curve_interpolates() {
        assert_eq!(base_vehicles(TimeOfDay::hm(10, 0)), 13.0);
        assert_eq!(base_vehicles(TimeOfDay::hm(23, 0)), 5.5);
        assert_eq!(base_vehicles(TimeOfDay::MIDNIGHT), 3.0);
    }

    #[test]
    fn occupancy_bounds() {
        let mut rng = GenRng::new(9);
        let mut roads = one_way_chain(6);
        for (r, lanes) in roads.iter_mut().zip([1u8, 2, 3, 4, 5]) {
            r.lanes = lanes;
        }
        for t in [TimeOfDay::MIDNIGHT, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 30)] {
            for _ in 0..100 {
                for r in &roads {
                    let v = occupancy(r, t, &mut rng);
                    assert!(v >= 1 && v <= u32::from(r.lanes) * 8, "{v} on {} lanes", r.lanes);
                }
            }
        }
        assert_eq!((lane_bonus(2), lane_bonus(3), lane_bonus(4), lane_bonus(5)), (0, 2, 4, 0));
    }

    #[test]
    fn snapshot_covers_every_road() {
        let roads = one_way_chain(10);
        let snap = Snapshot::draw(&roads, TimeOfDay::hm(14, 0), &mut GenRng::new(1));
        assert_eq!(snap.vehicles.len(), roads.len());
        assert_eq!(snap.time, TimeOfDay::hm(14, 0));
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use rn_core::GenRng;

    use crate::{Profile, generate_scenario};

    #[test]
    fn same_seed_same_scenario() {
        for profile in Profile::ALL {
            let a = generate_scenario(profile, &mut GenRng::new(2024)).unwrap();
            let b = generate_scenario(profile, &mut GenRng::new(2024)).unwrap();
            assert_eq!(a.roads, b.roads);
            assert_eq!(a.endpoints, b.endpoints);
            assert_eq!(a.snapshots, b.snapshots);
        }
    }

    #[test]
    fn different_child_streams_differ() {
        let root = GenRng::new(1);
        let a = generate_scenario(Profile::Complex, &mut root.child(0)).unwrap();
        let b = generate_scenario(Profile::Complex, &mut root.child(1)).unwrap();
        assert_ne!(a.roads, b.roads);
    }

    #[test]
    fn records_match_roads() {
        let s = generate_scenario(Profile::Medium, &mut GenRng::new(5)).unwrap();
        assert_eq!(s.snapshots.len(), 2);
        assert_eq!(s.description, Profile::Medium.config().description);

        let recs = s.records(&s.snapshots[0]);
        assert_eq!(recs.len(), s.roads.len());
        assert_eq!(recs[0].road_id, "SH01");
        for (rec, road) in recs.iter().zip(&s.roads) {
            assert_eq!(rec.start, s.point_name(road.from));
            assert_eq!(rec.end, s.point_name(road.to));
            assert_eq!(rec.direction, Some(road.direction));
            assert_eq!(rec.lanes, i32::from(road.lanes));
        }
        assert_ne!(s.start_name(), s.end_name());
    }
}
