//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, RoadId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from_index(42), id);
    }

    #[test]
    fn no_edge_sentinel() {
        assert_eq!(EdgeId::NONE.0, u32::MAX);
        assert_ne!(EdgeId::from_index(0), EdgeId::NONE);
    }

    #[test]
    fn road_label_is_one_based() {
        assert_eq!(RoadId(0).label(), "SH01");
        assert_eq!(RoadId(41).label(), "SH42");
        assert_eq!(RoadId(122).label(), "SH123");
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "node 7");
        assert_eq!(RoadId(2).to_string(), "road 2");
    }
}

#[cfg(test)]
mod area {
    use crate::{AreaCategory, RoadClass};

    #[test]
    fn road_class_is_symmetric() {
        use AreaCategory::*;
        for a in [Core, SuburbMain, SuburbMinor, Edge] {
            for b in [Core, SuburbMain, SuburbMinor, Edge] {
                assert_eq!(RoadClass::between(a, b), RoadClass::between(b, a));
            }
        }
    }

    #[test]
    fn road_class_table() {
        use AreaCategory::*;
        assert_eq!(RoadClass::between(Core, Core), RoadClass::Core);
        assert_eq!(RoadClass::between(Core, Edge), RoadClass::SuburbMain);
        assert_eq!(RoadClass::between(SuburbMain, Core), RoadClass::SuburbMain);
        assert_eq!(RoadClass::between(SuburbMain, SuburbMinor), RoadClass::SuburbMinor);
        assert_eq!(RoadClass::between(Edge, Edge), RoadClass::SuburbMinor);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("suburb-main".parse::<AreaCategory>().unwrap(), AreaCategory::SuburbMain);
        assert_eq!(AreaCategory::Edge.to_string(), "edge");
        assert!("downtown".parse::<AreaCategory>().is_err());
        assert!(AreaCategory::Edge.is_far_suburb());
        assert!(!AreaCategory::SuburbMinor.is_far_suburb());
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, TimeOfDay};

    #[test]
    fn hhmm_formatting() {
        assert_eq!(TimeOfDay::hm(8, 0).hhmm(), "0800");
        assert_eq!(TimeOfDay::hm(17, 30).hhmm(), "1730");
        assert_eq!(TimeOfDay::hm(17, 30).to_string(), "17:30");
    }

    #[test]
    fn parse_both_forms() {
        assert_eq!("0800".parse::<TimeOfDay>().unwrap(), TimeOfDay::hm(8, 0));
        assert_eq!("22:15".parse::<TimeOfDay>().unwrap(), TimeOfDay::hm(22, 15));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            "2460".parse::<TimeOfDay>(),
            Err(CoreError::InvalidTime("2460".into()))
        );
        assert!("8am".parse::<TimeOfDay>().is_err());
        assert!("08000".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn ordering_follows_clock() {
        assert!(TimeOfDay::hm(7, 59) < TimeOfDay::hm(8, 0));
        assert_eq!(TimeOfDay::MIDNIGHT.minutes_since_midnight(), 0);
    }
}

#[cfg(test)]
mod road {
    use crate::Direction;

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::OneWay.to_string(), "one-way");
        assert_eq!("two-way".parse::<Direction>().unwrap(), Direction::TwoWay);
        assert_eq!("单向".parse::<Direction>().unwrap(), Direction::OneWay);
        assert_eq!("双向".parse::<Direction>().unwrap(), Direction::TwoWay);
        assert!("sideways".parse::<Direction>().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::GenRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = GenRng::new(12345);
        let mut r2 = GenRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_ignores_parent_position() {
        let root = GenRng::new(7);
        let mut advanced = GenRng::new(7);
        for _ in 0..10 {
            let _: u64 = advanced.random();
        }
        let a: u64 = root.child(2).random();
        let b: u64 = advanced.child(2).random();
        assert_eq!(a, b);
    }

    #[test]
    fn children_differ_by_offset() {
        let root = GenRng::new(1);
        let a: u64 = root.child(0).random();
        let b: u64 = root.child(1).random();
        assert_ne!(a, b);
    }

    #[test]
    fn entropy_seed_is_reported() {
        let rng = GenRng::from_entropy();
        let mut again = GenRng::new(rng.seed());
        let mut rng = rng;
        assert_eq!(rng.random::<u64>(), again.random::<u64>());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = GenRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.5)); // clamped
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = GenRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
