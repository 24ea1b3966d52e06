//! Per-road congestion assessment.

use std::fmt;

use rn_core::RoadRecord;

use crate::bpr::{self, BprParams};

/// Why a road has no finite multiplier.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Degenerate {
    /// Lane count ≤ 0.
    NoLanes,
    /// Speed limit ≤ 0.
    NoSpeed,
    /// Length ≤ 0.
    NoLength,
    /// Length or speed limit is NaN or infinite.
    NotFinite,
}

impl Degenerate {
    /// First failing attribute in lane → finiteness → speed → length order,
    /// or `None` if the road is well formed.
    pub fn classify(lanes: i32, length_m: f64, speed_kmh: f64) -> Option<Degenerate> {
        if lanes <= 0 {
            Some(Degenerate::NoLanes)
        } else if !speed_kmh.is_finite() || !length_m.is_finite() {
            Some(Degenerate::NotFinite)
        } else if speed_kmh <= 0.0 {
            Some(Degenerate::NoSpeed)
        } else if length_m <= 0.0 {
            Some(Degenerate::NoLength)
        } else {
            None
        }
    }
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Degenerate::NoLanes   => "lane count is not positive",
            Degenerate::NoSpeed   => "speed limit is not positive",
            Degenerate::NoLength  => "length is not positive",
            Degenerate::NotFinite => "length or speed limit is not a finite number",
        })
    }
}

/// Derived congestion figures for one well-formed road.
#[derive(Clone, Debug, PartialEq)]
pub struct CongestionRecord {
    pub road_id:           String,
    pub start:             String,
    pub end:               String,
    pub lanes:             i32,
    pub vehicles:          u32,
    pub capacity_vph:      f64,
    pub vc_ratio:          f64,
    /// BPR multiplier, always `≥ 1.0`.
    pub multiplier:        f64,
    pub free_flow_secs:    f64,
    pub actual_secs:       f64,
    pub time_increase_pct: f64,
}

/// Outcome of assessing one road.
#[derive(Clone, Debug, PartialEq)]
pub enum Congestion {
    Finite(CongestionRecord),
    /// The road's attributes admit no finite multiplier.
    Unbounded { road_id: String, reason: Degenerate },
}

impl Congestion {
    pub fn road_id(&self) -> &str {
        match self {
            Congestion::Finite(r) => &r.road_id,
            Congestion::Unbounded { road_id, .. } => road_id,
        }
    }

    /// The multiplier, with `f64::INFINITY` standing in for unbounded roads.
    pub fn multiplier(&self) -> f64 {
        match self {
            Congestion::Finite(r) => r.multiplier,
            Congestion::Unbounded { .. } => f64::INFINITY,
        }
    }

    pub fn as_finite(&self) -> Option<&CongestionRecord> {
        match self {
            Congestion::Finite(r) => Some(r),
            Congestion::Unbounded { .. } => None,
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Congestion::Unbounded { .. })
    }
}

/// Assess one road record.
pub fn assess(record: &RoadRecord, params: &BprParams) -> Congestion {
    let (lanes, length_m, speed, vehicles) =
        (record.lanes, record.length_m, record.speed_limit_kmh, record.vehicles);

    if let Some(reason) = Degenerate::classify(lanes, length_m, speed) {
        return Congestion::Unbounded { road_id: record.road_id.clone(), reason };
    }

    let free_flow_secs = bpr::free_flow_secs(length_m, speed);
    let capacity_vph = params.capacity_vph(lanes);
    let vc_ratio = bpr::implied_flow_vph(vehicles, free_flow_secs) / capacity_vph;
    let multiplier = params.multiplier_for_ratio(vc_ratio);

    Congestion::Finite(CongestionRecord {
        road_id:           record.road_id.clone(),
        start:             record.start.clone(),
        end:               record.end.clone(),
        lanes,
        vehicles,
        capacity_vph,
        vc_ratio,
        multiplier,
        free_flow_secs,
        actual_secs:       free_flow_secs * multiplier,
        time_increase_pct: (multiplier - 1.0) * 100.0,
    })
}

/// Assess every record, preserving input order.
pub fn assess_all(records: &[RoadRecord], params: &BprParams) -> Vec<Congestion> {
    records.iter().map(|r| assess(r, params)).collect()
}
