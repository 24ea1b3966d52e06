//! Scenario-wide aggregation of per-road assessments.
//!
//! Unbounded roads are listed by id and kept out of every numeric figure:
//! min/max/mean, extremes and band counts only see finite multipliers.

use crate::assess::{Congestion, CongestionRecord};
use crate::severity::SeverityCounts;

/// Minimum, maximum and mean of a series.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stats {
    pub min:  f64,
    pub max:  f64,
    pub mean: f64,
}

impl Stats {
    /// `None` for an empty series.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Stats> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        (count > 0).then(|| Stats { min, max, mean: sum / count as f64 })
    }

    /// `(max - min) / min` in percent.
    pub fn spread_pct(&self) -> f64 {
        (self.max - self.min) / self.min * 100.0
    }
}

/// Aggregate view over one snapshot file.
#[derive(Clone, Debug)]
pub struct CongestionSummary {
    /// Every assessed road, finite or not.
    pub road_count:      usize,
    /// Ids of roads with no finite multiplier, in input order.
    pub unbounded:       Vec<String>,
    pub multiplier:      Option<Stats>,
    pub vc_ratio:        Option<Stats>,
    /// Highest multiplier; the first one wins a tie.
    pub most_congested:  Option<CongestionRecord>,
    /// Lowest multiplier; the first one wins a tie.
    pub least_congested: Option<CongestionRecord>,
    pub bands:           SeverityCounts,
}

impl CongestionSummary {
    pub fn from_assessments(assessments: &[Congestion]) -> Self {
        let finite: Vec<&CongestionRecord> =
            assessments.iter().filter_map(Congestion::as_finite).collect();

        let unbounded = assessments
            .iter()
            .filter(|c| c.is_unbounded())
            .map(|c| c.road_id().to_owned())
            .collect();

        let mut most: Option<&CongestionRecord> = None;
        let mut least: Option<&CongestionRecord> = None;
        for &r in &finite {
            if most.is_none_or(|m| r.multiplier > m.multiplier) {
                most = Some(r);
            }
            if least.is_none_or(|l| r.multiplier < l.multiplier) {
                least = Some(r);
            }
        }

        Self {
            road_count:      assessments.len(),
            unbounded,
            multiplier:      Stats::from_values(finite.iter().map(|r| r.multiplier)),
            vc_ratio:        Stats::from_values(finite.iter().map(|r| r.vc_ratio)),
            most_congested:  most.cloned(),
            least_congested: least.cloned(),
            bands:           SeverityCounts::from_multipliers(finite.iter().map(|r| r.multiplier)),
        }
    }

    /// Roads that contributed to the numeric figures.
    pub fn measured_count(&self) -> usize {
        self.road_count - self.unbounded.len()
    }
}
