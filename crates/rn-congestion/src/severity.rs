//! Congestion severity bands.
//!
//! | Band       | Multiplier      |
//! |------------|-----------------|
//! | free-flow  | `< 1.05`        |
//! | slow       | `1.05 – 1.15`   |
//! | congested  | `1.15 – 1.30`   |
//! | severe     | `≥ 1.30`        |
//!
//! Lower bounds are inclusive.

use std::fmt;

pub const SLOW_FROM: f64 = 1.05;
pub const CONGESTED_FROM: f64 = 1.15;
pub const SEVERE_FROM: f64 = 1.30;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    FreeFlow,
    Slow,
    Congested,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 4] =
        [Severity::FreeFlow, Severity::Slow, Severity::Congested, Severity::Severe];

    pub fn from_multiplier(m: f64) -> Severity {
        if m < SLOW_FROM {
            Severity::FreeFlow
        } else if m < CONGESTED_FROM {
            Severity::Slow
        } else if m < SEVERE_FROM {
            Severity::Congested
        } else {
            Severity::Severe
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::FreeFlow  => "free-flow",
            Severity::Slow      => "slow",
            Severity::Congested => "congested",
            Severity::Severe    => "severely congested",
        }
    }

    /// Human-readable multiplier range of the band.
    pub fn range_label(self) -> &'static str {
        match self {
            Severity::FreeFlow  => "< 1.05",
            Severity::Slow      => "1.05-1.15",
            Severity::Congested => "1.15-1.30",
            Severity::Severe    => ">= 1.30",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Road counts per band.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub free_flow: usize,
    pub slow:      usize,
    pub congested: usize,
    pub severe:    usize,
}

impl SeverityCounts {
    pub fn from_multipliers<I: IntoIterator<Item = f64>>(multipliers: I) -> Self {
        let mut counts = SeverityCounts::default();
        for m in multipliers {
            counts.add(Severity::from_multiplier(m));
        }
        counts
    }

    pub fn add(&mut self, severity: Severity) {
        *self.slot(severity) += 1;
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::FreeFlow  => self.free_flow,
            Severity::Slow      => self.slow,
            Severity::Congested => self.congested,
            Severity::Severe    => self.severe,
        }
    }

    pub fn total(&self) -> usize {
        self.free_flow + self.slow + self.congested + self.severe
    }

    /// Share of `severity` in percent; `0.0` when no roads were counted.
    pub fn share_pct(&self, severity: Severity) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(severity) as f64 / total as f64 * 100.0
    }

    fn slot(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::FreeFlow  => &mut self.free_flow,
            Severity::Slow      => &mut self.slow,
            Severity::Congested => &mut self.congested,
            Severity::Severe    => &mut self.severe,
        }
    }
}
