//! Geographic area categories and the road classes they imply.

use std::str::FromStr;

use crate::CoreError;

/// The area a point of interest belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaCategory {
    /// City core.
    Core,
    /// Inner suburb on a main corridor.
    SuburbMain,
    /// Outer suburb.
    SuburbMinor,
    /// Far suburb at the edge of the region.
    Edge,
}

impl AreaCategory {
    #[inline]
    pub fn is_core(self) -> bool {
        matches!(self, AreaCategory::Core)
    }

    /// Far-suburb points widen the random length range and may pull in the
    /// long-distance bias.
    #[inline]
    pub fn is_far_suburb(self) -> bool {
        matches!(self, AreaCategory::Edge)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AreaCategory::Core        => "core",
            AreaCategory::SuburbMain  => "suburb-main",
            AreaCategory::SuburbMinor => "suburb-minor",
            AreaCategory::Edge        => "edge",
        }
    }
}

impl std::fmt::Display for AreaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "core"         => Ok(AreaCategory::Core),
            "suburb-main"  => Ok(AreaCategory::SuburbMain),
            "suburb-minor" => Ok(AreaCategory::SuburbMinor),
            "edge"         => Ok(AreaCategory::Edge),
            other          => Err(CoreError::InvalidArea(other.to_owned())),
        }
    }
}

// ── RoadClass ─────────────────────────────────────────────────────────────────

/// Class of a road, derived from the areas of its two endpoints.
///
/// | Endpoints            | Class         |
/// |----------------------|---------------|
/// | core ↔ core          | `Core`        |
/// | core ↔ any non-core  | `SuburbMain`  |
/// | anything else        | `SuburbMinor` |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoadClass {
    Core,
    SuburbMain,
    SuburbMinor,
}

impl RoadClass {
    /// Symmetric in its arguments.
    pub fn between(a: AreaCategory, b: AreaCategory) -> RoadClass {
        match (a.is_core(), b.is_core()) {
            (true, true)                 => RoadClass::Core,
            (true, false) | (false, true) => RoadClass::SuburbMain,
            (false, false)               => RoadClass::SuburbMinor,
        }
    }
}
