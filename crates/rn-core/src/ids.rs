//! Typed indices for nodes, roads and edges.
//!
//! Each id is a position in the `Vec` that owns the item.

use std::fmt;

/// Index newtype over `u32`.  `$noun` is used by `Display` ("node 3").
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $noun:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Inverse of [`index`](Self::index).  Collections here are far
            /// below `u32::MAX` entries.
            #[inline(always)]
            pub const fn from_index(i: usize) -> Self {
                $name(i as u32)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $noun, self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a point of interest (graph node).
    ///
    /// In a generated scenario this indexes the profile's point list; in a
    /// loaded network it indexes the interned node names.
    pub struct NodeId, "node";
}

typed_id! {
    /// Position of a road in a generated road set.
    pub struct RoadId, "road";
}

typed_id! {
    /// Index of a directed edge in a CSR road network.
    pub struct EdgeId, "edge";
}

impl EdgeId {
    /// "No edge", e.g. the predecessor of a search root.
    pub const NONE: EdgeId = EdgeId(u32::MAX);
}

impl RoadId {
    /// Persisted road label: `SH01`, `SH02`, … (1-based, zero-padded).
    pub fn label(self) -> String {
        format!("SH{:02}", self.0 + 1)
    }
}
