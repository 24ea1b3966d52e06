//! `rn-network`: reachability, road network, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`reach`]   | `is_reachable`: direction-aware BFS over a road list         |
//! | [`network`] | `RoadNetwork` (CSR), `RoadNetworkBuilder`, `PathWeights`      |
//! | [`router`]  | `Router` trait, `DijkstraRouter`, `WeightMode`, `MultiPath`   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `PathSummary`/`MultiPath`. |

pub mod error;
pub mod network;
pub mod reach;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::{PathWeights, RoadNetwork, RoadNetworkBuilder};
pub use reach::is_reachable;
pub use router::{DijkstraRouter, MultiPath, PathSummary, Route, Router, WeightMode, plan_all};
