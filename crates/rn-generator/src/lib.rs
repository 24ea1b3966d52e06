//! `rn-generator`: synthetic road-network scenarios.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`catalog`]  | Points of interest, hubs, reference distances               |
//! | [`profile`]  | `Profile`, `ProfileConfig`, `DirectionRule`                 |
//! | [`synth`]    | Length, lanes, speed and direction of one road              |
//! | [`builder`]  | `RoadSetBuilder` (edge, fill and repair phases)             |
//! | [`scenario`] | `select_endpoints`, `generate_scenario`, `Scenario`         |
//! | [`traffic`]  | Demand curve and per-snapshot occupancy                     |
//! | [`error`]    | `GenError`, `GenResult<T>`                                  |
//!
//! All randomness comes from the `GenRng` passed in; the same seed and
//! profile always produce the same scenario.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod profile;
pub mod scenario;
pub mod synth;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use builder::{RoadSet, RoadSetBuilder};
pub use catalog::Poi;
pub use error::{GenError, GenResult};
pub use profile::{DirectionRule, Profile, ProfileConfig};
pub use scenario::{Endpoints, Scenario, generate_scenario, generate_scenario_with, select_endpoints};
pub use traffic::Snapshot;
