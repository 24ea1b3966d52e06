//! `rn-core`: foundational types for the `rust_roadnet` fixture toolkit.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no `rn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `RoadId`, `EdgeId`                               |
//! | [`area`]   | `AreaCategory`, `RoadClass`                                |
//! | [`road`]   | `Road`, `RoadRecord`, `Direction`                          |
//! | [`time`]   | `TimeOfDay` snapshot labels                                |
//! | [`rng`]    | `GenRng` (explicitly threaded generator RNG)               |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types (rn-io, rn-cache) |

pub mod area;
pub mod error;
pub mod ids;
pub mod rng;
pub mod road;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use area::{AreaCategory, RoadClass};
pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, NodeId, RoadId};
pub use rng::GenRng;
pub use road::{Direction, Road, RoadRecord};
pub use time::TimeOfDay;
