//! `rn-congestion`: BPR congestion assessment.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`bpr`]      | `BprParams`, free-flow time, flow, V/C, multiplier        |
//! | [`assess`]   | `Congestion`, `CongestionRecord`, `Degenerate`, `assess`  |
//! | [`severity`] | `Severity` bands and `SeverityCounts`                     |
//! | [`summary`]  | `CongestionSummary`, `Stats`                              |
//!
//! Everything here is pure: a road's assessment depends only on its own
//! record and the [`BprParams`] passed in.

pub mod assess;
pub mod bpr;
pub mod severity;
pub mod summary;


pub use assess::{Congestion, CongestionRecord, Degenerate, assess, assess_all};
pub use bpr::BprParams;
pub use severity::{Severity, SeverityCounts};
pub use summary::{CongestionSummary, Stats};
