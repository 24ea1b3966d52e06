//! `rn-cache`: on-disk LRU cache of route results.
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`signature`] | `FileSignature`, `cache_key`                       |
//! | [`cache`]     | `PathCache`, `CacheConfig`, `CacheStats`           |
//! | [`error`]     | `CacheError`, `CacheResult<T>`                     |

pub mod cache;
pub mod error;
pub mod signature;


pub use cache::{CacheConfig, CacheStats, PathCache};
pub use error::{CacheError, CacheResult};
pub use signature::{FileSignature, cache_key};
