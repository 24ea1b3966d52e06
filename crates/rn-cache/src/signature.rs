//! Lightweight change detection for snapshot files.

use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::UNIX_EPOCH;

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::{CacheError, CacheResult};

/// Canonical path, modification time and size of a file.
///
/// Two signatures are equal only if the file was not rewritten in between
/// (to the precision of the filesystem's timestamps).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileSignature {
    pub path:     String,
    /// Nanoseconds since the Unix epoch.
    pub mtime_ns: u64,
    pub size:     u64,
}

impl FileSignature {
    pub fn of(path: &Path) -> CacheResult<Self> {
        let err = |source| CacheError::Signature { path: path.to_path_buf(), source };

        let canonical = fs::canonicalize(path).map_err(err)?;
        let meta = fs::metadata(&canonical).map_err(err)?;
        let mtime_ns = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX));

        Ok(FileSignature {
            path: canonical.to_string_lossy().into_owned(),
            mtime_ns,
            size: meta.len(),
        })
    }

    /// `true` if the file at `path` still has this signature.
    pub fn matches(&self, path: &Path) -> bool {
        FileSignature::of(path).is_ok_and(|now| now == *self)
    }
}

/// 16-hex-digit key for a route request against a snapshot.
pub fn cache_key(start: &str, end: &str, sig: &FileSignature) -> String {
    let combined = format!("{start}|{end}|{}|{}|{}", sig.path, sig.mtime_ns, sig.size);
    let mut h = FxHasher::default();
    combined.hash(&mut h);
    format!("{:016x}", h.finish())
}
