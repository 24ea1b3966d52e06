//! Persistent LRU cache of [`MultiPath`] results.
//!
//! # On-disk layout
//!
//! ```text
//! <dir>/
//!   index.json          entries, most recently used first
//!   paths/<key>.json    one MultiPath per entry
//! ```
//!
//! The key covers the start and end names plus the snapshot's
//! [`FileSignature`], so rewriting a snapshot makes its old entries
//! unreachable; they age out through LRU eviction.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rn_network::MultiPath;

use crate::signature::{FileSignature, cache_key};
use crate::CacheResult;

const INDEX_FILE: &str = "index.json";
const PATHS_DIR:  &str = "paths";

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub dir:         PathBuf,
    /// LRU capacity.  `0` disables storing.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from(".cache"), max_entries: 50 }
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
struct IndexEntry {
    key:       String,
    start:     String,
    end:       String,
    signature: FileSignature,
}

#[derive(Default, Serialize, Deserialize)]
struct Index {
    /// Most recently used first.
    entries: Vec<IndexEntry>,
}

/// Hit/miss counters for the current process.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits:    usize,
    pub misses:  usize,
    pub entries: usize,
}

// ── PathCache ─────────────────────────────────────────────────────────────────

pub struct PathCache {
    config:  CacheConfig,
    entries: FxHashMap<String, IndexEntry>,
    /// Keys, most recently used at the front.
    lru:     VecDeque<String>,
    hits:    usize,
    misses:  usize,
}

impl PathCache {
    /// Open (or create) the cache in `config.dir`.
    ///
    /// An unreadable index is discarded with a warning.  Entries whose path
    /// file has gone are dropped.
    pub fn open(config: CacheConfig) -> CacheResult<Self> {
        fs::create_dir_all(config.dir.join(PATHS_DIR))?;

        let mut cache = PathCache {
            config,
            entries: FxHashMap::default(),
            lru:     VecDeque::new(),
            hits:    0,
            misses:  0,
        };

        let index_path = cache.index_path();
        if index_path.is_file() {
            match fs::read_to_string(&index_path)
                .map_err(crate::CacheError::from)
                .and_then(|text| Ok(serde_json::from_str::<Index>(&text)?))
            {
                Ok(index) => {
                    for entry in index.entries {
                        if cache.entry_path(&entry.key).is_file()
                            && !cache.entries.contains_key(&entry.key)
                        {
                            cache.lru.push_back(entry.key.clone());
                            cache.entries.insert(entry.key.clone(), entry);
                        }
                    }
                }
                Err(e) => warn!(index = %index_path.display(), error = %e, "discarding unreadable cache index"),
            }
        }

        while cache.lru.len() > cache.config.max_entries {
            cache.evict_lru();
        }
        debug!(dir = %cache.config.dir.display(), entries = cache.len(), "path cache opened");
        Ok(cache)
    }

    /// Cached routes for `start → end` on `snapshot`, if present and fresh.
    pub fn get(&mut self, start: &str, end: &str, snapshot: &Path) -> CacheResult<Option<MultiPath>> {
        let sig = FileSignature::of(snapshot)?;
        let key = cache_key(start, end, &sig);

        let Some(entry) = self.entries.get(&key) else {
            self.misses += 1;
            return Ok(None);
        };

        if entry.signature != sig || entry.start != start || entry.end != end {
            debug!(key, "stale cache entry");
            self.remove(&key);
            self.save_index()?;
            self.misses += 1;
            return Ok(None);
        }

        let paths = fs::read_to_string(self.entry_path(&key))
            .map_err(crate::CacheError::from)
            .and_then(|text| Ok(serde_json::from_str::<MultiPath>(&text)?));
        match paths {
            Ok(paths) => {
                self.touch(&key);
                self.save_index()?;
                self.hits += 1;
                Ok(Some(paths))
            }
            Err(e) => {
                warn!(key, error = %e, "dropping unreadable cache entry");
                self.remove(&key);
                self.save_index()?;
                self.misses += 1;
                Ok(None)
            }
        }
    }

    /// Store `paths` for `start → end` on `snapshot`, evicting the least
    /// recently used entry when full.
    pub fn put(&mut self, start: &str, end: &str, snapshot: &Path, paths: &MultiPath) -> CacheResult<()> {
        if self.config.max_entries == 0 {
            return Ok(());
        }
        let signature = FileSignature::of(snapshot)?;
        let key = cache_key(start, end, &signature);

        self.remove(&key);
        while self.lru.len() >= self.config.max_entries {
            self.evict_lru();
        }

        fs::write(self.entry_path(&key), serde_json::to_string_pretty(paths)?)?;
        self.entries.insert(
            key.clone(),
            IndexEntry { key: key.clone(), start: start.to_owned(), end: end.to_owned(), signature },
        );
        self.lru.push_front(key);
        self.save_index()
    }

    /// Remove every entry and its files, and reset the counters.
    pub fn clear(&mut self) -> CacheResult<()> {
        for key in self.lru.drain(..) {
            remove_file_quiet(&self.config.dir.join(PATHS_DIR).join(format!("{key}.json")));
        }
        self.entries.clear();
        remove_file_quiet(&self.index_path());
        self.hits = 0;
        self.misses = 0;
        Ok(())
    }

    pub fn hits(&self) -> usize { self.hits }
    pub fn misses(&self) -> usize { self.misses }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn stats(&self) -> CacheStats {
        CacheStats { hits: self.hits, misses: self.misses, entries: self.len() }
    }

    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn index_path(&self) -> PathBuf {
        self.config.dir.join(INDEX_FILE)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.config.dir.join(PATHS_DIR).join(format!("{key}.json"))
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.lru.iter().position(|k| k == key) {
            if let Some(k) = self.lru.remove(pos) {
                self.lru.push_front(k);
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.lru.retain(|k| k != key);
            remove_file_quiet(&self.entry_path(key));
        }
    }

    fn evict_lru(&mut self) {
        if let Some(oldest) = self.lru.pop_back() {
            debug!(key = %oldest, "evicting cache entry");
            self.entries.remove(&oldest);
            remove_file_quiet(&self.entry_path(&oldest));
        }
    }

    fn save_index(&self) -> CacheResult<()> {
        let index = Index {
            entries: self.lru.iter().filter_map(|k| self.entries.get(k).cloned()).collect(),
        };
        fs::write(self.index_path(), serde_json::to_string_pretty(&index)?)?;
        Ok(())
    }
}

fn remove_file_quiet(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "could not remove cache file");
        }
    }
}
