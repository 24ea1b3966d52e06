//! Fixture directory layout.
//!
//! ```text
//! <root>/
//!   case1_simple/
//!     demand.txt
//!     map_1200.csv
//!   case2_medium/
//!     demand.txt
//!     map_0800.csv
//!     map_1400.csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use rn_core::{RoadRecord, TimeOfDay};

use crate::demand::{Demand, write_demand};
use crate::records::write_records;
use crate::{IoError, IoResult};

pub const DEMAND_FILE: &str = "demand.txt";

/// `map_HHMM.csv`
pub fn snapshot_file_name(time: TimeOfDay) -> String {
    format!("map_{}.csv", time.hhmm())
}

/// Time of day encoded in a `map_HHMM.csv` file name.
pub fn snapshot_time(path: &Path) -> Option<TimeOfDay> {
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix("map_")?.parse().ok()
}

/// The files of one fixture directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseFiles {
    pub demand:    PathBuf,
    /// Snapshot files in name order.
    pub snapshots: Vec<PathBuf>,
}

/// Locate the demand file and the `map_*.csv` snapshots in `dir`.
///
/// `demand.txt` is preferred; otherwise the first `.txt` file by name is
/// used.
pub fn find_case_files(dir: &Path) -> IoResult<CaseFiles> {
    if !dir.is_dir() {
        return Err(IoError::NotFound(dir.to_path_buf()));
    }

    let mut texts = Vec::new();
    let mut snapshots = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") => texts.push(path.clone()),
            Some("csv") if name.starts_with("map_") => snapshots.push(path.clone()),
            _ => {}
        }
    }
    texts.sort();
    snapshots.sort();

    let preferred = dir.join(DEMAND_FILE);
    let demand = if texts.contains(&preferred) {
        preferred
    } else {
        texts
            .into_iter()
            .next()
            .ok_or(IoError::MissingFiles { dir: dir.to_path_buf(), what: "demand file" })?
    };
    if snapshots.is_empty() {
        return Err(IoError::MissingFiles { dir: dir.to_path_buf(), what: "map_*.csv snapshot" });
    }

    Ok(CaseFiles { demand, snapshots })
}

/// Writes fixture directories under a root directory.
pub struct FixtureWriter {
    root: PathBuf,
}

impl FixtureWriter {
    /// Create `root` if needed.
    pub fn new(root: &Path) -> IoResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self { root: root.to_path_buf() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write one fixture directory: the demand file plus one snapshot file
    /// per `(time, rows)` entry.  Existing files are replaced.
    pub fn write_case(
        &self,
        case_dir: &str,
        demand: &Demand,
        snapshots: &[(TimeOfDay, Vec<RoadRecord>)],
    ) -> IoResult<CaseFiles> {
        let dir = self.root.join(case_dir);
        fs::create_dir_all(&dir)?;

        let demand_path = dir.join(DEMAND_FILE);
        write_demand(&demand_path, demand)?;

        let mut written = Vec::with_capacity(snapshots.len());
        for (time, rows) in snapshots {
            let path = dir.join(snapshot_file_name(*time));
            write_records(&path, rows)?;
            written.push(path);
        }
        written.sort();

        info!(dir = %dir.display(), snapshots = written.len(), "fixture written");
        Ok(CaseFiles { demand: demand_path, snapshots: written })
    }
}
