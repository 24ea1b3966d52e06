//! Snapshot CSV reader and writer.
//!
//! # CSV format
//!
//! ```csv
//! road_id,start,end,direction,length_m,speed_limit_kmh,lanes,vehicles
//! SH01,People's Square,The Bund,two-way,2040,60,4,22
//! SH02,The Bund,Yu Garden,one-way,3100,60,3,20
//! ```
//!
//! The legacy headers
//! `道路ID,起始地点,目标地点,道路方向,道路长度(米),道路限速(km/h),车道数,现有车辆数`
//! and direction values `单向` / `双向` load as well.  The `direction` column
//! may be absent or empty.
//!
//! Reading is lenient: a row that fails to parse is logged and skipped.
//! A source with no valid row at all is an error.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, Writer};
use tracing::{debug, warn};

use rn_core::RoadRecord;

use crate::{IoError, IoResult};

/// Header written by [`write_records`].
pub const HEADER: [&str; 8] = [
    "road_id",
    "start",
    "end",
    "direction",
    "length_m",
    "speed_limit_kmh",
    "lanes",
    "vehicles",
];

// ── Reading ───────────────────────────────────────────────────────────────────

/// Load road rows from a snapshot file.
pub fn load_records(path: &Path) -> IoResult<Vec<RoadRecord>> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    load_records_reader(file, &path.display().to_string())
}

/// Like [`load_records`] but accepts any `Read` source.  `source_name` is
/// used in log lines and errors.
pub fn load_records_reader<R: Read>(reader: R, source_name: &str) -> IoResult<Vec<RoadRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;

    for (i, result) in csv_reader.deserialize::<RoadRecord>().enumerate() {
        match result {
            Ok(rec) if rec.length_m.is_finite() && rec.speed_limit_kmh.is_finite() => records.push(rec),
            Ok(rec) => {
                skipped += 1;
                warn!(
                    source = source_name,
                    row = i + 2,
                    road = %rec.road_id,
                    "skipping row with non-finite length or speed limit"
                );
            }
            Err(e) => {
                skipped += 1;
                // Row 1 is the header.
                warn!(source = source_name, row = i + 2, error = %e, "skipping malformed row");
            }
        }
    }

    if records.is_empty() {
        return Err(IoError::NoValidRows { source_name: source_name.to_owned(), skipped });
    }
    debug!(source = source_name, rows = records.len(), skipped, "snapshot loaded");
    Ok(records)
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Write `records` as a snapshot file at `path`, replacing any existing file.
pub fn write_records(path: &Path, records: &[RoadRecord]) -> IoResult<()> {
    write_records_to(File::create(path)?, records)
}

/// Like [`write_records`] but accepts any `Write` sink.
pub fn write_records_to<W: Write>(sink: W, records: &[RoadRecord]) -> IoResult<()> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(HEADER)?;
    for r in records {
        writer.write_record(&[
            r.road_id.clone(),
            r.start.clone(),
            r.end.clone(),
            r.direction.map(|d| d.as_str().to_owned()).unwrap_or_default(),
            r.length_m.to_string(),
            r.speed_limit_kmh.to_string(),
            r.lanes.to_string(),
            r.vehicles.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
