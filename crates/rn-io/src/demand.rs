//! Demand files: the start and end point of a fixture.
//!
//! ```text
//! Start: People's Square
//! End: Shanghai Disneyland
//! Description: Simple case: one snapshot, ...
//! ```
//!
//! The legacy prefixes `起点：`, `终点：` and `说明：` are read as well, with
//! either a full-width or an ASCII colon.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::{IoError, IoResult};

const START_KEYS: [&str; 2] = ["Start", "起点"];
const END_KEYS:   [&str; 2] = ["End", "终点"];
const DESC_KEYS:  [&str; 2] = ["Description", "说明"];

/// A routing request between two named points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demand {
    pub start:       String,
    pub end:         String,
    pub description: Option<String>,
}

impl Demand {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Demand { start: start.into(), end: end.into(), description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse the text of a demand file.  Unrecognised lines are ignored;
    /// a missing start or end is an error.
    pub fn parse(text: &str) -> IoResult<Demand> {
        let mut start = None;
        let mut end = None;
        let mut description = None;

        for line in text.lines() {
            let line = line.trim().trim_start_matches('\u{feff}');
            if let Some(v) = value_after(line, &START_KEYS) {
                start = Some(v);
            } else if let Some(v) = value_after(line, &END_KEYS) {
                end = Some(v);
            } else if let Some(v) = value_after(line, &DESC_KEYS) {
                description = Some(v);
            }
        }

        match (start, end) {
            (Some(start), Some(end)) => Ok(Demand { start, end, description }),
            (None, _) => Err(IoError::Demand("no start point".to_owned())),
            (_, None) => Err(IoError::Demand("no end point".to_owned())),
        }
    }

    /// The text written by [`write_demand`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Start: {}", self.start);
        let _ = writeln!(out, "End: {}", self.end);
        if let Some(d) = &self.description {
            let _ = writeln!(out, "Description: {d}");
        }
        out
    }
}

/// `Some(value)` if `line` is `<key>:<value>` or `<key>：<value>` for one of
/// `keys` and the value is non-empty.
fn value_after(line: &str, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        let rest = line.strip_prefix(key)?;
        let rest = rest.strip_prefix(':').or_else(|| rest.strip_prefix('：'))?;
        let value = rest.trim();
        (!value.is_empty()).then(|| value.to_owned())
    })
}

pub fn read_demand(path: &Path) -> IoResult<Demand> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Demand::parse(&fs::read_to_string(path)?)
}

pub fn write_demand(path: &Path, demand: &Demand) -> IoResult<()> {
    fs::write(path, demand.to_text())?;
    Ok(())
}
