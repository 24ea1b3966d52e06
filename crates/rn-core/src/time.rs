//! Time-of-day labels for traffic snapshots.
//!
//! A snapshot is identified by minutes since midnight.  The canonical text
//! form is `HHMM` (`0800`, `1730`), which is also the suffix of the snapshot
//! file name (`map_0800.csv`).

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Minutes since midnight, always `< 24 * 60`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Build from hour and minute.
    ///
    /// Out-of-range components wrap modulo one day so that `const` tables can
    /// use this without a fallible path.
    pub const fn hm(hour: u8, minute: u8) -> TimeOfDay {
        let total = (hour as u16 % 24) * 60 + (minute as u16 % 60);
        TimeOfDay { minutes: total }
    }

    #[inline]
    pub fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    #[inline]
    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }

    #[inline]
    pub fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    /// Compact `HHMM` label used in file names.
    pub fn hhmm(self) -> String {
        format!("{:02}{:02}", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Accepts `HHMM` and `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let digits: String = raw.chars().filter(|c| *c != ':').collect();
        let bad = || CoreError::InvalidTime(raw.to_owned());

        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(bad());
        }
        let hour: u8 = digits[..2].parse().map_err(|_| bad())?;
        let minute: u8 = digits[2..].parse().map_err(|_| bad())?;
        if hour > 23 || minute > 59 {
            return Err(bad());
        }
        Ok(TimeOfDay::hm(hour, minute))
    }
}
