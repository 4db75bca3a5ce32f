//! Validated UTC timestamp.
//!
//! `UtcTime` is the canonical instant used by every downstream calculation.
//! Birth date and time are interpreted as UTC; no time zone is applied.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// UTC calendar instant with whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTime {
    inner: NaiveDateTime,
}

impl UtcTime {
    /// Build from calendar fields, rejecting impossible combinations.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidDateTime(format!("no such date {year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            TimeError::InvalidDateTime(format!("no such time {hour:02}:{minute:02}:{second:02}"))
        })?;
        Ok(Self::combine(date, time))
    }

    fn combine(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            inner: date.and_time(time),
        }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]`.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|e| TimeError::InvalidDateTime(format!("date {date:?}: {e}")))?;
        let time = parse_time(time.trim())?;
        Ok(Self::combine(date, time))
    }

    /// A new instant `hours` later (negative values go back).
    pub fn plus_hours(self, hours: i64) -> Result<Self, TimeError> {
        let delta = Duration::try_hours(hours).ok_or(TimeError::OutOfRange)?;
        self.inner
            .checked_add_signed(delta)
            .map(|inner| Self { inner })
            .ok_or(TimeError::OutOfRange)
    }

    /// Julian Date (UTC).
    pub fn to_jd(&self) -> f64 {
        let seconds_of_day = self.inner.num_seconds_from_midnight() as f64;
        let day_frac = self.inner.day() as f64 + seconds_of_day / SECONDS_PER_DAY;
        calendar_to_jd(self.inner.year(), self.inner.month(), day_frac)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Z", self.inner.format("%Y-%m-%dT%H:%M:%S"))
    }
}

fn parse_time(text: &str) -> Result<NaiveTime, TimeError> {
    let mut last_err = None;
    for fmt in TIME_FORMATS {
        match NaiveTime::parse_from_str(text, fmt) {
            Ok(t) => return Ok(t),
            Err(e) => last_err = Some(e),
        }
    }
    let detail = last_err.map(|e| e.to_string()).unwrap_or_default();
    Err(TimeError::InvalidDateTime(format!("time {text:?}: {detail}")))
}

/// Whether the calendar fields combine into a valid timestamp.
pub fn is_valid_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> bool {
    UtcTime::from_calendar(year, month, day, hour, minute, second).is_ok()
}
