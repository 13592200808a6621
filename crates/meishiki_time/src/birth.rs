//! Validated civil birth moment.
//!
//! All instants in this crate are naive civil times in Japan Standard Time
//! (UTC+9); no time-zone conversion is performed.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::julian_day_floor;

/// Hour assumed for boundary comparisons when the birth time is unknown.
pub const UNKNOWN_TIME_HOUR: u32 = 12;

/// A birth date with an optional time of day.
///
/// Construction validates the calendar date and the time, so every value of
/// this type denotes a real Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthMoment {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl BirthMoment {
    /// Create a birth moment. `hour = None` means the time of birth is unknown;
    /// `minute` is then unused but must still lie in 0..=59.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: Option<u32>,
        minute: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let time = match hour {
            Some(h) => Some(
                NaiveTime::from_hms_opt(h, minute, 0)
                    .ok_or(TimeError::InvalidTime { hour: h, minute })?,
            ),
            None if minute > 59 => return Err(TimeError::InvalidMinute { minute }),
            None => None,
        };
        Ok(Self { date, time })
    }

    /// Birth date with unknown time.
    pub fn date_only(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, None, 0)
    }

    /// Birth date with a known hour and minute.
    pub fn with_time(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        Self::new(year, month, day, Some(hour), minute)
    }

    /// Build from already-validated chrono values.
    pub fn from_naive(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self { date, time }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Hour of birth, if known.
    pub fn hour(&self) -> Option<u32> {
        self.time.map(|t| t.hour())
    }

    /// Minute of birth (0 when the time is unknown).
    pub fn minute(&self) -> u32 {
        self.time.map_or(0, |t| t.minute())
    }

    /// Whether the time of birth is known.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Instant used for solar-term comparisons; noon when the time is unknown.
    pub fn instant(&self) -> NaiveDateTime {
        let time = self.time.unwrap_or_else(|| {
            NaiveTime::default() + chrono::Duration::hours(i64::from(UNKNOWN_TIME_HOUR))
        });
        self.date.and_time(time)
    }

    /// Floor of the Julian Date at 0h of the civil birth date.
    pub fn julian_day_floor(&self) -> i64 {
        julian_day_floor(self.year(), self.month(), self.day())
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.time {
            Some(t) => write!(f, "{} {}", self.date.format("%Y-%m-%d"), t.format("%H:%M")),
            None => write!(f, "{} (time unknown)", self.date.format("%Y-%m-%d")),
        }
    }
}
