//! Approximate solar-term (節入り) boundaries.
//!
//! The sexagenary year starts at 立春 and each sexagenary month at one of the
//! twelve "jie" terms, not at the civil calendar boundary. This module
//! estimates those instants without an ephemeris:
//!
//! 1. 立春 of a year is extrapolated from a reference instant (立春 2000,
//!    2000-02-04 21:40 JST) by the mean tropical-year drift of 0.2422 days per
//!    year, minus one day for every Feb 29 passed (Julian leap rule with the
//!    Gregorian century adjustment).
//! 2. The other eleven jie terms are fixed mean day offsets from 立春. The
//!    offsets are unequal because the Earth moves faster near perihelion.
//!
//! Orbital eccentricity and the equation of time are otherwise ignored, so
//! results carry roughly ±1 day of error inside [`CALIBRATED_YEARS`] and
//! degrade silently outside it.

use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Year of the reference 立春 instant.
pub const REFERENCE_YEAR: i32 = 2000;

/// Reference 立春: 2000-02-04 21:40 JST, as (month, day, minute of day).
const REFERENCE_MONTH: u32 = 2;
const REFERENCE_DAY: u32 = 4;
const REFERENCE_MINUTE_OF_DAY: i64 = 21 * 60 + 40;

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Years over which the estimator stays within about one day.
pub const CALIBRATED_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Years outside this range are clamped so chrono arithmetic stays in range.
const SUPPORTED_YEARS: RangeInclusive<i32> = -200_000..=200_000;

const MINUTES_PER_DAY: f64 = 1440.0;

/// The twelve "jie" solar terms that open each sexagenary month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Risshun,
    Keichitsu,
    Seimei,
    Rikka,
    Boshu,
    Shosho,
    Risshu,
    Hakuro,
    Kanro,
    Ritto,
    Taisetsu,
    Shokan,
}

/// All 12 jie terms in order from 立春.
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Risshun,
    SolarTerm::Keichitsu,
    SolarTerm::Seimei,
    SolarTerm::Rikka,
    SolarTerm::Boshu,
    SolarTerm::Shosho,
    SolarTerm::Risshu,
    SolarTerm::Hakuro,
    SolarTerm::Kanro,
    SolarTerm::Ritto,
    SolarTerm::Taisetsu,
    SolarTerm::Shokan,
];

/// Mean offset in days of each jie term from 立春 (index 0 = 立春).
const MEAN_OFFSET_DAYS: [f64; 12] = [
    0.0, 29.75, 60.00, 90.67, 121.85, 153.27, 184.67, 215.80, 246.46, 276.59, 306.29, 335.76,
];

impl SolarTerm {
    /// Japanese name of the term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Risshun => "立春",
            Self::Keichitsu => "啓蟄",
            Self::Seimei => "清明",
            Self::Rikka => "立夏",
            Self::Boshu => "芒種",
            Self::Shosho => "小暑",
            Self::Risshu => "立秋",
            Self::Hakuro => "白露",
            Self::Kanro => "寒露",
            Self::Ritto => "立冬",
            Self::Taisetsu => "大雪",
            Self::Shokan => "小寒",
        }
    }

    /// 0-based index from 立春 (Risshun=0 .. Shokan=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Risshun => 0,
            Self::Keichitsu => 1,
            Self::Seimei => 2,
            Self::Rikka => 3,
            Self::Boshu => 4,
            Self::Shosho => 5,
            Self::Risshu => 6,
            Self::Hakuro => 7,
            Self::Kanro => 8,
            Self::Ritto => 9,
            Self::Taisetsu => 10,
            Self::Shokan => 11,
        }
    }

    /// Civil month (1-12) in which the term normally falls.
    pub const fn civil_month(self) -> u32 {
        (self.index() as u32 + 1) % 12 + 1
    }

    /// Term that opens the sexagenary month starting in civil `month`.
    pub const fn for_month(month: u32) -> Self {
        ALL_SOLAR_TERMS[((month + 10) % 12) as usize]
    }

    /// Mean offset from the same sexagenary year's 立春, in days.
    pub const fn mean_offset_days(self) -> f64 {
        MEAN_OFFSET_DAYS[self.index() as usize]
    }
}

/// A solar-term boundary instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermBoundary {
    pub term: SolarTerm,
    /// Civil date-time (JST) of the boundary.
    pub at: NaiveDateTime,
}

/// Whether `year` lies inside the estimator's calibration window.
pub fn is_calibrated(year: i32) -> bool {
    CALIBRATED_YEARS.contains(&year)
}

/// Number of Gregorian leap years in `1..=year` (negative for `year < 0`).
fn leap_years_through(year: i32) -> i64 {
    let y = i64::from(year);
    y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Days the 立春 instant of `year` drifts from Feb 4 21:40 of that same year.
fn risshun_drift_days(year: i32) -> f64 {
    let elapsed = f64::from(year - REFERENCE_YEAR);
    let leap_days = leap_years_through(year - 1) - leap_years_through(REFERENCE_YEAR - 1);
    (TROPICAL_YEAR_DAYS - 365.0) * elapsed - leap_days as f64
}

fn civil_anchor(year: i32) -> NaiveDateTime {
    let date =
        NaiveDate::from_ymd_opt(year, REFERENCE_MONTH, REFERENCE_DAY).unwrap_or(NaiveDate::MIN);
    date.and_time(NaiveTime::default()) + Duration::minutes(REFERENCE_MINUTE_OF_DAY)
}

fn add_days(instant: NaiveDateTime, days: f64) -> NaiveDateTime {
    instant + Duration::minutes((days * MINUTES_PER_DAY).round() as i64)
}

/// Approximate 立春 (start of the sexagenary year) of `year`, JST.
///
/// ```
/// use meishiki_time::risshun;
///
/// assert_eq!(risshun(2000).to_string(), "2000-02-04 21:40:00");
/// ```
pub fn risshun(year: i32) -> NaiveDateTime {
    let year = year.clamp(*SUPPORTED_YEARS.start(), *SUPPORTED_YEARS.end());
    add_days(civil_anchor(year), risshun_drift_days(year))
}

/// Boundary of `term` within the sexagenary year that begins at `risshun(year)`.
///
/// 小寒 therefore falls in January of `year + 1`.
pub fn term_boundary(year: i32, term: SolarTerm) -> NaiveDateTime {
    add_days(risshun(year), term.mean_offset_days())
}

/// Approximate boundary of the jie term governing civil `month` (1-12) of `year`.
///
/// January's term (小寒) is measured from the previous year's 立春.
pub fn month_boundary(year: i32, month: u32) -> NaiveDateTime {
    let term = SolarTerm::for_month(month);
    let sexagenary_year = if term == SolarTerm::Shokan {
        year.saturating_sub(1)
    } else {
        year
    };
    term_boundary(sexagenary_year, term)
}

/// First jie boundary strictly after `instant`.
pub fn next_boundary_after(instant: NaiveDateTime) -> TermBoundary {
    let (mut year, mut month) = (instant.year(), instant.month());
    let mut candidate = month_boundary(year, month);
    // Boundaries normally fall inside their civil month; far outside the
    // calibrated window they may drift, so keep stepping a bounded number of months.
    for _ in 0..24 {
        if candidate > instant {
            break;
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
        candidate = month_boundary(year, month);
    }
    TermBoundary {
        term: SolarTerm::for_month(month),
        at: candidate,
    }
}
