//! Decade luck cycle (大運).
//!
//! Start age = days from birth to the next jie boundary ÷ 3, rounded and
//! clamped to [1, 10]. Each ten-year period advances the year pillar by one
//! more step. Direction does not depend on gender or year polarity.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use meishiki_time::{BirthMoment, next_boundary_after};
use serde::Serialize;
use tracing::debug;

use crate::cycle::StemBranch;

/// Configurable parameters for the decade cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecadeConfig {
    /// Days to the next boundary that count as one year of start age. Default: 3.0.
    pub days_per_year: f64,
    /// Lower clamp of the start age. Default: 1. Values below 1 are treated as 1.
    pub min_start_age: u32,
    /// Upper clamp of the start age. Default: 10.
    pub max_start_age: u32,
}

impl Default for DecadeConfig {
    fn default() -> Self {
        Self {
            days_per_year: 3.0,
            min_start_age: 1,
            max_start_age: 10,
        }
    }
}

/// Years covered by one decade period.
pub const DECADE_YEARS: u32 = 10;

/// Current decade of a chart relative to an injected "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DecadeCycle {
    /// The subject has not yet reached the start age.
    NotStarted { start_age: u32 },
    /// The decade running at `today`.
    Active {
        stem_branch: StemBranch,
        start_age: u32,
        /// Inclusive age range of this decade.
        period: (u32, u32),
        /// 0-based decade number.
        index: u32,
    },
}

impl DecadeCycle {
    pub fn start_age(&self) -> u32 {
        match *self {
            Self::NotStarted { start_age } | Self::Active { start_age, .. } => start_age,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

impl std::fmt::Display for DecadeCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted { start_age } => write!(f, "not started (starts at age {start_age})"),
            Self::Active {
                stem_branch,
                period: (from, to),
                ..
            } => write!(f, "{stem_branch} (age {from}-{to})"),
        }
    }
}

/// Fractional days from `instant` to the next jie boundary.
pub fn days_to_next_boundary(instant: NaiveDateTime) -> f64 {
    let next = next_boundary_after(instant);
    (next.at - instant).num_minutes() as f64 / 1440.0
}

/// Decade start age for a birth moment.
pub fn decade_start_age(birth: &BirthMoment, config: &DecadeConfig) -> u32 {
    let days = days_to_next_boundary(birth.instant());
    let raw = (days / config.days_per_year).round();
    let min = config.min_start_age.max(1);
    let lo = f64::from(min);
    let hi = f64::from(config.max_start_age.max(min));
    let age = raw.clamp(lo, hi) as u32;
    debug!(days, raw, age, "decade start age");
    age
}

/// Completed years of age on `today` (negative before birth).
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Decade running on `today`, advancing from `year_pillar`.
pub fn decade_cycle(
    birth: &BirthMoment,
    year_pillar: StemBranch,
    today: NaiveDate,
    config: &DecadeConfig,
) -> DecadeCycle {
    let start_age = decade_start_age(birth, config);
    let age = age_on(birth.date(), today);
    if age < 0 || (age as u32) < start_age {
        return DecadeCycle::NotStarted { start_age };
    }
    let index = (age as u32 - start_age) / DECADE_YEARS;
    let first = start_age + DECADE_YEARS * index;
    DecadeCycle::Active {
        stem_branch: year_pillar.advance(i64::from(index) + 1),
        start_age,
        period: (first, first + DECADE_YEARS - 1),
        index,
    }
}
