//! Error types for birth-moment validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing a [`crate::BirthMoment`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple is not a real Gregorian date (Feb 30, month 13, ...).
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23 or minute outside 0..=59.
    InvalidTime { hour: u32, minute: u32 },
    /// Minute outside 0..=59 given without an hour.
    InvalidMinute { minute: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time: {hour:02}:{minute:02}")
            }
            Self::InvalidMinute { minute } => write!(f, "invalid minute: {minute}"),
        }
    }
}

impl Error for TimeError {}
