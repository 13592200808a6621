//! Civil time primitives for the sexagenary calendar engine.
//!
//! This crate provides:
//! - `BirthMoment`, a validated birth date with optional time of day
//! - Julian Date / Julian Day Number conversions
//! - Approximate solar-term (立春 and monthly 節入り) boundaries
//!
//! All date-times are naive civil times in Japan Standard Time.

pub mod birth;
pub mod error;
pub mod julian;
pub mod solar_term;

pub use birth::{BirthMoment, UNKNOWN_TIME_HOUR};
pub use error::TimeError;
pub use julian::{
    calendar_from_jdn, julian_day, julian_day_floor, julian_day_number, weekday_from_jdn,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, CALIBRATED_YEARS, REFERENCE_YEAR, SolarTerm, TROPICAL_YEAR_DAYS,
    TermBoundary, is_calibrated, month_boundary, next_boundary_after, risshun, term_boundary,
};
