//! Convenience wrapper for the meishiki calendar engine.
//!
//! Turns textual or already-validated birth data into a complete [`Reading`]
//! in one call, so callers need neither `meishiki_time` nor `meishiki_base`
//! directly.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use meishiki_rs::*;
//!
//! let moment = parse_birth("1979-06-27", None).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 27).unwrap();
//! let r = reading(&BirthProfile::anonymous(moment), today, &ReadingConfig::default());
//! assert_eq!(r.gosei.label(), "銀の羅針盤");
//! println!("{}", r.summary_text());
//! ```

pub mod date;
pub mod error;
pub mod reading;

pub use date::{parse_birth, parse_date};
pub use error::MeishikiError;
pub use reading::{BirthProfile, Reading, ReadingConfig, reading};

// Re-export the types that appear in a `Reading`.
pub use meishiki_base::{
    Branch, Chart, DecadeConfig, DecadeCycle, Element, ElementTally, FourPillars, Gosei,
    MajorArcana, Mansion, NineStar, Sephira, Stem, StemBranch, SunSign, VoidPair, Ziwei,
    ZiweiStar,
};
pub use meishiki_time::{BirthMoment, SolarTerm, TimeError};
