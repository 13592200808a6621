//! Table-driven sexagenary calculations built on `meishiki_time`.
//!
//! This crate provides:
//! - Stems, branches, the 60-cycle and the five elements
//! - Four pillars, element tally, void pair and decade cycle (a complete [`Chart`])
//! - Companion lookups: nine-star ki, five-star three-heart, numerology,
//!   Kabbalah, tarot, Western sun sign, Zi Wei Dou Shu and lunar mansions
//! - Fortune score and deterministic message selection
//!
//! Every function is pure; "today" is passed in explicitly where it matters.

pub mod chart;
pub mod cycle;
pub mod decade;
pub mod element;
pub mod gosei;
pub mod kabbalah;
pub mod kyusei;
pub mod mansion;
pub mod numerology;
pub mod pillars;
pub mod score;
pub mod tarot;
pub mod util;
pub mod void;
pub mod zodiac;
pub mod ziwei;

pub use chart::{Chart, boundary_note, chart_for_birth};
pub use cycle::{ALL_BRANCHES, ALL_STEMS, Branch, Stem, StemBranch};
pub use decade::{DecadeConfig, DecadeCycle, age_on, decade_cycle, decade_start_age};
pub use element::{ALL_ELEMENTS, Element, ElementTally};
pub use gosei::{Gosei, GoseiType, Metal, gosei};
pub use kabbalah::{Sephira, sephira};
pub use kyusei::{NineStar, honmei_star, nine_star_for_year};
pub use mansion::{Mansion, mansion_for_date};
pub use numerology::life_path_number;
pub use pillars::{
    FourPillars, SolarPosition, day_pillar, four_pillars, hour_pillar, hour_slot, month_pillar,
    solar_position, year_pillar,
};
pub use score::{ANNUAL_MESSAGES, fortune_score, message_seed, pick_message};
pub use tarot::{MajorArcana, birth_card};
pub use void::{ALL_VOID_PAIRS, VoidPair, void_pair};
pub use zodiac::{SignElement, SunSign, sun_sign};
pub use ziwei::{Ziwei, ZiweiStar, ziwei};
