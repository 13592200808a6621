//! Four pillars (四柱) derivation.
//!
//! Pipeline for a [`BirthMoment`]:
//!
//! 1. Solar position: the sexagenary year starts at 立春 and the sexagenary
//!    month at its jie term, so the civil year and month are stepped back when
//!    the birth instant precedes those boundaries (noon is used when the time
//!    of birth is unknown).
//! 2. Year pillar: cycle position `sexagenary_year − 4` (CE 4 was 甲子).
//! 3. Month pillar: branch = solar month mod 12 (寅 for February); stem by
//!    the five-tigers rule, starting at `2·year_stem + 2` for the 寅 month.
//! 4. Day pillar: cycle position `floor(JD) + 50`, with the day advancing at
//!    23:00 (start of the 子 hour) rather than at midnight.
//! 5. Hour pillar (time known only): two-hour slot `((hour + 1) / 2) mod 12`,
//!    stem by the five-rats rule starting at `2·day_stem`.

use chrono::NaiveDateTime;
use meishiki_time::{BirthMoment, month_boundary, risshun};
use serde::Serialize;

use crate::cycle::{Branch, Stem, StemBranch};
use crate::element::ElementTally;

/// Cycle offset between `floor(JD)` and the day's sexagenary position.
pub const DAY_CYCLE_OFFSET: i64 = 50;

/// Hour at which the day pillar advances to the next day.
pub const DAY_ROLLOVER_HOUR: u32 = 23;

/// Year and month as counted by solar terms, with the boundaries used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarPosition {
    /// Year whose 立春 most recently preceded the birth instant.
    pub sexagenary_year: i32,
    /// Civil month number (1-12) whose jie term most recently preceded birth.
    pub solar_month: u32,
    /// Whether the civil year was stepped back (birth before 立春).
    pub year_shifted: bool,
    /// Whether the civil month was stepped back (birth before its jie term).
    pub month_shifted: bool,
    /// 立春 of the civil birth year.
    pub risshun: NaiveDateTime,
    /// Jie boundary of the civil birth month.
    pub month_boundary: NaiveDateTime,
}

/// Locate a birth moment in the solar-term calendar.
pub fn solar_position(birth: &BirthMoment) -> SolarPosition {
    let instant = birth.instant();
    let (year, month) = (birth.year(), birth.month());

    let risshun_at = risshun(year);
    let year_shifted = instant < risshun_at;
    let sexagenary_year = if year_shifted {
        year.saturating_sub(1)
    } else {
        year
    };

    let boundary = month_boundary(year, month);
    let month_shifted = instant < boundary;
    let solar_month = match (month_shifted, month) {
        (false, m) => m,
        (true, 1) => 12,
        (true, m) => m - 1,
    };

    SolarPosition {
        sexagenary_year,
        solar_month,
        year_shifted,
        month_shifted,
        risshun: risshun_at,
        month_boundary: boundary,
    }
}

/// Year pillar of a sexagenary year.
pub fn year_pillar(sexagenary_year: i32) -> StemBranch {
    StemBranch::from_cycle_index(i64::from(sexagenary_year) - 4)
}

/// Branch of a solar month (1-12): 寅 for February .. 丑 for January.
pub fn month_branch(solar_month: u32) -> Branch {
    Branch::from_index(i64::from(solar_month))
}

/// Month pillar from the year stem (five tigers, 五虎遁).
///
/// 甲/己 years open with 丙寅, 乙/庚 with 戊寅, 丙/辛 with 庚寅, 丁/壬 with
/// 壬寅, 戊/癸 with 甲寅.
pub fn month_pillar(year_stem: Stem, solar_month: u32) -> StemBranch {
    let branch = month_branch(solar_month);
    let months_since_tiger = (i64::from(branch.index()) - 2).rem_euclid(12);
    let stem = Stem::from_index(2 * i64::from(year_stem.index()) + 2 + months_since_tiger);
    StemBranch::new(stem, branch)
}

/// Integer Julian day used for the day pillar, with the 23:00 rollover applied.
pub fn day_number(birth: &BirthMoment) -> i64 {
    let jd = birth.julian_day_floor();
    match birth.hour() {
        Some(h) if h >= DAY_ROLLOVER_HOUR => jd + 1,
        _ => jd,
    }
}

/// Day pillar of a birth moment.
///
/// ```
/// use meishiki_base::day_pillar;
/// use meishiki_time::BirthMoment;
///
/// let b = BirthMoment::date_only(2000, 1, 1).unwrap();
/// assert_eq!(day_pillar(&b).to_string(), "戊午");
/// ```
pub fn day_pillar(birth: &BirthMoment) -> StemBranch {
    StemBranch::from_cycle_index(day_number(birth) + DAY_CYCLE_OFFSET)
}

/// Two-hour slot (0 = 子 .. 11 = 亥); 23:00-00:59 share slot 0.
pub const fn hour_slot(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Hour pillar from the (rolled-over) day stem (five rats, 五鼠遁).
pub fn hour_pillar(day_stem: Stem, hour: u32) -> StemBranch {
    let slot = i64::from(hour_slot(hour));
    let stem = Stem::from_index(2 * i64::from(day_stem.index()) + slot);
    StemBranch::new(stem, Branch::from_index(slot))
}

/// The four pillars of a birth moment. `hour` is absent when the time of
/// birth is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<StemBranch>,
}

impl FourPillars {
    /// Pillars present, in year-month-day-hour order.
    pub fn iter(&self) -> impl Iterator<Item = StemBranch> + '_ {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
            .into_iter()
            .flatten()
    }

    /// Element count over every stem and branch (6 or 8 symbols).
    pub fn element_tally(&self) -> ElementTally {
        ElementTally::from_elements(self.iter().flat_map(StemBranch::elements))
    }
}

/// Derive the four pillars from an already-located solar position.
pub fn four_pillars_at(birth: &BirthMoment, position: &SolarPosition) -> FourPillars {
    let year = year_pillar(position.sexagenary_year);
    let month = month_pillar(year.stem, position.solar_month);
    let day = day_pillar(birth);
    let hour = birth.hour().map(|h| hour_pillar(day.stem, h));
    FourPillars {
        year,
        month,
        day,
        hour,
    }
}

/// Derive the four pillars of a birth moment.
pub fn four_pillars(birth: &BirthMoment) -> FourPillars {
    four_pillars_at(birth, &solar_position(birth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_pillar_anchors() {
        assert_eq!(year_pillar(1984).to_string(), "甲子");
        assert_eq!(year_pillar(2000).to_string(), "庚辰");
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
        assert_eq!(year_pillar(4).to_string(), "甲子");
    }

    #[test]
    fn year_before_risshun_is_previous() {
        let b = BirthMoment::with_time(2024, 2, 1, 9, 0).unwrap();
        let p = solar_position(&b);
        assert!(p.year_shifted);
        assert_eq!(p.sexagenary_year, 2023);
        assert_eq!(four_pillars(&b).year.to_string(), "癸卯");
    }

    #[test]
    fn january_wraps_to_december_before_shokan() {
        let b = BirthMoment::date_only(2001, 1, 2).unwrap();
        let p = solar_position(&b);
        assert!(p.month_shifted);
        assert_eq!(p.solar_month, 12);
        assert_eq!(p.sexagenary_year, 2000);
        // 庚辰 year: 寅 month is 戊寅, so 子 month is 戊子
        assert_eq!(four_pillars(&b).month.to_string(), "戊子");
    }

    #[test]
    fn january_after_shokan_is_chou_month() {
        let b = BirthMoment::date_only(2001, 1, 20).unwrap();
        let p = solar_position(&b);
        assert!(!p.month_shifted);
        assert_eq!(p.solar_month, 1);
        assert_eq!(four_pillars(&b).month.to_string(), "己丑");
    }

    #[test]
    fn five_tigers_rule() {
        assert_eq!(month_pillar(Stem::Jia, 2).to_string(), "丙寅");
        assert_eq!(month_pillar(Stem::Ji, 2).to_string(), "丙寅");
        assert_eq!(month_pillar(Stem::Yi, 2).to_string(), "戊寅");
        assert_eq!(month_pillar(Stem::Bing, 2).to_string(), "庚寅");
        assert_eq!(month_pillar(Stem::Ding, 2).to_string(), "壬寅");
        assert_eq!(month_pillar(Stem::Wu, 2).to_string(), "甲寅");
        assert_eq!(month_pillar(Stem::Jia, 1).to_string(), "丁丑");
    }

    #[test]
    fn month_pillars_are_valid_pairs() {
        for stem in crate::cycle::ALL_STEMS {
            for m in 1..=12 {
                assert!(month_pillar(stem, m).cycle_index().is_some());
            }
        }
    }

    #[test]
    fn day_pillar_reference_dates() {
        let b = BirthMoment::date_only(2000, 1, 1).unwrap();
        assert_eq!(day_pillar(&b).to_string(), "戊午");
        let b = BirthMoment::date_only(1970, 1, 1).unwrap();
        assert_eq!(day_pillar(&b).to_string(), "辛巳");
    }

    #[test]
    fn day_rolls_over_at_23() {
        let before = BirthMoment::with_time(2000, 1, 1, 22, 59).unwrap();
        let after = BirthMoment::with_time(2000, 1, 1, 23, 0).unwrap();
        assert_eq!(day_pillar(&after), day_pillar(&before).advance(1));
        let midnight = BirthMoment::with_time(2000, 1, 2, 0, 30).unwrap();
        assert_eq!(day_pillar(&after), day_pillar(&midnight));
    }

    #[test]
    fn hour_slots() {
        assert_eq!(hour_slot(23), 0);
        assert_eq!(hour_slot(0), 0);
        assert_eq!(hour_slot(1), 1);
        assert_eq!(hour_slot(2), 1);
        assert_eq!(hour_slot(11), 6);
        assert_eq!(hour_slot(12), 6);
        assert_eq!(hour_slot(22), 11);
    }

    #[test]
    fn five_rats_rule() {
        assert_eq!(hour_pillar(Stem::Jia, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Ji, 23).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Yi, 0).to_string(), "丙子");
        assert_eq!(hour_pillar(Stem::Wu, 12).to_string(), "戊午");
        assert_eq!(hour_pillar(Stem::Gui, 22).to_string(), "癸亥");
    }

    #[test]
    fn hour_pillar_absent_without_time() {
        let b = BirthMoment::date_only(1979, 6, 27).unwrap();
        let p = four_pillars(&b);
        assert!(p.hour.is_none());
        assert_eq!(p.iter().count(), 3);
        assert_eq!(p.element_tally().total(), 6);
    }

    #[test]
    fn tally_with_hour_sums_to_eight() {
        let b = BirthMoment::with_time(1979, 6, 27, 8, 30).unwrap();
        assert_eq!(four_pillars(&b).element_tally().total(), 8);
    }
}
