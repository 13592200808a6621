//! Lunar mansions (二十八宿) as a continuous 28-day cycle.
//!
//! The cycle runs unbroken over the Julian Day Number. Since 28 is a multiple
//! of 7, each mansion keeps a fixed weekday; 角, 斗, 奎 and 井 fall on Thursdays.

use meishiki_time::julian_day_number;
use serde::ser::{Serialize, Serializer};

/// Names of the 28 mansions in cycle order, starting at 角.
const MANSION_NAMES: [&str; 28] = [
    "角", "亢", "氐", "房", "心", "尾", "箕", "斗", "牛", "女", "虚", "危", "室", "壁", "奎",
    "婁", "胃", "昴", "畢", "觜", "参", "井", "鬼", "柳", "星", "張", "翼", "軫",
];

/// Offset aligning the cycle with the Julian Day Number.
pub const MANSION_JDN_OFFSET: i64 = 11;

/// A lunar mansion, 0 (角) to 27 (軫).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mansion(u8);

impl Mansion {
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        MANSION_NAMES[self.0 as usize]
    }

    /// Mansion on a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        Self((jdn + MANSION_JDN_OFFSET).rem_euclid(28) as u8)
    }
}

impl std::fmt::Display for Mansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}宿", self.name())
    }
}

impl Serialize for Mansion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Mansion of a civil date.
pub fn mansion_for_date(year: i32, month: u32, day: u32) -> Mansion {
    Mansion::from_jdn(julian_day_number(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use meishiki_time::weekday_from_jdn;

    #[test]
    fn cardinal_mansions_on_thursday() {
        for jdn in 2_451_545..2_451_545 + 56 {
            let m = Mansion::from_jdn(jdn);
            if m.index() % 7 == 0 {
                assert_eq!(weekday_from_jdn(jdn), 3, "{m} on jdn {jdn}");
            }
        }
    }

    #[test]
    fn consecutive_days_step_by_one() {
        let a = mansion_for_date(2024, 2, 28).index();
        let b = mansion_for_date(2024, 2, 29).index();
        let c = mansion_for_date(2024, 3, 1).index();
        assert_eq!((a + 1) % 28, b);
        assert_eq!((b + 1) % 28, c);
    }

    #[test]
    fn cycle_repeats_every_28_days() {
        assert_eq!(Mansion::from_jdn(100), Mansion::from_jdn(128));
        assert_eq!(Mansion::from_jdn(-17).index(), Mansion::from_jdn(11).index());
    }

    #[test]
    fn display_suffix() {
        assert_eq!(Mansion::from_jdn(-MANSION_JDN_OFFSET).to_string(), "角宿");
    }
}
