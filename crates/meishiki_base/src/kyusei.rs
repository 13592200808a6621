//! Nine-star ki (九星気学) natal star.
//!
//! The natal (本命) star depends only on the sexagenary year: its decimal
//! digits are summed until one digit `d` remains, and the star index is
//! `(10 − d) mod 9`. The stars descend by one each year, repeating every nine.

use meishiki_time::BirthMoment;
use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::pillars::solar_position;
use crate::util::year_digit_root;

/// The nine stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NineStar {
    IppakuSuisei,
    JikokuDosei,
    SanpekiMokusei,
    ShirokuMokusei,
    GoouDosei,
    RoppakuKinsei,
    ShichisekiKinsei,
    HappakuDosei,
    KyushiKasei,
}

/// All nine stars in order (index 0 = 一白水星).
pub const ALL_NINE_STARS: [NineStar; 9] = [
    NineStar::IppakuSuisei,
    NineStar::JikokuDosei,
    NineStar::SanpekiMokusei,
    NineStar::ShirokuMokusei,
    NineStar::GoouDosei,
    NineStar::RoppakuKinsei,
    NineStar::ShichisekiKinsei,
    NineStar::HappakuDosei,
    NineStar::KyushiKasei,
];

impl NineStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::IppakuSuisei => "一白水星",
            Self::JikokuDosei => "二黒土星",
            Self::SanpekiMokusei => "三碧木星",
            Self::ShirokuMokusei => "四緑木星",
            Self::GoouDosei => "五黄土星",
            Self::RoppakuKinsei => "六白金星",
            Self::ShichisekiKinsei => "七赤金星",
            Self::HappakuDosei => "八白土星",
            Self::KyushiKasei => "九紫火星",
        }
    }

    /// 0-based index (一白=0 .. 九紫=8).
    pub const fn index(self) -> u8 {
        match self {
            Self::IppakuSuisei => 0,
            Self::JikokuDosei => 1,
            Self::SanpekiMokusei => 2,
            Self::ShirokuMokusei => 3,
            Self::GoouDosei => 4,
            Self::RoppakuKinsei => 5,
            Self::ShichisekiKinsei => 6,
            Self::HappakuDosei => 7,
            Self::KyushiKasei => 8,
        }
    }

    /// Star number 1-9 as written in the name.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }
}

impl std::fmt::Display for NineStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for NineStar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Natal star of a sexagenary (立春-based) year.
pub fn nine_star_for_year(sexagenary_year: i32) -> NineStar {
    let d = year_digit_root(sexagenary_year);
    let index = (10 - d) % 9;
    debug!(sexagenary_year, digit_root = d, index, "nine-star ki");
    ALL_NINE_STARS[index as usize]
}

/// Natal star of a birth moment; births before 立春 count toward the previous year.
pub fn honmei_star(birth: &BirthMoment) -> NineStar {
    nine_star_for_year(solar_position(birth).sexagenary_year)
}
