//! Tarot birth card (誕生カード) from the major arcana.

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::util::reduce_to;

/// Japanese names of the 22 major arcana, index = card number.
const MAJOR_ARCANA: [&str; 22] = [
    "愚者",
    "魔術師",
    "女教皇",
    "女帝",
    "皇帝",
    "法王",
    "恋人",
    "戦車",
    "力",
    "隠者",
    "運命の輪",
    "正義",
    "吊された男",
    "死神",
    "節制",
    "悪魔",
    "塔",
    "星",
    "月",
    "太陽",
    "審判",
    "世界",
];

/// A major arcana card, 0 (愚者) to 21 (世界).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MajorArcana(u8);

impl MajorArcana {
    /// Card with number `n`, or `None` above 21.
    pub const fn new(n: u8) -> Option<Self> {
        if (n as usize) < MAJOR_ARCANA.len() {
            Some(Self(n))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        MAJOR_ARCANA[self.0 as usize]
    }
}

impl std::fmt::Display for MajorArcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.name())
    }
}

impl Serialize for MajorArcana {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Birth card: `year + month + day` digit-summed until at most 22, with 22
/// read as 0 (愚者).
pub fn birth_card(year: i32, month: u32, day: u32) -> MajorArcana {
    let sum = u64::from(year.unsigned_abs()) + u64::from(month) + u64::from(day);
    let n = reduce_to(sum, 22) % 22;
    debug!(year, month, day, sum, card = n, "tarot");
    MajorArcana(n as u8)
}
