//! Kabbalah (カバラ) sephira of a birth date.
//!
//! `year + month + day` is digit-summed until it is at most 10 and read as a
//! sephira number on the tree of life.

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::util::reduce_to;

/// The ten sephirot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sephira {
    Kether,
    Chokmah,
    Binah,
    Chesed,
    Geburah,
    Tiphareth,
    Netzach,
    Hod,
    Yesod,
    Malkuth,
}

/// All ten sephirot in order (number 1 = Kether).
pub const ALL_SEPHIROT: [Sephira; 10] = [
    Sephira::Kether,
    Sephira::Chokmah,
    Sephira::Binah,
    Sephira::Chesed,
    Sephira::Geburah,
    Sephira::Tiphareth,
    Sephira::Netzach,
    Sephira::Hod,
    Sephira::Yesod,
    Sephira::Malkuth,
];

impl Sephira {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kether => "ケテル",
            Self::Chokmah => "コクマー",
            Self::Binah => "ビナー",
            Self::Chesed => "ケセド",
            Self::Geburah => "ゲブラー",
            Self::Tiphareth => "ティファレト",
            Self::Netzach => "ネツァク",
            Self::Hod => "ホド",
            Self::Yesod => "イェソド",
            Self::Malkuth => "マルクト",
        }
    }

    /// Traditional meaning (王冠, 知恵, ...).
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Kether => "王冠",
            Self::Chokmah => "知恵",
            Self::Binah => "理解",
            Self::Chesed => "慈悲",
            Self::Geburah => "峻厳",
            Self::Tiphareth => "美",
            Self::Netzach => "勝利",
            Self::Hod => "栄光",
            Self::Yesod => "基礎",
            Self::Malkuth => "王国",
        }
    }

    /// Sephira number 1-10.
    pub const fn number(self) -> u8 {
        match self {
            Self::Kether => 1,
            Self::Chokmah => 2,
            Self::Binah => 3,
            Self::Chesed => 4,
            Self::Geburah => 5,
            Self::Tiphareth => 6,
            Self::Netzach => 7,
            Self::Hod => 8,
            Self::Yesod => 9,
            Self::Malkuth => 10,
        }
    }
}

impl std::fmt::Display for Sephira {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.meaning())
    }
}

impl Serialize for Sephira {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sephira of a civil birth date. A sum reducing to 0 maps to Malkuth.
pub fn sephira(year: i32, month: u32, day: u32) -> Sephira {
    let sum = u64::from(year.unsigned_abs()) + u64::from(month) + u64::from(day);
    let n = match reduce_to(sum, 10) {
        0 => 10,
        n => n,
    };
    debug!(year, month, day, sum, n, "kabbalah");
    ALL_SEPHIROT[(n - 1) as usize]
}
