//! Heavenly stems (十干), earthly branches (十二支) and their sexagenary pairing.
//!
//! Stems cycle with period 10 and branches with period 12; pairing them in
//! lock-step yields the 60-step sexagenary cycle 甲子, 乙丑, ... 癸亥. Only pairs
//! whose stem and branch indices share parity occur in the cycle.

use serde::ser::{Serialize, Serializer};

use crate::element::Element;

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Kanji name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at any integer position, wrapping modulo 10.
    pub fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Element: consecutive pairs share one (甲乙 木 .. 壬癸 水).
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    /// Even-indexed stems are yang.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Stem `n` steps later in the cycle (negative steps go back).
    pub fn advance(self, n: i64) -> Self {
        Self::from_index(i64::from(self.index()) + n)
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Kanji name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal (干支の動物).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "鼠",
            Self::Chou => "牛",
            Self::Yin => "虎",
            Self::Mao => "兎",
            Self::Chen => "龍",
            Self::Si => "蛇",
            Self::Wu => "馬",
            Self::Wei => "羊",
            Self::Shen => "猿",
            Self::You => "鶏",
            Self::Xu => "犬",
            Self::Hai => "猪",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at any integer position, wrapping modulo 12.
    pub fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Even-indexed branches (子寅辰午申戌) are yang.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Branch `n` steps later in the cycle (negative steps go back).
    pub fn advance(self, n: i64) -> Self {
        Self::from_index(i64::from(self.index()) + n)
    }
}

/// A stem/branch pair such as 甲子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at sexagenary position `i` (wrapping modulo 60; 0 = 甲子).
    pub fn from_cycle_index(i: i64) -> Self {
        let i = i.rem_euclid(60);
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Position in the 60-cycle, or `None` for a mixed-parity pair that never
    /// occurs in the cycle.
    pub fn cycle_index(self) -> Option<u8> {
        if self.stem.is_yang() != self.branch.is_yang() {
            return None;
        }
        let s = i64::from(self.stem.index());
        let b = i64::from(self.branch.index());
        // i ≡ s (mod 10) and i ≡ b (mod 12)  ⇒  i = 6s − 5b (mod 60)
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Advance stem and branch together by `n` steps.
    pub fn advance(self, n: i64) -> Self {
        Self {
            stem: self.stem.advance(n),
            branch: self.branch.advance(n),
        }
    }

    /// Elements of the stem and the branch.
    pub const fn elements(self) -> [Element; 2] {
        [self.stem.element(), self.branch.element()]
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Serialized as its two-kanji name, e.g. `"戊午"`.
impl Serialize for StemBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
