//! Western (tropical) sun sign by civil date.

use serde::ser::{Serialize, Serializer};

/// The twelve tropical signs, starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (index 0 = Aries).
pub const ALL_SUN_SIGNS: [SunSign; 12] = [
    SunSign::Aries,
    SunSign::Taurus,
    SunSign::Gemini,
    SunSign::Cancer,
    SunSign::Leo,
    SunSign::Virgo,
    SunSign::Libra,
    SunSign::Scorpio,
    SunSign::Sagittarius,
    SunSign::Capricorn,
    SunSign::Aquarius,
    SunSign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl SignElement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "火",
            Self::Earth => "地",
            Self::Air => "風",
            Self::Water => "水",
        }
    }
}

/// First day of the sign that begins in each civil month (index 0 = January).
const SIGN_START_DAY: [u32; 12] = [20, 19, 21, 20, 21, 22, 23, 23, 23, 24, 23, 22];

impl SunSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "牡羊座",
            Self::Taurus => "牡牛座",
            Self::Gemini => "双子座",
            Self::Cancer => "蟹座",
            Self::Leo => "獅子座",
            Self::Virgo => "乙女座",
            Self::Libra => "天秤座",
            Self::Scorpio => "蠍座",
            Self::Sagittarius => "射手座",
            Self::Capricorn => "山羊座",
            Self::Aquarius => "水瓶座",
            Self::Pisces => "魚座",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Fire, earth, air, water repeating from Aries.
    pub const fn element(self) -> SignElement {
        match self.index() % 4 {
            0 => SignElement::Fire,
            1 => SignElement::Earth,
            2 => SignElement::Air,
            _ => SignElement::Water,
        }
    }
}

impl std::fmt::Display for SunSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SunSign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Sun sign of a civil month (1-12) and day.
pub fn sun_sign(month: u32, day: u32) -> SunSign {
    let m = month.clamp(1, 12);
    // the sign beginning in month m: January → Aquarius (10), March → Aries (0)
    let starting = (m + 9) % 12;
    let index = if day >= SIGN_START_DAY[(m - 1) as usize] {
        starting
    } else {
        (starting + 11) % 12
    };
    ALL_SUN_SIGNS[index as usize]
}
