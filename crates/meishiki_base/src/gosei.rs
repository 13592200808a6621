//! Five-star three-heart (五星三心) destiny number and type.
//!
//! destiny = ((year_base + month_add) mod 60 + day) mod 60, where the year
//! base runs 0..59 from 1960 and the month add is a fixed table. Civil dates
//! are used as-is; solar terms play no part.

use serde::Serialize;
use tracing::debug;

/// Year whose base value is 0.
pub const BASE_EPOCH_YEAR: i32 = 1960;

/// Month add values, index 0 = January.
const MONTH_ADD: [u32; 12] = [29, 0, 30, 1, 31, 23, 32, 3, 33, 4, 34, 5];

/// The six destiny types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoseiType {
    Dolphin,
    Compass,
    Clock,
    Phoenix,
    Indian,
    Chameleon,
}

impl GoseiType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dolphin => "イルカ",
            Self::Compass => "羅針盤",
            Self::Clock => "時計",
            Self::Phoenix => "鳳凰",
            Self::Indian => "インディアン",
            Self::Chameleon => "カメレオン",
        }
    }

    /// Type of a destiny number (0-59).
    pub const fn from_destiny(destiny: u32) -> Self {
        match destiny {
            1..=10 => Self::Compass,
            11..=20 => Self::Clock,
            21..=30 => Self::Phoenix,
            31..=40 => Self::Indian,
            41..=50 => Self::Chameleon,
            _ => Self::Dolphin,
        }
    }
}

/// 金 (even birth year) or 銀 (odd birth year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metal {
    Gold,
    Silver,
}

impl Metal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gold => "金",
            Self::Silver => "銀",
        }
    }

    pub const fn for_year(year: i32) -> Self {
        if year % 2 == 0 { Self::Gold } else { Self::Silver }
    }
}

/// Result of the five-star three-heart lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gosei {
    pub destiny: u32,
    pub kind: GoseiType,
    pub metal: Metal,
}

impl Gosei {
    /// Label such as `銀の羅針盤`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Gosei {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}の{}", self.metal.name(), self.kind.name())
    }
}

impl Serialize for Gosei {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            destiny: u32,
            label: &'a str,
        }
        Repr {
            destiny: self.destiny,
            label: &self.label(),
        }
        .serialize(serializer)
    }
}

/// Year base (0-59); the 60-year table repeats in both directions.
pub fn year_base(year: i32) -> u32 {
    (i64::from(year) - i64::from(BASE_EPOCH_YEAR)).rem_euclid(60) as u32
}

/// Month add value for civil `month` (1-12).
pub fn month_add(month: u32) -> u32 {
    MONTH_ADD[(month.clamp(1, 12) - 1) as usize]
}

/// Destiny number (0-59) of a civil date.
pub fn destiny_number(year: i32, month: u32, day: u32) -> u32 {
    let table = (year_base(year) + month_add(month)) % 60;
    let destiny = (table + day) % 60;
    debug!(year, month, day, table, destiny, "five-star three-heart");
    destiny
}

/// Five-star three-heart type of a civil date.
pub fn gosei(year: i32, month: u32, day: u32) -> Gosei {
    let destiny = destiny_number(year, month, day);
    Gosei {
        destiny,
        kind: GoseiType::from_destiny(destiny),
        metal: Metal::for_year(year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_base_table() {
        assert_eq!(year_base(1930), 30);
        assert_eq!(year_base(1960), 0);
        assert_eq!(year_base(1979), 19);
        assert_eq!(year_base(2025), 5);
        assert_eq!(year_base(1900), 0);
        assert_eq!(year_base(1899), 59);
    }

    #[test]
    fn worked_example_1979_06_27() {
        assert_eq!((year_base(1979) + month_add(6)) % 60, 42);
        let g = gosei(1979, 6, 27);
        assert_eq!(g.destiny, 9);
        assert_eq!(g.kind, GoseiType::Compass);
        assert_eq!(g.label(), "銀の羅針盤");
        assert_eq!(g.to_string(), "銀の羅針盤");
    }

    #[test]
    fn type_ranges() {
        assert_eq!(GoseiType::from_destiny(0), GoseiType::Dolphin);
        assert_eq!(GoseiType::from_destiny(10), GoseiType::Compass);
        assert_eq!(GoseiType::from_destiny(11), GoseiType::Clock);
        assert_eq!(GoseiType::from_destiny(30), GoseiType::Phoenix);
        assert_eq!(GoseiType::from_destiny(31), GoseiType::Indian);
        assert_eq!(GoseiType::from_destiny(50), GoseiType::Chameleon);
        assert_eq!(GoseiType::from_destiny(51), GoseiType::Dolphin);
        assert_eq!(GoseiType::from_destiny(59), GoseiType::Dolphin);
    }

    #[test]
    fn metal_by_parity() {
        assert_eq!(Metal::for_year(2000), Metal::Gold);
        assert_eq!(Metal::for_year(1979), Metal::Silver);
        assert_eq!(Metal::for_year(-1), Metal::Silver);
    }

    #[test]
    fn destiny_in_range() {
        for month in 1..=12 {
            for day in 1..=31 {
                assert!(destiny_number(1990, month, day) < 60);
            }
        }
    }
}
