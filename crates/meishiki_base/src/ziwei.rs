//! Zi Wei Dou Shu (紫微斗数) body star, life palace and life star.
//!
//! - 身主 (body star) follows the year branch.
//! - 命宮 (life palace) counts forward from 寅 by solar month and back by the
//!   hour slot, so it equals `month_branch − hour_slot` and needs a known time.
//! - 命主 (life star) follows the life palace branch.

use serde::Serialize;

use crate::cycle::Branch;

/// Stars that can act as body or life master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZiweiStar {
    Tanro,
    Kyomon,
    Rokuzon,
    Monkyoku,
    Rentei,
    Bukyoku,
    Hagun,
    Kasei,
    Tenso,
    Tenryo,
    Tendo,
    Bunsho,
    Tenki,
}

impl ZiweiStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tanro => "貪狼",
            Self::Kyomon => "巨門",
            Self::Rokuzon => "禄存",
            Self::Monkyoku => "文曲",
            Self::Rentei => "廉貞",
            Self::Bukyoku => "武曲",
            Self::Hagun => "破軍",
            Self::Kasei => "火星",
            Self::Tenso => "天相",
            Self::Tenryo => "天梁",
            Self::Tendo => "天同",
            Self::Bunsho => "文昌",
            Self::Tenki => "天機",
        }
    }
}

impl std::fmt::Display for ZiweiStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ZiweiStar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// 身主 of a year branch.
pub const fn body_star(year_branch: Branch) -> ZiweiStar {
    match year_branch {
        Branch::Zi | Branch::Wu => ZiweiStar::Kasei,
        Branch::Chou | Branch::Wei => ZiweiStar::Tenso,
        Branch::Yin | Branch::Shen => ZiweiStar::Tenryo,
        Branch::Mao | Branch::You => ZiweiStar::Tendo,
        Branch::Chen | Branch::Xu => ZiweiStar::Bunsho,
        Branch::Si | Branch::Hai => ZiweiStar::Tenki,
    }
}

/// 命宮 branch from the month branch and the two-hour slot (0 = 子).
pub fn life_palace(month_branch: Branch, hour_slot: u8) -> Branch {
    month_branch.advance(-i64::from(hour_slot))
}

/// 命主 of a life palace branch.
pub const fn life_star(palace: Branch) -> ZiweiStar {
    match palace {
        Branch::Zi => ZiweiStar::Tanro,
        Branch::Chou | Branch::Hai => ZiweiStar::Kyomon,
        Branch::Yin | Branch::Xu => ZiweiStar::Rokuzon,
        Branch::Mao | Branch::You => ZiweiStar::Monkyoku,
        Branch::Chen | Branch::Shen => ZiweiStar::Rentei,
        Branch::Si | Branch::Wei => ZiweiStar::Bukyoku,
        Branch::Wu => ZiweiStar::Hagun,
    }
}

/// Zi Wei summary; palace and life star are absent without a birth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ziwei {
    pub body_star: ZiweiStar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_palace: Option<Branch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_star: Option<ZiweiStar>,
}

/// Zi Wei lookup from year branch, month branch and optional hour slot.
pub fn ziwei(year_branch: Branch, month_branch: Branch, hour_slot: Option<u8>) -> Ziwei {
    let palace = hour_slot.map(|slot| life_palace(month_branch, slot));
    Ziwei {
        body_star: body_star(year_branch),
        life_palace: palace,
        life_star: palace.map(life_star),
    }
}
