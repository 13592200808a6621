//! Void branches (空亡 / 天中殺).
//!
//! Each ten-day "旬" starting at a 甲 day pairs ten stems with ten branches,
//! leaving two branches unpaired. Those two are void for every day in the 旬.

use serde::Serialize;

use crate::cycle::{Branch, StemBranch};

/// Two consecutive branches left void by a ten-day 旬.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VoidPair(pub [Branch; 2]);

/// The six void pairs, indexed by `((12 + branch − stem) mod 12) / 2`.
pub const ALL_VOID_PAIRS: [VoidPair; 6] = [
    VoidPair([Branch::Xu, Branch::Hai]),
    VoidPair([Branch::Zi, Branch::Chou]),
    VoidPair([Branch::Yin, Branch::Mao]),
    VoidPair([Branch::Chen, Branch::Si]),
    VoidPair([Branch::Wu, Branch::Wei]),
    VoidPair([Branch::Shen, Branch::You]),
];

impl VoidPair {
    pub const fn branches(self) -> [Branch; 2] {
        self.0
    }

    pub fn contains(self, branch: Branch) -> bool {
        self.0.contains(&branch)
    }
}

impl std::fmt::Display for VoidPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0].name(), self.0[1].name())
    }
}

/// Void pair of the 旬 containing `day`.
pub fn void_pair(day: StemBranch) -> VoidPair {
    let s = usize::from(day.stem.index());
    let b = usize::from(day.branch.index());
    ALL_VOID_PAIRS[((12 + b - s) % 12) / 2]
}
