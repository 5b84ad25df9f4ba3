//! Class progression categories.
//!
//! Save categories and BAB categories share one catalogue table; the ids
//! below are the persisted category ids.

use serde::{Deserialize, Serialize};

/// Base attack bonus growth rate of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BabProgression {
    /// +1 per level
    Fast,
    /// +3/4 per level
    Medium,
    /// +1/2 per level
    Slow,
}

impl BabProgression {
    pub fn category_id(self) -> i64 {
        match self {
            Self::Fast => 3,
            Self::Medium => 4,
            Self::Slow => 5,
        }
    }

    pub fn from_category_id(id: i64) -> Option<Self> {
        match id {
            3 => Some(Self::Fast),
            4 => Some(Self::Medium),
            5 => Some(Self::Slow),
            _ => None,
        }
    }

    /// Base attack contribution of `level` levels in a class with this rate.
    pub fn base_attack(self, level: i32) -> i32 {
        match self {
            Self::Fast => level,
            Self::Medium => level.saturating_mul(3).div_euclid(4),
            Self::Slow => level.div_euclid(2),
        }
    }
}

/// Saving throw growth rate of a class, chosen per save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveProgression {
    Good,
    Poor,
}

impl SaveProgression {
    pub fn category_id(self) -> i64 {
        match self {
            Self::Good => 1,
            Self::Poor => 2,
        }
    }

    /// Any category other than Good counts as Poor.
    pub fn from_category_id(id: i64) -> Self {
        if id == 1 {
            Self::Good
        } else {
            Self::Poor
        }
    }

    /// Base save contribution of `level` levels in a class with this rate.
    pub fn base_save(self, level: i32) -> i32 {
        match self {
            Self::Good => level.div_euclid(2).saturating_add(2),
            Self::Poor => level.div_euclid(3),
        }
    }
}
