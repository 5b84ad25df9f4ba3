//! Bonus categories for Pathfinder 1e modifiers.
//!
//! The numeric ids are the catalogue ids persisted alongside each modifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Closed set of bonus categories a modifier can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierType {
    Alchemical,
    Armor,
    Circumstance,
    Competence,
    Deflection,
    Dodge,
    Enhancement,
    Inherent,
    Insight,
    Luck,
    Morale,
    Natural,
    Profane,
    Racial,
    Resistance,
    Sacred,
    Shield,
    Size,
    Trait,
    Untyped,
}

impl ModifierType {
    pub const ALL: [ModifierType; 20] = [
        ModifierType::Alchemical,
        ModifierType::Armor,
        ModifierType::Circumstance,
        ModifierType::Competence,
        ModifierType::Deflection,
        ModifierType::Dodge,
        ModifierType::Enhancement,
        ModifierType::Inherent,
        ModifierType::Insight,
        ModifierType::Luck,
        ModifierType::Morale,
        ModifierType::Natural,
        ModifierType::Profane,
        ModifierType::Racial,
        ModifierType::Resistance,
        ModifierType::Sacred,
        ModifierType::Shield,
        ModifierType::Size,
        ModifierType::Trait,
        ModifierType::Untyped,
    ];

    /// Catalogue id (1-based, alphabetical).
    pub fn id(self) -> i64 {
        match self {
            Self::Alchemical => 1,
            Self::Armor => 2,
            Self::Circumstance => 3,
            Self::Competence => 4,
            Self::Deflection => 5,
            Self::Dodge => 6,
            Self::Enhancement => 7,
            Self::Inherent => 8,
            Self::Insight => 9,
            Self::Luck => 10,
            Self::Morale => 11,
            Self::Natural => 12,
            Self::Profane => 13,
            Self::Racial => 14,
            Self::Resistance => 15,
            Self::Sacred => 16,
            Self::Shield => 17,
            Self::Size => 18,
            Self::Trait => 19,
            Self::Untyped => 20,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Alchemical => "Alchemical",
            Self::Armor => "Armor",
            Self::Circumstance => "Circumstance",
            Self::Competence => "Competence",
            Self::Deflection => "Deflection",
            Self::Dodge => "Dodge",
            Self::Enhancement => "Enhancement",
            Self::Inherent => "Inherent",
            Self::Insight => "Insight",
            Self::Luck => "Luck",
            Self::Morale => "Morale",
            Self::Natural => "Natural Armor",
            Self::Profane => "Profane",
            Self::Racial => "Racial",
            Self::Resistance => "Resistance",
            Self::Sacred => "Sacred",
            Self::Shield => "Shield",
            Self::Size => "Size",
            Self::Trait => "Trait",
            Self::Untyped => "Untyped",
        }
    }

    /// Whether every bonus of this category adds up.
    ///
    /// Only Circumstance, Dodge and Untyped bonuses stack; every other
    /// category counts its single largest value.
    pub fn stacks(self) -> bool {
        matches!(self, Self::Circumstance | Self::Dodge | Self::Untyped)
    }
}

impl TryFrom<i64> for ModifierType {
    type Error = DomainError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or_else(|| DomainError::parse(format!("Unknown modifier type: {id}")))
    }
}

impl fmt::Display for ModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
