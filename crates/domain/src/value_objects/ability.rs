//! Ability value object - the six base ability scores of a d20 character.
//!
//! Provides type safety for ability references instead of using magic strings like "str", "dex".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the six base abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Strength - physical power
    Str,
    /// Dexterity - agility and reflexes
    Dex,
    /// Constitution - endurance and health
    Con,
    /// Intelligence - reasoning and memory
    Int,
    /// Wisdom - perception and insight
    Wis,
    /// Charisma - force of personality
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];

    /// Returns the short lowercase key used on the sheet (e.g., "str", "dex").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Dex => "dex",
            Self::Con => "con",
            Self::Int => "int",
            Self::Wis => "wis",
            Self::Cha => "cha",
        }
    }

    /// Returns the full name of the ability (e.g., "Strength", "Dexterity").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    /// Name of the edit field carrying this ability's score (e.g., "str_score").
    pub fn score_field(&self) -> &'static str {
        match self {
            Self::Str => "str_score",
            Self::Dex => "dex_score",
            Self::Con => "con_score",
            Self::Int => "int_score",
            Self::Wis => "wis_score",
            Self::Cha => "cha_score",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    /// Accepts short keys and full names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Str),
            "dex" | "dexterity" => Ok(Self::Dex),
            "con" | "constitution" => Ok(Self::Con),
            "int" | "intelligence" => Ok(Self::Int),
            "wis" | "wisdom" => Ok(Self::Wis),
            "cha" | "charisma" => Ok(Self::Cha),
            other => Err(DomainError::parse(format!("Unknown ability: {other}"))),
        }
    }
}
