//! Skill catalogue entries and per-character skill ranks.

use serde::{Deserialize, Serialize};

use crate::ids::SkillId;
use crate::value_objects::Ability;

/// A skill from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub description: String,
    /// Governing ability, when the catalogue states one explicitly.
    pub ability: Option<Ability>,
}

impl SkillDefinition {
    pub fn new(id: SkillId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            ability: None,
        }
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }
}

/// Ranks a character has put into one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAssignment {
    pub skill: SkillDefinition,
    pub ranks: i32,
    pub class_skill: bool,
}
