//! Derived character sheet returned to callers.
//!
//! Everything here is computed on read; none of it is persisted.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// One ability score with its modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeView {
    pub key: String,
    pub name: String,
    pub score: i32,
    #[serde(rename = "mod")]
    pub modifier: i32,
}

/// One saving throw and its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveView {
    pub key: String,
    pub name: String,
    pub total: i32,
    pub base: i32,
    pub ability: i32,
    /// Resistance bonus.
    pub magic: i32,
    pub misc: i32,
}

/// One skill line. `key` is `skill_<id>` so edits can address it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillView {
    pub key: String,
    pub name: String,
    pub ability: String,
    pub is_class: bool,
    pub ranks: i32,
    pub misc: i32,
    pub total: i32,
}

impl SkillView {
    /// Placeholder line for characters without skills.
    pub fn none() -> Self {
        Self {
            key: "none".to_string(),
            name: "No Skills".to_string(),
            ability: "int".to_string(),
            is_class: false,
            ranks: 0,
            misc: 0,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesView {
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub eyes: String,
    pub hair: String,
}

/// Complete derived sheet of one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetView {
    pub character_id: CharacterId,
    pub name: String,
    pub player: String,
    pub race: String,
    pub alignment: String,
    pub deity: String,

    pub attributes: Vec<AttributeView>,
    #[serde(flatten)]
    pub features: FeaturesView,

    pub hp_total: i32,
    pub hp_current: i32,
    pub hp_nonlethal: i32,

    pub class_level: String,
    pub total_level: i32,
    pub bab: i32,

    pub ac_total: i32,
    pub ac_touch: i32,
    pub ac_flat: i32,
    pub initiative: i32,

    pub saves: Vec<SaveView>,
    pub cmb: i32,
    pub cmd: i32,

    pub skills: Vec<SkillView>,
    pub weapons: Vec<String>,
}

impl SheetView {
    pub fn attribute(&self, key: &str) -> Option<&AttributeView> {
        self.attributes.iter().find(|a| a.key == key)
    }

    pub fn save(&self, key: &str) -> Option<&SaveView> {
        self.saves.iter().find(|s| s.key == key)
    }

    pub fn skill(&self, key: &str) -> Option<&SkillView> {
        self.skills.iter().find(|s| s.key == key)
    }
}
