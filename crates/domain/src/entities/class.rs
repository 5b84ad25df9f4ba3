//! Class definitions and per-character class levels.

use serde::{Deserialize, Serialize};

use crate::ids::ClassId;
use crate::value_objects::{BabProgression, SaveProgression};

/// Progression categories of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassProgression {
    /// `None` when the stored BAB category is not one of Fast/Medium/Slow.
    pub bab: Option<BabProgression>,
    pub fortitude: SaveProgression,
    pub reflex: SaveProgression,
    pub will: SaveProgression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub id: ClassId,
    pub name: String,
    pub progression: Option<ClassProgression>,
}

/// Levels a character holds in one class. Multiclassing is additive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub class_id: ClassId,
    pub level: i32,
    pub main_class: bool,
    /// Resolved definition; `None` if the catalogue row is missing.
    pub class: Option<ClassDefinition>,
}

impl ClassAssignment {
    pub fn new(class: ClassDefinition, level: i32) -> Self {
        Self {
            class_id: class.id,
            level,
            main_class: false,
            class: Some(class),
        }
    }

    pub fn main(mut self) -> Self {
        self.main_class = true;
        self
    }

    /// Display name, falling back to `Class <id>` for unresolved classes.
    pub fn class_name(&self) -> String {
        match &self.class {
            Some(class) => class.name.clone(),
            None => format!("Class {}", self.class_id),
        }
    }

    pub fn progression(&self) -> Option<ClassProgression> {
        self.class.as_ref().and_then(|c| c.progression)
    }
}
