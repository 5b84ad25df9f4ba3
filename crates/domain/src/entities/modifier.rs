//! Typed numeric modifiers attached to a character.

use serde::{Deserialize, Serialize};

use crate::ids::ModifierId;
use crate::value_objects::ModifierType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: ModifierId,
    pub modifier_type: ModifierType,
    pub value: i32,
    /// Remaining rounds, if the effect is temporary. Not used by aggregation.
    pub duration: Option<i32>,
}

impl Modifier {
    pub fn new(id: ModifierId, modifier_type: ModifierType, value: i32) -> Self {
        Self {
            id,
            modifier_type,
            value,
            duration: None,
        }
    }
}
