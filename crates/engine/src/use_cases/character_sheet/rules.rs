//! Rules modules: one per supported rule system.

use std::sync::Arc;

use async_trait::async_trait;
use tavern_domain::{CharacterId, RuleSystem, SheetView};

use super::editor::EditOutcome;
use super::fields::EditFields;
use super::{assembler, editor, CharacterSheetError};
use crate::infrastructure::ports::SheetStore;

/// The two sheet operations every rule system provides.
#[async_trait]
pub trait RulesModule: Send + Sync {
    fn system(&self) -> RuleSystem;

    async fn compute_sheet(
        &self,
        character_id: CharacterId,
    ) -> Result<SheetView, CharacterSheetError>;

    async fn apply_edit(&self, character_id: CharacterId, fields: &EditFields) -> EditOutcome;
}

/// Pathfinder 1st Edition.
pub struct Pathfinder1Rules {
    store: Arc<dyn SheetStore>,
}

impl Pathfinder1Rules {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RulesModule for Pathfinder1Rules {
    fn system(&self) -> RuleSystem {
        RuleSystem::Pathfinder1
    }

    async fn compute_sheet(
        &self,
        character_id: CharacterId,
    ) -> Result<SheetView, CharacterSheetError> {
        assembler::compute_sheet(self.store.as_ref(), character_id).await
    }

    async fn apply_edit(&self, character_id: CharacterId, fields: &EditFields) -> EditOutcome {
        editor::apply_edit(self.store.as_ref(), character_id, fields).await
    }
}
