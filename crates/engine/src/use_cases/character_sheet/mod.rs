//! Character sheet use cases.
//!
//! Computes derived sheets and applies edits, dispatching to the rules module
//! of the requested (or game-configured) rule system. Every operation runs in
//! exactly one store transaction.

mod assembler;
mod bootstrap;
mod editor;
mod error;
mod fields;
mod rules;

pub use bootstrap::ensure_extension_record;
pub use editor::{EditOutcome, SAVED_MESSAGE};
pub use error::CharacterSheetError;
pub use fields::{EditFields, SkillEdit};
pub use rules::{Pathfinder1Rules, RulesModule};

use std::sync::Arc;

use tavern_domain::{CharacterId, GameId, RuleSystem, SheetView};

use crate::infrastructure::ports::{SheetStore, SheetTransaction};

/// Commit on success, roll back on failure.
pub(crate) async fn finish<T>(
    mut tx: Box<dyn SheetTransaction>,
    result: Result<T, CharacterSheetError>,
) -> Result<T, CharacterSheetError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, "Rollback failed");
            }
            tracing::debug!(error = %err, "Rolled back sheet transaction");
            Err(err)
        }
    }
}

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    store: Arc<dyn SheetStore>,
    pathfinder1: Pathfinder1Rules,
}

impl CharacterSheetUseCases {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            pathfinder1: Pathfinder1Rules::new(store.clone()),
            store,
        }
    }

    fn rules(&self, system: RuleSystem) -> &dyn RulesModule {
        match system {
            RuleSystem::Pathfinder1 => &self.pathfinder1,
        }
    }

    pub async fn compute_sheet(
        &self,
        system: RuleSystem,
        character_id: CharacterId,
    ) -> Result<SheetView, CharacterSheetError> {
        self.rules(system).compute_sheet(character_id).await
    }

    pub async fn apply_edit(
        &self,
        system: RuleSystem,
        character_id: CharacterId,
        fields: &EditFields,
    ) -> EditOutcome {
        self.rules(system).apply_edit(character_id, fields).await
    }

    /// Rule system configured on a game.
    pub async fn system_for_game(
        &self,
        game_id: GameId,
    ) -> Result<RuleSystem, CharacterSheetError> {
        let mut tx = self.store.begin().await?;
        let result = match tx.get_game(game_id).await {
            Ok(Some(game)) => Ok(game),
            Ok(None) => Err(CharacterSheetError::GameNotFound(game_id)),
            Err(e) => Err(e.into()),
        };
        let game = finish(tx, result).await?;
        RuleSystem::from_system_id(game.system_id)
            .map_err(|_| CharacterSheetError::UnsupportedSystem(game.system_id))
    }

    pub async fn compute_sheet_for_game(
        &self,
        game_id: GameId,
        character_id: CharacterId,
    ) -> Result<SheetView, CharacterSheetError> {
        let system = self.system_for_game(game_id).await?;
        self.compute_sheet(system, character_id).await
    }

    pub async fn apply_edit_for_game(
        &self,
        game_id: GameId,
        character_id: CharacterId,
        fields: &EditFields,
    ) -> EditOutcome {
        match self.system_for_game(game_id).await {
            Ok(system) => self.apply_edit(system, character_id, fields).await,
            Err(e) => {
                tracing::warn!(
                    game_id = %game_id,
                    error = %e,
                    "Cannot resolve rule system for edit"
                );
                EditOutcome::failed(&e)
            }
        }
    }
}
