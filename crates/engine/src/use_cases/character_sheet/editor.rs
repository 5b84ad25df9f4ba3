//! Validated write path for Pathfinder 1e sheets.

use std::collections::HashSet;

use serde::Serialize;
use tavern_domain::CharacterId;

use super::bootstrap::{attribute_commit_failure, ensure_tracked};
use super::fields::{apply_features, apply_identity, apply_statistics, skill_edits, EditFields};
use super::{finish, CharacterSheetError};
use crate::infrastructure::ports::{RepoError, SheetStore, SheetTransaction};

pub const SAVED_MESSAGE: &str = "Character saved successfully";

/// Result of an edit as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    pub success: bool,
    pub message: String,
}

impl EditOutcome {
    pub fn saved() -> Self {
        Self {
            success: true,
            message: SAVED_MESSAGE.to_string(),
        }
    }

    pub fn failed(err: &CharacterSheetError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}

/// Apply `fields` to a character in one transaction.
///
/// Malformed single fields are absorbed; any store failure rolls back every
/// change, including a bootstrap performed by this call.
pub async fn apply_edit(
    store: &dyn SheetStore,
    character_id: CharacterId,
    fields: &EditFields,
) -> EditOutcome {
    match try_apply_edit(store, character_id, fields).await {
        Ok(()) => {
            tracing::info!(
                character_id = %character_id,
                fields = fields.len(),
                "Saved character sheet edit"
            );
            EditOutcome::saved()
        }
        Err(e) => {
            tracing::warn!(character_id = %character_id, error = %e, "Character sheet edit failed");
            EditOutcome::failed(&e)
        }
    }
}

async fn try_apply_edit(
    store: &dyn SheetStore,
    character_id: CharacterId,
    fields: &EditFields,
) -> Result<(), CharacterSheetError> {
    let mut tx = store.begin().await?;
    let result = write_edits(tx.as_mut(), character_id, fields).await;
    let created = matches!(result, Ok(true));
    finish(tx, result.map(|_| ()))
        .await
        .map_err(|e| attribute_commit_failure(e, created))
}

async fn write_edits(
    tx: &mut dyn SheetTransaction,
    character_id: CharacterId,
    fields: &EditFields,
) -> Result<bool, CharacterSheetError> {
    let (mut record, created) = ensure_tracked(tx, character_id).await?;

    if apply_identity(&mut record, fields) {
        tx.update_record(&record).await?;
    }

    let features = tx
        .get_features(record.features_id)
        .await?
        .ok_or_else(|| RepoError::not_found("DescriptiveFeatures", record.features_id))?;
    let mut edited = features.clone();
    apply_features(&mut edited, fields);
    if edited != features {
        tx.update_features(record.features_id, &edited).await?;
    }

    let stats = tx
        .get_statistics(record.statistics_id)
        .await?
        .ok_or_else(|| RepoError::not_found("Statistics", record.statistics_id))?;
    let mut edited = stats.clone();
    apply_statistics(&mut edited, fields);
    if edited != stats {
        tx.update_statistics(record.statistics_id, &edited).await?;
    }

    let edits = skill_edits(fields);
    if edits.is_empty() {
        return Ok(created);
    }

    let existing: HashSet<_> = tx
        .list_skill_assignments(character_id)
        .await?
        .into_iter()
        .map(|assignment| assignment.skill.id)
        .collect();

    for edit in edits {
        if existing.contains(&edit.skill_id) {
            tx.update_skill_assignment(character_id, edit.skill_id, edit.ranks, edit.class_skill)
                .await?;
        } else if tx.get_skill(edit.skill_id).await?.is_some() {
            tx.insert_skill_assignment(character_id, edit.skill_id, edit.ranks, edit.class_skill)
                .await?;
        } else {
            tracing::warn!(
                character_id = %character_id,
                skill_id = %edit.skill_id,
                "Skipping edit for unknown skill"
            );
        }
    }
    Ok(created)
}
