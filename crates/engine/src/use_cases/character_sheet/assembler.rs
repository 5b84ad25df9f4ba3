//! Read path: load a character graph and derive its sheet.

use tavern_domain::{CharacterGraph, CharacterId, SheetView};

use super::bootstrap::{attribute_commit_failure, ensure_tracked};
use super::{finish, CharacterSheetError};
use crate::infrastructure::ports::{SheetStore, SheetTransaction};

/// Compute the full Pathfinder 1e sheet of a character.
///
/// Creates the extension record first if it is missing; that creation is
/// committed together with the read or not at all, and a failed commit of it
/// surfaces as `Bootstrap`.
pub async fn compute_sheet(
    store: &dyn SheetStore,
    character_id: CharacterId,
) -> Result<SheetView, CharacterSheetError> {
    let mut tx = store.begin().await?;
    let result = load_graph(tx.as_mut(), character_id).await;
    let created = matches!(result, Ok((_, true)));
    let graph = finish(tx, result.map(|(graph, _)| graph))
        .await
        .map_err(|e| attribute_commit_failure(e, created))?;

    let sheet = graph.into_sheet();
    tracing::debug!(
        character_id = %character_id,
        total_level = sheet.total_level,
        skills = sheet.skills.len(),
        "Computed character sheet"
    );
    Ok(sheet)
}

async fn load_graph(
    tx: &mut dyn SheetTransaction,
    character_id: CharacterId,
) -> Result<(CharacterGraph, bool), CharacterSheetError> {
    let (record, created) = ensure_tracked(tx, character_id).await?;

    let statistics = tx.get_statistics(record.statistics_id).await?;
    let features = tx.get_features(record.features_id).await?;
    let race_source = match tx.get_race(record.race_id).await? {
        Some(race) => tx.get_source(race.source_id).await?,
        None => None,
    };

    let graph = CharacterGraph {
        statistics,
        features,
        race_source,
        deity: tx.first_deity(character_id).await?,
        classes: tx.list_class_assignments(character_id).await?,
        modifiers: tx.list_modifiers(character_id).await?,
        skills: tx.list_skill_assignments(character_id).await?,
        record,
    };
    Ok((graph, created))
}
