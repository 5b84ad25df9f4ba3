//! Lazy creation of the Pathfinder 1e extension record.

use tavern_domain::{
    BaseCharacter, CharacterId, CharacterRecord, DescriptiveFeatures, Race, Source, SourceId,
    Statistics, CORE_RULEBOOK,
};

use super::CharacterSheetError;
use crate::infrastructure::ports::{RepoError, SheetTransaction};

/// Source tried first when picking a default race.
const PREFERRED_SOURCE_ID: SourceId = SourceId::new(1);
/// Core catalogue id given to a Core Rulebook source created here.
const CORE_CATALOGUE_SOURCE_ID: i64 = 1;

/// Return the character's extension record, creating it with defaults if absent.
///
/// Runs inside the caller's transaction, so a rollback there removes every
/// row written here. Fails with `CharacterNotFound` when the base character
/// does not exist and with `Bootstrap` when any creation step fails.
pub async fn ensure_extension_record(
    tx: &mut dyn SheetTransaction,
    character_id: CharacterId,
) -> Result<CharacterRecord, CharacterSheetError> {
    ensure_tracked(tx, character_id)
        .await
        .map(|(record, _)| record)
}

/// Like [`ensure_extension_record`], also reporting whether the record was
/// created in this transaction.
pub(super) async fn ensure_tracked(
    tx: &mut dyn SheetTransaction,
    character_id: CharacterId,
) -> Result<(CharacterRecord, bool), CharacterSheetError> {
    if let Some(record) = tx
        .get_record(character_id)
        .await
        .map_err(CharacterSheetError::Bootstrap)?
    {
        return Ok((record, false));
    }

    let base = tx
        .get_base_character(character_id)
        .await
        .map_err(CharacterSheetError::Bootstrap)?
        .ok_or(CharacterSheetError::CharacterNotFound(character_id))?;

    let record = create_defaults(tx, &base)
        .await
        .map_err(CharacterSheetError::Bootstrap)?;
    Ok((record, true))
}

/// A failed commit loses a record created in the same transaction, so it is
/// reported as a bootstrap failure.
pub(super) fn attribute_commit_failure(
    err: CharacterSheetError,
    created: bool,
) -> CharacterSheetError {
    match err {
        CharacterSheetError::Persistence(cause) if created => CharacterSheetError::Bootstrap(cause),
        other => other,
    }
}

async fn create_defaults(
    tx: &mut dyn SheetTransaction,
    base: &BaseCharacter,
) -> Result<CharacterRecord, RepoError> {
    let source = default_source(tx).await?;
    let race = default_race(tx, &source).await?;

    let features_id = tx.insert_features(&DescriptiveFeatures::default()).await?;
    let statistics_id = tx.insert_statistics(&Statistics::default()).await?;

    let record = CharacterRecord::new(base, race.id, statistics_id, features_id);
    tx.insert_record(&record).await?;

    tracing::info!(
        character_id = %base.id,
        race_id = %race.id,
        source = %source.name,
        "Created default Pathfinder character data"
    );
    Ok(record)
}

/// Preferred id, then the Core Rulebook by name, then any source, then a new one.
async fn default_source(tx: &mut dyn SheetTransaction) -> Result<Source, RepoError> {
    if let Some(source) = tx.get_source(PREFERRED_SOURCE_ID).await? {
        return Ok(source);
    }
    if let Some(source) = tx.find_source_by_name(CORE_RULEBOOK).await? {
        return Ok(source);
    }
    if let Some(source) = tx.first_source().await? {
        return Ok(source);
    }
    tracing::debug!("No rule sources found, creating {}", CORE_RULEBOOK);
    tx.insert_source(CORE_RULEBOOK, CORE_CATALOGUE_SOURCE_ID)
        .await
}

async fn default_race(tx: &mut dyn SheetTransaction, source: &Source) -> Result<Race, RepoError> {
    if let Some(race) = tx.first_race_for_source(source.id).await? {
        return Ok(race);
    }
    if let Some(race) = tx.first_race().await? {
        return Ok(race);
    }
    tracing::debug!(source_id = %source.id, "No races found, creating one");
    tx.insert_race(source.id).await
}
