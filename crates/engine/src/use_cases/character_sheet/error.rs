//! Character sheet operation errors.

use crate::infrastructure::ports::RepoError;
use tavern_domain::{CharacterId, GameId};

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    /// No base character with this id exists.
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    /// No rules module is registered for the game's system id.
    #[error("Unsupported rule system: {0}")]
    UnsupportedSystem(i64),

    /// Creating the missing extension record failed; nothing was persisted.
    #[error("Pathfinder character data not found and could not be created: {0}")]
    Bootstrap(#[source] RepoError),

    #[error("Persistence error: {0}")]
    Persistence(#[source] RepoError),
}

impl From<RepoError> for CharacterSheetError {
    fn from(err: RepoError) -> Self {
        Self::Persistence(err)
    }
}
