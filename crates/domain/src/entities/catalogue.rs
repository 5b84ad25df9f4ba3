//! Rule-system catalogue rows shared by every character.

use serde::{Deserialize, Serialize};

use crate::ids::{DeityId, GameId, RaceId, SourceId};

/// Name of the source every default race is attached to.
pub const CORE_RULEBOOK: &str = "Core Rulebook";

/// A published rulebook or supplement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    /// Id of the matching source in the system-agnostic catalogue.
    pub core_source_id: i64,
}

/// A playable race. Races are labelled on the sheet by their source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub source_id: SourceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deity {
    pub id: DeityId,
    pub name: String,
    pub alignment: String,
    pub source_id: SourceId,
}

/// A campaign. Owned by the surrounding game system; read here only to pick
/// the rules module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub system_id: i64,
}
