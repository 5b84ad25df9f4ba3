//! Character identity and its rule-system extension record.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, FeaturesId, RaceId, StatisticsId};

/// Alignment given to freshly bootstrapped characters.
pub const DEFAULT_ALIGNMENT: &str = "N";

/// The system-agnostic character owned by the identity layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCharacter {
    pub id: CharacterId,
    pub name: String,
}

/// Pathfinder 1e elaboration of a [`BaseCharacter`].
///
/// Shares the base character's id. Exactly one statistics row and one
/// descriptive-features row belong to each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub character_id: CharacterId,
    pub name: String,
    pub alignment: String,
    pub race_id: RaceId,
    pub statistics_id: StatisticsId,
    pub features_id: FeaturesId,
}

impl CharacterRecord {
    pub fn new(
        base: &BaseCharacter,
        race_id: RaceId,
        statistics_id: StatisticsId,
        features_id: FeaturesId,
    ) -> Self {
        Self {
            character_id: base.id,
            name: base.name.clone(),
            alignment: DEFAULT_ALIGNMENT.to_string(),
            race_id,
            statistics_id,
            features_id,
        }
    }
}
