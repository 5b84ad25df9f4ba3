//! Tavern domain: character sheet types and rule-system derivation.
//!
//! No I/O lives here. The engine loads raw rows, this crate derives sheets.

pub mod character_sheet;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use entities::{
    BaseCharacter, CharacterRecord, ClassAssignment, ClassDefinition, ClassProgression, Deity,
    DescriptiveFeatures, Game, Modifier, Race, SkillAssignment, SkillDefinition, Source,
    Statistics, CORE_RULEBOOK, DEFAULT_ABILITY_SCORE, DEFAULT_ALIGNMENT,
};

pub use error::DomainError;

pub use game_systems::pathfinder1::{self, CharacterGraph, LevelSummary};
pub use game_systems::RuleSystem;

pub use character_sheet::{AttributeView, FeaturesView, SaveView, SheetView, SkillView};

pub use ids::{
    CharacterId, ClassId, DeityId, FeaturesId, GameId, ModifierId, RaceId, SkillId, SourceId,
    StatisticsId,
};

pub use value_objects::{Ability, BabProgression, ModifierType, SaveProgression};
