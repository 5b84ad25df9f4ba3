//! Domain entities - Core business objects with identity

mod catalogue;
mod character;
mod class;
mod modifier;
mod skill;
mod statistics;

pub use catalogue::{Deity, Game, Race, Source, CORE_RULEBOOK};
pub use character::{BaseCharacter, CharacterRecord, DEFAULT_ALIGNMENT};
pub use class::{ClassAssignment, ClassDefinition, ClassProgression};
pub use modifier::Modifier;
pub use skill::{SkillAssignment, SkillDefinition};
pub use statistics::{DescriptiveFeatures, Statistics, DEFAULT_ABILITY_SCORE};
