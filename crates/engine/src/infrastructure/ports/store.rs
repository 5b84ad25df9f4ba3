//! Transactional sheet storage.
//!
//! Every sheet operation runs inside exactly one [`SheetTransaction`]: reads and
//! writes go through it and nothing is visible to other callers until `commit`.

use async_trait::async_trait;
use tavern_domain::{
    BaseCharacter, CharacterId, CharacterRecord, ClassAssignment, Deity, DescriptiveFeatures,
    FeaturesId, Game, GameId, Modifier, Race, RaceId, SkillAssignment, SkillDefinition, SkillId,
    Source, SourceId, Statistics, StatisticsId,
};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Open a new unit of work.
    async fn begin(&self) -> Result<Box<dyn SheetTransaction>, RepoError>;
}

/// One open unit of work.
///
/// Dropping a transaction without calling `commit` discards its writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetTransaction: Send {
    // =========================================================================
    // Identity layer (read-only)
    // =========================================================================

    async fn get_base_character(
        &mut self,
        id: CharacterId,
    ) -> Result<Option<BaseCharacter>, RepoError>;
    async fn get_game(&mut self, id: GameId) -> Result<Option<Game>, RepoError>;

    // =========================================================================
    // Extension record
    // =========================================================================

    async fn get_record(&mut self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError>;
    async fn insert_record(&mut self, record: &CharacterRecord) -> Result<(), RepoError>;
    async fn update_record(&mut self, record: &CharacterRecord) -> Result<(), RepoError>;

    async fn get_statistics(&mut self, id: StatisticsId) -> Result<Option<Statistics>, RepoError>;
    async fn insert_statistics(&mut self, stats: &Statistics) -> Result<StatisticsId, RepoError>;
    async fn update_statistics(
        &mut self,
        id: StatisticsId,
        stats: &Statistics,
    ) -> Result<(), RepoError>;

    async fn get_features(
        &mut self,
        id: FeaturesId,
    ) -> Result<Option<DescriptiveFeatures>, RepoError>;
    async fn insert_features(
        &mut self,
        features: &DescriptiveFeatures,
    ) -> Result<FeaturesId, RepoError>;
    async fn update_features(
        &mut self,
        id: FeaturesId,
        features: &DescriptiveFeatures,
    ) -> Result<(), RepoError>;

    // =========================================================================
    // Catalogue
    // =========================================================================

    async fn get_source(&mut self, id: SourceId) -> Result<Option<Source>, RepoError>;
    async fn find_source_by_name(&mut self, name: &str) -> Result<Option<Source>, RepoError>;
    /// Any source, lowest id first.
    async fn first_source(&mut self) -> Result<Option<Source>, RepoError>;
    async fn insert_source(&mut self, name: &str, core_source_id: i64)
        -> Result<Source, RepoError>;

    async fn get_race(&mut self, id: RaceId) -> Result<Option<Race>, RepoError>;
    async fn first_race_for_source(
        &mut self,
        source_id: SourceId,
    ) -> Result<Option<Race>, RepoError>;
    /// Any race, lowest id first.
    async fn first_race(&mut self) -> Result<Option<Race>, RepoError>;
    async fn insert_race(&mut self, source_id: SourceId) -> Result<Race, RepoError>;

    async fn get_skill(&mut self, id: SkillId) -> Result<Option<SkillDefinition>, RepoError>;

    // =========================================================================
    // Per-character relations
    // =========================================================================

    async fn list_class_assignments(
        &mut self,
        id: CharacterId,
    ) -> Result<Vec<ClassAssignment>, RepoError>;
    async fn list_modifiers(&mut self, id: CharacterId) -> Result<Vec<Modifier>, RepoError>;
    async fn list_skill_assignments(
        &mut self,
        id: CharacterId,
    ) -> Result<Vec<SkillAssignment>, RepoError>;
    /// First linked deity, lowest link id first.
    async fn first_deity(&mut self, id: CharacterId) -> Result<Option<Deity>, RepoError>;

    async fn insert_skill_assignment(
        &mut self,
        id: CharacterId,
        skill_id: SkillId,
        ranks: i32,
        class_skill: bool,
    ) -> Result<(), RepoError>;
    async fn update_skill_assignment(
        &mut self,
        id: CharacterId,
        skill_id: SkillId,
        ranks: i32,
        class_skill: bool,
    ) -> Result<(), RepoError>;

    // =========================================================================
    // Completion
    // =========================================================================

    async fn commit(&mut self) -> Result<(), RepoError>;
    async fn rollback(&mut self) -> Result<(), RepoError>;
}
