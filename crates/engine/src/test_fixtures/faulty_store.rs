//! Store decorator that fails one chosen step.

use async_trait::async_trait;
use tavern_domain::{
    BaseCharacter, CharacterId, CharacterRecord, ClassAssignment, Deity, DescriptiveFeatures,
    FeaturesId, Game, GameId, Modifier, Race, RaceId, SkillAssignment, SkillDefinition, SkillId,
    Source, SourceId, Statistics, StatisticsId,
};

use crate::infrastructure::ports::{RepoError, SheetStore, SheetTransaction};
use crate::infrastructure::sqlite::SqliteSheetStore;

const INJECTED: &str = "injected fault";

/// Step at which a [`FaultyStore`] transaction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Every write succeeds, then commit fails and everything is rolled back.
    Commit,
    /// Bootstrap fails after features (and possibly source and race) were written.
    InsertStatistics,
    UpdateFeatures,
}

/// Real SQLite store whose transactions fail at one [`Fault`].
pub struct FaultyStore {
    inner: SqliteSheetStore,
    fault: Fault,
}

impl FaultyStore {
    pub fn new(inner: SqliteSheetStore, fault: Fault) -> Self {
        Self { inner, fault }
    }
}

#[async_trait]
impl SheetStore for FaultyStore {
    async fn begin(&self) -> Result<Box<dyn SheetTransaction>, RepoError> {
        Ok(Box::new(FaultyTransaction {
            inner: self.inner.begin().await?,
            fault: self.fault,
        }))
    }
}

struct FaultyTransaction {
    inner: Box<dyn SheetTransaction>,
    fault: Fault,
}

impl FaultyTransaction {
    fn check(&self, step: Fault, operation: &'static str) -> Result<(), RepoError> {
        if self.fault == step {
            return Err(RepoError::database(operation, INJECTED));
        }
        Ok(())
    }
}

#[async_trait]
impl SheetTransaction for FaultyTransaction {
    async fn get_base_character(
        &mut self,
        id: CharacterId,
    ) -> Result<Option<BaseCharacter>, RepoError> {
        self.inner.get_base_character(id).await
    }

    async fn get_game(&mut self, id: GameId) -> Result<Option<Game>, RepoError> {
        self.inner.get_game(id).await
    }

    async fn get_record(&mut self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        self.inner.get_record(id).await
    }

    async fn insert_record(&mut self, record: &CharacterRecord) -> Result<(), RepoError> {
        self.inner.insert_record(record).await
    }

    async fn update_record(&mut self, record: &CharacterRecord) -> Result<(), RepoError> {
        self.inner.update_record(record).await
    }

    async fn get_statistics(&mut self, id: StatisticsId) -> Result<Option<Statistics>, RepoError> {
        self.inner.get_statistics(id).await
    }

    async fn insert_statistics(&mut self, stats: &Statistics) -> Result<StatisticsId, RepoError> {
        self.check(Fault::InsertStatistics, "insert_statistics")?;
        self.inner.insert_statistics(stats).await
    }

    async fn update_statistics(
        &mut self,
        id: StatisticsId,
        stats: &Statistics,
    ) -> Result<(), RepoError> {
        self.inner.update_statistics(id, stats).await
    }

    async fn get_features(
        &mut self,
        id: FeaturesId,
    ) -> Result<Option<DescriptiveFeatures>, RepoError> {
        self.inner.get_features(id).await
    }

    async fn insert_features(
        &mut self,
        features: &DescriptiveFeatures,
    ) -> Result<FeaturesId, RepoError> {
        self.inner.insert_features(features).await
    }

    async fn update_features(
        &mut self,
        id: FeaturesId,
        features: &DescriptiveFeatures,
    ) -> Result<(), RepoError> {
        self.check(Fault::UpdateFeatures, "update_features")?;
        self.inner.update_features(id, features).await
    }

    async fn get_source(&mut self, id: SourceId) -> Result<Option<Source>, RepoError> {
        self.inner.get_source(id).await
    }

    async fn find_source_by_name(&mut self, name: &str) -> Result<Option<Source>, RepoError> {
        self.inner.find_source_by_name(name).await
    }

    async fn first_source(&mut self) -> Result<Option<Source>, RepoError> {
        self.inner.first_source().await
    }

    async fn insert_source(
        &mut self,
        name: &str,
        core_source_id: i64,
    ) -> Result<Source, RepoError> {
        self.inner.insert_source(name, core_source_id).await
    }

    async fn get_race(&mut self, id: RaceId) -> Result<Option<Race>, RepoError> {
        self.inner.get_race(id).await
    }

    async fn first_race_for_source(
        &mut self,
        source_id: SourceId,
    ) -> Result<Option<Race>, RepoError> {
        self.inner.first_race_for_source(source_id).await
    }

    async fn first_race(&mut self) -> Result<Option<Race>, RepoError> {
        self.inner.first_race().await
    }

    async fn insert_race(&mut self, source_id: SourceId) -> Result<Race, RepoError> {
        self.inner.insert_race(source_id).await
    }

    async fn get_skill(&mut self, id: SkillId) -> Result<Option<SkillDefinition>, RepoError> {
        self.inner.get_skill(id).await
    }

    async fn list_class_assignments(
        &mut self,
        id: CharacterId,
    ) -> Result<Vec<ClassAssignment>, RepoError> {
        self.inner.list_class_assignments(id).await
    }

    async fn list_modifiers(&mut self, id: CharacterId) -> Result<Vec<Modifier>, RepoError> {
        self.inner.list_modifiers(id).await
    }

    async fn list_skill_assignments(
        &mut self,
        id: CharacterId,
    ) -> Result<Vec<SkillAssignment>, RepoError> {
        self.inner.list_skill_assignments(id).await
    }

    async fn first_deity(&mut self, id: CharacterId) -> Result<Option<Deity>, RepoError> {
        self.inner.first_deity(id).await
    }

    async fn insert_skill_assignment(
        &mut self,
        id: CharacterId,
        skill_id: SkillId,
        ranks: i32,
        class_skill: bool,
    ) -> Result<(), RepoError> {
        self.inner
            .insert_skill_assignment(id, skill_id, ranks, class_skill)
            .await
    }

    async fn update_skill_assignment(
        &mut self,
        id: CharacterId,
        skill_id: SkillId,
        ranks: i32,
        class_skill: bool,
    ) -> Result<(), RepoError> {
        self.inner
            .update_skill_assignment(id, skill_id, ranks, class_skill)
            .await
    }

    async fn commit(&mut self) -> Result<(), RepoError> {
        if self.fault == Fault::Commit {
            self.inner.rollback().await?;
            return Err(RepoError::database("commit", INJECTED));
        }
        self.inner.commit().await
    }

    async fn rollback(&mut self) -> Result<(), RepoError> {
        self.inner.rollback().await
    }
}
