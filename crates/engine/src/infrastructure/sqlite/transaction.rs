//! SQLite unit of work.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqliteConnection, Transaction};
use tavern_domain::{
    Ability, BabProgression, BaseCharacter, CharacterId, CharacterRecord, ClassAssignment,
    ClassDefinition, ClassId, ClassProgression, Deity, DeityId, DescriptiveFeatures, FeaturesId,
    Game, GameId, Modifier, ModifierId, ModifierType, Race, RaceId, SaveProgression,
    SkillAssignment, SkillDefinition, SkillId, Source, SourceId, Statistics, StatisticsId,
};

use crate::infrastructure::ports::{RepoError, SheetTransaction};

const STATISTICS_COLUMNS: &str = "max_hp, lethal_dmg, non_lethal_dmg, base_strength, \
     base_dexterity, base_constitution, base_intelligence, base_wisdom, base_charisma";

/// Wraps one `sqlx` transaction. After `commit` or `rollback` every call
/// fails with [`RepoError::TransactionFinished`].
pub struct SqliteSheetTransaction {
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SqliteSheetTransaction {
    pub fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx: Some(tx) }
    }

    fn conn(&mut self) -> Result<&mut SqliteConnection, RepoError> {
        self.tx.as_deref_mut().ok_or(RepoError::TransactionFinished)
    }
}

fn source_from_row(row: &SqliteRow) -> Result<Source, sqlx::Error> {
    Ok(Source {
        id: SourceId::new(row.try_get("source_id")?),
        name: row.try_get("name")?,
        core_source_id: row.try_get("core_source_id")?,
    })
}

fn race_from_row(row: &SqliteRow) -> Result<Race, sqlx::Error> {
    Ok(Race {
        id: RaceId::new(row.try_get("race_id")?),
        source_id: SourceId::new(row.try_get("source_id")?),
    })
}

fn statistics_from_row(row: &SqliteRow) -> Result<Statistics, sqlx::Error> {
    Ok(Statistics {
        max_hp: row.try_get("max_hp")?,
        lethal_dmg: row.try_get("lethal_dmg")?,
        non_lethal_dmg: row.try_get("non_lethal_dmg")?,
        base_strength: row.try_get("base_strength")?,
        base_dexterity: row.try_get("base_dexterity")?,
        base_constitution: row.try_get("base_constitution")?,
        base_intelligence: row.try_get("base_intelligence")?,
        base_wisdom: row.try_get("base_wisdom")?,
        base_charisma: row.try_get("base_charisma")?,
    })
}

fn features_from_row(row: &SqliteRow) -> Result<DescriptiveFeatures, sqlx::Error> {
    Ok(DescriptiveFeatures {
        age: row.try_get("age")?,
        gender: row.try_get("gender")?,
        height: row.try_get("height")?,
        weight: row.try_get("weight")?,
        hair: row.try_get("hair")?,
        eyes: row.try_get("eyes")?,
        skin: row.try_get("skin")?,
    })
}

fn skill_from_row(row: &SqliteRow) -> Result<SkillDefinition, sqlx::Error> {
    let id = SkillId::new(row.try_get("skill_id")?);
    let ability: Option<String> = row.try_get("ability")?;
    let ability = ability.and_then(|raw| match raw.parse::<Ability>() {
        Ok(ability) => Some(ability),
        Err(e) => {
            tracing::warn!(skill_id = %id, error = %e, "Ignoring unknown skill ability");
            None
        }
    });
    Ok(SkillDefinition {
        id,
        name: row.try_get("skill_name")?,
        description: row.try_get("description")?,
        ability,
    })
}

fn class_assignment_from_row(row: &SqliteRow) -> Result<ClassAssignment, sqlx::Error> {
    let class_id = ClassId::new(row.try_get("class_id")?);
    let class_name: Option<String> = row.try_get("class_name")?;
    let stats_id: Option<i64> = row.try_get("class_stats_id")?;

    let progression = match stats_id {
        Some(_) => {
            let bab: i64 = row.try_get("base_attack_cat")?;
            Some(ClassProgression {
                bab: BabProgression::from_category_id(bab),
                fortitude: SaveProgression::from_category_id(row.try_get("fortitude_save_cat")?),
                reflex: SaveProgression::from_category_id(row.try_get("reflex_save_cat")?),
                will: SaveProgression::from_category_id(row.try_get("will_save_cat")?),
            })
        }
        None => None,
    };

    Ok(ClassAssignment {
        class_id,
        level: row.try_get("class_level")?,
        main_class: row.try_get("main_class")?,
        class: class_name.map(|name| ClassDefinition {
            id: class_id,
            name,
            progression,
        }),
    })
}

#[async_trait]
impl SheetTransaction for SqliteSheetTransaction {
    async fn get_base_character(
        &mut self,
        id: CharacterId,
    ) -> Result<Option<BaseCharacter>, RepoError> {
        let row = sqlx::query("SELECT character_id, name FROM characters WHERE character_id = ?")
            .bind(id.get())
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("get_base_character", e))?;

        row.map(|row| -> Result<BaseCharacter, sqlx::Error> {
            Ok(BaseCharacter {
                id: CharacterId::new(row.try_get("character_id")?),
                name: row.try_get("name")?,
            })
        })
        .transpose()
        .map_err(|e| RepoError::database("get_base_character", e))
    }

    async fn get_game(&mut self, id: GameId) -> Result<Option<Game>, RepoError> {
        let row = sqlx::query("SELECT game_id, name, system_id FROM games WHERE game_id = ?")
            .bind(id.get())
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("get_game", e))?;

        row.map(|row| -> Result<Game, sqlx::Error> {
            Ok(Game {
                id: GameId::new(row.try_get("game_id")?),
                name: row.try_get("name")?,
                system_id: row.try_get("system_id")?,
            })
        })
        .transpose()
        .map_err(|e| RepoError::database("get_game", e))
    }

    async fn get_record(&mut self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT character_id, name, alignment, race_id, statistics_id, features_id
            FROM pf1_characters
            WHERE character_id = ?
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("get_record", e))?;

        row.map(|row| -> Result<CharacterRecord, sqlx::Error> {
            Ok(CharacterRecord {
                character_id: CharacterId::new(row.try_get("character_id")?),
                name: row.try_get("name")?,
                alignment: row.try_get("alignment")?,
                race_id: RaceId::new(row.try_get("race_id")?),
                statistics_id: StatisticsId::new(row.try_get("statistics_id")?),
                features_id: FeaturesId::new(row.try_get("features_id")?),
            })
        })
        .transpose()
        .map_err(|e| RepoError::database("get_record", e))
    }

    async fn insert_record(&mut self, record: &CharacterRecord) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO pf1_characters
                (character_id, name, alignment, race_id, statistics_id, features_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.character_id.get())
        .bind(&record.name)
        .bind(&record.alignment)
        .bind(record.race_id.get())
        .bind(record.statistics_id.get())
        .bind(record.features_id.get())
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("insert_record", e))?;
        Ok(())
    }

    async fn update_record(&mut self, record: &CharacterRecord) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE pf1_characters
            SET name = ?, alignment = ?, race_id = ?, statistics_id = ?, features_id = ?
            WHERE character_id = ?
            "#,
        )
        .bind(&record.name)
        .bind(&record.alignment)
        .bind(record.race_id.get())
        .bind(record.statistics_id.get())
        .bind(record.features_id.get())
        .bind(record.character_id.get())
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_record", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("CharacterRecord", record.character_id));
        }
        Ok(())
    }

    async fn get_statistics(&mut self, id: StatisticsId) -> Result<Option<Statistics>, RepoError> {
        let query = format!(
            "SELECT {STATISTICS_COLUMNS} FROM pf1_statistics WHERE statistics_id = ?"
        );
        let row = sqlx::query(&query)
            .bind(id.get())
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("get_statistics", e))?;

        row.as_ref()
            .map(statistics_from_row)
            .transpose()
            .map_err(|e| RepoError::database("get_statistics", e))
    }

    async fn insert_statistics(&mut self, stats: &Statistics) -> Result<StatisticsId, RepoError> {
        let query = format!(
            "INSERT INTO pf1_statistics ({STATISTICS_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        let result = sqlx::query(&query)
            .bind(stats.max_hp)
            .bind(stats.lethal_dmg)
            .bind(stats.non_lethal_dmg)
            .bind(stats.base_strength)
            .bind(stats.base_dexterity)
            .bind(stats.base_constitution)
            .bind(stats.base_intelligence)
            .bind(stats.base_wisdom)
            .bind(stats.base_charisma)
            .execute(self.conn()?)
            .await
            .map_err(|e| RepoError::database("insert_statistics", e))?;
        Ok(StatisticsId::new(result.last_insert_rowid()))
    }

    async fn update_statistics(
        &mut self,
        id: StatisticsId,
        stats: &Statistics,
    ) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE pf1_statistics
            SET max_hp = ?, lethal_dmg = ?, non_lethal_dmg = ?,
                base_strength = ?, base_dexterity = ?, base_constitution = ?,
                base_intelligence = ?, base_wisdom = ?, base_charisma = ?
            WHERE statistics_id = ?
            "#,
        )
        .bind(stats.max_hp)
        .bind(stats.lethal_dmg)
        .bind(stats.non_lethal_dmg)
        .bind(stats.base_strength)
        .bind(stats.base_dexterity)
        .bind(stats.base_constitution)
        .bind(stats.base_intelligence)
        .bind(stats.base_wisdom)
        .bind(stats.base_charisma)
        .bind(id.get())
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_statistics", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Statistics", id));
        }
        Ok(())
    }

    async fn get_features(
        &mut self,
        id: FeaturesId,
    ) -> Result<Option<DescriptiveFeatures>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT age, gender, height, weight, hair, eyes, skin
            FROM pf1_descriptive_features
            WHERE features_id = ?
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("get_features", e))?;

        row.as_ref()
            .map(features_from_row)
            .transpose()
            .map_err(|e| RepoError::database("get_features", e))
    }

    async fn insert_features(
        &mut self,
        features: &DescriptiveFeatures,
    ) -> Result<FeaturesId, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO pf1_descriptive_features (age, gender, height, weight, hair, eyes, skin)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(features.age)
        .bind(&features.gender)
        .bind(features.height)
        .bind(features.weight)
        .bind(&features.hair)
        .bind(&features.eyes)
        .bind(&features.skin)
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("insert_features", e))?;
        Ok(FeaturesId::new(result.last_insert_rowid()))
    }

    async fn update_features(
        &mut self,
        id: FeaturesId,
        features: &DescriptiveFeatures,
    ) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE pf1_descriptive_features
            SET age = ?, gender = ?, height = ?, weight = ?, hair = ?, eyes = ?, skin = ?
            WHERE features_id = ?
            "#,
        )
        .bind(features.age)
        .bind(&features.gender)
        .bind(features.height)
        .bind(features.weight)
        .bind(&features.hair)
        .bind(&features.eyes)
        .bind(&features.skin)
        .bind(id.get())
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_features", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("DescriptiveFeatures", id));
        }
        Ok(())
    }

    async fn get_source(&mut self, id: SourceId) -> Result<Option<Source>, RepoError> {
        let row = sqlx::query(
            "SELECT source_id, name, core_source_id FROM pf1_sources WHERE source_id = ?",
        )
        .bind(id.get())
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("get_source", e))?;

        row.as_ref()
            .map(source_from_row)
            .transpose()
            .map_err(|e| RepoError::database("get_source", e))
    }

    async fn find_source_by_name(&mut self, name: &str) -> Result<Option<Source>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT source_id, name, core_source_id FROM pf1_sources
            WHERE name = ?
            ORDER BY source_id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("find_source_by_name", e))?;

        row.as_ref()
            .map(source_from_row)
            .transpose()
            .map_err(|e| RepoError::database("find_source_by_name", e))
    }

    async fn first_source(&mut self) -> Result<Option<Source>, RepoError> {
        let row = sqlx::query(
            "SELECT source_id, name, core_source_id FROM pf1_sources ORDER BY source_id LIMIT 1",
        )
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("first_source", e))?;

        row.as_ref()
            .map(source_from_row)
            .transpose()
            .map_err(|e| RepoError::database("first_source", e))
    }

    async fn insert_source(
        &mut self,
        name: &str,
        core_source_id: i64,
    ) -> Result<Source, RepoError> {
        let result = sqlx::query("INSERT INTO pf1_sources (name, core_source_id) VALUES (?, ?)")
            .bind(name)
            .bind(core_source_id)
            .execute(self.conn()?)
            .await
            .map_err(|e| RepoError::database("insert_source", e))?;

        Ok(Source {
            id: SourceId::new(result.last_insert_rowid()),
            name: name.to_string(),
            core_source_id,
        })
    }

    async fn get_race(&mut self, id: RaceId) -> Result<Option<Race>, RepoError> {
        let row = sqlx::query("SELECT race_id, source_id FROM pf1_races WHERE race_id = ?")
            .bind(id.get())
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("get_race", e))?;

        row.as_ref()
            .map(race_from_row)
            .transpose()
            .map_err(|e| RepoError::database("get_race", e))
    }

    async fn first_race_for_source(
        &mut self,
        source_id: SourceId,
    ) -> Result<Option<Race>, RepoError> {
        let row = sqlx::query(
            "SELECT race_id, source_id FROM pf1_races WHERE source_id = ? ORDER BY race_id LIMIT 1",
        )
        .bind(source_id.get())
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("first_race_for_source", e))?;

        row.as_ref()
            .map(race_from_row)
            .transpose()
            .map_err(|e| RepoError::database("first_race_for_source", e))
    }

    async fn first_race(&mut self) -> Result<Option<Race>, RepoError> {
        let row = sqlx::query("SELECT race_id, source_id FROM pf1_races ORDER BY race_id LIMIT 1")
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("first_race", e))?;

        row.as_ref()
            .map(race_from_row)
            .transpose()
            .map_err(|e| RepoError::database("first_race", e))
    }

    async fn insert_race(&mut self, source_id: SourceId) -> Result<Race, RepoError> {
        let result = sqlx::query("INSERT INTO pf1_races (source_id) VALUES (?)")
            .bind(source_id.get())
            .execute(self.conn()?)
            .await
            .map_err(|e| RepoError::database("insert_race", e))?;

        Ok(Race {
            id: RaceId::new(result.last_insert_rowid()),
            source_id,
        })
    }

    async fn get_skill(&mut self, id: SkillId) -> Result<Option<SkillDefinition>, RepoError> {
        let row = sqlx::query(
            "SELECT skill_id, skill_name, description, ability FROM pf1_skills WHERE skill_id = ?",
        )
        .bind(id.get())
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("get_skill", e))?;

        row.as_ref()
            .map(skill_from_row)
            .transpose()
            .map_err(|e| RepoError::database("get_skill", e))
    }

    async fn list_class_assignments(
        &mut self,
        id: CharacterId,
    ) -> Result<Vec<ClassAssignment>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT cc.class_id, cc.class_level, cc.main_class,
                   c.class_name, cs.class_stats_id,
                   cs.base_attack_cat, cs.fortitude_save_cat, cs.reflex_save_cat, cs.will_save_cat
            FROM pf1_character_classes cc
            LEFT JOIN pf1_classes c ON c.class_id = cc.class_id
            LEFT JOIN pf1_class_stats cs ON cs.class_stats_id = c.class_stats_id
            WHERE cc.character_id = ?
            ORDER BY cc.id
            "#,
        )
        .bind(id.get())
        .fetch_all(self.conn()?)
        .await
        .map_err(|e| RepoError::database("list_class_assignments", e))?;

        rows.iter()
            .map(class_assignment_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::database("list_class_assignments", e))
    }

    async fn list_modifiers(&mut self, id: CharacterId) -> Result<Vec<Modifier>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT modifier_id, modifier_type_id, value, duration
            FROM pf1_modifiers
            WHERE character_id = ?
            ORDER BY modifier_id
            "#,
        )
        .bind(id.get())
        .fetch_all(self.conn()?)
        .await
        .map_err(|e| RepoError::database("list_modifiers", e))?;

        let mut modifiers = Vec::with_capacity(rows.len());
        for row in &rows {
            let read = || -> Result<(i64, i64, i32, Option<i32>), sqlx::Error> {
                Ok((
                    row.try_get("modifier_id")?,
                    row.try_get("modifier_type_id")?,
                    row.try_get("value")?,
                    row.try_get("duration")?,
                ))
            };
            let (modifier_id, type_id, value, duration) =
                read().map_err(|e| RepoError::database("list_modifiers", e))?;

            let Ok(modifier_type) = ModifierType::try_from(type_id) else {
                tracing::warn!(modifier_id, type_id, "Skipping modifier of unknown type");
                continue;
            };
            modifiers.push(Modifier {
                id: ModifierId::new(modifier_id),
                modifier_type,
                value,
                duration,
            });
        }
        Ok(modifiers)
    }

    async fn list_skill_assignments(
        &mut self,
        id: CharacterId,
    ) -> Result<Vec<SkillAssignment>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT s.skill_id, s.skill_name, s.description, s.ability,
                   cs.ranks, cs.class_skill
            FROM pf1_character_skills cs
            JOIN pf1_skills s ON s.skill_id = cs.skill_id
            WHERE cs.character_id = ?
            ORDER BY s.skill_id
            "#,
        )
        .bind(id.get())
        .fetch_all(self.conn()?)
        .await
        .map_err(|e| RepoError::database("list_skill_assignments", e))?;

        rows.iter()
            .map(|row| -> Result<SkillAssignment, sqlx::Error> {
                Ok(SkillAssignment {
                    skill: skill_from_row(row)?,
                    ranks: row.try_get("ranks")?,
                    class_skill: row.try_get("class_skill")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::database("list_skill_assignments", e))
    }

    async fn first_deity(&mut self, id: CharacterId) -> Result<Option<Deity>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT d.deity_id, d.deity_name, d.deity_alignment, d.source_id
            FROM pf1_character_deities cd
            JOIN pf1_deities d ON d.deity_id = cd.deity_id
            WHERE cd.character_id = ?
            ORDER BY cd.id
            LIMIT 1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("first_deity", e))?;

        row.map(|row| -> Result<Deity, sqlx::Error> {
            Ok(Deity {
                id: DeityId::new(row.try_get("deity_id")?),
                name: row.try_get("deity_name")?,
                alignment: row.try_get("deity_alignment")?,
                source_id: SourceId::new(row.try_get("source_id")?),
            })
        })
        .transpose()
        .map_err(|e| RepoError::database("first_deity", e))
    }

    async fn insert_skill_assignment(
        &mut self,
        id: CharacterId,
        skill_id: SkillId,
        ranks: i32,
        class_skill: bool,
    ) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT INTO pf1_character_skills (character_id, skill_id, ranks, class_skill) VALUES (?, ?, ?, ?)",
        )
        .bind(id.get())
        .bind(skill_id.get())
        .bind(ranks)
        .bind(class_skill)
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("insert_skill_assignment", e))?;
        Ok(())
    }

    async fn update_skill_assignment(
        &mut self,
        id: CharacterId,
        skill_id: SkillId,
        ranks: i32,
        class_skill: bool,
    ) -> Result<(), RepoError> {
        sqlx::query(
            "UPDATE pf1_character_skills SET ranks = ?, class_skill = ? WHERE character_id = ? AND skill_id = ?",
        )
        .bind(ranks)
        .bind(class_skill)
        .bind(id.get())
        .bind(skill_id.get())
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_skill_assignment", e))?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), RepoError> {
        let tx = self.tx.take().ok_or(RepoError::TransactionFinished)?;
        tx.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))
    }

    async fn rollback(&mut self) -> Result<(), RepoError> {
        let tx = self.tx.take().ok_or(RepoError::TransactionFinished)?;
        tx.rollback()
            .await
            .map_err(|e| RepoError::database("rollback", e))
    }
}
