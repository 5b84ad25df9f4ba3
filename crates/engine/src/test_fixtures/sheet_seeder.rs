//! Direct SQL seeding of identity rows and per-character relations.
//!
//! The engine never writes games, base characters, class levels, modifiers or
//! deity links itself; tests create them here.

use sqlx::SqlitePool;
use tavern_domain::ModifierType;

use crate::infrastructure::sqlite::SqliteSheetStore;

pub struct SheetSeeder {
    pool: SqlitePool,
}

impl SheetSeeder {
    pub fn new(store: &SqliteSheetStore) -> Self {
        Self {
            pool: store.pool().clone(),
        }
    }

    pub async fn character(&self, id: i64, name: &str) {
        sqlx::query("INSERT INTO characters (character_id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await
            .expect("insert character");
    }

    pub async fn game(&self, id: i64, name: &str, system_id: i64) {
        sqlx::query("INSERT INTO games (game_id, name, system_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(system_id)
            .execute(&self.pool)
            .await
            .expect("insert game");
    }

    /// Give a bootstrapped character levels in a seeded class.
    pub async fn class_levels(&self, character_id: i64, class_name: &str, level: i32, main: bool) {
        let (class_id,): (i64,) =
            sqlx::query_as("SELECT class_id FROM pf1_classes WHERE class_name = ?")
                .bind(class_name)
                .fetch_one(&self.pool)
                .await
                .expect("class in catalogue");

        sqlx::query(
            "INSERT INTO pf1_character_classes (character_id, class_id, class_level, main_class) VALUES (?, ?, ?, ?)",
        )
        .bind(character_id)
        .bind(class_id)
        .bind(level)
        .bind(main)
        .execute(&self.pool)
        .await
        .expect("insert class levels");
    }

    pub async fn modifier(&self, character_id: i64, modifier_type: ModifierType, value: i32) {
        self.timed_modifier(character_id, modifier_type, value, None).await;
    }

    /// Modifier that lasts `rounds` rounds (`None` for permanent).
    pub async fn timed_modifier(
        &self,
        character_id: i64,
        modifier_type: ModifierType,
        value: i32,
        rounds: Option<i32>,
    ) {
        sqlx::query(
            "INSERT INTO pf1_modifiers (character_id, modifier_type_id, value, duration) VALUES (?, ?, ?, ?)",
        )
        .bind(character_id)
        .bind(modifier_type.id())
        .bind(value)
        .bind(rounds)
        .execute(&self.pool)
        .await
        .expect("insert modifier");
    }

    /// Catalogue source with an explicit id.
    pub async fn source(&self, id: i64, name: &str) {
        sqlx::query("INSERT INTO pf1_sources (source_id, name, core_source_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await
            .expect("insert source");
    }

    pub async fn race(&self, id: i64, source_id: i64) {
        sqlx::query("INSERT INTO pf1_races (race_id, source_id) VALUES (?, ?)")
            .bind(id)
            .bind(source_id)
            .execute(&self.pool)
            .await
            .expect("insert race");
    }

    /// Create a deity in the first source and link it to the character.
    pub async fn deity(&self, character_id: i64, name: &str) {
        let result = sqlx::query(
            r#"
            INSERT INTO pf1_deities (deity_name, deity_alignment, source_id)
            SELECT ?, 'LG', MIN(source_id) FROM pf1_sources
            "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .expect("insert deity");

        sqlx::query("INSERT INTO pf1_character_deities (character_id, deity_id) VALUES (?, ?)")
            .bind(character_id)
            .bind(result.last_insert_rowid())
            .execute(&self.pool)
            .await
            .expect("link deity");
    }

    pub async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("count rows");
        count
    }
}
