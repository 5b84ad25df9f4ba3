//! Table definitions and catalogue seed data.

use sqlx::SqlitePool;
use tavern_domain::{pathfinder1, BabProgression, ModifierType, SaveProgression, CORE_RULEBOOK};

use crate::infrastructure::ports::RepoError;

/// Source id of the Core Rulebook in the system-agnostic catalogue.
const CORE_SOURCE_ID: i64 = 1;

const TABLES: &[&str] = &[
    // Identity layer. Owned by the surrounding system; created here so the
    // engine can run standalone.
    r#"
    CREATE TABLE IF NOT EXISTS games (
        game_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        system_id INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        character_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    // Catalogue
    r#"
    CREATE TABLE IF NOT EXISTS pf1_sources (
        source_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        core_source_id INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_races (
        race_id INTEGER PRIMARY KEY,
        source_id INTEGER NOT NULL REFERENCES pf1_sources(source_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_deities (
        deity_id INTEGER PRIMARY KEY,
        deity_name TEXT NOT NULL,
        deity_alignment TEXT NOT NULL DEFAULT '',
        source_id INTEGER NOT NULL REFERENCES pf1_sources(source_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_class_stats_categories (
        category_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_class_stats (
        class_stats_id INTEGER PRIMARY KEY,
        base_attack_cat INTEGER NOT NULL REFERENCES pf1_class_stats_categories(category_id),
        fortitude_save_cat INTEGER NOT NULL REFERENCES pf1_class_stats_categories(category_id),
        reflex_save_cat INTEGER NOT NULL REFERENCES pf1_class_stats_categories(category_id),
        will_save_cat INTEGER NOT NULL REFERENCES pf1_class_stats_categories(category_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_classes (
        class_id INTEGER PRIMARY KEY,
        class_name TEXT NOT NULL,
        source_id INTEGER NOT NULL REFERENCES pf1_sources(source_id),
        class_stats_id INTEGER REFERENCES pf1_class_stats(class_stats_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_modifier_types (
        modifier_type_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_skills (
        skill_id INTEGER PRIMARY KEY,
        skill_name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        ability TEXT
    )
    "#,
    // Per-character rows
    r#"
    CREATE TABLE IF NOT EXISTS pf1_statistics (
        statistics_id INTEGER PRIMARY KEY,
        max_hp INTEGER NOT NULL DEFAULT 10,
        lethal_dmg INTEGER NOT NULL DEFAULT 0,
        non_lethal_dmg INTEGER NOT NULL DEFAULT 0,
        base_strength INTEGER,
        base_dexterity INTEGER,
        base_constitution INTEGER,
        base_intelligence INTEGER,
        base_wisdom INTEGER,
        base_charisma INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_descriptive_features (
        features_id INTEGER PRIMARY KEY,
        age INTEGER NOT NULL DEFAULT 0,
        gender TEXT NOT NULL DEFAULT '',
        height REAL NOT NULL DEFAULT 0,
        weight REAL NOT NULL DEFAULT 0,
        hair TEXT NOT NULL DEFAULT '',
        eyes TEXT NOT NULL DEFAULT '',
        skin TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_characters (
        character_id INTEGER PRIMARY KEY REFERENCES characters(character_id),
        name TEXT NOT NULL,
        alignment TEXT NOT NULL DEFAULT 'N',
        race_id INTEGER NOT NULL REFERENCES pf1_races(race_id),
        statistics_id INTEGER NOT NULL UNIQUE REFERENCES pf1_statistics(statistics_id),
        features_id INTEGER NOT NULL UNIQUE REFERENCES pf1_descriptive_features(features_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_modifiers (
        modifier_id INTEGER PRIMARY KEY,
        character_id INTEGER NOT NULL REFERENCES pf1_characters(character_id),
        modifier_type_id INTEGER NOT NULL REFERENCES pf1_modifier_types(modifier_type_id),
        value INTEGER NOT NULL DEFAULT 0,
        duration INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_character_skills (
        character_id INTEGER NOT NULL REFERENCES pf1_characters(character_id),
        skill_id INTEGER NOT NULL REFERENCES pf1_skills(skill_id),
        ranks INTEGER NOT NULL DEFAULT 0,
        class_skill INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (character_id, skill_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_character_classes (
        id INTEGER PRIMARY KEY,
        character_id INTEGER NOT NULL REFERENCES pf1_characters(character_id),
        class_id INTEGER NOT NULL,
        class_level INTEGER NOT NULL DEFAULT 1,
        main_class INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pf1_character_deities (
        id INTEGER PRIMARY KEY,
        character_id INTEGER NOT NULL REFERENCES pf1_characters(character_id),
        deity_id INTEGER NOT NULL REFERENCES pf1_deities(deity_id)
    )
    "#,
];

/// Create every table that does not exist yet. Safe to run on each start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in TABLES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;
    }
    Ok(())
}

/// Insert the Core Rulebook catalogue: source, modifier types, progression
/// categories, base classes and skills. Existing rows are left untouched.
pub async fn seed_catalogue(pool: &SqlitePool) -> Result<(), RepoError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| RepoError::database("seed_catalogue", e))?;

    sqlx::query(
        "INSERT OR IGNORE INTO pf1_sources (source_id, name, core_source_id) VALUES (1, ?, ?)",
    )
    .bind(CORE_RULEBOOK)
    .bind(CORE_SOURCE_ID)
    .execute(&mut *tx)
    .await
    .map_err(|e| RepoError::database("seed_sources", e))?;

    for modifier_type in ModifierType::ALL {
        sqlx::query(
            "INSERT OR IGNORE INTO pf1_modifier_types (modifier_type_id, name) VALUES (?, ?)",
        )
        .bind(modifier_type.id())
        .bind(modifier_type.display_name())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("seed_modifier_types", e))?;
    }

    let categories = [
        (SaveProgression::Good.category_id(), "Good"),
        (SaveProgression::Poor.category_id(), "Poor"),
        (BabProgression::Fast.category_id(), "Fast"),
        (BabProgression::Medium.category_id(), "Medium"),
        (BabProgression::Slow.category_id(), "Slow"),
    ];
    for (id, name) in categories {
        sqlx::query(
            "INSERT OR IGNORE INTO pf1_class_stats_categories (category_id, name) VALUES (?, ?)",
        )
        .bind(id)
        .bind(name)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("seed_categories", e))?;
    }

    for (id, (name, progression)) in (1_i64..).zip(pathfinder1::CORE_CLASSES) {
        let bab = progression
            .bab
            .unwrap_or(BabProgression::Medium)
            .category_id();
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO pf1_class_stats
                (class_stats_id, base_attack_cat, fortitude_save_cat, reflex_save_cat, will_save_cat)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(bab)
        .bind(progression.fortitude.category_id())
        .bind(progression.reflex.category_id())
        .bind(progression.will.category_id())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("seed_class_stats", e))?;

        sqlx::query(
            "INSERT OR IGNORE INTO pf1_classes (class_id, class_name, source_id, class_stats_id) VALUES (?, ?, 1, ?)",
        )
        .bind(id)
        .bind(*name)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("seed_classes", e))?;
    }

    for (id, (name, ability)) in (1_i64..).zip(pathfinder1::CORE_SKILLS) {
        sqlx::query(
            "INSERT OR IGNORE INTO pf1_skills (skill_id, skill_name, ability) VALUES (?, ?, ?)",
        )
        .bind(id)
        .bind(*name)
        .bind(ability.key())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("seed_skills", e))?;
    }

    tx.commit()
        .await
        .map_err(|e| RepoError::database("seed_catalogue", e))?;

    tracing::info!(
        classes = pathfinder1::CORE_CLASSES.len(),
        skills = pathfinder1::CORE_SKILLS.len(),
        "Seeded Pathfinder 1e catalogue"
    );
    Ok(())
}
