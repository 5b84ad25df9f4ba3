//! Flat edit-field parsing.
//!
//! A malformed value never fails an edit: it keeps the previous value (or
//! falls back to a default for ability scores) and is logged.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use tavern_domain::{
    Ability, CharacterRecord, DescriptiveFeatures, SkillId, Statistics, DEFAULT_ABILITY_SCORE,
};

/// Flat `field -> value` mapping sent by callers.
pub type EditFields = HashMap<String, String>;

const SKILL_PREFIX: &str = "skill_";
const RANKS_SUFFIX: &str = "_ranks";

/// Requested change to one skill line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEdit {
    pub skill_id: SkillId,
    pub ranks: i32,
    /// Accepted but not persisted yet.
    pub misc: Option<i32>,
    pub class_skill: bool,
}

fn parse_or_keep<T: FromStr + Copy>(fields: &EditFields, key: &str, current: T) -> T {
    let Some(raw) = fields.get(key) else {
        return current;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(
                field = key,
                value = %raw,
                "Keeping previous value for unparseable field"
            );
            current
        }
    }
}

/// Apply `name` and `alignment`. Returns whether anything was present.
pub fn apply_identity(record: &mut CharacterRecord, fields: &EditFields) -> bool {
    let mut touched = false;
    if let Some(name) = fields.get("name") {
        record.name = name.clone();
        touched = true;
    }
    if let Some(alignment) = fields.get("alignment") {
        record.alignment = alignment.clone();
        touched = true;
    }
    touched
}

pub fn apply_features(features: &mut DescriptiveFeatures, fields: &EditFields) {
    features.age = parse_or_keep(fields, "age", features.age);
    features.height = parse_or_keep(fields, "height", features.height);
    features.weight = parse_or_keep(fields, "weight", features.weight);

    for (key, slot) in [
        ("gender", &mut features.gender),
        ("eyes", &mut features.eyes),
        ("hair", &mut features.hair),
    ] {
        if let Some(value) = fields.get(key) {
            *slot = value.clone();
        }
    }
}

/// Ability scores, then maximum and non-lethal HP, then current HP.
///
/// `hp_current` is stored as lethal damage against the (possibly new) maximum.
pub fn apply_statistics(stats: &mut Statistics, fields: &EditFields) {
    for ability in Ability::ALL {
        let key = ability.score_field();
        if let Some(raw) = fields.get(key) {
            let score = raw.trim().parse().unwrap_or_else(|_| {
                tracing::debug!(
                    field = key,
                    value = %raw,
                    "Unparseable ability score, using default"
                );
                DEFAULT_ABILITY_SCORE
            });
            stats.set_score(ability, score);
        }
    }

    stats.max_hp = parse_or_keep(fields, "hp_total", stats.max_hp);
    stats.non_lethal_dmg = parse_or_keep(fields, "hp_nonlethal", stats.non_lethal_dmg);

    if let Some(raw) = fields.get("hp_current") {
        match raw.trim().parse::<i32>() {
            Ok(current) => stats.set_current_hp(current),
            Err(_) => tracing::debug!(value = %raw, "Ignoring unparseable hp_current"),
        }
    }
}

/// Skill edits keyed by `skill_<id>_ranks`, in id order.
///
/// Unparseable ids or ranks skip that skill; an empty ranks value means 0.
pub fn skill_edits(fields: &EditFields) -> Vec<SkillEdit> {
    let mut edits = BTreeMap::new();

    for (key, raw_ranks) in fields {
        let Some(raw_id) = key
            .strip_prefix(SKILL_PREFIX)
            .and_then(|rest| rest.strip_suffix(RANKS_SUFFIX))
        else {
            continue;
        };
        let Ok(id) = raw_id.parse::<i64>() else {
            tracing::warn!(field = %key, "Skipping skill edit with unparseable id");
            continue;
        };

        let raw_ranks = raw_ranks.trim();
        let ranks = if raw_ranks.is_empty() {
            0
        } else {
            match raw_ranks.parse::<i32>() {
                Ok(ranks) => ranks,
                Err(_) => {
                    tracing::warn!(
                        skill_id = id,
                        value = %raw_ranks,
                        "Skipping skill edit with unparseable ranks"
                    );
                    continue;
                }
            }
        };

        let misc = fields
            .get(&format!("{SKILL_PREFIX}{raw_id}_misc"))
            .and_then(|raw| raw.trim().parse().ok());
        let class_skill = fields
            .get(&format!("{SKILL_PREFIX}{raw_id}_class"))
            .is_some_and(|raw| is_checked(raw));

        edits.insert(
            id,
            SkillEdit {
                skill_id: SkillId::new(id),
                ranks,
                misc,
                class_skill,
            },
        );
    }

    edits.into_values().collect()
}

/// Checkbox semantics: present means checked unless explicitly turned off.
fn is_checked(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "off" | "false" | "0"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavern_domain::{CharacterId, FeaturesId, RaceId, StatisticsId};

    fn fields(pairs: &[(&str, &str)]) -> EditFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn identity_fields_are_verbatim() {
        let mut record = CharacterRecord {
            character_id: CharacterId::new(1),
            name: "Old".to_string(),
            alignment: "N".to_string(),
            race_id: RaceId::new(1),
            statistics_id: StatisticsId::new(1),
            features_id: FeaturesId::new(1),
        };
        assert!(!apply_identity(&mut record, &fields(&[("age", "30")])));
        assert!(apply_identity(
            &mut record,
            &fields(&[("name", " Kyra "), ("alignment", "NG")])
        ));
        assert_eq!(record.name, " Kyra ");
        assert_eq!(record.alignment, "NG");
    }

    #[test]
    fn bad_numeric_feature_keeps_previous_value() {
        let mut features = DescriptiveFeatures::default();
        apply_features(
            &mut features,
            &fields(&[
                ("age", "abc"),
                ("height", " 180.5 "),
                ("weight", ""),
                ("eyes", "green"),
            ]),
        );
        assert_eq!(features.age, 20);
        assert_eq!(features.height, 180.5);
        assert_eq!(features.weight, 70.0);
        assert_eq!(features.eyes, "green");
        assert_eq!(features.hair, "");
    }

    #[test]
    fn ability_scores_fall_back_to_ten() {
        let mut stats = Statistics::default();
        stats.set_score(Ability::Str, 16);
        stats.set_score(Ability::Dex, 14);
        apply_statistics(
            &mut stats,
            &fields(&[("str_score", "18"), ("dex_score", "lots"), ("con_score", "")]),
        );
        assert_eq!(stats.score(Ability::Str), 18);
        assert_eq!(stats.score(Ability::Dex), 10);
        assert_eq!(stats.score(Ability::Con), 10);
    }

    #[test]
    fn current_hp_uses_new_maximum() {
        let mut stats = Statistics::default();
        apply_statistics(
            &mut stats,
            &fields(&[("hp_total", "30"), ("hp_current", "22")]),
        );
        assert_eq!(stats.max_hp, 30);
        assert_eq!(stats.lethal_dmg, 8);
        assert_eq!(stats.current_hp(), 22);
    }

    #[test]
    fn current_hp_above_maximum_is_zero_damage() {
        let mut stats = Statistics {
            lethal_dmg: 4,
            ..Statistics::default()
        };
        apply_statistics(&mut stats, &fields(&[("hp_current", "15")]));
        assert_eq!(stats.lethal_dmg, 0);
    }

    #[test]
    fn bad_hp_values_are_ignored() {
        let mut stats = Statistics {
            max_hp: 25,
            lethal_dmg: 5,
            non_lethal_dmg: 2,
            ..Statistics::default()
        };
        apply_statistics(
            &mut stats,
            &fields(&[("hp_total", "x"), ("hp_nonlethal", "?"), ("hp_current", "")]),
        );
        assert_eq!(stats.max_hp, 25);
        assert_eq!(stats.lethal_dmg, 5);
        assert_eq!(stats.non_lethal_dmg, 2);
    }

    #[test]
    fn skill_key_grammar() {
        let edits = skill_edits(&fields(&[
            ("skill_7_ranks", "4"),
            ("skill_7_class", "on"),
            ("skill_7_misc", "2"),
            ("skill_3_ranks", ""),
            ("skill_3_class", "off"),
            ("skill_x_ranks", "1"),
            ("skill_9_ranks", "many"),
            ("skill_5_class", "on"),
            ("name", "ignored"),
        ]));

        assert_eq!(
            edits,
            vec![
                SkillEdit {
                    skill_id: SkillId::new(3),
                    ranks: 0,
                    misc: None,
                    class_skill: false,
                },
                SkillEdit {
                    skill_id: SkillId::new(7),
                    ranks: 4,
                    misc: Some(2),
                    class_skill: true,
                },
            ]
        );
    }
}
