//! Full sheet derivation.

use crate::character_sheet::{AttributeView, FeaturesView, SaveView, SheetView, SkillView};
use crate::entities::{
    CharacterRecord, ClassAssignment, Deity, DescriptiveFeatures, Modifier, SkillAssignment,
    Source, Statistics,
};
use crate::value_objects::{Ability, ModifierType};

use super::{
    ability_modifier, aggregate, governing_ability, skill_total, summarize_levels,
    AC_FLAT_FOOTED_TYPES, AC_TOTAL_TYPES, AC_TOUCH_TYPES, SAVE_BONUS_TYPES,
};

/// Armor class before any modifier.
pub const AC_BASE: i32 = 10;
/// Combat maneuver defense before any modifier.
pub const CMD_BASE: i32 = 10;

const UNKNOWN: &str = "Unknown";
const NO_DEITY: &str = "None";

/// Saturating sum of sheet components.
fn sum(parts: &[i32]) -> i32 {
    parts.iter().fold(0, |total: i32, part| total.saturating_add(*part))
}

/// Everything read from the store for one character.
///
/// The one-to-one rows hanging off the record are optional here; they are
/// resolved to defaults once, in [`CharacterGraph::into_sheet`].
#[derive(Debug, Clone)]
pub struct CharacterGraph {
    pub record: CharacterRecord,
    pub statistics: Option<Statistics>,
    pub features: Option<DescriptiveFeatures>,
    /// Source of the character's race; it doubles as the race label.
    pub race_source: Option<Source>,
    /// First linked deity.
    pub deity: Option<Deity>,
    pub classes: Vec<ClassAssignment>,
    pub modifiers: Vec<Modifier>,
    pub skills: Vec<SkillAssignment>,
}

struct Resolved {
    statistics: Statistics,
    features: DescriptiveFeatures,
    race: String,
    deity: String,
}

impl CharacterGraph {
    pub fn new(record: CharacterRecord) -> Self {
        Self {
            record,
            statistics: None,
            features: None,
            race_source: None,
            deity: None,
            classes: Vec::new(),
            modifiers: Vec::new(),
            skills: Vec::new(),
        }
    }

    fn resolve_links(&mut self) -> Resolved {
        Resolved {
            statistics: self.statistics.take().unwrap_or_default(),
            features: self
                .features
                .take()
                .unwrap_or_else(DescriptiveFeatures::blank),
            race: self
                .race_source
                .take()
                .map(|s| s.name)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            deity: self
                .deity
                .take()
                .map(|d| d.name)
                .unwrap_or_else(|| NO_DEITY.to_string()),
        }
    }

    fn bonus(&self, types: &[ModifierType]) -> i32 {
        aggregate(&self.modifiers, types)
    }

    /// Derive the complete sheet.
    pub fn into_sheet(mut self) -> SheetView {
        let links = self.resolve_links();
        let stats = &links.statistics;
        let modifier = |ability: Ability| ability_modifier(stats.score(ability));

        let attributes = Ability::ALL
            .iter()
            .map(|&ability| AttributeView {
                key: ability.key().to_string(),
                name: ability.display_name().to_string(),
                score: stats.score(ability),
                modifier: modifier(ability),
            })
            .collect();

        let (str_mod, dex_mod) = (modifier(Ability::Str), modifier(Ability::Dex));
        let levels = summarize_levels(&self.classes);

        let size = self.bonus(&[ModifierType::Size]);
        let dodge = self.bonus(&[ModifierType::Dodge]);
        let deflection = self.bonus(&[ModifierType::Deflection]);
        let resistance = self.bonus(SAVE_BONUS_TYPES);

        let save = |key: &str, name: &str, base: i32, ability: Ability| {
            let ability_mod = modifier(ability);
            SaveView {
                key: key.to_string(),
                name: name.to_string(),
                total: sum(&[base, ability_mod, resistance]),
                base,
                ability: ability_mod,
                magic: resistance,
                misc: 0,
            }
        };
        let saves = vec![
            save("fort", "Fortitude", levels.fortitude, Ability::Con),
            save("ref", "Reflex", levels.reflex, Ability::Dex),
            save("will", "Will", levels.will, Ability::Wis),
        ];

        let mut skills: Vec<SkillView> = self
            .skills
            .iter()
            .map(|assignment| {
                let ability = governing_ability(&assignment.skill);
                let misc = 0;
                SkillView {
                    key: format!("skill_{}", assignment.skill.id),
                    name: assignment.skill.name.clone(),
                    ability: ability.key().to_string(),
                    is_class: assignment.class_skill,
                    ranks: assignment.ranks,
                    misc,
                    total: skill_total(
                        modifier(ability),
                        assignment.ranks,
                        assignment.class_skill,
                        misc,
                    ),
                }
            })
            .collect();
        if skills.is_empty() {
            skills.push(SkillView::none());
        }

        SheetView {
            character_id: self.record.character_id,
            name: self.record.name.clone(),
            player: UNKNOWN.to_string(),
            race: links.race.clone(),
            alignment: self.record.alignment.clone(),
            deity: links.deity.clone(),
            attributes,
            features: FeaturesView {
                age: links.features.age,
                gender: links.features.gender.clone(),
                height: links.features.height,
                weight: links.features.weight,
                eyes: links.features.eyes.clone(),
                hair: links.features.hair.clone(),
            },
            hp_total: stats.max_hp,
            hp_current: stats.current_hp(),
            hp_nonlethal: stats.non_lethal_dmg,
            class_level: levels.label.clone(),
            total_level: levels.total_level,
            bab: levels.bab,
            ac_total: sum(&[AC_BASE, dex_mod, self.bonus(AC_TOTAL_TYPES)]),
            ac_touch: sum(&[AC_BASE, dex_mod, self.bonus(AC_TOUCH_TYPES)]),
            ac_flat: sum(&[AC_BASE, self.bonus(AC_FLAT_FOOTED_TYPES)]),
            // Improved Initiative and similar bonuses are not modelled yet.
            initiative: dex_mod,
            saves,
            cmb: sum(&[levels.bab, str_mod, size]),
            cmd: sum(&[CMD_BASE, levels.bab, str_mod, dex_mod, size, dodge, deflection]),
            skills,
            weapons: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ClassDefinition, ClassProgression, SkillDefinition};
    use crate::ids::{
        CharacterId, ClassId, DeityId, FeaturesId, ModifierId, RaceId, SkillId, SourceId,
        StatisticsId,
    };
    use crate::value_objects::{BabProgression, SaveProgression};

    fn record() -> CharacterRecord {
        CharacterRecord {
            character_id: CharacterId::new(1),
            name: "Valeros".to_string(),
            alignment: "NG".to_string(),
            race_id: RaceId::new(1),
            statistics_id: StatisticsId::new(1),
            features_id: FeaturesId::new(1),
        }
    }

    fn statistics() -> Statistics {
        Statistics {
            max_hp: 30,
            lethal_dmg: 8,
            non_lethal_dmg: 2,
            base_strength: Some(16),
            base_dexterity: Some(14),
            base_constitution: Some(12),
            base_intelligence: Some(10),
            base_wisdom: Some(8),
            base_charisma: Some(9),
        }
    }

    fn fighter(level: i32) -> ClassAssignment {
        ClassAssignment::new(
            ClassDefinition {
                id: ClassId::new(1),
                name: "Fighter".to_string(),
                progression: Some(ClassProgression {
                    bab: Some(BabProgression::Fast),
                    fortitude: SaveProgression::Good,
                    reflex: SaveProgression::Poor,
                    will: SaveProgression::Poor,
                }),
            },
            level,
        )
        .main()
    }

    fn modifier(id: i64, ty: ModifierType, value: i32) -> Modifier {
        Modifier::new(ModifierId::new(id), ty, value)
    }

    fn equipped_fighter() -> CharacterGraph {
        let mut graph = CharacterGraph::new(record());
        graph.statistics = Some(statistics());
        graph.features = Some(DescriptiveFeatures::default());
        graph.race_source = Some(Source {
            id: SourceId::new(1),
            name: "Core Rulebook".to_string(),
            core_source_id: 1,
        });
        graph.deity = Some(Deity {
            id: DeityId::new(1),
            name: "Iomedae".to_string(),
            alignment: "LG".to_string(),
            source_id: SourceId::new(1),
        });
        graph.classes = vec![fighter(4)];
        graph.modifiers = vec![
            modifier(1, ModifierType::Armor, 4),
            modifier(2, ModifierType::Armor, 6),
            modifier(3, ModifierType::Shield, 2),
            modifier(4, ModifierType::Natural, 1),
            modifier(5, ModifierType::Deflection, 1),
            modifier(6, ModifierType::Dodge, 1),
            modifier(7, ModifierType::Dodge, 1),
            modifier(8, ModifierType::Resistance, 1),
            modifier(9, ModifierType::Resistance, 2),
            modifier(10, ModifierType::Morale, 2),
        ];
        graph
    }

    #[test]
    fn armor_class_variants() {
        let sheet = equipped_fighter().into_sheet();
        // dex +2, armor 6, shield 2, natural 1, deflection 1, dodge 2
        assert_eq!(sheet.ac_total, 10 + 2 + 6 + 2 + 1 + 1 + 2);
        assert_eq!(sheet.ac_touch, 10 + 2 + 2 + 1);
        assert_eq!(sheet.ac_flat, 10 + 6 + 2 + 1 + 1);
        assert_eq!(sheet.initiative, 2);
    }

    #[test]
    fn saves_add_base_ability_and_resistance() {
        let sheet = equipped_fighter().into_sheet();
        let fort = sheet.save("fort").expect("fort");
        assert_eq!((fort.base, fort.ability, fort.magic), (4, 1, 2));
        assert_eq!(fort.total, 7);
        let reflex = sheet.save("ref").expect("ref");
        assert_eq!(reflex.total, 1 + 2 + 2);
        let will = sheet.save("will").expect("will");
        assert_eq!(will.total, 1 - 1 + 2);
    }

    #[test]
    fn combat_maneuvers() {
        let sheet = equipped_fighter().into_sheet();
        assert_eq!(sheet.bab, 4);
        assert_eq!(sheet.cmb, 4 + 3);
        // 10 + bab + str + dex + size + dodge + deflection
        assert_eq!(sheet.cmd, 10 + 4 + 3 + 2 + 0 + 2 + 1);
    }

    #[test]
    fn identity_and_hit_points() {
        let sheet = equipped_fighter().into_sheet();
        assert_eq!(sheet.name, "Valeros");
        assert_eq!(sheet.race, "Core Rulebook");
        assert_eq!(sheet.alignment, "NG");
        assert_eq!(sheet.deity, "Iomedae");
        assert_eq!(sheet.player, "Unknown");
        assert_eq!(sheet.class_level, "Fighter (4)");
        assert_eq!(sheet.hp_total, 30);
        assert_eq!(sheet.hp_current, 22);
        assert_eq!(sheet.hp_nonlethal, 2);
        assert_eq!(sheet.features.age, 20);
        assert!(sheet.weapons.is_empty());

        let cha = sheet.attribute("cha").expect("cha");
        assert_eq!((cha.score, cha.modifier), (9, -1));
    }

    #[test]
    fn missing_links_fall_back_to_defaults() {
        let sheet = CharacterGraph::new(record()).into_sheet();
        assert_eq!(sheet.race, "Unknown");
        assert_eq!(sheet.deity, "None");
        assert_eq!(sheet.features.age, 0);
        assert_eq!(sheet.features.height, 0.0);
        assert_eq!(sheet.hp_total, 10);
        assert_eq!(sheet.hp_current, 10);
        assert!(sheet.attributes.iter().all(|a| a.score == 10 && a.modifier == 0));
    }

    #[test]
    fn classless_saves_are_ability_plus_resistance() {
        let mut graph = CharacterGraph::new(record());
        graph.statistics = Some(statistics());
        graph.modifiers = vec![modifier(1, ModifierType::Resistance, 1)];
        let sheet = graph.into_sheet();

        assert_eq!(sheet.class_level, "Level 1");
        assert_eq!(sheet.bab, 0);
        assert_eq!(sheet.save("fort").map(|s| s.total), Some(1 + 1));
        assert_eq!(sheet.save("ref").map(|s| s.total), Some(2 + 1));
        assert_eq!(sheet.save("will").map(|s| s.total), Some(-1 + 1));
    }

    #[test]
    fn skills_resolve_ability_and_class_bonus() {
        let mut graph = CharacterGraph::new(record());
        graph.statistics = Some(statistics());
        graph.skills = vec![
            SkillAssignment {
                skill: SkillDefinition::new(SkillId::new(3), "Climb"),
                ranks: 4,
                class_skill: true,
            },
            SkillAssignment {
                skill: SkillDefinition::new(SkillId::new(9), "Knowledge (local)"),
                ranks: 0,
                class_skill: true,
            },
            SkillAssignment {
                skill: SkillDefinition::new(SkillId::new(11), "Handle Animal")
                    .with_ability(Ability::Cha),
                ranks: 1,
                class_skill: false,
            },
        ];
        let sheet = graph.into_sheet();

        let climb = sheet.skill("skill_3").expect("climb");
        assert_eq!(climb.ability, "str");
        assert_eq!(climb.total, 3 + 4 + 3);

        let knowledge = sheet.skill("skill_9").expect("knowledge");
        assert_eq!(knowledge.ability, "int");
        assert_eq!(knowledge.total, 0);

        let handle = sheet.skill("skill_11").expect("handle animal");
        assert_eq!(handle.ability, "cha");
        assert_eq!(handle.total, -1 + 1);
    }

    #[test]
    fn extreme_scores_and_bonuses_do_not_overflow() {
        let mut graph = CharacterGraph::new(record());
        graph.statistics = Some(Statistics {
            max_hp: i32::MIN,
            lethal_dmg: i32::MAX,
            base_strength: Some(i32::MIN),
            base_dexterity: Some(i32::MAX),
            ..Statistics::default()
        });
        graph.modifiers = vec![
            modifier(1, ModifierType::Dodge, i32::MAX),
            modifier(2, ModifierType::Resistance, i32::MAX),
        ];
        let sheet = graph.into_sheet();

        assert_eq!(sheet.attribute("str").map(|a| a.modifier), Some(-1_073_741_829));
        assert_eq!(sheet.hp_current, i32::MIN);
        assert_eq!(sheet.ac_total, i32::MAX);
        assert_eq!(sheet.ac_flat, 10);
        assert_eq!(sheet.save("ref").map(|s| s.total), Some(i32::MAX));
        assert_eq!(sheet.cmb, -1_073_741_829);
    }

    #[test]
    fn no_skills_placeholder() {
        let sheet = CharacterGraph::new(record()).into_sheet();
        assert_eq!(sheet.skills, vec![SkillView::none()]);
    }
}
