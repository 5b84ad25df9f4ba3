//! Skill ability resolution and skill totals.

use crate::entities::SkillDefinition;
use crate::value_objects::Ability;

/// Bonus for a class skill with at least one rank.
pub const CLASS_SKILL_BONUS: i32 = 3;

/// Core Rulebook skills and their governing abilities.
pub const CORE_SKILLS: &[(&str, Ability)] = &[
    ("Acrobatics", Ability::Dex),
    ("Appraise", Ability::Int),
    ("Bluff", Ability::Cha),
    ("Climb", Ability::Str),
    ("Craft", Ability::Int),
    ("Diplomacy", Ability::Cha),
    ("Disable Device", Ability::Dex),
    ("Disguise", Ability::Cha),
    ("Escape Artist", Ability::Dex),
    ("Fly", Ability::Dex),
    ("Handle Animal", Ability::Cha),
    ("Heal", Ability::Wis),
    ("Intimidate", Ability::Cha),
    ("Knowledge (arcana)", Ability::Int),
    ("Knowledge (dungeoneering)", Ability::Int),
    ("Knowledge (engineering)", Ability::Int),
    ("Knowledge (geography)", Ability::Int),
    ("Knowledge (history)", Ability::Int),
    ("Knowledge (local)", Ability::Int),
    ("Knowledge (nature)", Ability::Int),
    ("Knowledge (nobility)", Ability::Int),
    ("Knowledge (planes)", Ability::Int),
    ("Knowledge (religion)", Ability::Int),
    ("Linguistics", Ability::Int),
    ("Perception", Ability::Wis),
    ("Perform", Ability::Cha),
    ("Profession", Ability::Wis),
    ("Ride", Ability::Dex),
    ("Sense Motive", Ability::Wis),
    ("Sleight of Hand", Ability::Dex),
    ("Spellcraft", Ability::Int),
    ("Stealth", Ability::Dex),
    ("Survival", Ability::Wis),
    ("Swim", Ability::Str),
    ("Use Magic Device", Ability::Cha),
];

const KEYWORDS: &[(Ability, &[&str])] = &[
    (
        Ability::Dex,
        &["acrobatics", "stealth", "ride", "fly", "sleight", "escape"],
    ),
    (Ability::Str, &["climb", "swim"]),
    (Ability::Wis, &["perception", "sense", "survival", "heal"]),
    (
        Ability::Cha,
        &["bluff", "diplomacy", "intimidate", "use magic", "perform"],
    ),
];

/// Legacy classification by substring of the skill name, first match wins.
///
/// Only used for catalogue rows that carry no explicit ability.
pub fn classify_by_keyword(skill_name: &str) -> Option<Ability> {
    let name = skill_name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| name.contains(w)))
        .map(|(ability, _)| *ability)
}

/// Ability a skill keys off: catalogue value, then keyword, then Intelligence.
pub fn governing_ability(skill: &SkillDefinition) -> Ability {
    skill
        .ability
        .or_else(|| classify_by_keyword(&skill.name))
        .unwrap_or(Ability::Int)
}

/// Skill total: ability modifier + ranks + class-skill bonus + misc.
pub fn skill_total(ability_mod: i32, ranks: i32, class_skill: bool, misc: i32) -> i32 {
    let class_bonus = if class_skill && ranks > 0 {
        CLASS_SKILL_BONUS
    } else {
        0
    };
    ability_mod
        .saturating_add(ranks)
        .saturating_add(class_bonus)
        .saturating_add(misc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SkillId;

    #[test]
    fn keyword_classification() {
        assert_eq!(classify_by_keyword("Escape Artist"), Some(Ability::Dex));
        assert_eq!(classify_by_keyword("SWIM"), Some(Ability::Str));
        assert_eq!(classify_by_keyword("Sense Motive"), Some(Ability::Wis));
        assert_eq!(classify_by_keyword("Use Magic Device"), Some(Ability::Cha));
        assert_eq!(classify_by_keyword("Knowledge (arcana)"), None);
    }

    #[test]
    fn catalogue_agrees_with_keywords_for_matched_names() {
        for (name, ability) in CORE_SKILLS {
            if let Some(by_keyword) = classify_by_keyword(name) {
                assert_eq!(by_keyword, *ability, "{name}");
            }
        }
    }

    #[test]
    fn explicit_ability_wins() {
        let disguise = SkillDefinition::new(SkillId::new(1), "Disguise").with_ability(Ability::Cha);
        assert_eq!(governing_ability(&disguise), Ability::Cha);
    }

    #[test]
    fn falls_back_to_keyword_then_intelligence() {
        let stealth = SkillDefinition::new(SkillId::new(1), "Stealth");
        assert_eq!(governing_ability(&stealth), Ability::Dex);

        let homebrew = SkillDefinition::new(SkillId::new(2), "Basket Weaving");
        assert_eq!(governing_ability(&homebrew), Ability::Int);
    }

    #[test]
    fn class_bonus_needs_ranks() {
        assert_eq!(skill_total(2, 3, true, 0), 8);
        assert_eq!(skill_total(2, 0, true, 0), 2);
        assert_eq!(skill_total(2, 3, false, 0), 5);
        assert_eq!(skill_total(-1, 1, true, 1), 4);
    }

    #[test]
    fn totals_saturate() {
        assert_eq!(skill_total(5, i32::MAX, true, 0), i32::MAX);
        assert_eq!(skill_total(-5, i32::MIN, false, -1), i32::MIN);
    }
}
