//! Numeric statistics and descriptive features of a character.

use serde::{Deserialize, Serialize};

use crate::value_objects::Ability;

/// Score used for an ability that has never been set.
pub const DEFAULT_ABILITY_SCORE: i32 = 10;

/// Ability scores and hit points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub max_hp: i32,
    pub lethal_dmg: i32,
    pub non_lethal_dmg: i32,
    pub base_strength: Option<i32>,
    pub base_dexterity: Option<i32>,
    pub base_constitution: Option<i32>,
    pub base_intelligence: Option<i32>,
    pub base_wisdom: Option<i32>,
    pub base_charisma: Option<i32>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            max_hp: 10,
            lethal_dmg: 0,
            non_lethal_dmg: 0,
            base_strength: Some(DEFAULT_ABILITY_SCORE),
            base_dexterity: Some(DEFAULT_ABILITY_SCORE),
            base_constitution: Some(DEFAULT_ABILITY_SCORE),
            base_intelligence: Some(DEFAULT_ABILITY_SCORE),
            base_wisdom: Some(DEFAULT_ABILITY_SCORE),
            base_charisma: Some(DEFAULT_ABILITY_SCORE),
        }
    }
}

impl Statistics {
    fn slot(&self, ability: Ability) -> Option<i32> {
        match ability {
            Ability::Str => self.base_strength,
            Ability::Dex => self.base_dexterity,
            Ability::Con => self.base_constitution,
            Ability::Int => self.base_intelligence,
            Ability::Wis => self.base_wisdom,
            Ability::Cha => self.base_charisma,
        }
    }

    /// Base score of `ability`; unset scores read as 10.
    pub fn score(&self, ability: Ability) -> i32 {
        self.slot(ability).unwrap_or(DEFAULT_ABILITY_SCORE)
    }

    pub fn set_score(&mut self, ability: Ability, score: i32) {
        let slot = match ability {
            Ability::Str => &mut self.base_strength,
            Ability::Dex => &mut self.base_dexterity,
            Ability::Con => &mut self.base_constitution,
            Ability::Int => &mut self.base_intelligence,
            Ability::Wis => &mut self.base_wisdom,
            Ability::Cha => &mut self.base_charisma,
        };
        *slot = Some(score);
    }

    pub fn current_hp(&self) -> i32 {
        self.max_hp.saturating_sub(self.lethal_dmg)
    }

    /// Record the current hit points as lethal damage taken from the maximum.
    pub fn set_current_hp(&mut self, current: i32) {
        self.lethal_dmg = self.max_hp.saturating_sub(current).max(0);
    }
}

/// Physical description of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveFeatures {
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub hair: String,
    pub eyes: String,
    pub skin: String,
}

impl Default for DescriptiveFeatures {
    /// Defaults written when a character is bootstrapped.
    fn default() -> Self {
        Self {
            age: 20,
            gender: String::new(),
            height: 175.0,
            weight: 70.0,
            hair: String::new(),
            eyes: String::new(),
            skin: String::new(),
        }
    }
}

impl DescriptiveFeatures {
    /// Zero-valued features shown when a record has none.
    pub fn blank() -> Self {
        Self {
            age: 0,
            gender: String::new(),
            height: 0.0,
            weight: 0.0,
            hair: String::new(),
            eyes: String::new(),
            skin: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_scores_read_as_ten() {
        let stats = Statistics {
            base_wisdom: None,
            ..Statistics::default()
        };
        assert_eq!(stats.score(Ability::Wis), 10);
    }

    #[test]
    fn current_hp_never_yields_negative_damage() {
        let mut stats = Statistics {
            max_hp: 12,
            ..Statistics::default()
        };
        stats.set_current_hp(5);
        assert_eq!(stats.lethal_dmg, 7);
        assert_eq!(stats.current_hp(), 5);

        stats.set_current_hp(20);
        assert_eq!(stats.lethal_dmg, 0);
    }

    #[test]
    fn hit_points_saturate_at_integer_limits() {
        let mut stats = Statistics::default();
        stats.set_current_hp(i32::MIN);
        assert_eq!(stats.lethal_dmg, i32::MAX);
        assert_eq!(stats.current_hp(), 10 - i32::MAX);

        stats.max_hp = i32::MIN;
        assert_eq!(stats.current_hp(), i32::MIN);
        stats.set_current_hp(i32::MAX);
        assert_eq!(stats.lethal_dmg, 0);
    }

    #[test]
    fn set_score_targets_one_ability() {
        let mut stats = Statistics::default();
        stats.set_score(Ability::Cha, 16);
        assert_eq!(stats.score(Ability::Cha), 16);
        assert_eq!(stats.score(Ability::Str), 10);
    }
}
