//! Multiclass level progression.

use serde::Serialize;

use crate::entities::{ClassAssignment, ClassProgression};
use crate::value_objects::{BabProgression, SaveProgression};

/// Label shown for a character without any class levels.
pub const NO_CLASS_LABEL: &str = "Level 1";

const fn core(
    bab: BabProgression,
    fortitude: SaveProgression,
    reflex: SaveProgression,
    will: SaveProgression,
) -> ClassProgression {
    ClassProgression {
        bab: Some(bab),
        fortitude,
        reflex,
        will,
    }
}

/// Core Rulebook base classes, in catalogue order.
pub const CORE_CLASSES: &[(&str, ClassProgression)] = {
    use BabProgression::{Fast, Medium, Slow};
    use SaveProgression::{Good, Poor};
    &[
        ("Barbarian", core(Fast, Good, Poor, Poor)),
        ("Bard", core(Medium, Poor, Good, Good)),
        ("Cleric", core(Medium, Good, Poor, Good)),
        ("Druid", core(Medium, Good, Poor, Good)),
        ("Fighter", core(Fast, Good, Poor, Poor)),
        ("Monk", core(Medium, Good, Good, Good)),
        ("Paladin", core(Fast, Good, Poor, Good)),
        ("Ranger", core(Fast, Good, Good, Poor)),
        ("Rogue", core(Medium, Poor, Good, Poor)),
        ("Sorcerer", core(Slow, Poor, Poor, Good)),
        ("Wizard", core(Slow, Poor, Poor, Good)),
    ]
};

/// Base attack bonus, base saves and level label summed over all classes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LevelSummary {
    pub bab: i32,
    pub fortitude: i32,
    pub reflex: i32,
    pub will: i32,
    pub total_level: i32,
    pub label: String,
}

/// Sum each class's contribution independently (multiclassing is additive).
///
/// Classes whose progression is unknown still count toward `total_level`
/// and the label.
pub fn summarize_levels(assignments: &[ClassAssignment]) -> LevelSummary {
    let mut summary = LevelSummary::default();
    let mut names = Vec::with_capacity(assignments.len());

    for assignment in assignments {
        let level = assignment.level;
        summary.total_level = summary.total_level.saturating_add(level);
        names.push(format!("{} ({})", assignment.class_name(), level));

        let Some(progression) = assignment.progression() else {
            continue;
        };
        if let Some(bab) = progression.bab {
            summary.bab = summary.bab.saturating_add(bab.base_attack(level));
        }
        summary.fortitude = summary
            .fortitude
            .saturating_add(progression.fortitude.base_save(level));
        summary.reflex = summary
            .reflex
            .saturating_add(progression.reflex.base_save(level));
        summary.will = summary.will.saturating_add(progression.will.base_save(level));
    }

    summary.label = if summary.total_level > 0 {
        names.join(", ")
    } else {
        NO_CLASS_LABEL.to_string()
    };
    summary
}
