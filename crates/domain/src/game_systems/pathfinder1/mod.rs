//! Pathfinder 1st Edition derivation rules.
//!
//! Everything here is pure: the engine loads a [`CharacterGraph`] from the
//! store and this module turns it into a [`SheetView`](crate::SheetView).
//!
//! - [`ability_modifier`] - score to modifier
//! - [`aggregate`] - typed bonus stacking
//! - [`summarize_levels`] - multiclass BAB and base saves
//! - [`governing_ability`] - which ability a skill keys off
//! - [`CharacterGraph::into_sheet`] - the full sheet

mod progression;
mod sheet;
mod skills;
mod stacking;

pub use progression::{summarize_levels, LevelSummary, CORE_CLASSES, NO_CLASS_LABEL};
pub use sheet::{CharacterGraph, AC_BASE, CMD_BASE};
pub use skills::{
    classify_by_keyword, governing_ability, skill_total, CLASS_SKILL_BONUS, CORE_SKILLS,
};
pub use stacking::{
    aggregate, AC_FLAT_FOOTED_TYPES, AC_TOTAL_TYPES, AC_TOUCH_TYPES, SAVE_BONUS_TYPES,
};

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// Computed in `i64`; the result always fits back into `i32`.
pub fn ability_modifier(score: i32) -> i32 {
    (i64::from(score) - 10).div_euclid(2) as i32
}
