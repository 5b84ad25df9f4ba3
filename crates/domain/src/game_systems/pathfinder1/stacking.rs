//! Bonus stacking.

use std::collections::BTreeMap;

use crate::entities::Modifier;
use crate::value_objects::ModifierType;

/// Categories counted in total AC.
pub const AC_TOTAL_TYPES: &[ModifierType] = &[
    ModifierType::Armor,
    ModifierType::Shield,
    ModifierType::Natural,
    ModifierType::Deflection,
    ModifierType::Dodge,
    ModifierType::Size,
];

/// Categories counted in touch AC (no armor, shield or natural armor).
pub const AC_TOUCH_TYPES: &[ModifierType] = &[
    ModifierType::Dodge,
    ModifierType::Deflection,
    ModifierType::Size,
];

/// Categories counted in flat-footed AC (no dodge).
pub const AC_FLAT_FOOTED_TYPES: &[ModifierType] = &[
    ModifierType::Armor,
    ModifierType::Shield,
    ModifierType::Natural,
    ModifierType::Deflection,
    ModifierType::Size,
];

/// Categories added to every saving throw.
pub const SAVE_BONUS_TYPES: &[ModifierType] = &[ModifierType::Resistance];

/// Sum the modifiers whose category is in `allowed`.
///
/// Stacking categories add every value. Every other category contributes
/// only its largest value, where the running maximum starts at zero: a
/// category holding only penalties contributes nothing.
pub fn aggregate(modifiers: &[Modifier], allowed: &[ModifierType]) -> i32 {
    let mut stacked: i32 = 0;
    let mut best: BTreeMap<ModifierType, i32> = BTreeMap::new();

    for modifier in modifiers
        .iter()
        .filter(|m| allowed.contains(&m.modifier_type))
    {
        if modifier.modifier_type.stacks() {
            stacked = stacked.saturating_add(modifier.value);
        } else {
            let current = best.entry(modifier.modifier_type).or_insert(0);
            *current = (*current).max(modifier.value);
        }
    }

    best.values().fold(stacked, |total, value| total.saturating_add(*value))
}
