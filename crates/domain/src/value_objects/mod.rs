//! Value objects - Immutable objects defined by their attributes

mod ability;
mod modifier_type;
mod progression;

pub use ability::Ability;
pub use modifier_type::ModifierType;
pub use progression::{BabProgression, SaveProgression};
