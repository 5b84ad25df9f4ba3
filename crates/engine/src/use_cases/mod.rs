//! Use cases - user story orchestration over the store ports.

pub mod character_sheet;

pub use character_sheet::CharacterSheetUseCases;
