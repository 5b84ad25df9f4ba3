//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::SheetStore;
use crate::use_cases::CharacterSheetUseCases;

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: CharacterSheetUseCases,
}

impl App {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            use_cases: UseCases {
                character_sheet: CharacterSheetUseCases::new(store),
            },
        }
    }
}
