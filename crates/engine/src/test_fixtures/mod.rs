//! Test fixtures: in-memory stores, seeding helpers and fault injection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{memory_store, SheetSeeder};
//!
//! #[tokio::test]
//! async fn test_fighter_sheet() {
//!     let store = memory_store(true).await;
//!     let seed = SheetSeeder::new(&store);
//!     seed.character(1, "Valeros").await;
//!     // ... test logic
//! }
//! ```

mod faulty_store;
mod sheet_seeder;

pub use faulty_store::{Fault, FaultyStore};
pub use sheet_seeder::SheetSeeder;

use crate::infrastructure::sqlite::{seed_catalogue, SqliteSheetStore};

/// Fresh in-memory store, optionally with the Core Rulebook catalogue.
///
/// # Panics
///
/// Panics if the database cannot be opened or seeded.
pub async fn memory_store(with_catalogue: bool) -> SqliteSheetStore {
    let store = SqliteSheetStore::in_memory()
        .await
        .expect("in-memory sqlite store");
    if with_catalogue {
        seed_catalogue(store.pool())
            .await
            .expect("seed catalogue");
    }
    store
}
