//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! The sheet store is a port so the persistence backend can be swapped
//! (SQLite today) and so use cases can be tested against mocks or fault-injecting stores.

mod error;
mod store;

pub use error::RepoError;
pub use store::{SheetStore, SheetTransaction};

#[cfg(test)]
pub use store::{MockSheetStore, MockSheetTransaction};
