//! Tavern Engine library.
//!
//! Server-side character sheet engine: derives Pathfinder 1e sheets from
//! stored character data and applies edits back to it.
//!
//! ## Structure
//!
//! - `use_cases/` - sheet computation, editing and bootstrap, one transaction each
//! - `infrastructure/` - store ports, SQLite adapter, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
