//! Game system implementations.
//!
//! Each supported rule system is a variant of the closed [`RuleSystem`] enum
//! and owns a module of pure derivation rules. Games store the numeric
//! system id; anything without a variant here is unsupported.
//!
//! # Supported Systems
//!
//! - Pathfinder 1st Edition (`pathfinder1`, system id 1)

pub mod pathfinder1;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Rule systems with a rules module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSystem {
    Pathfinder1,
}

impl RuleSystem {
    pub const ALL: [RuleSystem; 1] = [RuleSystem::Pathfinder1];

    /// Resolve a stored system id.
    pub fn from_system_id(system_id: i64) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|s| s.system_id() == system_id)
            .ok_or(DomainError::UnsupportedSystem(system_id))
    }

    pub fn system_id(self) -> i64 {
        match self {
            Self::Pathfinder1 => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Pathfinder1 => "Pathfinder 1st Edition",
        }
    }
}
