//! Identifiers for things the engine creates at runtime.
//!
//! Card identifiers come from the external catalog (`cards::CardId`); the
//! identifiers here are allocated by the engine itself:
//!
//! - `UnitId`: one per summoned unit, unique within a board, never reused.
//! - `MatchId`: chosen by the caller and passed into every match operation.
//!
//! ```
//! use grid_ccg::core::{MatchId, UnitId};
//!
//! let unit = UnitId::new(3);
//! assert_eq!(unit.next(), UnitId::new(4));
//! assert_eq!(format!("{}", MatchId::new(9)), "Match(9)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a summoned unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a new unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The identifier allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Identifier of a match, supplied by whoever owns the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl MatchId {
    /// Create a new match ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.0)
    }
}
