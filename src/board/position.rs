//! Node positions.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Stable position of a node: which half it is on, its lane, and its row
/// within that half.
///
/// Row 0 is the back row, next to the owning side's base. The highest row is
/// the front row facing the other half. Lanes line up across both halves, so
/// a unit walking forward out of its own front row enters the opponent's
/// front row in the same lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub side: Side,
    pub lane: u8,
    pub row: u8,
}

impl Position {
    #[must_use]
    pub const fn new(side: Side, lane: u8, row: u8) -> Self {
        Self { side, lane, row }
    }

    /// How far along its lane a unit of `mover` has advanced when standing
    /// here, counting from `mover`'s own back row.
    #[must_use]
    pub fn progress(self, mover: Side, rows_per_side: u8) -> u16 {
        if self.side == mover {
            u16::from(self.row)
        } else {
            2 * u16::from(rows_per_side) - 1 - u16::from(self.row)
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}_{}", self.side, self.row, self.lane)
    }
}
