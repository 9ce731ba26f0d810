//! The two sides of a match and per-side data storage.
//!
//! ## Side
//!
//! A match is always the human player against the AI. `Side` names one of
//! them; alignment ("friendly" / "enemy") is always relative to a caster.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for libraries, hands and
//! counters.
//!
//! ## PlayerCounters
//!
//! The numbers a side accumulates over a match: tech level, this turn's
//! resources, pending bonus draws, and base life.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player, who always acts first in a turn.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Slot index (player = 0, AI = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.pad("player"),
            Side::Ai => f.pad("ai"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use grid_ccg::core::{Side, SideMap};
///
/// let mut life: SideMap<i32> = SideMap::with_value(20);
/// life[Side::Ai] -= 3;
///
/// assert_eq!(life[Side::Player], 20);
/// assert_eq!(life[Side::Ai], 17);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Ai)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Per-side counters moved by casts and combat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounters {
    /// Current tech level; gates which cards can be cast.
    pub tech: i32,
    /// Resources gained this turn. Reset at the start of the side's turn.
    pub resources: i32,
    /// Extra cards to draw at the side's next draw step.
    pub bonus_draws: u32,
    /// Base life. Reduced by units that walk off the far edge of the board.
    pub life: i32,
}

impl PlayerCounters {
    #[must_use]
    pub fn new(tech: i32, life: i32) -> Self {
        Self {
            tech,
            life,
            ..Self::default()
        }
    }

    /// Take the pending bonus draws, leaving none.
    pub fn take_bonus_draws(&mut self) -> u32 {
        std::mem::take(&mut self.bonus_draws)
    }
}
