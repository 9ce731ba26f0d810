//! Match configuration.
//!
//! A `MatchConfig` fixes the board geometry and the counting rules of a
//! match (opening hands, draws per turn, tech bounds, starting life) before
//! the first card is drawn. Everything has a default matching the classic
//! rules, so most callers only override what they need:
//!
//! ```
//! use grid_ccg::core::{MatchConfig, MatchGoal};
//!
//! let config = MatchConfig::default()
//!     .with_board(3, 2)
//!     .with_goal(MatchGoal::KillUnits);
//!
//! assert_eq!(config.lanes, 3);
//! assert_eq!(config.nodes_per_side(), 6);
//! assert_eq!(config.draw_per_turn, 2);
//! ```

use serde::{Deserialize, Serialize};

/// What the human is trying to achieve.
///
/// The engine only uses this to decide whether the AI's base can be hurt;
/// declaring a winner is left to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchGoal {
    /// Reduce the opponent's life to zero.
    #[default]
    DestroyBase,
    /// Puzzle mode: clear every AI unit off the board. The AI base is
    /// invulnerable.
    KillUnits,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of lanes. Lanes run through both halves of the board.
    pub lanes: u8,

    /// Rows owned by each side. Row 0 is the back row next to the base.
    pub rows_per_side: u8,

    /// Tech level both sides start with.
    pub starting_tech: i32,

    /// Tech level the AI stops teching at.
    pub max_tech: i32,

    /// Life both bases start with.
    pub starting_life: i32,

    /// Cards the human draws at the end of every turn.
    pub draw_per_turn: usize,

    /// Cards the human draws when asking for an opening hand.
    pub opening_hand: usize,

    /// Cards the AI draws when the match is created.
    pub ai_opening_hand: usize,

    /// Hand size the AI tops up to at the start of its turn.
    pub ai_hand_size: usize,

    /// Win condition in play.
    pub goal: MatchGoal,
}

impl MatchConfig {
    /// Create a configuration with the given board geometry and default rules.
    pub fn new(lanes: u8, rows_per_side: u8) -> Self {
        assert!(lanes > 0, "Board must have at least 1 lane");
        assert!(rows_per_side > 0, "Board must have at least 1 row per side");

        Self {
            lanes,
            rows_per_side,
            starting_tech: 1,
            max_tech: 5,
            starting_life: 20,
            draw_per_turn: 2,
            opening_hand: 5,
            ai_opening_hand: 3,
            ai_hand_size: 5,
            goal: MatchGoal::DestroyBase,
        }
    }

    /// Replace the board geometry.
    #[must_use]
    pub fn with_board(mut self, lanes: u8, rows_per_side: u8) -> Self {
        assert!(lanes > 0, "Board must have at least 1 lane");
        assert!(rows_per_side > 0, "Board must have at least 1 row per side");
        self.lanes = lanes;
        self.rows_per_side = rows_per_side;
        self
    }

    /// Set the starting and maximum tech levels.
    #[must_use]
    pub fn with_tech(mut self, starting: i32, max: i32) -> Self {
        self.starting_tech = starting;
        self.max_tech = max;
        self
    }

    /// Set starting life for both bases.
    #[must_use]
    pub fn with_starting_life(mut self, life: i32) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the per-turn draw count.
    #[must_use]
    pub fn with_draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    /// Set the AI's opening hand and the size it refills to.
    #[must_use]
    pub fn with_ai_hand(mut self, opening: usize, refill_to: usize) -> Self {
        self.ai_opening_hand = opening;
        self.ai_hand_size = refill_to;
        self
    }

    /// Set the win condition.
    #[must_use]
    pub fn with_goal(mut self, goal: MatchGoal) -> Self {
        self.goal = goal;
        self
    }

    /// Number of nodes in one side's half.
    #[must_use]
    pub fn nodes_per_side(&self) -> usize {
        usize::from(self.lanes) * usize::from(self.rows_per_side)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(5, 3)
    }
}
