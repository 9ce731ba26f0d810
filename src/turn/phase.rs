//! Turn phases.

use serde::{Deserialize, Serialize};

/// Steps of a turn, in the only order they may run.
///
/// ```text
/// Heal -> Cast1 -> Attack -> Cast2 -> AiTurn -> Draw -> (Heal of next turn)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The player's units recover. Starts a new turn.
    #[default]
    Heal,
    /// The player's first cast.
    Cast1,
    /// The player's units attack.
    Attack,
    /// The player's second cast, followed by rubble decay on their half.
    Cast2,
    /// The AI plays its whole turn.
    AiTurn,
    /// The player draws. Ends the turn.
    Draw,
}

impl TurnPhase {
    /// The phase that must follow this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            TurnPhase::Heal => TurnPhase::Cast1,
            TurnPhase::Cast1 => TurnPhase::Attack,
            TurnPhase::Attack => TurnPhase::Cast2,
            TurnPhase::Cast2 => TurnPhase::AiTurn,
            TurnPhase::AiTurn => TurnPhase::Draw,
            TurnPhase::Draw => TurnPhase::Heal,
        }
    }

    /// Whether this phase begins a turn.
    #[must_use]
    pub const fn starts_turn(self) -> bool {
        matches!(self, TurnPhase::Heal)
    }
}
