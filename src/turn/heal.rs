//! Start-of-turn healing.
//!
//! How much a side's units recover at the start of its turn is a rule
//! choice, so it sits behind a trait. The classic rule is a full heal.

use crate::board::Board;
use crate::core::Side;
use crate::effects::HealReport;

/// Heals a side's units at the start of its turn.
pub trait HealPolicy: Send + Sync {
    /// Heal `side`'s units on `board`, returning every unit that recovered
    /// something.
    fn heal(&self, board: &mut Board, side: Side) -> Vec<HealReport>;
}

/// Restore every unit to full defense.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullHeal;

/// Restore up to a fixed amount per unit.
#[derive(Clone, Copy, Debug)]
pub struct HealBy(pub i32);

/// Units never recover on their own.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHeal;

impl HealPolicy for FullHeal {
    fn heal(&self, board: &mut Board, side: Side) -> Vec<HealReport> {
        heal_each(board, side, i32::MAX)
    }
}

impl HealPolicy for HealBy {
    fn heal(&self, board: &mut Board, side: Side) -> Vec<HealReport> {
        heal_each(board, side, self.0)
    }
}

impl HealPolicy for NoHeal {
    fn heal(&self, _board: &mut Board, _side: Side) -> Vec<HealReport> {
        Vec::new()
    }
}

fn heal_each(board: &mut Board, side: Side, amount: i32) -> Vec<HealReport> {
    let damaged: Vec<_> = board
        .units_of(side)
        .filter(|(_, unit)| unit.damage() > 0)
        .map(|(pos, unit)| (pos, unit.id))
        .collect();

    damaged
        .into_iter()
        .filter_map(|(at, unit)| {
            let amount = board.heal(at, amount)?;
            (amount > 0).then_some(HealReport { unit, at, amount })
        })
        .collect()
}
