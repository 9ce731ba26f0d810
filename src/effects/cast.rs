//! Casting cards onto the board.
//!
//! A cast runs in a fixed order: tech check, target selection, board
//! mutation, counter updates. Everything that can fail happens before the
//! first mutation, so a rejected cast leaves the board and the caster's
//! counters exactly as they were.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::targeting::{TargetSelector, Targets};
use crate::board::{Board, DamageReport, Position};
use crate::cards::{CardCatalog, CardDefinition, CardId, TargetAiming};
use crate::core::{GameRng, PlayerCounters, Side, UnitId};
use crate::error::CastError;

/// What a side does in one cast phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Play {
    /// Do nothing.
    Pass,
    /// Discard a card to raise tech by one.
    TechUp(CardId),
    /// Cast a card. `at` names the node for chosen-aim cards and is ignored
    /// by random and all-aim cards.
    Cast { card: CardId, at: Option<Position> },
}

impl Play {
    /// Build a play from an optional card and an optional node, the way
    /// clients submit them: no card is a pass and a card with a node is a
    /// cast. A card without a node is cast when it aims randomly or at
    /// everything, and traded in for tech otherwise.
    #[must_use]
    pub fn from_parts<C: CardCatalog + ?Sized>(
        catalog: &C,
        card: Option<CardId>,
        at: Option<Position>,
    ) -> Self {
        match (card, at) {
            (None, _) => Play::Pass,
            (Some(card), Some(at)) => Play::Cast { card, at: Some(at) },
            (Some(card), None) => match catalog.card(card) {
                Some(def) if def.target_aiming != TargetAiming::Chosen => Play::Cast { card, at: None },
                _ => Play::TechUp(card),
            },
        }
    }

    /// The card this play uses, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match *self {
            Play::Pass => None,
            Play::TechUp(card) | Play::Cast { card, .. } => Some(card),
        }
    }
}

/// A unit healed by a cast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealReport {
    pub unit: UnitId,
    pub at: Position,
    pub amount: i32,
}

/// Everything a successful cast changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastEffect {
    pub targets: Targets,
    pub summoned: SmallVec<[UnitId; 2]>,
    pub hits: Vec<DamageReport>,
    pub heals: Vec<HealReport>,
    pub tech_change: i32,
    pub resource_bonus: i32,
    pub bonus_draws: u32,
}

/// Applies card effects.
pub struct CastEngine;

impl CastEngine {
    /// Cast `card` for `caster`.
    ///
    /// Per target: summon onto empty nodes (for cards with a body), deal
    /// `direct_damage` to units, or heal them when it is negative. Counter
    /// effects apply once per cast, even when `all` aiming found nothing.
    pub fn cast(
        board: &mut Board,
        counters: &mut PlayerCounters,
        card: &CardDefinition,
        caster: Side,
        aim: Option<Position>,
        rng: &mut GameRng,
    ) -> Result<CastEffect, CastError> {
        if card.tech_level > counters.tech {
            return Err(CastError::InsufficientTech {
                required: card.tech_level,
                current: counters.tech,
            });
        }

        let targets = TargetSelector::for_card(card, caster).resolve(board, aim, rng)?;
        let mut effect = CastEffect::default();

        for &pos in &targets {
            if card.summons() {
                if let Some(id) = board.summon(pos, card, caster) {
                    effect.summoned.push(id);
                }
            } else if card.deals_damage() {
                if let Some(hit) = board.damage(pos, card.direct_damage) {
                    effect.hits.push(hit);
                }
            } else if card.heals() {
                let unit = board.unit_at(pos).map(|u| u.id);
                if let (Some(unit), Some(amount)) = (unit, board.heal(pos, -card.direct_damage)) {
                    effect.heals.push(HealReport { unit, at: pos, amount });
                }
            }
        }
        effect.targets = targets;

        counters.tech += card.tech_change;
        counters.resources += card.resource_bonus;
        counters.bonus_draws += card.draw_num;
        effect.tech_change = card.tech_change;
        effect.resource_bonus = card.resource_bonus;
        effect.bonus_draws = card.draw_num;

        debug!(
            "{caster} cast {card} on {} target(s): {} summoned, {} hit, {} healed",
            effect.targets.len(),
            effect.summoned.len(),
            effect.hits.len(),
            effect.heals.len()
        );
        Ok(effect)
    }

    /// Cast onto the tech pseudo-target: raise tech by one without touching
    /// the board. Returns the new tech level.
    pub fn tech_up(counters: &mut PlayerCounters) -> i32 {
        counters.tech += 1;
        counters.tech
    }
}
