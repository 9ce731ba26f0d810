//! AI policies.
//!
//! Policies are trait-based so the opponent can be swapped without touching
//! the turn flow:
//! - `PassingAi`: never does anything, handy for scripted tests
//! - `RandomAi`: picks uniformly among legal plays
//! - `HeuristicAi`: plays its strongest affordable card at the best node

use std::cmp::Reverse;

use crate::board::{Board, Position};
use crate::cards::{CardCatalog, CardDefinition, CardId, TargetAiming};
use crate::core::{GameRng, PlayerCounters, Side};
use crate::effects::{Play, TargetSelector};

/// What the AI is allowed to look at when choosing a play.
pub struct AiView<'a> {
    pub board: &'a Board,
    pub hand: &'a [CardId],
    pub counters: &'a PlayerCounters,
    pub side: Side,
    pub catalog: &'a dyn CardCatalog,
    pub max_tech: i32,
}

impl<'a> AiView<'a> {
    /// Hand cards the catalog knows, in hand order, without duplicates.
    pub fn known_cards(&self) -> Vec<&'a CardDefinition> {
        let mut seen: Vec<CardId> = Vec::with_capacity(self.hand.len());
        let mut cards = Vec::with_capacity(self.hand.len());
        for &id in self.hand {
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            if let Some(card) = self.catalog.card(id) {
                cards.push(card);
            }
        }
        cards
    }

    /// Whether the caster's tech is high enough for `card`.
    #[must_use]
    pub fn affordable(&self, card: &CardDefinition) -> bool {
        card.tech_level <= self.counters.tech
    }

    /// Whether a tech-up is still worth anything.
    #[must_use]
    pub fn can_tech_up(&self) -> bool {
        self.counters.tech < self.max_tech
    }

    /// Every play that would not be rejected.
    pub fn legal_plays(&self) -> Vec<Play> {
        let mut plays = vec![Play::Pass];
        let cards = self.known_cards();

        if self.can_tech_up() {
            plays.extend(cards.iter().map(|card| Play::TechUp(card.id)));
        }

        for card in cards.into_iter().filter(|card| self.affordable(card)) {
            let candidates = TargetSelector::for_card(card, self.side).valid_targets(self.board);
            match card.target_aiming {
                TargetAiming::Chosen => plays.extend(
                    candidates
                        .into_iter()
                        .map(|at| Play::Cast { card: card.id, at: Some(at) }),
                ),
                TargetAiming::Random if candidates.is_empty() => {}
                TargetAiming::Random | TargetAiming::All => {
                    plays.push(Play::Cast { card: card.id, at: None });
                }
            }
        }
        plays
    }
}

/// Decides what the AI plays in one cast phase.
pub trait AiPolicy: Send + Sync {
    fn choose(&self, view: &AiView<'_>, rng: &mut GameRng) -> Play;
}

/// Always passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassingAi;

impl AiPolicy for PassingAi {
    fn choose(&self, _view: &AiView<'_>, _rng: &mut GameRng) -> Play {
        Play::Pass
    }
}

/// Uniform over legal plays.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAi;

impl AiPolicy for RandomAi {
    fn choose(&self, view: &AiView<'_>, rng: &mut GameRng) -> Play {
        let plays = view.legal_plays();
        rng.choose(&plays).copied().unwrap_or(Play::Pass)
    }
}

/// Greedy single-step heuristic.
///
/// Tries affordable cards from the highest `card_power_level` down. The first
/// card with a sensible target is cast:
/// - summons go to the lane with the fewest enemy units, front row first
/// - damage goes to a unit it kills, otherwise the most valuable enemy
/// - heals go to the most damaged unit
///
/// With nothing castable it discards its weakest card for tech, or passes
/// once tech is maxed.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicAi;

impl AiPolicy for HeuristicAi {
    fn choose(&self, view: &AiView<'_>, _rng: &mut GameRng) -> Play {
        let mut cards = view.known_cards();
        cards.sort_by_key(|card| (Reverse(card.card_power_level), card.id));

        for card in cards.iter().filter(|card| view.affordable(card)) {
            if let Some(play) = plan_cast(view, card) {
                return play;
            }
        }

        match cards.last() {
            Some(weakest) if view.can_tech_up() => Play::TechUp(weakest.id),
            _ => Play::Pass,
        }
    }
}

fn plan_cast(view: &AiView<'_>, card: &CardDefinition) -> Option<Play> {
    let candidates = TargetSelector::for_card(card, view.side).valid_targets(view.board);
    let cast = |at| Some(Play::Cast { card: card.id, at });

    match card.target_aiming {
        TargetAiming::Chosen => {
            let at = if card.summons() {
                best_summon(view, &candidates)
            } else if card.deals_damage() {
                best_hit(view, card, &candidates)
            } else if card.heals() {
                best_heal(view, &candidates)
            } else {
                candidates.first().copied()
            };
            cast(Some(at?))
        }
        TargetAiming::Random if candidates.is_empty() => None,
        TargetAiming::Random => cast(None),
        TargetAiming::All if candidates.is_empty() && has_board_effect(card) => None,
        TargetAiming::All => cast(None),
    }
}

fn has_board_effect(card: &CardDefinition) -> bool {
    card.summons() || card.deals_damage() || card.heals()
}

fn best_summon(view: &AiView<'_>, candidates: &[Position]) -> Option<Position> {
    let rows = view.board.rows_per_side();
    let enemy = view.side.opponent();
    candidates.iter().copied().min_by_key(|pos| {
        let pressure = view.board.units_of(enemy).filter(|(p, _)| p.lane == pos.lane).count();
        (pressure, Reverse(pos.progress(view.side, rows)), pos.lane)
    })
}

fn best_hit(view: &AiView<'_>, card: &CardDefinition, candidates: &[Position]) -> Option<Position> {
    let score = |pos: &Position| {
        let unit = view.board.unit_at(*pos)?;
        let catalog_power = view
            .catalog
            .card(unit.card)
            .map_or(0, |def| def.unit_power_level);
        let kills = unit.defense <= card.direct_damage;
        let hostile = unit.side != view.side;
        Some((hostile, kills, catalog_power, Reverse(unit.defense), Reverse(*pos)))
    };
    candidates
        .iter()
        .filter_map(|pos| score(pos).map(|s| (s, *pos)))
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, pos)| pos)
}

fn best_heal(view: &AiView<'_>, candidates: &[Position]) -> Option<Position> {
    candidates
        .iter()
        .filter_map(|pos| {
            let unit = view.board.unit_at(*pos)?;
            (unit.side == view.side && unit.damage() > 0).then_some((unit.damage(), Reverse(*pos)))
        })
        .max()
        .map(|(_, Reverse(pos))| pos)
}
