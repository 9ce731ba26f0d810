//! Turn orchestration.
//!
//! A turn runs the fixed sequence
//!
//! ```text
//! Heal -> Cast1 -> Attack -> Cast2 -> AiTurn -> Draw
//! ```
//!
//! Each step is its own method so a client can drive a turn one phase at a
//! time. Calling a step out of order returns
//! [`EngineError::InvalidPhaseTransition`] and leaves the match untouched.
//! [`TurnOrchestrator::play_turn`] runs all six in one go.
//!
//! Rejected casts never abort a turn. They are recorded as skipped and the
//! turn carries on.

use log::{debug, info, warn};

use super::heal::{FullHeal, HealPolicy};
use super::phase::TurnPhase;
use super::record::{CastOutcome, CastRecord, Turn};
use crate::ai::{AiPolicy, AiView, HeuristicAi};
use crate::board::Board;
use crate::cards::{CardCatalog, CardId};
use crate::combat::{AttackReport, CombatResolver};
use crate::core::Side;
use crate::effects::{CastEngine, Play};
use crate::error::{CastError, EngineError};
use crate::matches::Match;

/// Drives turns of a [`Match`].
///
/// Holds the card catalog, the heal rule and the AI policy. It keeps no
/// per-match state, so one orchestrator can serve any number of matches.
pub struct TurnOrchestrator<'a> {
    catalog: &'a dyn CardCatalog,
    heal: Box<dyn HealPolicy>,
    ai: Box<dyn AiPolicy>,
}

impl<'a> TurnOrchestrator<'a> {
    /// Full heal and the heuristic AI.
    pub fn new(catalog: &'a dyn CardCatalog) -> Self {
        Self {
            catalog,
            heal: Box::new(FullHeal),
            ai: Box::new(HeuristicAi),
        }
    }

    #[must_use]
    pub fn with_heal(mut self, heal: impl HealPolicy + 'static) -> Self {
        self.heal = Box::new(heal);
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: impl AiPolicy + 'static) -> Self {
        self.ai = Box::new(ai);
        self
    }

    // ===== Full turn =====

    /// Run a whole turn and return the resulting board with the turn record.
    pub fn play_turn(
        &self,
        state: &mut Match,
        first: Play,
        second: Play,
    ) -> Result<(Board, Turn), EngineError> {
        self.heal(state)?;
        self.cast_first(state, first)?;
        self.attack(state)?;
        self.cast_second(state, second)?;
        self.ai_turn(state)?;
        let turn = self.draw(state)?;
        Ok((state.board.clone(), turn))
    }

    // ===== Player steps =====

    /// Start a turn: reset the player's resources and heal their units.
    pub fn heal(&self, state: &mut Match) -> Result<(), EngineError> {
        self.begin(state, TurnPhase::Heal)?;
        state.counters[Side::Player].resources = 0;
        let heals = self.heal.heal(&mut state.board, Side::Player);
        debug!("{} player healed {} unit(s)", state.id, heals.len());
        state.draft().record_heals(Side::Player, heals);
        Ok(())
    }

    /// The player's first cast.
    pub fn cast_first(&self, state: &mut Match, play: Play) -> Result<CastRecord, EngineError> {
        self.begin(state, TurnPhase::Cast1)?;
        Ok(self.execute(state, Side::Player, play))
    }

    /// The player's units attack.
    pub fn attack(&self, state: &mut Match) -> Result<AttackReport, EngineError> {
        self.begin(state, TurnPhase::Attack)?;
        Ok(Self::attack_with(state, Side::Player))
    }

    /// The player's second cast. Board rubble decays afterwards, closing
    /// the player's half of the turn.
    pub fn cast_second(&self, state: &mut Match, play: Play) -> Result<CastRecord, EngineError> {
        self.begin(state, TurnPhase::Cast2)?;
        let record = self.execute(state, Side::Player, play);
        let cleared = state.board.decay_rubble();
        state.draft().record_rubble_cleared(cleared);
        Ok(record)
    }

    // ===== AI =====

    /// The AI's whole turn: heal, refill its hand, cast, attack, cast,
    /// decay board rubble, then draw any bonus cards it earned.
    pub fn ai_turn(&self, state: &mut Match) -> Result<(), EngineError> {
        self.begin(state, TurnPhase::AiTurn)?;
        let side = Side::Ai;

        state.counters[side].resources = 0;
        let heals = self.heal.heal(&mut state.board, side);
        state.draft().record_heals(side, heals);

        let refill = state.config.ai_hand_size.saturating_sub(state.hands[side].len());
        let drawn = state.draw_during_turn(side, refill).len();
        state.draft().record_ai_drawn(drawn);

        let first = self.choose_ai_play(state);
        self.execute(state, side, first);
        Self::attack_with(state, side);
        let second = self.choose_ai_play(state);
        self.execute(state, side, second);

        let cleared = state.board.decay_rubble();
        state.draft().record_rubble_cleared(cleared);

        let bonus = state.counters[side].take_bonus_draws() as usize;
        let drawn = state.draw_during_turn(side, bonus).len();
        state.draft().record_ai_drawn(drawn);
        Ok(())
    }

    // ===== End of turn =====

    /// The player draws their per-turn cards plus any bonus draws. Closes
    /// the turn and hands back its record.
    pub fn draw(&self, state: &mut Match) -> Result<Turn, EngineError> {
        self.begin(state, TurnPhase::Draw)?;
        let count = state.config.draw_per_turn + state.counters[Side::Player].take_bonus_draws() as usize;
        let cards = state.draw_during_turn(Side::Player, count);
        state.draft().record_drawn(cards);

        state.turn_number += 1;
        let number = state.turn_number;
        let turn = state.draft.take().unwrap_or_else(|| Turn::new(number));
        info!(
            "{} turn {number} done: life {}/{}, {} unit(s) on board",
            state.id,
            state.counters[Side::Player].life,
            state.counters[Side::Ai].life,
            state.board.units().count()
        );
        Ok(turn)
    }

    // ===== Helpers =====

    fn begin(&self, state: &mut Match, phase: TurnPhase) -> Result<(), EngineError> {
        state.ensure_playable()?;
        state.enter(phase)
    }

    fn choose_ai_play(&self, state: &mut Match) -> Play {
        let view = AiView {
            board: &state.board,
            hand: &state.hands[Side::Ai],
            counters: &state.counters[Side::Ai],
            side: Side::Ai,
            catalog: self.catalog,
            max_tech: state.config.max_tech,
        };
        self.ai.choose(&view, &mut state.rng)
    }

    fn attack_with(state: &mut Match, side: Side) -> AttackReport {
        let report = CombatResolver::resolve_attack_phase(&mut state.board, side);
        state.damage_base(side.opponent(), report.base_damage());
        state.draft().record_attack(report.clone());
        report
    }

    fn execute(&self, state: &mut Match, side: Side, play: Play) -> CastRecord {
        let outcome = self.try_play(state, side, play).unwrap_or_else(|err| {
            warn!("{} {side} play {play:?} skipped: {err}", state.id);
            CastOutcome::Skipped(err)
        });
        let record = CastRecord { side, play, outcome };
        state.draft().record_cast(record.clone());
        record
    }

    fn try_play(&self, state: &mut Match, side: Side, play: Play) -> Result<CastOutcome, CastError> {
        match play {
            Play::Pass => Ok(CastOutcome::Passed),
            Play::TechUp(card) => {
                ensure_in_hand(state, side, card)?;
                let level = CastEngine::tech_up(&mut state.counters[side]);
                state.discard_from_hand(side, card);
                Ok(CastOutcome::TechUp { level })
            }
            Play::Cast { card, at } => {
                ensure_in_hand(state, side, card)?;
                let definition = self.catalog.get_card(card)?;
                let effect = CastEngine::cast(
                    &mut state.board,
                    &mut state.counters[side],
                    definition,
                    side,
                    at,
                    &mut state.rng,
                )?;
                state.discard_from_hand(side, card);
                Ok(CastOutcome::Resolved(effect))
            }
        }
    }
}

fn ensure_in_hand(state: &Match, side: Side, card: CardId) -> Result<(), CastError> {
    if state.hands[side].contains(&card) {
        Ok(())
    } else {
        Err(CastError::CardNotInHand(card))
    }
}

/// Play one turn with full healing and the heuristic AI.
pub fn play_turn(
    state: &mut Match,
    catalog: &dyn CardCatalog,
    first: Play,
    second: Play,
) -> Result<(Board, Turn), EngineError> {
    TurnOrchestrator::new(catalog).play_turn(state, first, second)
}
