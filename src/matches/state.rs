//! Match state.

use log::info;

use crate::board::Board;
use crate::cards::{CardId, Deck};
use crate::core::{GameRng, MatchConfig, MatchGoal, MatchId, PlayerCounters, Side, SideMap};
use crate::error::EngineError;
use crate::library::{Draw, Library};
use crate::turn::{Turn, TurnNote, TurnPhase};

/// Everything that makes up one game in progress.
///
/// A match owns its board, both libraries, both hands, both sides'
/// counters and its RNG. Turns are driven through
/// [`TurnOrchestrator`](crate::turn::TurnOrchestrator), which needs
/// `&mut Match`, so a match can never have two turns running at once.
#[derive(Clone, Debug)]
pub struct Match {
    pub(crate) id: MatchId,
    pub(crate) config: MatchConfig,
    pub(crate) board: Board,
    pub(crate) libraries: SideMap<Library>,
    pub(crate) hands: SideMap<Vec<CardId>>,
    pub(crate) counters: SideMap<PlayerCounters>,
    pub(crate) rng: GameRng,
    pub(crate) turn_number: u32,
    pub(crate) next_phase: TurnPhase,
    pub(crate) draft: Option<Turn>,
    pub(crate) winner: Option<Side>,
}

impl Match {
    /// Start a match where both sides shuffle their library from `deck`.
    ///
    /// The AI draws its opening hand immediately; the player asks for theirs
    /// with [`Match::draw_opening_hand`].
    #[must_use]
    pub fn new(id: MatchId, deck: &Deck, config: MatchConfig, seed: u64) -> Self {
        Self::with_decks(id, deck, deck, config, seed)
    }

    /// Start a match with separate decks, e.g. a puzzle deck for the AI.
    #[must_use]
    pub fn with_decks(
        id: MatchId,
        player_deck: &Deck,
        ai_deck: &Deck,
        config: MatchConfig,
        seed: u64,
    ) -> Self {
        let mut rng = GameRng::new(seed);
        let libraries = SideMap::new(|side| {
            let deck = match side {
                Side::Player => player_deck,
                Side::Ai => ai_deck,
            };
            Library::new(&deck.cards, &mut rng)
        });
        let counters = SideMap::with_value(PlayerCounters::new(config.starting_tech, config.starting_life));

        let mut state = Self {
            id,
            board: Board::from_config(&config),
            libraries,
            hands: SideMap::default(),
            counters,
            rng,
            turn_number: 0,
            next_phase: TurnPhase::Heal,
            draft: None,
            winner: None,
            config,
        };

        let opening = state.config.ai_opening_hand;
        state.draw_hand(Side::Ai, opening);
        info!(
            "{} created: {} player cards, {} ai cards, seed {seed}",
            state.id,
            player_deck.len(),
            ai_deck.len()
        );
        state
    }

    #[must_use]
    pub fn id(&self) -> MatchId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn library(&self, side: Side) -> &Library {
        &self.libraries[side]
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardId] {
        &self.hands[side]
    }

    #[must_use]
    pub fn counters(&self, side: Side) -> &PlayerCounters {
        &self.counters[side]
    }

    /// Number of turns completed.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The turn step that must run next.
    #[must_use]
    pub fn next_phase(&self) -> TurnPhase {
        self.next_phase
    }

    /// Whether a turn has started and not yet reached its draw step.
    #[must_use]
    pub fn turn_in_progress(&self) -> bool {
        !self.next_phase.starts_turn()
    }

    /// The winner, once one has been declared.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Record the winner reported by whoever evaluates the win condition.
    /// No further turns can be played afterwards.
    pub fn declare_winner(&mut self, side: Side) {
        info!("{} won by {side}", self.id);
        self.winner = Some(side);
    }

    /// Draw `n` cards into `side`'s hand.
    pub fn draw_hand(&mut self, side: Side, n: usize) -> Draw {
        let draw = self.libraries[side].draw(n, &mut self.rng);
        self.hands[side].extend_from_slice(draw.cards());
        draw
    }

    /// Draw the player's configured opening hand.
    pub fn draw_opening_hand(&mut self) -> Draw {
        self.draw_hand(Side::Player, self.config.opening_hand)
    }

    pub(crate) fn ensure_playable(&self) -> Result<(), EngineError> {
        match self.winner {
            Some(_) => Err(EngineError::MatchOver),
            None => Ok(()),
        }
    }

    /// Move past `phase` if it is the one that must run next.
    pub(crate) fn enter(&mut self, phase: TurnPhase) -> Result<(), EngineError> {
        if self.next_phase != phase {
            return Err(EngineError::InvalidPhaseTransition {
                expected: self.next_phase,
                requested: phase,
            });
        }
        self.next_phase = phase.next();
        Ok(())
    }

    /// The record of the turn in progress.
    pub(crate) fn draft(&mut self) -> &mut Turn {
        let number = self.turn_number + 1;
        self.draft.get_or_insert_with(|| Turn::new(number))
    }

    /// Remove one copy of `card` from `side`'s hand and put it on the
    /// library's discard pile.
    pub(crate) fn discard_from_hand(&mut self, side: Side, card: CardId) -> bool {
        let hand = &mut self.hands[side];
        let Some(index) = hand.iter().position(|&c| c == card) else {
            return false;
        };
        hand.remove(index);
        self.libraries[side].discard(card);
        true
    }

    /// Draw for `side` during a turn, noting any shortfall on the draft.
    pub(crate) fn draw_during_turn(&mut self, side: Side, n: usize) -> Vec<CardId> {
        let draw = self.draw_hand(side, n);
        if draw.shortfall() > 0 {
            self.draft().note(TurnNote::LibraryExhausted {
                side,
                requested: draw.requested(),
                drawn: draw.cards().len(),
            });
        }
        draw.into_cards()
    }

    /// Apply base damage to `side`'s life, unless the goal shields it.
    pub(crate) fn damage_base(&mut self, side: Side, damage: i32) {
        if damage <= 0 {
            return;
        }
        if side == Side::Ai && self.config.goal == MatchGoal::KillUnits {
            self.draft().note(TurnNote::BaseShielded { side, damage });
            return;
        }
        self.counters[side].life -= damage;
    }
}

/// Create a match: two libraries shuffled from `deck` and an empty board.
#[must_use]
pub fn init_match(id: MatchId, deck: &Deck, config: MatchConfig, seed: u64) -> Match {
    Match::new(id, deck, config, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        let mut cards = vec![CardId::new(1); 4];
        cards.extend([CardId::new(2); 3]);
        Deck::new("Starter", cards)
    }

    #[test]
    fn test_init_match() {
        let state = init_match(MatchId::new(1), &deck(), MatchConfig::default(), 42);

        assert_eq!(state.board().units().count(), 0);
        assert_eq!(state.hand(Side::Ai).len(), 3);
        assert!(state.hand(Side::Player).is_empty());
        assert_eq!(state.library(Side::Player).remaining(), 7);
        assert_eq!(state.library(Side::Ai).remaining(), 4);
        assert_eq!(state.counters(Side::Player).tech, 1);
        assert_eq!(state.counters(Side::Ai).life, 20);
        assert_eq!(state.next_phase(), TurnPhase::Heal);
        assert!(!state.turn_in_progress());
    }

    #[test]
    fn test_same_seed_same_match() {
        let a = init_match(MatchId::new(1), &deck(), MatchConfig::default(), 9);
        let b = init_match(MatchId::new(2), &deck(), MatchConfig::default(), 9);

        assert_eq!(a.library(Side::Player), b.library(Side::Player));
        assert_eq!(a.hand(Side::Ai), b.hand(Side::Ai));
    }

    #[test]
    fn test_separate_decks() {
        let puzzle = Deck::puzzle("Puzzle", vec![CardId::new(9); 2]);
        let state = Match::with_decks(MatchId::new(1), &deck(), &puzzle, MatchConfig::default(), 3);

        assert_eq!(state.library(Side::Player).deck(), deck().cards.as_slice());
        assert_eq!(state.library(Side::Ai).deck(), puzzle.cards.as_slice());
        assert_eq!(state.hand(Side::Ai), &[CardId::new(9); 2]);
    }

    #[test]
    fn test_opening_hand() {
        let mut state = init_match(MatchId::new(1), &deck(), MatchConfig::default(), 42);
        let draw = state.draw_opening_hand();

        assert_eq!(draw.cards().len(), 5);
        assert_eq!(state.hand(Side::Player), draw.cards());
    }

    #[test]
    fn test_discard_from_hand() {
        let mut state = init_match(MatchId::new(1), &deck(), MatchConfig::default(), 42);
        state.draw_hand(Side::Player, 1);
        let card = state.hand(Side::Player)[0];

        assert!(state.discard_from_hand(Side::Player, card));
        assert!(state.hand(Side::Player).is_empty());
        assert_eq!(state.library(Side::Player).discarded(), &[card]);
        assert!(!state.discard_from_hand(Side::Player, card));
    }

    #[test]
    fn test_enter_enforces_order() {
        let mut state = init_match(MatchId::new(1), &deck(), MatchConfig::default(), 42);

        assert!(state.enter(TurnPhase::Heal).is_ok());
        let err = state.enter(TurnPhase::Attack).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidPhaseTransition {
                expected: TurnPhase::Cast1,
                requested: TurnPhase::Attack
            }
        ));
        assert!(state.turn_in_progress());
    }

    #[test]
    fn test_kill_units_goal_shields_ai_base() {
        let config = MatchConfig::default().with_goal(MatchGoal::KillUnits);
        let mut state = init_match(MatchId::new(1), &deck(), config, 42);

        state.damage_base(Side::Ai, 3);
        state.damage_base(Side::Player, 2);

        assert_eq!(state.counters(Side::Ai).life, 20);
        assert_eq!(state.counters(Side::Player).life, 18);
        assert_eq!(
            state.draft().notes(),
            &[TurnNote::BaseShielded {
                side: Side::Ai,
                damage: 3
            }]
        );
    }

    #[test]
    fn test_declared_winner_stops_play() {
        let mut state = init_match(MatchId::new(1), &deck(), MatchConfig::default(), 42);
        assert!(state.ensure_playable().is_ok());

        state.declare_winner(Side::Player);
        assert_eq!(state.winner(), Some(Side::Player));
        assert!(matches!(state.ensure_playable(), Err(EngineError::MatchOver)));
    }
}
