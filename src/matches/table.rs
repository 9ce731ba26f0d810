//! Matches keyed by id.

use log::debug;
use rustc_hash::FxHashMap;

use super::state::Match;
use crate::board::Board;
use crate::cards::{CardCatalog, Deck};
use crate::core::{MatchConfig, MatchId};
use crate::effects::Play;
use crate::error::EngineError;
use crate::turn::{Turn, TurnOrchestrator};

/// Owns every live match.
///
/// Each match is independent; all mutation goes through `&mut self`, so a
/// single match can never run two turns at once.
#[derive(Clone, Debug, Default)]
pub struct MatchTable {
    matches: FxHashMap<MatchId, Match>,
}

impl MatchTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a match under `id`.
    pub fn create(
        &mut self,
        id: MatchId,
        deck: &Deck,
        config: MatchConfig,
        seed: u64,
    ) -> Result<&mut Match, EngineError> {
        self.insert(Match::new(id, deck, config, seed))
    }

    /// Adopt an existing match, e.g. one restored from a snapshot.
    pub fn insert(&mut self, state: Match) -> Result<&mut Match, EngineError> {
        use std::collections::hash_map::Entry;

        match self.matches.entry(state.id()) {
            Entry::Occupied(entry) => Err(EngineError::DuplicateMatch(*entry.key())),
            Entry::Vacant(entry) => Ok(entry.insert(state)),
        }
    }

    pub fn get(&self, id: MatchId) -> Result<&Match, EngineError> {
        self.matches.get(&id).ok_or(EngineError::UnknownMatch(id))
    }

    pub fn get_mut(&mut self, id: MatchId) -> Result<&mut Match, EngineError> {
        self.matches.get_mut(&id).ok_or(EngineError::UnknownMatch(id))
    }

    pub fn remove(&mut self, id: MatchId) -> Result<Match, EngineError> {
        debug!("dropping {id}");
        self.matches.remove(&id).ok_or(EngineError::UnknownMatch(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Play one full turn of match `id` with the default heal rule and AI.
    pub fn play_turn(
        &mut self,
        id: MatchId,
        catalog: &dyn CardCatalog,
        first: Play,
        second: Play,
    ) -> Result<(Board, Turn), EngineError> {
        let state = self.get_mut(id)?;
        TurnOrchestrator::new(catalog).play_turn(state, first, second)
    }
}
