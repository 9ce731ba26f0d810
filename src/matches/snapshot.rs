//! Match snapshots.
//!
//! A snapshot captures everything needed to resume a match exactly,
//! including the RNG stream position, so a restored match draws and rolls
//! the same way the original would have.

use serde::{Deserialize, Serialize};

use super::state::Match;
use crate::board::Board;
use crate::cards::CardId;
use crate::core::{GameRng, GameRngState, MatchConfig, MatchId, PlayerCounters, Side, SideMap};
use crate::error::EngineError;
use crate::library::Library;
use crate::turn::{Turn, TurnPhase};

/// Serializable form of a [`Match`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub id: MatchId,
    pub config: MatchConfig,
    pub board: Board,
    pub libraries: SideMap<Library>,
    pub hands: SideMap<Vec<CardId>>,
    pub counters: SideMap<PlayerCounters>,
    pub rng: GameRngState,
    pub turn_number: u32,
    pub next_phase: TurnPhase,
    pub draft: Option<Turn>,
    pub winner: Option<Side>,
}

impl MatchSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot written by [`MatchSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Match {
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            id: self.id,
            config: self.config.clone(),
            board: self.board.clone(),
            libraries: self.libraries.clone(),
            hands: self.hands.clone(),
            counters: self.counters.clone(),
            rng: self.rng.state(),
            turn_number: self.turn_number,
            next_phase: self.next_phase,
            draft: self.draft.clone(),
            winner: self.winner,
        }
    }

    /// Rebuild a match from a snapshot.
    #[must_use]
    pub fn restore(snapshot: MatchSnapshot) -> Self {
        Self {
            id: snapshot.id,
            config: snapshot.config,
            board: snapshot.board,
            libraries: snapshot.libraries,
            hands: snapshot.hands,
            counters: snapshot.counters,
            rng: GameRng::from_state(&snapshot.rng),
            turn_number: snapshot.turn_number,
            next_phase: snapshot.next_phase,
            draft: snapshot.draft,
            winner: snapshot.winner,
        }
    }
}
