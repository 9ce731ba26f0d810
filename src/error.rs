//! Error kinds surfaced by the engine.
//!
//! Casting errors are recoverable: the turn carries on and the failed cast is
//! recorded as skipped. Engine errors abort the operation that raised them
//! and leave the match as it was before the call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Position;
use crate::cards::CardId;
use crate::core::MatchId;
use crate::turn::TurnPhase;

/// Why a single cast was rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastError {
    /// A chosen-aim card was pointed at a node outside its candidate set, or
    /// at no node at all.
    #[error("invalid target {0:?}")]
    InvalidTarget(Option<Position>),

    /// A random-aim card had no candidate to pick from.
    #[error("no valid target")]
    NoValidTarget,

    /// The caster's tech level is below the card's requirement.
    #[error("requires tech {required}, caster has {current}")]
    InsufficientTech { required: i32, current: i32 },

    /// The catalog has no card with this id.
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    /// The card is not in the caster's hand.
    #[error("{0} is not in hand")]
    CardNotInHand(CardId),
}

/// Errors that abort an engine operation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A turn step was called out of sequence.
    #[error("invalid phase transition: expected {expected:?}, got {requested:?}")]
    InvalidPhaseTransition {
        expected: TurnPhase,
        requested: TurnPhase,
    },

    /// The match table has no match with this id.
    #[error("unknown match {0}")]
    UnknownMatch(MatchId),

    /// A match with this id already exists.
    #[error("match {0} already exists")]
    DuplicateMatch(MatchId),

    /// The match already has a declared winner.
    #[error("match is over")]
    MatchOver,

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Why a deck cannot be used.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// The deck holds more cards than allowed.
    #[error("deck has {count} cards, maximum is {max}")]
    TooManyCards { count: usize, max: usize },

    /// The deck's total card power exceeds the budget.
    #[error("deck is worth {points} points, maximum is {max}")]
    OverPointBudget { points: i32, max: i32 },

    /// The deck references a card the catalog does not know.
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    /// A card needed for the starter deck is missing from the catalog.
    #[error("starter card {0:?} is missing from the catalog")]
    MissingStarterCard(String),
}
