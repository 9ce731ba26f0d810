//! # grid-ccg
//!
//! Simulation core for a turn-based tactical card game played on a lane
//! grid against an AI opponent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every random choice (shuffles, random targets, AI
//!    tie-breaks) goes through the match's seeded `GameRng`. Same seed, same
//!    plays, same match.
//!
//! 2. **Recoverable Casts**: a rejected cast never aborts a turn. It is
//!    recorded as skipped and the board is left as it was.
//!
//! 3. **Injected Catalog**: card definitions are looked up through the
//!    `CardCatalog` trait; the engine never owns card data.
//!
//! ## Turn Flow
//!
//! ```text
//! Heal -> Cast1 -> Attack -> Cast2 -> AiTurn -> Draw
//! ```
//!
//! Each step can be driven on its own through `TurnOrchestrator`, or all
//! at once with `play_turn`, which returns the new board and an immutable
//! `Turn` record.
//!
//! ## Modules
//!
//! - `core`: Sides, identifiers, counters, RNG, configuration
//! - `cards`: Card definitions, catalog, decks
//! - `library`: Shuffled draw and discard piles
//! - `board`: The node grid, units, rubble
//! - `effects`: Targeting and casting
//! - `combat`: Attack phase resolution
//! - `turn`: Phases, healing, turn records, orchestration
//! - `ai`: AI policies
//! - `matches`: Match state, snapshots, the match table

pub mod core;
pub mod error;
pub mod cards;
pub mod library;
pub mod board;
pub mod effects;
pub mod combat;
pub mod turn;
pub mod ai;
pub mod matches;

// Re-export commonly used types
pub use crate::core::{
    MatchId, UnitId,
    Side, SideMap, PlayerCounters,
    GameRng, GameRngState,
    MatchConfig, MatchGoal,
};

pub use crate::error::{CastError, DeckError, EngineError};

pub use crate::cards::{
    AttackType, Caste, TargetAiming, TargetAlignment, TargetOccupant,
    CardId, CardDefinition, CardCatalog, CardRegistry, Deck,
};

pub use crate::library::{draw_hand, Draw, Library};

pub use crate::board::{Board, DamageReport, Node, Occupant, Position, Rubble, Unit};

pub use crate::effects::{CastEffect, CastEngine, HealReport, Play, TargetSelector, TargetSpec, Targets};

pub use crate::combat::{AttackReport, CombatEvent, CombatResolver};

pub use crate::turn::{
    play_turn, TurnOrchestrator, TurnPhase, Turn, TurnNote,
    CastOutcome, CastRecord,
    HealPolicy, FullHeal, HealBy, NoHeal,
};

pub use crate::ai::{AiPolicy, AiView, HeuristicAi, PassingAi, RandomAi};

pub use crate::matches::{init_match, Match, MatchSnapshot, MatchTable};
