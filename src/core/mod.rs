//! Core engine types: sides, identifiers, RNG, configuration.
//!
//! Nothing here knows about cards or the board; the higher layers build on
//! these.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;

pub use entity::{MatchId, UnitId};
pub use player::{PlayerCounters, Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, MatchGoal};
