//! Card effects: targeting and casting.
//!
//! - `TargetSelector`: turns a card's targeting triple into concrete nodes
//! - `CastEngine`: applies a card's effect to the board and the caster's
//!   counters
//! - `Play`: what a side submits for one cast phase
//!
//! The human and the AI go through exactly the same path; the AI only
//! differs in how it picks its `Play`.

mod targeting;
mod cast;

pub use targeting::{TargetSelector, TargetSpec, Targets};
pub use cast::{CastEffect, CastEngine, HealReport, Play};
