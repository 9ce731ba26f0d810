//! The AI opponent.
//!
//! The AI goes through the same cast engine as the player; policies only
//! decide which `Play` to submit.

mod policy;

pub use policy::{AiPolicy, AiView, HeuristicAi, PassingAi, RandomAi};
