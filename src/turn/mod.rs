//! Turn flow: phases, healing, the turn record, and the orchestrator that
//! runs them.

mod phase;
mod heal;
mod record;
mod orchestrator;

pub use phase::TurnPhase;
pub use heal::{FullHeal, HealBy, HealPolicy, NoHeal};
pub use record::{CastOutcome, CastRecord, Turn, TurnNote};
pub use orchestrator::{play_turn, TurnOrchestrator};
