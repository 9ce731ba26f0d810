//! Combat: one side's attack phase.
//!
//! ## Behaviour classes
//!
//! - **melee**: one step forward per phase; attacks an enemy in the way,
//!   halts at a friend or rubble, hits the base from the last node.
//! - **ranged**: never moves; fires at the first enemy down the lane.
//! - **flying**: never moves; hits an enemy exactly three nodes ahead, or
//!   the base if that lies beyond the board.
//! - **counterattack**: only strikes back at melee and flying attackers.
//! - **wall** / **none**: never attack.
//!
//! Damage between attacker and defender is simultaneous. Destroyed units
//! leave rubble according to their card.

mod resolver;

pub use resolver::{AttackReport, CombatEvent, CombatResolver};
