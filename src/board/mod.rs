//! Board model: positions, nodes, units, rubble.
//!
//! ## Layout
//!
//! Each side owns a half of `lanes × rows_per_side` nodes. Lanes run through
//! both halves; units walk up their own half and then down the opponent's
//! toward the opposing base.
//!
//! ## Invariants
//!
//! - At most one occupant per node.
//! - Node positions never change; units move between nodes.
//! - Unit ids are never reused within a board.

pub mod position;
pub mod node;
pub mod grid;

pub use position::Position;
pub use node::{Node, Occupant, Rubble, Unit};
pub use grid::{Board, DamageReport};
