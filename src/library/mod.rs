//! Libraries: where each side's cards come from.
//!
//! Each side gets its own `Library`, shuffled from a deck when the match is
//! created. Drawing never fails: an exhausted library hands out what it has
//! and reports the shortfall on the returned `Draw`.

pub mod shuffled;

pub use shuffled::{draw_hand, Draw, Library};
