//! Card system: definitions, lookup, and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (stats, targeting, counter effects)
//! - `CardCatalog`: Read-only lookup the engine is handed
//! - `CardRegistry`: In-memory catalog
//! - `Deck`: Card id list a library is shuffled from

pub mod attributes;
pub mod definition;
pub mod registry;
pub mod deck;

pub use attributes::{AttackType, Caste, TargetAiming, TargetAlignment, TargetOccupant};
pub use definition::{CardDefinition, CardId};
pub use registry::{CardCatalog, CardRegistry};
pub use deck::Deck;
