//! Card lookup.
//!
//! The engine reads card definitions through the `CardCatalog` trait and
//! never writes to it, so definitions can come from anywhere: a database
//! cache, a JSON file, or the in-memory `CardRegistry` below.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::error::CastError;

/// Read-only card lookup injected into the engine.
pub trait CardCatalog {
    /// Look up a card definition.
    fn card(&self, id: CardId) -> Option<&CardDefinition>;

    /// Look up a card definition, failing with `UnknownCard`.
    fn get_card(&self, id: CardId) -> Result<&CardDefinition, CastError> {
        self.card(id).ok_or(CastError::UnknownCard(id))
    }
}

/// In-memory catalog of card definitions.
///
/// ## Example
///
/// ```
/// use grid_ccg::cards::{CardCatalog, CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Soldier").with_stats(1, 2));
///
/// let found = registry.get_card(CardId::new(1)).unwrap();
/// assert_eq!(found.defense, 2);
/// assert!(registry.get_card(CardId::new(2)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of definitions.
    ///
    /// Panics if two definitions share an ID.
    pub fn from_definitions(cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card);
        }
        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}

impl CardCatalog for CardRegistry {
    fn card(&self, id: CardId) -> Option<&CardDefinition> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "Test Card"));

        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Test Card");
        assert!(registry.get(CardId::new(99)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();

        registry.register(CardDefinition::new(CardId::new(1), "Card A"));
        registry.register(CardDefinition::new(CardId::new(1), "Card B"));
    }

    #[test]
    fn test_catalog_lookup_errors() {
        let registry = CardRegistry::from_definitions([CardDefinition::new(CardId::new(3), "A")]);

        assert!(registry.get_card(CardId::new(3)).is_ok());
        assert_eq!(
            registry.get_card(CardId::new(4)).unwrap_err(),
            CastError::UnknownCard(CardId::new(4))
        );
    }
}
