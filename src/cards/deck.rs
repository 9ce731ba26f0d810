//! Decks: the card lists libraries are built from.
//!
//! A deck is just card ids (duplicates allowed) plus the limits it was built
//! under. Regular decks have a size limit and a point budget over
//! `card_power_level`; puzzle decks are hand-made and only carry a size
//! limit.

use serde::{Deserialize, Serialize};

use super::attributes::AttackType;
use super::definition::{CardDefinition, CardId};
use super::registry::CardCatalog;
use crate::error::DeckError;

/// Default maximum number of cards in a deck.
pub const DEFAULT_MAX_SIZE: usize = 20;

/// Default point budget for a deck.
pub const DEFAULT_MAX_POINTS: i32 = 40;

/// An ordered list of card ids a library is shuffled from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub nickname: String,
    pub cards: Vec<CardId>,
    pub max_size: usize,
    /// `None` for puzzle decks, which are not bound by a point budget.
    pub max_points: Option<i32>,
}

impl Deck {
    /// Create a regular deck with the default limits.
    #[must_use]
    pub fn new(nickname: impl Into<String>, cards: Vec<CardId>) -> Self {
        Self {
            nickname: nickname.into(),
            cards,
            max_size: DEFAULT_MAX_SIZE,
            max_points: Some(DEFAULT_MAX_POINTS),
        }
    }

    /// Create a puzzle deck: size-limited, no point budget.
    #[must_use]
    pub fn puzzle(nickname: impl Into<String>, cards: Vec<CardId>) -> Self {
        Self {
            max_points: None,
            ..Self::new(nickname, cards)
        }
    }

    /// The deck every new player starts with: four 1/2 melee soldiers and
    /// three 1/1 ranged archers, all tech 1.
    pub fn starter(catalog: &[&CardDefinition]) -> Result<Self, DeckError> {
        let soldier = find_starter(catalog, "soldier", 1, 2, AttackType::Melee)?;
        let archer = find_starter(catalog, "archer", 1, 1, AttackType::Ranged)?;

        let mut cards = vec![soldier; 4];
        cards.extend([archer; 3]);
        Ok(Self::new("Soldiers 'n archers", cards))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up every card in the deck, duplicates included.
    ///
    /// Fails on the first id the catalog does not know.
    pub fn resolve<'a, C: CardCatalog + ?Sized>(
        &self,
        catalog: &'a C,
    ) -> Result<Vec<&'a CardDefinition>, DeckError> {
        self.cards
            .iter()
            .map(|&id| catalog.card(id).ok_or(DeckError::UnknownCard(id)))
            .collect()
    }

    /// Total `card_power_level` of the deck.
    pub fn points<C: CardCatalog + ?Sized>(&self, catalog: &C) -> Result<i32, DeckError> {
        Ok(self.resolve(catalog)?.iter().map(|c| c.card_power_level).sum())
    }

    /// Check the deck against its size limit and point budget.
    pub fn validate<C: CardCatalog + ?Sized>(&self, catalog: &C) -> Result<(), DeckError> {
        if self.cards.len() > self.max_size {
            return Err(DeckError::TooManyCards {
                count: self.cards.len(),
                max: self.max_size,
            });
        }

        let points = self.points(catalog)?;
        match self.max_points {
            Some(max) if points > max => Err(DeckError::OverPointBudget { points, max }),
            _ => Ok(()),
        }
    }
}

fn find_starter(
    catalog: &[&CardDefinition],
    role: &str,
    attack: i32,
    defense: i32,
    attack_type: AttackType,
) -> Result<CardId, DeckError> {
    catalog
        .iter()
        .filter(|c| {
            c.attack == attack
                && c.defense == defense
                && c.attack_type == attack_type
                && c.tech_level == 1
        })
        .map(|c| c.id)
        .min()
        .ok_or_else(|| DeckError::MissingStarterCard(role.to_string()))
}
