//! Shuffled draw pile with a discard pile behind it.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::cards::CardId;
use crate::core::GameRng;

/// A side's library.
///
/// Holds the deck it was built from, the draw pile (front = next card) and
/// the discard pile. Cards handed out by `draw` are "outstanding" until
/// they come back through `discard`, so at any time
/// `draw pile + discard pile + outstanding == deck` as multisets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    deck: Vec<CardId>,
    draw_pile: VecDeque<CardId>,
    discard_pile: Vec<CardId>,
}

impl Library {
    /// Build a library from a deck's card ids and shuffle it.
    #[must_use]
    pub fn new(deck: &[CardId], rng: &mut GameRng) -> Self {
        let mut order = deck.to_vec();
        rng.shuffle(&mut order);

        Self {
            deck: deck.to_vec(),
            draw_pile: order.into(),
            discard_pile: Vec::new(),
        }
    }

    /// Draw up to `n` cards from the front of the draw pile.
    ///
    /// When the draw pile runs dry mid-draw, the discard pile is shuffled
    /// and placed underneath before drawing continues. If both piles
    /// together hold fewer than `n` cards, every remaining card is returned
    /// and the gap is reported by [`Draw::shortfall`].
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Draw {
        let mut cards = Vec::with_capacity(n);

        while cards.len() < n {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.reshuffle(rng);
            }
            if let Some(card) = self.draw_pile.pop_front() {
                cards.push(card);
            }
        }

        let draw = Draw { requested: n, cards };
        if draw.shortfall() > 0 {
            warn!(
                "library exhausted: requested {}, drew {}",
                draw.requested,
                draw.cards.len()
            );
        }
        draw
    }

    /// Return a drawn card to the discard pile.
    ///
    /// Returns `false` (and changes nothing) if `card` is not currently
    /// outstanding, i.e. it was never part of the deck or every copy is
    /// already back in one of the piles.
    pub fn discard(&mut self, card: CardId) -> bool {
        if self.outstanding_count(card) == 0 {
            return false;
        }
        self.discard_pile.push(card);
        true
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile, oldest first.
    #[must_use]
    pub fn discarded(&self) -> &[CardId] {
        &self.discard_pile
    }

    /// The draw pile, front first.
    pub fn draw_order(&self) -> impl Iterator<Item = CardId> + '_ {
        self.draw_pile.iter().copied()
    }

    /// The deck this library was built from.
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    /// Number of cards currently outside both piles.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.deck.len() - self.draw_pile.len() - self.discard_pile.len()
    }

    fn outstanding_count(&self, card: CardId) -> usize {
        let total = self.deck.iter().filter(|&&c| c == card).count();
        let in_draw = self.draw_pile.iter().filter(|&&c| c == card).count();
        let in_discard = self.discard_pile.iter().filter(|&&c| c == card).count();
        total.saturating_sub(in_draw + in_discard)
    }

    fn reshuffle(&mut self, rng: &mut GameRng) {
        debug!("reshuffling {} discarded cards", self.discard_pile.len());
        let mut recycled = std::mem::take(&mut self.discard_pile);
        rng.shuffle(&mut recycled);
        self.draw_pile.extend(recycled);
    }
}

/// Result of a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    requested: usize,
    cards: Vec<CardId>,
}

impl Draw {
    /// The drawn card ids, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Consume the draw, keeping the card ids.
    #[must_use]
    pub fn into_cards(self) -> Vec<CardId> {
        self.cards
    }

    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// How many requested cards could not be drawn. Non-zero means the
    /// library is exhausted.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.requested - self.cards.len()
    }
}

/// Draw `n` cards from `library` for a hand.
pub fn draw_hand(library: &mut Library, n: usize, rng: &mut GameRng) -> Draw {
    library.draw(n, rng)
}
