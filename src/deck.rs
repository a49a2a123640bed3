//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;

/// An ordered deck of cards, consumed from the front while dealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the canonical 52-card deck in suit then rank order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=KING {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Builds a standard deck and shuffles it uniformly.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Builds a deck from an explicit card order. The first card is dealt first.
    ///
    /// No validation is performed; stacked decks may be shorter than 52 cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes `n` cards from the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if fewer than `n` cards remain. The
    /// deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if self.cards.len() < n {
            return Err(DeckError::Exhausted);
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Removes one card chosen uniformly at random from the remaining cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw_random<R: Rng>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Exhausted);
        }
        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Returns the remaining cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
