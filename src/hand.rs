//! Player hands.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest running count allowed during pegging.
pub const MAX_COUNT: u8 = 31;

/// Cards held by a player.
///
/// The same type backs the six dealt cards, the four kept cards counted at
/// the end of the round, and the peg hand consumed during pegging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns whether any card can be played on the given count.
    #[must_use]
    pub fn can_play(&self, count: u8) -> bool {
        self.cards.iter().any(|card| fits(count, *card))
    }

    /// Removes a card from the hand, returning whether it was present.
    pub fn take(&mut self, card: Card) -> bool {
        if let Some(position) = self.cards.iter().position(|c| *c == card) {
            self.cards.remove(position);
            true
        } else {
            false
        }
    }

    /// Removes the cards at the given indices, returning them in index order.
    ///
    /// Returns `None` without touching the hand if an index is out of range or
    /// repeated.
    pub fn take_indices(&mut self, indices: &[usize]) -> Option<Vec<Card>> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != indices.len() || sorted.iter().any(|&i| i >= self.cards.len()) {
            return None;
        }

        let taken = indices.iter().map(|&i| self.cards[i]).collect();
        for &index in sorted.iter().rev() {
            self.cards.remove(index);
        }
        Some(taken)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

const fn fits(count: u8, card: Card) -> bool {
    count + card.value() <= MAX_COUNT
}
