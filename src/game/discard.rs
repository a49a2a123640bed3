use tracing::debug;

use crate::ai;
use crate::card::Card;
use crate::error::DiscardError;

use super::{CRIB_DISCARDS, Match, Phase, Player};

impl Match {
    /// Lays two cards from a player's hand away into the crib.
    ///
    /// `indices` are positions in [`Match::hand`]. Once both players have
    /// discarded, the round moves on to the cut.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the discard phase, the player
    /// has already discarded, or `indices` is not exactly two distinct
    /// positions within the hand.
    pub fn select_discard(
        &mut self,
        player: Player,
        indices: &[usize],
    ) -> Result<Phase, DiscardError> {
        if self.phase != Phase::Discard {
            return Err(DiscardError::OutOfSequence);
        }
        if self.discarded[player.index()] {
            return Err(DiscardError::AlreadyDiscarded);
        }
        if indices.len() != CRIB_DISCARDS {
            return Err(DiscardError::InvalidSelection);
        }

        let hand = &mut self.hands[player.index()];
        let laid_away = hand
            .take_indices(indices)
            .ok_or(DiscardError::InvalidSelection)?;
        self.peg_hands[player.index()] = hand.clone();
        self.discarded[player.index()] = true;
        debug!(?player, cards = ?laid_away, "discarded to crib");
        self.crib.extend(laid_away);

        if self.discarded.iter().all(|done| *done) {
            self.phase = Phase::Cut;
        }
        Ok(self.phase)
    }

    /// Lets the computer pick and lay away its two crib cards.
    ///
    /// Returns the cards laid away.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the discard phase or the
    /// computer has already discarded.
    pub fn discard_for_computer(&mut self) -> Result<[Card; 2], DiscardError> {
        if self.phase != Phase::Discard {
            return Err(DiscardError::OutOfSequence);
        }
        if self.discarded[Player::Computer.index()] {
            return Err(DiscardError::AlreadyDiscarded);
        }

        let hand = self.hand(Player::Computer);
        let owns_crib = self.dealer == Player::Computer;
        let [first, second] = ai::choose_discard(hand, owns_crib, &self.options.starter_sample)
            .ok_or(DiscardError::InvalidSelection)?;
        let cards = [hand[first], hand[second]];

        self.select_discard(Player::Computer, &[first, second])?;
        Ok(cards)
    }
}
