use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::CountError;
use crate::result::{Outcome, ScoreReason, Status};
use crate::scoring::score_hand;

use super::{Match, Phase, Player};

/// Hands counted each round: non-dealer, dealer, crib.
const TALLIES: u8 = 3;

impl Match {
    /// Returns who is counted next and why, or `None` once all three are done.
    pub fn next_tally(&self) -> Option<(Player, ScoreReason)> {
        if self.phase != Phase::Counting {
            return None;
        }
        match self.tallies {
            0 => Some((self.dealer.opponent(), ScoreReason::Hand)),
            1 => Some((self.dealer, ScoreReason::Hand)),
            2 => Some((self.dealer, ScoreReason::Crib)),
            _ => None,
        }
    }

    /// Counts the next hand: the non-dealer's, then the dealer's, then the
    /// crib.
    ///
    /// A win ends the match at once and the remaining hands are not counted.
    /// After the crib, the deal passes to the other player and a new round
    /// is dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if pegging has not finished or the match is over.
    pub fn advance_scoring(&mut self) -> Result<Outcome, CountError> {
        let (player, reason) = self.next_tally().ok_or(CountError::OutOfSequence)?;
        let starter = self.starter.ok_or(CountError::OutOfSequence)?;
        let cards = match reason {
            ScoreReason::Crib => self.crib.as_slice(),
            _ => self.hand(player),
        };
        let cards: [Card; 4] = cards.try_into().map_err(|_| CountError::OutOfSequence)?;

        let score = score_hand(&cards, starter, reason == ScoreReason::Crib);
        debug!(?player, ?reason, points = score.points, "counted hand");

        let first = self.events.len();
        self.tallies += 1;
        self.award(player, reason, score);

        let mut outcome = self.outcome_since(first);
        if self.board.is_over() || self.tallies < TALLIES {
            return Ok(outcome);
        }

        self.dealer = self.dealer.opponent();
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_round(deck)?;
        outcome.status = Status::NextRound;
        Ok(outcome)
    }
}
