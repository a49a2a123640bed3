use tracing::debug;

use crate::error::CutError;
use crate::result::{Outcome, ScoreReason};
use crate::scoring::{Score, ScoreItem, ScoreKind};

use super::{Match, Phase};

/// Points the dealer pegs for cutting a jack.
pub const HEELS_POINTS: u8 = 2;

impl Match {
    /// Cuts the starter from the remaining deck.
    ///
    /// A jack gives the dealer two points for his heels, which may end the
    /// match. Otherwise pegging begins with the non-dealer to play.
    ///
    /// # Errors
    ///
    /// Returns an error if both players have not yet discarded, or if the
    /// deck is empty.
    pub fn cut_starter(&mut self) -> Result<Outcome, CutError> {
        if self.phase != Phase::Cut {
            return Err(CutError::OutOfSequence);
        }

        let starter = self.deck.draw_random(&mut self.rng)?;
        self.starter = Some(starter);
        debug!(%starter, remaining = self.deck.len(), "cut starter");

        let first = self.events.len();
        if starter.is_jack() {
            let heels = ScoreItem::new(ScoreKind::Heels, HEELS_POINTS, alloc::vec![starter]);
            self.award(self.dealer, ScoreReason::Heels, Score::from_items(alloc::vec![heels]));
        }

        if !self.board.is_over() {
            self.phase = Phase::Pegging;
            self.turn = Some(self.dealer.opponent());
            self.settle_pegging();
        }
        Ok(self.outcome_since(first))
    }
}
