use tracing::debug;

use crate::ai;
use crate::card::Card;
use crate::error::PegError;
use crate::hand::MAX_COUNT;
use crate::result::{Outcome, ScoreReason};
use crate::scoring::{Score, ScoreItem, ScoreKind, score_peg};

use super::{Match, Phase, Player};

impl Match {
    fn ensure_turn(&self, player: Player) -> Result<(), PegError> {
        if self.phase != Phase::Pegging {
            return Err(PegError::OutOfSequence);
        }
        if self.turn != Some(player) {
            return Err(PegError::NotYourTurn);
        }
        Ok(())
    }

    /// Lays a card on the peg stack.
    ///
    /// Points for fifteen, thirty-one, pairs and runs are awarded at once.
    /// Reaching 31 closes the sub-round and the opponent leads the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the pegging phase, it is not
    /// the player's turn, the card is not in the player's peg hand, or the
    /// card would push the count past 31.
    pub fn play_peg_card(&mut self, player: Player, card: Card) -> Result<Outcome, PegError> {
        self.ensure_turn(player)?;

        let peg_hand = &mut self.peg_hands[player.index()];
        if !peg_hand.contains(card) {
            return Err(PegError::CardNotInHand);
        }
        if self.count + card.value() > MAX_COUNT {
            return Err(PegError::ExceedsThirtyOne);
        }

        peg_hand.take(card);
        self.peg_stack.push(card);
        self.count += card.value();
        self.last_played = Some(player);
        debug!(?player, %card, count = self.count, "pegged card");

        let first = self.events.len();
        let score = score_peg(&self.peg_stack, self.count);
        if !score.is_empty() {
            self.award(player, ScoreReason::Pegging, score);
        }
        if self.board.is_over() {
            return Ok(self.outcome_since(first));
        }

        if self.count == MAX_COUNT {
            self.reset_stack();
        }
        self.turn = Some(player.opponent());
        self.settle_pegging();
        Ok(self.outcome_since(first))
    }

    /// Says go: the player holds cards but none fits under 31.
    ///
    /// The player sits out the rest of the sub-round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the pegging phase, it is not
    /// the player's turn, the player has no cards, or the player has a legal
    /// play.
    pub fn declare_go(&mut self, player: Player) -> Result<Outcome, PegError> {
        self.ensure_turn(player)?;

        let peg_hand = &self.peg_hands[player.index()];
        if peg_hand.is_empty() {
            return Err(PegError::NoCardToPlay);
        }
        if peg_hand.can_play(self.count) {
            return Err(PegError::HasLegalPlay);
        }

        self.said_go[player.index()] = true;
        debug!(?player, count = self.count, "said go");

        let first = self.events.len();
        self.turn = Some(player.opponent());
        self.settle_pegging();
        Ok(self.outcome_since(first))
    }

    /// Lets the computer play its pegging turn: its best card, or go.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the pegging phase or it is not
    /// the computer's turn.
    pub fn play_computer_turn(&mut self) -> Result<Outcome, PegError> {
        self.ensure_turn(Player::Computer)?;

        let choice = ai::choose_peg_card(
            self.peg_hands[Player::Computer.index()].cards(),
            &self.peg_stack,
            self.count,
            self.options.ai_jitter,
            &mut self.rng,
        );
        match choice {
            Some(card) => self.play_peg_card(Player::Computer, card),
            None => self.declare_go(Player::Computer),
        }
    }

    /// Advances pegging until someone has a decision to make.
    ///
    /// Skips players with no cards or who already said go, awards the go
    /// point when neither player can continue, and moves to counting once
    /// both peg hands are empty.
    pub(super) fn settle_pegging(&mut self) {
        loop {
            if self.board.is_over() {
                return;
            }

            let can_play = Player::BOTH.map(|p| self.peg_hands[p.index()].can_play(self.count));
            if !can_play.iter().any(|playable| *playable) {
                self.close_sub_round();
                if self.board.is_over() {
                    return;
                }
                if self.peg_hands.iter().all(|hand| hand.is_empty()) {
                    self.phase = Phase::Counting;
                    self.turn = None;
                    debug!(round = self.round, "pegging finished");
                    return;
                }
                continue;
            }

            let Some(player) = self.turn else {
                return;
            };
            if can_play[player.index()] {
                return;
            }
            let peg_hand = &self.peg_hands[player.index()];
            if peg_hand.is_empty() || self.said_go[player.index()] {
                self.turn = Some(player.opponent());
                continue;
            }
            // Holding cards that do not fit: wait for `declare_go`.
            return;
        }
    }

    /// Ends a sub-round nobody can continue, awarding the go point.
    fn close_sub_round(&mut self) {
        let last = self.last_played;
        if let Some(last) = last {
            let cards = self.peg_stack.last().copied().into_iter().collect();
            let go = ScoreItem::new(ScoreKind::Go, 1, cards);
            self.award(last, ScoreReason::Go, Score::from_items(alloc::vec![go]));
            self.turn = Some(last.opponent());
        }
        self.reset_stack();
    }
}
