//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left in the deck.
    #[error("not enough cards left in the deck")]
    Exhausted,
}

/// Errors that can occur while discarding to the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The round is not in the discard phase.
    #[error("discards are only accepted during the discard phase")]
    OutOfSequence,
    /// The selection is not exactly two distinct cards from the hand.
    #[error("select exactly two distinct cards from the hand")]
    InvalidSelection,
    /// The player has already discarded this round.
    #[error("player has already discarded this round")]
    AlreadyDiscarded,
}

/// Errors that can occur while cutting the starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// The round is not waiting for the cut.
    #[error("the starter can only be cut after both discards")]
    OutOfSequence,
    /// No cards left to cut from.
    #[error("no cards left in the deck to cut")]
    EmptyDeck,
}

/// Errors that can occur during pegging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PegError {
    /// The round is not in the pegging phase.
    #[error("the round is not in the pegging phase")]
    OutOfSequence,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the player's peg hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// Playing the card would push the count past 31.
    #[error("card would push the count past 31")]
    ExceedsThirtyOne,
    /// The player cannot say go while holding a legal play.
    #[error("player has a legal play and cannot say go")]
    HasLegalPlay,
    /// The player has no card left to play.
    #[error("player has no card left to play")]
    NoCardToPlay,
}

/// Errors that can occur while counting hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    /// The round is not in the counting phase.
    #[error("hands are only counted after pegging")]
    OutOfSequence,
    /// The next round could not be dealt.
    #[error("not enough cards to deal the next round")]
    EmptyDeck,
}

impl From<DeckError> for CutError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<DeckError> for CountError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}
