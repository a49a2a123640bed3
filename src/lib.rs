//! A two-player cribbage engine with optional `no_std` support.
//!
//! The crate provides a [`Match`] type that runs a human against the
//! computer through repeated rounds of discarding, cutting, pegging and
//! counting until one player reaches 121. The scorers in [`scoring`] and
//! the computer's heuristics in [`ai`] are usable on their own.
//!
//! # Example
//!
//! ```
//! use cribrs::{Match, MatchOptions, Player};
//!
//! let mut game = Match::new(MatchOptions::default(), 42);
//! game.select_discard(Player::Human, &[0, 1]).unwrap();
//! game.discard_for_computer().unwrap();
//! let outcome = game.cut_starter().unwrap();
//!
//! assert!(game.starter().is_some());
//! assert!(outcome.events.len() <= 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod scoring;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{CountError, CutError, DeckError, DiscardError, PegError};
pub use game::{
    Board, CRIB_DISCARDS, DEALT_CARDS, Match, Phase, Player, PlayerView, SKUNK_LINE, WINNING_SCORE,
};
pub use hand::Hand;
pub use options::MatchOptions;
pub use result::{MatchResult, Outcome, ScoreEvent, ScoreReason, Status};
pub use scoring::{Score, ScoreItem, ScoreKind, score_hand, score_peg};
