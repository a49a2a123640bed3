//! Hand and pegging scoring.
//!
//! Both scorers are pure functions. [`score_hand`] evaluates a kept hand (or
//! the crib) together with the starter; [`score_peg`] evaluates the effect
//! of the card most recently laid on the peg stack.
//!
//! Hand scoring enumerates subsets of the five cards as bitmasks: bit `i` of
//! a mask selects the `i`-th card, with the starter in bit 4.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Running count that scores a fifteen.
pub const FIFTEEN: u8 = 15;
/// Running count that scores thirty-one.
pub const THIRTY_ONE: u8 = 31;

const ALL_CARDS: u8 = 0b1_1111;

/// The kind of a single scoring unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    /// Cards totalling fifteen.
    Fifteen,
    /// Running count of exactly thirty-one.
    ThirtyOne,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank played in a row.
    PairRoyal,
    /// Four cards of the same rank played in a row.
    DoublePairRoyal,
    /// A run of consecutive ranks with the given length.
    Run(u8),
    /// A flush with the given number of cards.
    Flush(u8),
    /// Jack of the starter's suit held in hand.
    Nobs,
    /// Last card played before neither player could continue.
    Go,
    /// Jack cut as the starter.
    Heels,
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifteen => f.write_str("Fifteen"),
            Self::ThirtyOne => f.write_str("Thirty-one"),
            Self::Pair => f.write_str("Pair"),
            Self::PairRoyal => f.write_str("Pair royal"),
            Self::DoublePairRoyal => f.write_str("Double pair royal"),
            Self::Run(len) => write!(f, "Run of {len}"),
            Self::Flush(len) => write!(f, "Flush of {len}"),
            Self::Nobs => f.write_str("Nobs"),
            Self::Go => f.write_str("Go"),
            Self::Heels => f.write_str("His heels"),
        }
    }
}

/// One itemized scoring unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreItem {
    /// What scored.
    pub kind: ScoreKind,
    /// Points for this unit.
    pub points: u8,
    /// The cards making up the unit.
    pub cards: Vec<Card>,
}

impl ScoreItem {
    /// Creates a scoring item.
    #[must_use]
    pub const fn new(kind: ScoreKind, points: u8, cards: Vec<Card>) -> Self {
        Self {
            kind,
            points,
            cards,
        }
    }
}

impl fmt::Display for ScoreItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.kind, self.points)
    }
}

/// A point total together with its itemized breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    /// Total points; always the sum of the item points.
    pub points: u8,
    /// Breakdown in scoring order.
    pub items: Vec<ScoreItem>,
}

impl Score {
    /// Builds a score from its items.
    #[must_use]
    pub fn from_items(items: Vec<ScoreItem>) -> Self {
        let points = items.iter().map(|item| item.points).sum();
        Self { points, items }
    }

    /// Returns whether nothing scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Scores a four-card hand with the starter.
///
/// Items are listed as fifteens, pairs, runs, flush, then nobs. When
/// `is_crib` is set, a flush only counts if the starter matches as well.
#[must_use]
pub fn score_hand(hand: &[Card; 4], starter: Card, is_crib: bool) -> Score {
    let cards = [hand[0], hand[1], hand[2], hand[3], starter];
    let mut items = Vec::new();

    for mask in 1..=ALL_CARDS {
        if mask.count_ones() >= 2 && subset_value(&cards, mask) == u32::from(FIFTEEN) {
            items.push(ScoreItem::new(ScoreKind::Fifteen, 2, subset(&cards, mask)));
        }
    }

    for i in 0..cards.len() {
        for j in i + 1..cards.len() {
            if cards[i].rank == cards[j].rank {
                items.push(ScoreItem::new(ScoreKind::Pair, 2, alloc::vec![cards[i], cards[j]]));
            }
        }
    }

    for len in (3..=5u32).rev() {
        let runs: Vec<u8> = (1..=ALL_CARDS)
            .filter(|mask| mask.count_ones() == len && is_run(&subset(&cards, *mask)))
            .collect();
        if runs.is_empty() {
            continue;
        }
        for mask in runs {
            items.push(ScoreItem::new(
                ScoreKind::Run(len as u8),
                len as u8,
                subset(&cards, mask),
            ));
        }
        break;
    }

    let suit = hand[0].suit;
    if hand.iter().all(|card| card.suit == suit) {
        if starter.suit == suit {
            items.push(ScoreItem::new(ScoreKind::Flush(5), 5, cards.to_vec()));
        } else if !is_crib {
            items.push(ScoreItem::new(ScoreKind::Flush(4), 4, hand.to_vec()));
        }
    }

    for card in hand {
        if card.is_jack() && card.suit == starter.suit {
            items.push(ScoreItem::new(ScoreKind::Nobs, 1, alloc::vec![*card]));
        }
    }

    Score::from_items(items)
}

/// Scores the card most recently appended to the peg stack.
///
/// `count` is the running count after that card. A pair at the end of the
/// stack suppresses run detection; only the longest trailing run is scored.
#[must_use]
pub fn score_peg(stack: &[Card], count: u8) -> Score {
    let Some(last) = stack.last() else {
        return Score::default();
    };
    let mut items = Vec::new();

    if count == FIFTEEN {
        items.push(ScoreItem::new(ScoreKind::Fifteen, 2, stack.to_vec()));
    }
    if count == THIRTY_ONE {
        items.push(ScoreItem::new(ScoreKind::ThirtyOne, 2, stack.to_vec()));
    }

    let same = stack
        .iter()
        .rev()
        .take_while(|card| card.rank == last.rank)
        .count();
    let tail = stack[stack.len() - same..].to_vec();
    match same {
        2 => items.push(ScoreItem::new(ScoreKind::Pair, 2, tail)),
        3 => items.push(ScoreItem::new(ScoreKind::PairRoyal, 6, tail)),
        4.. => items.push(ScoreItem::new(ScoreKind::DoublePairRoyal, 12, tail)),
        _ => {}
    }

    if same < 2 {
        for len in (3..=stack.len()).rev() {
            let window = &stack[stack.len() - len..];
            if is_run(window) {
                items.push(ScoreItem::new(
                    ScoreKind::Run(len as u8),
                    len as u8,
                    window.to_vec(),
                ));
                break;
            }
        }
    }

    Score::from_items(items)
}

fn subset(cards: &[Card; 5], mask: u8) -> Vec<Card> {
    cards
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, card)| *card)
        .collect()
}

fn subset_value(cards: &[Card; 5], mask: u8) -> u32 {
    cards
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, card)| u32::from(card.value()))
        .sum()
}

/// Ranks form a gapless sequence with no repeats, in any order.
fn is_run(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    let mut ranks: Vec<u8> = cards.iter().map(|card| card.rank).collect();
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| pair[1] == pair[0] + 1)
}
