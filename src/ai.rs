//! Computer opponent.
//!
//! Both decisions are greedy heuristics over the legal choices:
//!
//! - Discards: every way to lay two of six cards away is rated by the mean
//!   value of the kept four against a sample of starters, then nudged by how
//!   useful the discarded pair is to whoever owns the crib.
//! - Pegging: every legal card is rated by what it scores right now plus a
//!   few bonuses and penalties for the count it leaves behind. No lookahead
//!   past the current play.

use alloc::vec::Vec;

use rand::Rng;
use tracing::trace;

use crate::card::Card;
use crate::game::DEALT_CARDS;
use crate::hand::MAX_COUNT;
use crate::scoring::{FIFTEEN, THIRTY_ONE, score_hand, score_peg};

const JITTER: f64 = 0.5;

/// Chooses the two card indices to lay away into the crib.
///
/// `sample` lists the starters to average over; cards already in `hand` are
/// skipped. Ties keep the earliest pair in `(0, 1), (0, 2), ..., (4, 5)`
/// order. Returns `None` unless the hand holds exactly six cards.
#[must_use]
pub fn choose_discard(hand: &[Card], owns_crib: bool, sample: &[Card]) -> Option<[usize; 2]> {
    if hand.len() != DEALT_CARDS {
        return None;
    }

    let starters: Vec<Card> = sample
        .iter()
        .copied()
        .filter(|starter| !hand.contains(starter))
        .collect();

    let mut best: Option<([usize; 2], f64)> = None;
    for first in 0..DEALT_CARDS {
        for second in first + 1..DEALT_CARDS {
            let kept = kept_cards(hand, first, second);
            let rating = expected_value(&kept, &starters)
                + crib_adjustment(hand[first], hand[second], owns_crib);
            trace!(first, second, rating, "rated discard");

            if best.is_none_or(|(_, best_rating)| rating > best_rating) {
                best = Some(([first, second], rating));
            }
        }
    }
    best.map(|(pair, _)| pair)
}

/// Chooses the card to peg, or `None` if no card keeps the count at 31 or
/// below and the player must say go.
///
/// With `jitter` off, equally rated cards resolve to the first one in hand
/// order.
pub fn choose_peg_card<R: Rng>(
    hand: &[Card],
    stack: &[Card],
    count: u8,
    jitter: bool,
    rng: &mut R,
) -> Option<Card> {
    let mut best: Option<(Card, f64)> = None;
    for &card in hand {
        let new_count = count + card.value();
        if new_count > MAX_COUNT {
            continue;
        }

        let mut rating = peg_rating(stack, card, new_count);
        if jitter {
            rating += rng.random_range(0.0..JITTER);
        }
        trace!(%card, new_count, rating, "rated peg card");

        if best.is_none_or(|(_, best_rating)| rating > best_rating) {
            best = Some((card, rating));
        }
    }
    best.map(|(card, _)| card)
}

fn kept_cards(hand: &[Card], first: usize, second: usize) -> [Card; 4] {
    let mut kept = [hand[0]; 4];
    let remaining = hand
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != first && *i != second)
        .map(|(_, card)| *card);
    for (slot, card) in kept.iter_mut().zip(remaining) {
        *slot = card;
    }
    kept
}

fn expected_value(kept: &[Card; 4], starters: &[Card]) -> f64 {
    if starters.is_empty() {
        return 0.0;
    }
    let total: u32 = starters
        .iter()
        .map(|starter| u32::from(score_hand(kept, *starter, false).points))
        .sum();
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for sample sizes"
    )]
    let len = starters.len() as f64;
    f64::from(total) / len
}

/// Pairs, fifteens and fives help whoever scores the crib.
fn crib_adjustment(first: Card, second: Card, owns_crib: bool) -> f64 {
    let pair = first.rank == second.rank;
    let fifteen = first.value() + second.value() == FIFTEEN;
    let five = first.rank == 5 || second.rank == 5;

    let mut adjustment = 0.0;
    if owns_crib {
        if pair {
            adjustment += 4.0;
        }
        if fifteen {
            adjustment += 4.0;
        }
        if five {
            adjustment += 2.0;
        }
    } else {
        if pair {
            adjustment -= 4.0;
        }
        if fifteen {
            adjustment -= 4.0;
        }
        if five {
            adjustment -= 3.0;
        }
    }
    adjustment
}

fn peg_rating(stack: &[Card], card: Card, new_count: u8) -> f64 {
    let mut next = stack.to_vec();
    next.push(card);
    let points = score_peg(&next, new_count).points;

    let mut rating = f64::from(points) * 10.0;
    if new_count == FIFTEEN {
        rating += 5.0;
    }
    if new_count == THIRTY_ONE {
        rating += 5.0;
    }
    if new_count < 5 {
        rating += 1.0;
    }
    // Leaves the opponent an easy fifteen or thirty-one.
    if matches!(THIRTY_ONE - new_count, 5 | 10 | 15) {
        rating -= 2.0;
    }
    rating
}
