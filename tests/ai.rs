//! Computer opponent tests.

use cribrs::ai::{choose_discard, choose_peg_card};
use cribrs::options::DEFAULT_STARTER_SAMPLE;
use cribrs::{Card, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn discard_requires_six_cards() {
    let hand = [card(Suit::Spades, 5), card(Suit::Hearts, 6)];
    assert_eq!(choose_discard(&hand, true, &DEFAULT_STARTER_SAMPLE), None);
}

#[test]
fn discard_keeps_four_fives() {
    let hand = [
        card(Suit::Spades, 5),
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 5),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 13),
        card(Suit::Hearts, 12),
    ];
    assert_eq!(
        choose_discard(&hand, true, &DEFAULT_STARTER_SAMPLE),
        Some([4, 5])
    );
    assert_eq!(
        choose_discard(&hand, false, &DEFAULT_STARTER_SAMPLE),
        Some([4, 5])
    );
}

#[test]
fn discard_is_deterministic_and_distinct() {
    let hand = [
        card(Suit::Clubs, 1),
        card(Suit::Hearts, 9),
        card(Suit::Diamonds, 3),
        card(Suit::Spades, 12),
        card(Suit::Clubs, 7),
        card(Suit::Hearts, 4),
    ];
    let first = choose_discard(&hand, false, &DEFAULT_STARTER_SAMPLE);
    let second = choose_discard(&hand, false, &DEFAULT_STARTER_SAMPLE);
    assert_eq!(first, second);

    let [a, b] = first.unwrap();
    assert!(a < b);
    assert!(b < hand.len());
}

#[test]
fn discard_with_empty_sample_rates_crib_cards_only() {
    // With no starters to average over, only the crib adjustment differs,
    // and the pair of sevens is the one discard worth +4 to our own crib.
    let hand = [
        card(Suit::Clubs, 1),
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 7),
        card(Suit::Spades, 7),
        card(Suit::Clubs, 9),
        card(Suit::Hearts, 13),
    ];
    let choice = choose_discard(&hand, true, &[]);
    assert_eq!(choice, Some([2, 3]));
}

#[test]
fn peg_must_pass_when_nothing_fits() {
    let hand = [card(Suit::Spades, 13), card(Suit::Hearts, 9)];
    let stack = [card(Suit::Clubs, 10), card(Suit::Diamonds, 10), card(Suit::Spades, 5)];
    assert_eq!(choose_peg_card(&hand, &stack, 25, false, &mut rng()), None);
}

#[test]
fn peg_takes_fifteen() {
    let hand = [card(Suit::Diamonds, 2), card(Suit::Clubs, 5)];
    let stack = [card(Suit::Spades, 10)];
    assert_eq!(
        choose_peg_card(&hand, &stack, 10, false, &mut rng()),
        Some(card(Suit::Clubs, 5))
    );
}

#[test]
fn peg_takes_pair() {
    let hand = [card(Suit::Diamonds, 3), card(Suit::Hearts, 9)];
    let stack = [card(Suit::Spades, 9)];
    assert_eq!(
        choose_peg_card(&hand, &stack, 9, false, &mut rng()),
        Some(card(Suit::Hearts, 9))
    );
}

#[test]
fn peg_takes_thirty_one() {
    let hand = [card(Suit::Hearts, 2), card(Suit::Clubs, 4)];
    let stack = [
        card(Suit::Spades, 13),
        card(Suit::Diamonds, 11),
        card(Suit::Clubs, 7),
    ];
    assert_eq!(
        choose_peg_card(&hand, &stack, 27, false, &mut rng()),
        Some(card(Suit::Clubs, 4))
    );
}

#[test]
fn peg_leads_low() {
    let hand = [card(Suit::Spades, 5), card(Suit::Hearts, 4)];
    assert_eq!(
        choose_peg_card(&hand, &[], 0, false, &mut rng()),
        Some(card(Suit::Hearts, 4))
    );
}

#[test]
fn peg_avoids_leaving_sixteen() {
    let hand = [card(Suit::Hearts, 6), card(Suit::Diamonds, 7)];
    let stack = [card(Suit::Spades, 10)];
    assert_eq!(
        choose_peg_card(&hand, &stack, 10, false, &mut rng()),
        Some(card(Suit::Diamonds, 7))
    );
}

#[test]
fn peg_ties_keep_hand_order_without_jitter() {
    let hand = [card(Suit::Spades, 9), card(Suit::Hearts, 8)];
    assert_eq!(
        choose_peg_card(&hand, &[], 0, false, &mut rng()),
        Some(card(Suit::Spades, 9))
    );
}

#[test]
fn peg_jitter_never_beats_a_real_point() {
    let hand = [card(Suit::Diamonds, 2), card(Suit::Clubs, 5)];
    let stack = [card(Suit::Spades, 10)];
    let mut rng = rng();
    for _ in 0..32 {
        assert_eq!(
            choose_peg_card(&hand, &stack, 10, true, &mut rng),
            Some(card(Suit::Clubs, 5))
        );
    }
}
