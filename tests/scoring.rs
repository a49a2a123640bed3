//! Hand and pegging scoring tests.

use cribrs::{Card, ScoreKind, Suit, score_hand, score_peg};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn kinds(items: &[cribrs::ScoreItem]) -> Vec<ScoreKind> {
    items.iter().map(|item| item.kind).collect()
}

#[test]
fn card_values_and_display() {
    assert_eq!(card(Suit::Spades, 1).value(), 1);
    assert_eq!(card(Suit::Hearts, 7).value(), 7);
    assert_eq!(card(Suit::Clubs, 10).value(), 10);
    assert_eq!(card(Suit::Diamonds, 13).value(), 10);
    assert_eq!(card(Suit::Spades, 11).to_string(), "J♠");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, 1).to_string(), "A♦");
}

#[test]
fn run_of_four_with_face_card_fifteens_and_nobs() {
    let hand = [
        card(Suit::Spades, 11),
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 2),
    ];
    let score = score_hand(&hand, card(Suit::Spades, 3), false);

    assert_eq!(
        kinds(&score.items),
        vec![
            ScoreKind::Fifteen,
            ScoreKind::Fifteen,
            ScoreKind::Run(4),
            ScoreKind::Nobs,
        ]
    );
    let run = &score.items[2];
    assert_eq!(run.kind.to_string(), "Run of 4");
    assert_eq!(run.points, 4);
    assert_eq!(score.points, 9);
}

#[test]
fn four_of_a_kind_scores_six_pairs() {
    let hand = [
        card(Suit::Spades, 5),
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 5),
        card(Suit::Clubs, 5),
    ];
    let score = score_hand(&hand, card(Suit::Spades, 6), false);

    let pairs: u8 = score
        .items
        .iter()
        .filter(|item| item.kind == ScoreKind::Pair)
        .map(|item| item.points)
        .sum();
    let fifteens = score
        .items
        .iter()
        .filter(|item| item.kind == ScoreKind::Fifteen)
        .count();
    assert_eq!(pairs, 12);
    assert_eq!(fifteens, 4);
    assert!(!score.items.iter().any(|item| matches!(item.kind, ScoreKind::Run(_))));
    assert_eq!(score.points, 20);
}

#[test]
fn perfect_hand_scores_twenty_nine() {
    let hand = [
        card(Suit::Spades, 5),
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 5),
        card(Suit::Clubs, 11),
    ];
    let score = score_hand(&hand, card(Suit::Clubs, 5), false);
    assert_eq!(score.points, 29);
}

#[test]
fn double_run_scores_each_combination() {
    let hand = [
        card(Suit::Spades, 3),
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Clubs, 5),
    ];
    let score = score_hand(&hand, card(Suit::Diamonds, 13), false);

    assert_eq!(
        kinds(&score.items),
        vec![
            ScoreKind::Fifteen,
            ScoreKind::Fifteen,
            ScoreKind::Pair,
            ScoreKind::Run(3),
            ScoreKind::Run(3),
        ]
    );
    assert_eq!(score.points, 12);
}

#[test]
fn five_card_flush_replaces_four_card_flush() {
    let hand = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 6),
        card(Suit::Hearts, 8),
    ];

    let score = score_hand(&hand, card(Suit::Hearts, 10), false);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Flush(5)]);
    assert_eq!(score.points, 5);

    let crib = score_hand(&hand, card(Suit::Hearts, 10), true);
    assert_eq!(crib.points, 5);
}

#[test]
fn four_card_flush_counts_in_hand_but_not_crib() {
    let hand = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 6),
        card(Suit::Hearts, 8),
    ];

    let score = score_hand(&hand, card(Suit::Spades, 10), false);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Flush(4)]);
    assert_eq!(score.points, 4);

    let crib = score_hand(&hand, card(Suit::Spades, 10), true);
    assert!(crib.is_empty());
    assert_eq!(crib.points, 0);
}

#[test]
fn nineteen_hand_scores_nothing() {
    let hand = [
        card(Suit::Spades, 2),
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 6),
        card(Suit::Clubs, 8),
    ];
    let score = score_hand(&hand, card(Suit::Hearts, 12), false);
    assert!(score.is_empty());
    assert_eq!(score.points, 0);
}

#[test]
fn starter_jack_is_not_nobs() {
    let hand = [
        card(Suit::Spades, 2),
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 6),
        card(Suit::Clubs, 8),
    ];
    let score = score_hand(&hand, card(Suit::Clubs, 11), false);
    assert!(!score.items.iter().any(|item| item.kind == ScoreKind::Nobs));
}

#[test]
fn peg_fifteen() {
    let stack = [card(Suit::Spades, 7), card(Suit::Hearts, 8)];
    let score = score_peg(&stack, 15);
    assert_eq!(score.points, 2);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Fifteen]);
}

#[test]
fn peg_ten_then_five_reports_fifteen() {
    let stack = [card(Suit::Spades, 10), card(Suit::Hearts, 5)];
    let score = score_peg(&stack, 15);
    assert_eq!(score.points, 2);
    assert!(score.items[0].kind.to_string().contains("Fifteen"));
}

#[test]
fn peg_pair_is_not_a_run() {
    let stack = [card(Suit::Spades, 5), card(Suit::Hearts, 5)];
    let score = score_peg(&stack, 10);
    assert_eq!(score.points, 2);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Pair]);
}

#[test]
fn peg_pair_royal_and_double_pair_royal() {
    let three = [
        card(Suit::Spades, 4),
        card(Suit::Hearts, 4),
        card(Suit::Clubs, 4),
    ];
    let score = score_peg(&three, 12);
    assert_eq!(kinds(&score.items), vec![ScoreKind::PairRoyal]);
    assert_eq!(score.points, 6);

    let four = [
        card(Suit::Spades, 2),
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 2),
        card(Suit::Diamonds, 2),
    ];
    let score = score_peg(&four, 8);
    assert_eq!(kinds(&score.items), vec![ScoreKind::DoublePairRoyal]);
    assert_eq!(score.points, 12);
}

#[test]
fn peg_run_in_any_order_with_fifteen() {
    let stack = [
        card(Suit::Spades, 4),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 5),
    ];
    let score = score_peg(&stack, 15);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Fifteen, ScoreKind::Run(3)]);
    assert_eq!(score.points, 5);
}

#[test]
fn peg_trailing_pair_breaks_run() {
    let stack = [
        card(Suit::Spades, 3),
        card(Suit::Hearts, 4),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 5),
    ];
    let score = score_peg(&stack, 17);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Pair]);
    assert_eq!(score.points, 2);
}

#[test]
fn peg_scores_only_longest_run() {
    let stack = [
        card(Suit::Spades, 2),
        card(Suit::Hearts, 3),
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 5),
    ];
    let score = score_peg(&stack, 14);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Run(4)]);
    assert_eq!(score.points, 4);
}

#[test]
fn peg_run_uses_trailing_window_only() {
    let stack = [
        card(Suit::Spades, 6),
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 4),
    ];
    let score = score_peg(&stack, 15);
    assert_eq!(kinds(&score.items), vec![ScoreKind::Fifteen, ScoreKind::Run(3)]);
    assert_eq!(score.points, 5);
}

#[test]
fn peg_thirty_one_without_run() {
    let stack = [
        card(Suit::Spades, 13),
        card(Suit::Hearts, 12),
        card(Suit::Clubs, 11),
        card(Suit::Diamonds, 1),
    ];
    let score = score_peg(&stack, 31);
    assert_eq!(kinds(&score.items), vec![ScoreKind::ThirtyOne]);
    assert_eq!(score.points, 2);
}

#[test]
fn peg_empty_stack_scores_nothing() {
    let score = score_peg(&[], 0);
    assert!(score.is_empty());
    assert_eq!(score.points, 0);
}
