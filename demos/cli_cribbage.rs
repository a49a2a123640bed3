//! CLI cribbage example.
//!
//! Set `RUST_LOG=cribrs=debug` to watch the engine's scoring decisions.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cribrs::{
    Card, Match, MatchOptions, Outcome, Phase, Player, ScoreEvent, ScoreReason, Status, Suit,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Cribbage CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = MatchOptions::default().with_thinking_delay_ms(600);
    let mut game = Match::new(options, seed);

    loop {
        match game.phase() {
            Phase::Discard => {
                if !discard(&mut game) {
                    return;
                }
            }
            Phase::Cut => match game.cut_starter() {
                Ok(outcome) => {
                    if let Some(starter) = game.starter() {
                        println!("Starter: {}", format_card(&starter));
                    }
                    report(&outcome);
                }
                Err(err) => println!("Cut error: {err:?}"),
            },
            Phase::Pegging => {
                if !peg(&mut game) {
                    return;
                }
            }
            Phase::Counting => count(&mut game),
            Phase::GameOver => {
                if let Some(result) = game.result() {
                    let winner = match result.winner {
                        Player::Human => "You win",
                        Player::Computer => "Computer wins",
                    };
                    let skunk = if result.skunk { " Skunk!" } else { "" };
                    println!(
                        "{winner} {}-{}.{skunk}",
                        result.winner_score, result.loser_score
                    );
                }
                return;
            }
        }
    }
}

/// Returns `false` if the player quit.
fn discard(game: &mut Match) -> bool {
    let crib_owner = match game.dealer() {
        Player::Human => "your",
        Player::Computer => "the computer's",
    };
    println!(
        "\nRound {} | You {} - Computer {} | {crib_owner} crib",
        game.round(),
        game.score(Player::Human),
        game.score(Player::Computer)
    );

    while !game.has_discarded(Player::Human) {
        println!("Hand: {}", format_numbered(game.hand(Player::Human)));
        let input = prompt_line("Discard two cards (e.g. '1 4'): ");
        if input == "q" || input == "quit" {
            return false;
        }

        let indices: Option<Vec<usize>> = input
            .split_whitespace()
            .map(|part| part.parse::<usize>().ok()?.checked_sub(1))
            .collect();
        let Some(indices) = indices else {
            println!("Please enter two card numbers.");
            continue;
        };

        if let Err(err) = game.select_discard(Player::Human, &indices) {
            println!("Discard error: {err}");
        }
    }

    think(game);
    if let Err(err) = game.discard_for_computer() {
        println!("Computer discard error: {err:?}");
    }
    true
}

/// Returns `false` if the player quit.
fn peg(game: &mut Match) -> bool {
    match game.turn() {
        Some(Player::Human) => {
            println!(
                "\nCount {} | Stack: {}",
                game.count(),
                format_cards(game.peg_stack())
            );
            let hand = game.peg_hand(Player::Human).to_vec();
            println!("Your cards: {}", format_numbered(&hand));
            let input = prompt_line("Play a card number, or [g]o: ");

            let result = match input.as_str() {
                "q" | "quit" => return false,
                "g" | "go" => game.declare_go(Player::Human),
                _ => {
                    let Some(card) = input
                        .parse::<usize>()
                        .ok()
                        .and_then(|number| number.checked_sub(1))
                        .and_then(|index| hand.get(index))
                    else {
                        println!("Unknown card.");
                        return true;
                    };
                    game.play_peg_card(Player::Human, *card)
                }
            };

            match result {
                Ok(outcome) => report(&outcome),
                Err(err) => println!("Play error: {err}"),
            }
        }
        Some(Player::Computer) => {
            think(game);
            let held = game.peg_hand(Player::Computer).to_vec();
            match game.play_computer_turn() {
                Ok(outcome) => {
                    let remaining = game.peg_hand(Player::Computer);
                    match held.iter().find(|card| !remaining.contains(card)) {
                        Some(card) => println!("Computer plays {}.", format_card(card)),
                        None => println!("Computer says go."),
                    }
                    report(&outcome);
                }
                Err(err) => println!("Computer error: {err:?}"),
            }
        }
        None => {}
    }
    true
}

fn count(game: &mut Match) {
    if let Some(crib) = game.crib() {
        println!("\nCrib: {}", format_cards(crib));
    }
    match game.next_tally() {
        Some((Player::Human, ScoreReason::Hand)) => {
            println!("Your hand: {}", format_cards(game.hand(Player::Human)));
        }
        Some((Player::Computer, ScoreReason::Hand)) => {
            println!("Computer's hand: {}", format_cards(game.hand(Player::Computer)));
        }
        _ => {}
    }
    prompt_line("Press enter to count: ");

    match game.advance_scoring() {
        Ok(outcome) => {
            report(&outcome);
            if outcome.status == Status::NextRound {
                println!("Deal passes. Next round.");
            }
        }
        Err(err) => println!("Count error: {err:?}"),
    }
}

fn think(game: &Match) {
    let delay = game.options().thinking_delay_ms;
    if delay > 0 {
        thread::sleep(Duration::from_millis(u64::from(delay)));
    }
}

fn report(outcome: &Outcome) {
    for event in &outcome.events {
        println!("{}", format_event(event));
    }
}

fn format_event(event: &ScoreEvent) -> String {
    let reason = match event.reason {
        ScoreReason::Heels => "his heels",
        ScoreReason::Pegging => "pegging",
        ScoreReason::Go => "go",
        ScoreReason::Hand => "hand",
        ScoreReason::Crib => "crib",
    };
    let items = event
        .items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let text = format!(
        "{} scores {} ({reason}){}",
        name(event.player),
        event.points,
        if items.is_empty() {
            String::new()
        } else {
            format!(": {items}")
        }
    );
    let code = match event.player {
        Player::Human => "32",
        Player::Computer => "33",
    };
    colorize(&text, code)
}

const fn name(player: Player) -> &'static str {
    match player {
        Player::Human => "You",
        Player::Computer => "Computer",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_numbered(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
