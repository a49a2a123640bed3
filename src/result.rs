//! Scoring events and match results.

extern crate alloc;

use alloc::vec::Vec;

use crate::game::Player;
use crate::scoring::ScoreItem;

/// Why points were awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreReason {
    /// Dealer cut a jack as the starter.
    Heels,
    /// Points scored by laying a card.
    Pegging,
    /// Last card before neither player could play.
    Go,
    /// The non-dealer's or dealer's four-card hand.
    Hand,
    /// The dealer's crib.
    Crib,
}

/// A single award of points through the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEvent {
    /// The player who scored.
    pub player: Player,
    /// Why the points were awarded.
    pub reason: ScoreReason,
    /// Points requested; may exceed what the board could still credit at 121.
    pub points: u8,
    /// Itemized breakdown.
    pub items: Vec<ScoreItem>,
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// The player who reached 121.
    pub winner: Player,
    /// The winner's final score.
    pub winner_score: u8,
    /// The loser's final score.
    pub loser_score: u8,
    /// Whether the loser finished below 91.
    pub skunk: bool,
}

/// Where the match stands after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The current round continues.
    Ongoing,
    /// The round finished and a new one has been dealt.
    NextRound,
    /// A player reached 121.
    MatchEnded(MatchResult),
}

/// Result of a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Points awarded by the action, in order.
    pub events: Vec<ScoreEvent>,
    /// Where the match stands afterwards.
    pub status: Status,
}

impl Outcome {
    /// Total points awarded to `player` by this action.
    #[must_use]
    pub fn points_for(&self, player: Player) -> u32 {
        self.events
            .iter()
            .filter(|event| event.player == player)
            .map(|event| u32::from(event.points))
            .sum()
    }

    /// Returns whether the action ended the match.
    #[must_use]
    pub const fn is_match_over(&self) -> bool {
        matches!(self.status, Status::MatchEnded(_))
    }
}
