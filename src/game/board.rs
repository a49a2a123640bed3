//! The scoreboard: the only place scores change.

use crate::result::MatchResult;

use super::Player;

/// Score that wins the match.
pub const WINNING_SCORE: u8 = 121;
/// A loser finishing below this score has been skunked.
pub const SKUNK_LINE: u8 = 91;

/// Both players' scores and the match result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    scores: [u8; 2],
    result: Option<MatchResult>,
}

impl Board {
    /// Creates a board with both players at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scores: [0; 2],
            result: None,
        }
    }

    /// Adds points to a player's score, clamped at 121.
    ///
    /// Returns the match result if this award ended the match. Once the match
    /// is over, further awards are ignored.
    pub fn award(&mut self, player: Player, points: u8) -> Option<MatchResult> {
        if self.result.is_some() {
            return None;
        }

        let score = &mut self.scores[player.index()];
        *score = score.saturating_add(points).min(WINNING_SCORE);
        if *score < WINNING_SCORE {
            return None;
        }

        let loser_score = self.scores[player.opponent().index()];
        let result = MatchResult {
            winner: player,
            winner_score: WINNING_SCORE,
            loser_score,
            skunk: loser_score < SKUNK_LINE,
        };
        self.result = Some(result);
        Some(result)
    }

    /// Returns a player's score.
    #[must_use]
    pub const fn score(&self, player: Player) -> u8 {
        self.scores[player.index()]
    }

    /// Returns the match result once a player has reached 121.
    #[must_use]
    pub const fn result(&self) -> Option<MatchResult> {
        self.result
    }

    /// Returns whether the match is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.result.is_some()
    }
}
