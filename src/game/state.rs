//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Both players lay two cards away into the crib.
    Discard,
    /// Waiting for the starter to be cut.
    Cut,
    /// Players alternate laying cards toward 31.
    Pegging,
    /// Hands and crib are counted in turn.
    Counting,
    /// A player reached 121; no further actions are accepted.
    GameOver,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The computer opponent.
    Computer,
}

impl Player {
    /// Both players.
    pub const BOTH: [Self; 2] = [Self::Human, Self::Computer];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Computer => 1,
        }
    }
}

/// What one player is allowed to see of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// The viewing player.
    pub player: Player,
    /// Current phase.
    pub phase: Phase,
    /// Round number, starting at 1.
    pub round: u32,
    /// The dealer for this round.
    pub dealer: Player,
    /// Whose turn it is during pegging.
    pub turn: Option<Player>,
    /// The viewer's hand: six cards while discarding, the kept four after.
    pub hand: Vec<Card>,
    /// The viewer's unplayed pegging cards.
    pub peg_hand: Vec<Card>,
    /// Number of cards in the opponent's hand.
    pub opponent_hand_len: usize,
    /// Number of unplayed pegging cards the opponent holds.
    pub opponent_peg_hand_len: usize,
    /// Cards played in the current pegging sub-round.
    pub peg_stack: Vec<Card>,
    /// Running pegging count.
    pub count: u8,
    /// Number of cards in the crib.
    pub crib_len: usize,
    /// The starter, once cut.
    pub starter: Option<Card>,
    /// The viewer's score.
    pub score: u8,
    /// The opponent's score.
    pub opponent_score: u8,
}
