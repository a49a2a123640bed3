//! Match engine and round state machine.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::MatchOptions;
use crate::result::{MatchResult, Outcome, ScoreEvent, ScoreReason, Status};
use crate::scoring::Score;

pub mod board;
mod counting;
mod cut;
mod discard;
mod pegging;
pub mod state;

pub use board::{Board, SKUNK_LINE, WINNING_SCORE};
pub use state::{Phase, Player, PlayerView};

/// Cards dealt to each player at the start of a round.
pub const DEALT_CARDS: usize = 6;
/// Cards each player lays away into the crib.
pub const CRIB_DISCARDS: usize = 2;

/// A cribbage match between a human and the computer.
///
/// The match owns the deck, both hands, the crib, the pegging state and the
/// [`Board`]. Every action checks its preconditions before touching state,
/// so a rejected action leaves the match exactly as it was.
#[derive(Debug, Clone)]
pub struct Match {
    /// Match options.
    options: MatchOptions,
    /// Random number generator for shuffles, cuts and computer tie-breaks.
    rng: ChaCha8Rng,
    /// Scores and result.
    board: Board,
    /// Current phase.
    phase: Phase,
    /// Round number, starting at 1.
    round: u32,
    /// Dealer for the current round; owns the crib.
    dealer: Player,
    /// Cards not yet dealt or cut.
    deck: Deck,
    /// Dealt hands, then the kept four counted at the end of the round.
    hands: [Hand; 2],
    /// Cards still to be pegged.
    peg_hands: [Hand; 2],
    /// Which players have laid away their two cards.
    discarded: [bool; 2],
    /// The dealer's crib.
    crib: Vec<Card>,
    /// The cut card.
    starter: Option<Card>,
    /// Cards played in the current pegging sub-round.
    peg_stack: Vec<Card>,
    /// Running pegging count.
    count: u8,
    /// Player to act during pegging.
    turn: Option<Player>,
    /// Last player to lay a card in the current sub-round.
    last_played: Option<Player>,
    /// Players who said go in the current sub-round.
    said_go: [bool; 2],
    /// Hands counted so far this round.
    tallies: u8,
    /// Points awarded this round, in order.
    events: Vec<ScoreEvent>,
}

impl Match {
    /// Starts a new match with the given seed.
    ///
    /// The first dealer is chosen at random and round 1 is dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Match, MatchOptions, Phase};
    ///
    /// let game = Match::new(MatchOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Discard);
    /// assert_eq!(game.cards_remaining(), 40);
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a standard deck always holds enough cards for a deal"
    )]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dealer = if rng.random_bool(0.5) {
            Player::Human
        } else {
            Player::Computer
        };
        let deck = Deck::shuffled(&mut rng);

        Self::start(options, rng, dealer, deck)
            .expect("a standard deck always holds enough cards for a deal")
    }

    /// Starts a new match with a chosen first dealer and a stacked first deck.
    ///
    /// The first six cards of `deck` go to the non-dealer and the next six to
    /// the dealer; the starter is later cut from whatever remains. Later
    /// rounds use freshly shuffled decks.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck holds fewer than twelve
    /// cards.
    pub fn with_deck(
        options: MatchOptions,
        seed: u64,
        dealer: Player,
        deck: Deck,
    ) -> Result<Self, DeckError> {
        Self::start(options, ChaCha8Rng::seed_from_u64(seed), dealer, deck)
    }

    fn start(
        options: MatchOptions,
        rng: ChaCha8Rng,
        dealer: Player,
        deck: Deck,
    ) -> Result<Self, DeckError> {
        let mut game = Self {
            options,
            rng,
            board: Board::new(),
            phase: Phase::Discard,
            round: 0,
            dealer,
            deck: Deck::from_cards(Vec::new()),
            hands: [Hand::new(), Hand::new()],
            peg_hands: [Hand::new(), Hand::new()],
            discarded: [false; 2],
            crib: Vec::new(),
            starter: None,
            peg_stack: Vec::new(),
            count: 0,
            turn: None,
            last_played: None,
            said_go: [false; 2],
            tallies: 0,
            events: Vec::new(),
        };
        game.deal_round(deck)?;
        Ok(game)
    }

    /// Deals a new round from `deck`, resetting all per-round state.
    fn deal_round(&mut self, mut deck: Deck) -> Result<(), DeckError> {
        let non_dealer = Hand::from_cards(deck.deal(DEALT_CARDS)?);
        let dealer = Hand::from_cards(deck.deal(DEALT_CARDS)?);

        self.hands[self.dealer.opponent().index()] = non_dealer;
        self.hands[self.dealer.index()] = dealer;
        self.peg_hands = [Hand::new(), Hand::new()];
        self.deck = deck;
        self.discarded = [false; 2];
        self.crib.clear();
        self.starter = None;
        self.reset_stack();
        self.turn = None;
        self.tallies = 0;
        self.events.clear();
        self.phase = Phase::Discard;
        self.round += 1;

        info!(round = self.round, dealer = ?self.dealer, "dealt round");
        Ok(())
    }

    /// Clears the peg stack and everything tied to the current sub-round.
    fn reset_stack(&mut self) {
        self.peg_stack.clear();
        self.count = 0;
        self.last_played = None;
        self.said_go = [false; 2];
    }

    /// Awards points through the board and records the event.
    ///
    /// This is the only path that changes a score.
    fn award(&mut self, player: Player, reason: ScoreReason, score: Score) {
        if self.board.is_over() {
            return;
        }

        let result = self.board.award(player, score.points);
        debug!(
            ?player,
            ?reason,
            points = score.points,
            total = self.board.score(player),
            "awarded points"
        );
        self.events.push(ScoreEvent {
            player,
            reason,
            points: score.points,
            items: score.items,
        });

        if let Some(result) = result {
            self.phase = Phase::GameOver;
            self.turn = None;
            info!(
                winner = ?result.winner,
                loser_score = result.loser_score,
                skunk = result.skunk,
                "match over"
            );
        }
    }

    /// Packages the events recorded since `first` with the current status.
    fn outcome_since(&self, first: usize) -> Outcome {
        Outcome {
            events: self.events[first..].to_vec(),
            status: self.status(),
        }
    }

    fn status(&self) -> Status {
        self.board
            .result()
            .map_or(Status::Ongoing, Status::MatchEnded)
    }

    /// Returns the match options.
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the round number, starting at 1.
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the dealer for the current round.
    pub const fn dealer(&self) -> Player {
        self.dealer
    }

    /// Returns the player to act during pegging.
    pub const fn turn(&self) -> Option<Player> {
        self.turn
    }

    /// Returns a player's score.
    pub const fn score(&self, player: Player) -> u8 {
        self.board.score(player)
    }

    /// Returns the match result once a player has reached 121.
    pub const fn result(&self) -> Option<MatchResult> {
        self.board.result()
    }

    /// Returns whether the match is over.
    pub const fn is_over(&self) -> bool {
        self.board.is_over()
    }

    /// Returns a player's hand: six cards before discarding, four after.
    pub fn hand(&self, player: Player) -> &[Card] {
        self.hands[player.index()].cards()
    }

    /// Returns a player's cards not yet pegged.
    pub fn peg_hand(&self, player: Player) -> &[Card] {
        self.peg_hands[player.index()].cards()
    }

    /// Returns whether a player has laid away their crib cards this round.
    pub const fn has_discarded(&self, player: Player) -> bool {
        self.discarded[player.index()]
    }

    /// Returns the cards played in the current pegging sub-round.
    pub fn peg_stack(&self) -> &[Card] {
        &self.peg_stack
    }

    /// Returns the running pegging count.
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Returns the number of cards in the crib.
    pub fn crib_len(&self) -> usize {
        self.crib.len()
    }

    /// Returns the crib once pegging is over and it is being counted.
    pub fn crib(&self) -> Option<&[Card]> {
        match self.phase {
            Phase::Counting | Phase::GameOver => Some(&self.crib),
            _ => None,
        }
    }

    /// Returns the starter, once cut.
    pub const fn starter(&self) -> Option<Card> {
        self.starter
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the points awarded so far this round, in order.
    pub fn events(&self) -> &[ScoreEvent] {
        &self.events
    }

    /// Returns the table as seen by one player.
    ///
    /// The opponent's cards are reduced to counts.
    pub fn view(&self, player: Player) -> PlayerView {
        let opponent = player.opponent();
        PlayerView {
            player,
            phase: self.phase,
            round: self.round,
            dealer: self.dealer,
            turn: self.turn,
            hand: self.hand(player).to_vec(),
            peg_hand: self.peg_hand(player).to_vec(),
            opponent_hand_len: self.hands[opponent.index()].len(),
            opponent_peg_hand_len: self.peg_hands[opponent.index()].len(),
            peg_stack: self.peg_stack.clone(),
            count: self.count,
            crib_len: self.crib.len(),
            starter: self.starter,
            score: self.score(player),
            opponent_score: self.score(opponent),
        }
    }
}
