//! Match configuration options.

use alloc::vec::Vec;

use crate::card::{Card, KING, Suit};

/// Starter cards the computer averages over when valuing a discard.
pub const DEFAULT_STARTER_SAMPLE: [Card; 9] = [
    Card::new(Suit::Hearts, 1),
    Card::new(Suit::Clubs, 2),
    Card::new(Suit::Diamonds, 4),
    Card::new(Suit::Spades, 5),
    Card::new(Suit::Hearts, 6),
    Card::new(Suit::Clubs, 7),
    Card::new(Suit::Diamonds, 8),
    Card::new(Suit::Spades, 10),
    Card::new(Suit::Hearts, KING),
];

/// Configuration options for a cribbage match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_ai_jitter(false)
///     .with_thinking_delay_ms(400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Starter cards sampled when the computer values its discard.
    pub starter_sample: Vec<Card>,
    /// Whether the computer adds a small random perturbation to break ties
    /// between equally rated pegging plays.
    pub ai_jitter: bool,
    /// Cosmetic pause, in milliseconds, a presentation layer may insert
    /// before revealing a computer move. 0 disables it. The engine itself
    /// never waits.
    pub thinking_delay_ms: u32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            starter_sample: DEFAULT_STARTER_SAMPLE.to_vec(),
            ai_jitter: true,
            thinking_delay_ms: 0,
        }
    }
}

impl MatchOptions {
    /// Sets the starter sample used to value discards.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Card, MatchOptions, Suit};
    ///
    /// let sample = vec![Card::new(Suit::Clubs, 5), Card::new(Suit::Spades, 10)];
    /// let options = MatchOptions::default().with_starter_sample(sample.clone());
    /// assert_eq!(options.starter_sample, sample);
    /// ```
    #[must_use]
    pub fn with_starter_sample(mut self, sample: Vec<Card>) -> Self {
        self.starter_sample = sample;
        self
    }

    /// Sets whether the computer breaks pegging ties randomly.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_ai_jitter(false);
    /// assert!(!options.ai_jitter);
    /// ```
    #[must_use]
    pub const fn with_ai_jitter(mut self, jitter: bool) -> Self {
        self.ai_jitter = jitter;
        self
    }

    /// Sets the cosmetic thinking delay.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_thinking_delay_ms(750);
    /// assert_eq!(options.thinking_delay_ms, 750);
    /// ```
    #[must_use]
    pub const fn with_thinking_delay_ms(mut self, delay_ms: u32) -> Self {
        self.thinking_delay_ms = delay_ms;
        self
    }
}
