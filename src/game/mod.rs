//! Session engine and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::error::ConfigError;
use crate::hand::Hand;
use crate::options::EnvOptions;
use crate::policy::{FixedThreshold, Policy};
use crate::result::{ActionOutcome, RoundOutcome};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use state::{FEATURE_LEN, GameState, Phase, Turn};

/// A single-player blackjack session against a fixed-policy dealer.
///
/// Each round is `bet_step`, then `card_step` until a step reports
/// `terminated`, then [`Session::reset`]. The session owns the shoe, the
/// bankroll and both hands; the random generator only shuffles the shoe.
///
/// The dealer plays `D`, which defaults to the house rule of drawing below 17.
#[derive(Debug, Clone)]
pub struct Session<D = FixedThreshold> {
    /// Card supply and discard pile.
    pub shoe: Shoe,
    /// The player's cash.
    pub bankroll: Bankroll,
    options: EnvOptions,
    player: Hand,
    dealer: Hand,
    dealer_policy: D,
    bet_percent: Option<f64>,
    phase: Phase,
    turn: Turn,
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session whose shoe is shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{EnvOptions, Session};
    ///
    /// let session = Session::new(EnvOptions::default(), 42).unwrap();
    /// assert_eq!(session.get_state().remaining_cash, 100);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for no decks or no starting cash.
    pub fn new(options: EnvOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a session shuffling with an injected generator.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{EnvOptions, Session};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let options = EnvOptions::default().with_decks(2);
    /// let injected = Session::with_rng(options, ChaCha8Rng::seed_from_u64(5)).unwrap();
    /// let seeded = Session::new(options, 5).unwrap();
    /// assert_eq!(injected.shoe, seeded.shoe);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for no decks or no starting cash.
    pub fn with_rng(options: EnvOptions, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        Self::with_dealer(options, rng, FixedThreshold::DEALER)
    }
}

impl<D: Policy> Session<D> {
    /// Creates a session whose dealer plays `dealer` instead of the house rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for no decks or no starting cash.
    pub fn with_dealer(
        options: EnvOptions,
        rng: ChaCha8Rng,
        dealer: D,
    ) -> Result<Self, ConfigError> {
        if options.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if options.initial_cash == 0 {
            return Err(ConfigError::NoCash);
        }

        Ok(Self::fresh(options, rng, dealer))
    }

    /// Builds a session at the start of its first round.
    fn fresh(options: EnvOptions, mut rng: ChaCha8Rng, dealer_policy: D) -> Self {
        let mut shoe = Shoe::new(options.decks);
        shoe.shuffle(&mut rng);

        Self {
            shoe,
            bankroll: Bankroll::new(options.initial_cash),
            options,
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_policy,
            bet_percent: None,
            phase: Phase::AwaitingBet,
            turn: Turn::Player,
            rng,
        }
    }

    /// Starts the next round.
    ///
    /// A ruined session is consumed and a brand-new one with the same
    /// options is returned, carrying the random generator forward. Otherwise
    /// both hands go to the discard pile, the shoe is renewed if fewer than
    /// half its cards remain, and the shoe is reshuffled.
    #[must_use]
    pub fn reset(mut self) -> Self {
        if self.bankroll.is_ruined() {
            log::debug!("bankroll exhausted, restarting session");
            return Self::fresh(self.options, self.rng, self.dealer_policy);
        }

        let dealer_cards = self.dealer.take();
        let player_cards = self.player.take();
        self.shoe.discard(&dealer_cards);
        self.shoe.discard(&player_cards);

        if self.shoe.needs_renewal() {
            log::debug!(
                "{} cards left of {} ({} decks), renewing shoe",
                self.shoe.remaining_count(),
                self.shoe.capacity(),
                self.shoe.decks()
            );
            self.shoe = Shoe::new(self.options.decks);
        }
        self.shoe.shuffle(&mut self.rng);

        self.bet_percent = None;
        self.phase = Phase::AwaitingBet;
        self.turn = Turn::Player;
        self
    }

    /// Returns a snapshot of the player's view.
    #[must_use]
    pub fn get_state(&self) -> GameState {
        GameState {
            deck_nums: self.options.decks,
            initial_cash: self.bankroll.initial(),
            turn: self.turn,
            hand: *self.player.cards(),
            discarded: *self.shoe.discarded(),
            bet_percent: self.bet_percent,
            remaining_cash: self.bankroll.remaining(),
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &EnvOptions {
        &self.options
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Builds a step result, closing the round if it terminated.
    fn outcome(&mut self, reward: i64, outcome: Option<RoundOutcome>) -> ActionOutcome {
        if let Some(outcome) = outcome {
            self.phase = Phase::RoundOver;
            log::debug!(
                "round over: {outcome:?}, player {} dealer {}, reward {reward}, cash {}",
                self.player.value(),
                self.dealer.value(),
                self.bankroll.remaining()
            );
        }

        ActionOutcome {
            new_state: self.get_state(),
            reward,
            terminated: outcome.is_some(),
            outcome,
        }
    }
}
