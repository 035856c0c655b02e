//! Round phases and the player-facing state snapshot.

use crate::card::{RANK_COUNT, RankCounts};

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the opening bet.
    AwaitingBet,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Round has ended; call `reset` to start the next one.
    RoundOver,
}

/// Whose turn the snapshot was taken on.
///
/// The dealer plays synchronously inside a stand, so snapshots always report
/// [`Turn::Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Length of [`GameState::features`]: hand counts, discard counts, bet
/// fraction and normalized cash.
pub const FEATURE_LEN: usize = 2 * RANK_COUNT + 2;

/// Snapshot of everything the player can observe.
///
/// Built fresh on every query; it never borrows from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Number of decks in the shoe.
    pub deck_nums: u8,
    /// Cash the session started with.
    pub initial_cash: u64,
    /// Whose turn it is.
    pub turn: Turn,
    /// The player's cards.
    pub hand: RankCounts,
    /// Cards on the discard pile.
    pub discarded: RankCounts,
    /// Fraction of remaining cash staked this round, if a bet was placed.
    pub bet_percent: Option<f64>,
    /// Cash currently held.
    pub remaining_cash: u64,
}

impl GameState {
    /// Encodes the snapshot as a fixed-length feature vector.
    ///
    /// Card counts are divided by the number of decks and follow rank order;
    /// the bet fraction reads 0 before a bet and cash is relative to the
    /// starting amount.
    #[must_use]
    pub fn features(&self) -> [f64; FEATURE_LEN] {
        let mut features = [0.0; FEATURE_LEN];
        let decks = f64::from(self.deck_nums.max(1));

        let counts = self.hand.iter().chain(self.discarded.iter());
        for (slot, (_, count)) in features.iter_mut().zip(counts) {
            *slot = f64::from(count) / decks;
        }

        features[2 * RANK_COUNT] = self.bet_percent.unwrap_or(0.0);
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for bankroll amounts"
        )]
        let cash_ratio = self.remaining_cash as f64 / self.initial_cash.max(1) as f64;
        features[2 * RANK_COUNT + 1] = cash_ratio;

        features
    }
}
