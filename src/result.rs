//! Step and round result types.

use crate::game::GameState;

/// How a round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Equal totals, including both hands opening on 21.
    Push,
    /// Dealer opened on 21 and the player did not.
    DealerBlackjack,
    /// Player went over 21.
    Bust,
    /// Player stood on a two-card 21.
    Blackjack,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beat the dealer.
    Win,
    /// Dealer total beat the player.
    Lose,
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// Snapshot taken after the step.
    pub new_state: GameState,
    /// Cash won (positive) or lost (negative). On ruin this is the negated
    /// peak cash of the session.
    pub reward: i64,
    /// Whether the round has ended.
    pub terminated: bool,
    /// How the round ended, for terminal steps.
    pub outcome: Option<RoundOutcome>,
}

/// Result of a round driven by [`Session::play_round`](crate::Session::play_round).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Reward of the terminal step.
    pub reward: i64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the player drew after the opening deal.
    pub hits: u8,
}
