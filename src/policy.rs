//! Hit/stand decision policies.
//!
//! The dealer plays [`FixedThreshold::DEALER`] unless a session is built with
//! [`Session::with_dealer`](crate::Session::with_dealer). The same trait lets
//! [`Session::play_round`](crate::Session::play_round) drive the player with a
//! fixed rule or an injected agent.

use crate::game::GameState;
use crate::hand::Hand;

/// A participant's decision on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Chooses the next action for a hand.
pub trait Policy {
    /// Decides whether `hand` takes another card. `state` is the player-facing
    /// snapshot at the time of the decision.
    fn decide(&mut self, hand: &Hand, state: &GameState) -> Action;
}

/// Hits while the hand value is below a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedThreshold {
    threshold: u8,
}

impl FixedThreshold {
    /// The house rule: draw below 17.
    pub const DEALER: Self = Self::new(17);

    /// A naive player rule: draw below 15.
    pub const NAIVE_PLAYER: Self = Self::new(15);

    /// Creates a policy that hits while the value is below `threshold`.
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// The value at or above which this policy stands.
    #[must_use]
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Policy for FixedThreshold {
    fn decide(&mut self, hand: &Hand, _state: &GameState) -> Action {
        if hand.value() < self.threshold {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

/// Delegates every decision to an injected agent.
///
/// ```
/// use bjenv::{Action, External, Policy};
///
/// let mut agent = External::new(|hand: &bjenv::Hand, _: &bjenv::GameState| {
///     if hand.len() < 3 { Action::Hit } else { Action::Stand }
/// });
/// let _ = &mut agent as &mut dyn Policy;
/// ```
pub struct External<F> {
    agent: F,
}

impl<F> External<F>
where
    F: FnMut(&Hand, &GameState) -> Action,
{
    /// Wraps `agent`.
    pub const fn new(agent: F) -> Self {
        Self { agent }
    }
}

impl<F> Policy for External<F>
where
    F: FnMut(&Hand, &GameState) -> Action,
{
    fn decide(&mut self, hand: &Hand, state: &GameState) -> Action {
        (self.agent)(hand, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, RankCounts};
    use crate::game::Turn;

    fn state() -> GameState {
        GameState {
            deck_nums: 1,
            initial_cash: 100,
            turn: Turn::Player,
            hand: RankCounts::new(),
            discarded: RankCounts::new(),
            bet_percent: None,
            remaining_cash: 100,
        }
    }

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(rank);
        }
        hand
    }

    #[test]
    fn fixed_threshold_stands_at_threshold() {
        let mut dealer = FixedThreshold::DEALER;
        assert_eq!(dealer.threshold(), 17);
        assert_eq!(dealer.decide(&hand(&[Rank::Ten, Rank::Six]), &state()), Action::Hit);
        assert_eq!(dealer.decide(&hand(&[Rank::Ten, Rank::Seven]), &state()), Action::Stand);
        assert_eq!(dealer.decide(&hand(&[Rank::Ace, Rank::Six]), &state()), Action::Stand);

        let mut player = FixedThreshold::NAIVE_PLAYER;
        assert_eq!(player.threshold(), 15);
        assert_eq!(player.decide(&hand(&[Rank::Ten, Rank::Four]), &state()), Action::Hit);
        assert_eq!(player.decide(&hand(&[Rank::Ten, Rank::Five]), &state()), Action::Stand);
    }

    #[test]
    fn external_forwards_to_agent() {
        let mut calls = 0;
        let mut agent = External::new(|_: &Hand, _: &GameState| {
            calls += 1;
            Action::Stand
        });
        assert_eq!(agent.decide(&Hand::new(), &state()), Action::Stand);
        assert_eq!(agent.decide(&Hand::new(), &state()), Action::Stand);
        drop(agent);
        assert_eq!(calls, 2);
    }
}
