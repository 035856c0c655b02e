use crate::error::DeckExhausted;
use crate::policy::{Action, Policy};

use super::Session;

impl<D: Policy> Session<D> {
    /// Dealer plays their hand according to its policy.
    ///
    /// The dealer draws until the policy stands. Play happens on a copy of
    /// the shoe and hand that replaces the live ones only once the dealer
    /// stands, so running out of cards leaves the session untouched.
    ///
    /// Returns the number of cards drawn.
    pub(super) fn dealer_play(&mut self) -> Result<usize, DeckExhausted> {
        let state = self.get_state();
        let mut shoe = self.shoe.clone();
        let mut dealer = self.dealer.clone();
        let mut drawn = 0;

        while self.dealer_policy.decide(&dealer, &state) == Action::Hit {
            dealer.add_card(shoe.draw()?);
            drawn += 1;
        }

        self.shoe = shoe;
        self.dealer = dealer;

        Ok(drawn)
    }
}
