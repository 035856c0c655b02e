use crate::error::{BetError, DeckExhausted};
use crate::hand::BLACKJACK;
use crate::policy::Policy;
use crate::result::{ActionOutcome, RoundOutcome};

use super::{Phase, Session};

/// Cards dealt before the player's first decision.
const OPENING_CARDS: usize = 4;

impl<D: Policy> Session<D> {
    /// Places the opening bet and deals the first four cards.
    ///
    /// Cards go player, dealer, player, dealer. If both hands open on 21 the
    /// round is a push; if only the dealer does the player loses at once.
    /// Otherwise the player's turn begins.
    ///
    /// # Errors
    ///
    /// Returns an error if `bet_percent` is not within `[0, 1]`, the round is
    /// not awaiting a bet, or the shoe holds fewer than four cards. Nothing is
    /// changed on error.
    pub fn bet_step(&mut self, bet_percent: f64) -> Result<ActionOutcome, BetError> {
        if !(0.0..=1.0).contains(&bet_percent) {
            return Err(BetError::InvalidBet);
        }
        if self.phase != Phase::AwaitingBet {
            return Err(BetError::IllegalStateTransition);
        }
        if self.shoe.remaining_count() < OPENING_CARDS {
            return Err(DeckExhausted.into());
        }

        self.bet_percent = Some(bet_percent);

        for _ in 0..OPENING_CARDS / 2 {
            self.player.add_card(self.shoe.draw()?);
            self.dealer.add_card(self.shoe.draw()?);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        if player_value == BLACKJACK && dealer_value == BLACKJACK {
            return Ok(self.outcome(0, Some(RoundOutcome::Push)));
        }
        if dealer_value == BLACKJACK {
            let reward = self.bankroll.settle_loss(bet_percent);
            return Ok(self.outcome(reward, Some(RoundOutcome::DealerBlackjack)));
        }

        self.phase = Phase::PlayerTurn;
        Ok(self.outcome(0, None))
    }
}
