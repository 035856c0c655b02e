use crate::error::ActionError;
use crate::policy::Policy;
use crate::result::{ActionOutcome, RoundOutcome};

use super::{Phase, Session};

impl<D: Policy> Session<D> {
    /// Player action: hit (`take_card = true`) or stand.
    ///
    /// A hit that goes over 21 loses the round. Standing always ends the
    /// round: a two-card 21 pays double, otherwise the dealer plays out and
    /// the totals are compared.
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is open or the shoe runs out of
    /// cards. Nothing is changed on error.
    pub fn card_step(&mut self, take_card: bool) -> Result<ActionOutcome, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::IllegalStateTransition);
        }

        if take_card {
            self.hit()
        } else {
            self.stand()
        }
    }

    fn hit(&mut self) -> Result<ActionOutcome, ActionError> {
        let card = self.shoe.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            let reward = self.bankroll.settle_loss(self.stake_fraction());
            return Ok(self.outcome(reward, Some(RoundOutcome::Bust)));
        }

        Ok(self.outcome(0, None))
    }

    fn stand(&mut self) -> Result<ActionOutcome, ActionError> {
        let bet_percent = self.stake_fraction();

        if self.player.is_natural() {
            let reward = self.bankroll.settle_win(bet_percent, 2.0);
            return Ok(self.outcome(reward, Some(RoundOutcome::Blackjack)));
        }

        let drawn = self.dealer_play()?;
        log::trace!("dealer drew {drawn} cards");

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let (reward, outcome) = if self.dealer.is_bust() {
            (
                self.bankroll.settle_win(bet_percent, 1.0),
                RoundOutcome::DealerBust,
            )
        } else if dealer_value < player_value {
            (self.bankroll.settle_win(bet_percent, 1.0), RoundOutcome::Win)
        } else if dealer_value == player_value {
            (0, RoundOutcome::Push)
        } else {
            (self.bankroll.settle_loss(bet_percent), RoundOutcome::Lose)
        };

        Ok(self.outcome(reward, Some(outcome)))
    }

    /// Bet fraction of the open round.
    fn stake_fraction(&self) -> f64 {
        self.bet_percent.unwrap_or(0.0)
    }
}
