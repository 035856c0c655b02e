use crate::error::RoundError;
use crate::policy::{Action, Policy};
use crate::result::{RoundOutcome, RoundSummary};

use super::Session;

impl<D: Policy> Session<D> {
    /// Plays a whole round, asking `player` to hit or stand after the deal.
    ///
    /// The session is left in the round-over phase; call [`Session::reset`]
    /// before the next round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{EnvOptions, FixedThreshold, Session};
    ///
    /// let mut session = Session::new(EnvOptions::default(), 7).unwrap();
    /// let summary = session
    ///     .play_round(0.1, &mut FixedThreshold::NAIVE_PLAYER)
    ///     .unwrap();
    /// assert_eq!(summary.reward, session.get_state().remaining_cash as i64 - 100);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is rejected or a card step fails.
    pub fn play_round<P: Policy + ?Sized>(
        &mut self,
        bet_percent: f64,
        player: &mut P,
    ) -> Result<RoundSummary, RoundError> {
        let mut step = self.bet_step(bet_percent)?;
        let mut hits: u8 = 0;

        while !step.terminated {
            let action = player.decide(&self.player, &step.new_state);
            if action == Action::Hit {
                hits = hits.saturating_add(1);
            }
            step = self.card_step(action == Action::Hit)?;
        }

        Ok(RoundSummary {
            outcome: step.outcome.unwrap_or(RoundOutcome::Push),
            reward: step.reward,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            hits,
        })
    }
}
