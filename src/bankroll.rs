//! Session bankroll and payout settlement.

#[cfg(feature = "std")]
fn floor_amount(amount: f64) -> u64 {
    amount.floor() as u64
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor_amount(amount: f64) -> u64 {
    libm::floor(amount) as u64
}

/// Cash held by the player over a session.
///
/// `remaining` only moves through [`Bankroll::settle_loss`] and
/// [`Bankroll::settle_win`], each called at most once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    initial: u64,
    remaining: u64,
    max_attained: u64,
}

impl Bankroll {
    /// Creates a bankroll holding `initial` cash.
    #[must_use]
    pub const fn new(initial: u64) -> Self {
        Self {
            initial,
            remaining: initial,
            max_attained: initial,
        }
    }

    /// Restores a bankroll mid-session, e.g. to resume a recorded run.
    ///
    /// `max_attained` is raised to at least `remaining` and `initial`.
    #[must_use]
    pub fn restore(initial: u64, remaining: u64, max_attained: u64) -> Self {
        Self {
            initial,
            remaining,
            max_attained: max_attained.max(remaining).max(initial),
        }
    }

    /// Cash the session started with.
    #[must_use]
    pub const fn initial(&self) -> u64 {
        self.initial
    }

    /// Cash currently held.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Highest cash held at any point this session.
    #[must_use]
    pub const fn max_attained(&self) -> u64 {
        self.max_attained
    }

    /// Returns whether the player has run out of cash.
    #[must_use]
    pub const fn is_ruined(&self) -> bool {
        self.remaining == 0
    }

    /// Stake implied by betting `bet_percent` of the remaining cash, rounded
    /// down, before any minimum is applied.
    #[must_use]
    pub fn stake(&self, bet_percent: f64) -> u64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for bankroll amounts"
        )]
        let cash = self.remaining as f64;
        floor_amount(cash * bet_percent)
    }

    /// Settles a lost round and returns the reward.
    ///
    /// At least one unit is always lost. If that empties the bankroll the
    /// reward is the negated peak cash rather than the amount actually lost.
    pub fn settle_loss(&mut self, bet_percent: f64) -> i64 {
        let loss = self.stake(bet_percent).max(1);
        self.remaining = self.remaining.saturating_sub(loss);

        if self.is_ruined() {
            log::debug!("bankroll ruined, peak cash was {}", self.max_attained);
            -to_reward(self.max_attained)
        } else {
            -to_reward(loss)
        }
    }

    /// Settles a won round paying `multiplier` times the stake and returns
    /// the reward.
    pub fn settle_win(&mut self, bet_percent: f64, multiplier: f64) -> i64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for bankroll amounts"
        )]
        let cash = self.remaining as f64;
        let win = floor_amount(cash * bet_percent * multiplier);
        self.remaining = self.remaining.saturating_add(win);
        self.max_attained = self.max_attained.max(self.remaining);
        to_reward(win)
    }
}

fn to_reward(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_takes_at_least_one_unit() {
        let mut bankroll = Bankroll::new(100);
        assert_eq!(bankroll.settle_loss(0.0), -1);
        assert_eq!(bankroll.remaining(), 99);
    }

    #[test]
    fn loss_rounds_stake_down() {
        let mut bankroll = Bankroll::new(99);
        assert_eq!(bankroll.settle_loss(0.5), -49);
        assert_eq!(bankroll.remaining(), 50);
        assert_eq!(bankroll.max_attained(), 99);
    }

    #[test]
    fn ruin_reports_peak_cash() {
        let mut bankroll = Bankroll::restore(100, 10, 100);
        assert_eq!(bankroll.settle_loss(1.0), -100);
        assert_eq!(bankroll.remaining(), 0);
        assert!(bankroll.is_ruined());
    }

    #[test]
    fn win_raises_peak() {
        let mut bankroll = Bankroll::new(100);
        assert_eq!(bankroll.settle_win(0.5, 2.0), 100);
        assert_eq!(bankroll.remaining(), 200);
        assert_eq!(bankroll.max_attained(), 200);

        assert_eq!(bankroll.settle_loss(0.25), -50);
        assert_eq!(bankroll.max_attained(), 200);
    }
}
