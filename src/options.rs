//! Environment configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjenv::EnvOptions;
///
/// let options = EnvOptions::default()
///     .with_decks(6)
///     .with_initial_cash(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Cash the player starts each session with.
    pub initial_cash: u64,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            initial_cash: 100,
        }
    }
}

impl EnvOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting cash.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_initial_cash(1_000);
    /// assert_eq!(options.initial_cash, 1_000);
    /// ```
    #[must_use]
    pub const fn with_initial_cash(mut self, cash: u64) -> Self {
        self.initial_cash = cash;
        self
    }
}
