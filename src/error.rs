//! Error types for environment operations.

use thiserror::Error;

use crate::card::Rank;

/// A draw was requested from an empty shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct DeckExhausted;

/// Errors that can occur when stacking a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// More cards than the shoe's decks hold.
    #[error("more cards than the shoe holds")]
    TooManyCards,
    /// More copies of one rank than the shoe's decks hold.
    #[error("more {0:?} cards than the shoe holds")]
    TooManyOfRank(Rank),
}

/// Errors that can occur when creating a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one deck.
    #[error("shoe must hold at least one deck")]
    NoDecks,
    /// The starting bankroll must be positive.
    #[error("initial cash must be positive")]
    NoCash,
}

/// Errors that can occur during the betting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet fraction is not a number in `[0, 1]`.
    #[error("bet fraction must be within [0, 1]")]
    InvalidBet,
    /// A bet was placed outside the betting phase.
    #[error("bet placed outside the betting phase")]
    IllegalStateTransition,
    /// Not enough cards in the shoe for the opening deal.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}

/// Errors that can occur during the card step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit or stand requested while no player turn is open.
    #[error("no player turn is open")]
    IllegalStateTransition,
    /// Not enough cards in the shoe for the player or the dealer.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}

/// Errors that can occur while driving a whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The betting step failed.
    #[error("betting failed: {0}")]
    Bet(#[from] BetError),
    /// A card step failed.
    #[error("card step failed: {0}")]
    Action(#[from] ActionError),
}
