//! A step-driven single-player blackjack environment with optional `no_std`
//! support.
//!
//! The crate provides a [`Session`] that plays rounds against a dealer who
//! draws below 17. An external agent drives each round through
//! [`Session::bet_step`] and [`Session::card_step`], observing an immutable
//! [`GameState`] and a cash reward after every step.
//!
//! # Example
//!
//! ```
//! use bjenv::{EnvOptions, Session};
//!
//! let mut session = Session::new(EnvOptions::default(), 42).unwrap();
//! let mut step = session.bet_step(0.25).unwrap();
//! while !step.terminated {
//!     let hit = session.player_hand().value() < 15;
//!     step = session.card_step(hit).unwrap();
//! }
//! let session = session.reset();
//! let _ = session.get_state().features();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod shoe;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{DECK_SIZE, RANK_COUNT, Rank, RankCounts};
pub use error::{ActionError, BetError, ConfigError, DeckExhausted, RoundError, StackError};
pub use game::{FEATURE_LEN, GameState, Phase, Session, Turn};
pub use hand::{BLACKJACK, Hand, HandValue, evaluate};
pub use options::EnvOptions;
pub use policy::{Action, External, FixedThreshold, Policy};
pub use result::{ActionOutcome, RoundOutcome, RoundSummary};
pub use shoe::Shoe;
