//! The multi-deck shoe and its discard pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{CARDS_PER_RANK, DECK_SIZE, Rank, RankCounts};
use crate::error::{DeckExhausted, StackError};

/// The working card supply of `decks` standard decks plus the discard pile.
///
/// Cards dealt into hands belong to neither the shoe nor the discard pile until
/// the hands are drained back with [`Shoe::discard`], so
/// `remaining_count() + discarded().total() <= capacity()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    decks: u8,
    /// Remaining cards; the next draw is the last element.
    cards: Vec<Rank>,
    discarded: RankCounts,
}

impl Shoe {
    /// Creates a full, unshuffled shoe of `decks` decks.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            for rank in Rank::ALL {
                for _ in 0..CARDS_PER_RANK {
                    cards.push(rank);
                }
            }
        }

        Self {
            decks,
            cards,
            discarded: RankCounts::new(),
        }
    }

    /// Creates a shoe whose next draws are exactly `draws`, in order.
    ///
    /// Useful for replaying a recorded round or forcing a particular deal.
    /// `draws` may be any part of `decks` full decks.
    ///
    /// # Errors
    ///
    /// Returns an error if `draws` holds more cards, or more of any rank, than
    /// `decks` decks contain.
    pub fn stacked(decks: u8, draws: &[Rank]) -> Result<Self, StackError> {
        let full = RankCounts::full(decks);
        if draws.len() > full.total() as usize {
            return Err(StackError::TooManyCards);
        }

        let counts: RankCounts = draws.iter().copied().collect();
        if let Some((rank, _)) = counts.iter().find(|&(rank, count)| count > full[rank]) {
            return Err(StackError::TooManyOfRank(rank));
        }

        let mut cards = draws.to_vec();
        cards.reverse();

        Ok(Self {
            decks,
            cards,
            discarded: RankCounts::new(),
        })
    }

    /// Randomizes the order of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if no cards remain.
    pub fn draw(&mut self) -> Result<Rank, DeckExhausted> {
        let rank = self.cards.pop().ok_or(DeckExhausted)?;
        log::trace!("drew {rank:?}, {} left in shoe", self.cards.len());
        Ok(rank)
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Per-rank counts of the cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> RankCounts {
        self.cards.iter().copied().collect()
    }

    /// Cards returned from hands since the shoe was last renewed.
    #[must_use]
    pub const fn discarded(&self) -> &RankCounts {
        &self.discarded
    }

    /// Moves drained hand cards onto the discard pile.
    pub fn discard(&mut self, cards: &RankCounts) {
        self.discarded.merge(cards);
    }

    /// Number of decks this shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Total cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns whether fewer than half of the shoe's cards remain, in which case
    /// the next round should start from a fresh shoe.
    #[must_use]
    pub fn needs_renewal(&self) -> bool {
        self.cards.len() < self.capacity() / 2
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn full_shoe_has_every_rank() {
        let shoe = Shoe::new(2);
        assert_eq!(shoe.decks(), 2);
        assert_eq!(shoe.remaining_count(), 104);
        assert_eq!(shoe.remaining(), RankCounts::full(2));
        assert!(shoe.discarded().is_empty());
    }

    #[test]
    fn shuffle_keeps_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut shoe = Shoe::new(1);
        shoe.shuffle(&mut rng);
        assert_eq!(shoe.remaining(), RankCounts::full(1));
    }

    #[test]
    fn stacked_shoe_draws_in_order_then_exhausts() {
        let mut shoe = Shoe::stacked(1, &[Rank::Ace, Rank::Five]).unwrap();
        assert_eq!(shoe.draw(), Ok(Rank::Ace));
        assert_eq!(shoe.draw(), Ok(Rank::Five));
        assert_eq!(shoe.draw(), Err(DeckExhausted));
    }

    #[test]
    fn stacked_shoe_rejects_impossible_draws() {
        assert_eq!(
            Shoe::stacked(1, &[Rank::Ace; 60]).unwrap_err(),
            StackError::TooManyCards
        );
        assert_eq!(
            Shoe::stacked(1, &[Rank::Ace; 5]).unwrap_err(),
            StackError::TooManyOfRank(Rank::Ace)
        );

        let shoe = Shoe::stacked(2, &[Rank::Ace; 8]).unwrap();
        assert_eq!(shoe.remaining_count(), 8);
        assert!(shoe.remaining_count() <= shoe.capacity());
    }

    #[test]
    fn renewal_threshold_is_half_the_shoe() {
        let mut shoe = Shoe::new(1);
        for _ in 0..26 {
            shoe.draw().unwrap();
        }
        assert!(!shoe.needs_renewal());
        shoe.draw().unwrap();
        assert!(shoe.needs_renewal());
    }
}
