//! Card ranks and rank-count multisets.

use core::ops::Index;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 13;

/// Copies of each rank in a single deck (one per suit).
pub const CARDS_PER_RANK: u32 = 4;

/// A card rank. Suits play no part in blackjack and are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in their stable iteration order.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of this rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Base point value: face value for 2-10, 10 for court cards and 1 for an
    /// ace. Whether an ace counts 11 is decided by hand valuation.
    #[must_use]
    pub const fn pip_value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Jack | Self::Queen | Self::King => 10,
            rank => rank as u8 + 2,
        }
    }

    /// Returns whether this rank is worth ten points.
    #[must_use]
    pub const fn is_ten_valued(self) -> bool {
        matches!(self, Self::Ten | Self::Jack | Self::Queen | Self::King)
    }
}

/// A multiset of ranks stored as one counter per rank.
///
/// Absent ranks read as zero and iteration always follows [`Rank::ALL`], so two
/// equal multisets iterate identically regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RankCounts([u32; RANK_COUNT]);

impl RankCounts {
    /// Creates an empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; RANK_COUNT])
    }

    /// Creates the multiset of `decks` full 52-card decks.
    #[must_use]
    pub const fn full(decks: u8) -> Self {
        Self([decks as u32 * CARDS_PER_RANK; RANK_COUNT])
    }

    /// Returns the count for `rank`.
    #[must_use]
    pub const fn get(&self, rank: Rank) -> u32 {
        self.0[rank.index()]
    }

    /// Adds one card of `rank`.
    pub const fn add(&mut self, rank: Rank) {
        self.0[rank.index()] += 1;
    }

    /// Adds every card of `other` to this multiset.
    pub fn merge(&mut self, other: &Self) {
        for (count, extra) in self.0.iter_mut().zip(other.0) {
            *count += extra;
        }
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns whether the multiset holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }

    /// Iterates `(rank, count)` pairs over all 13 ranks, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u32)> + '_ {
        Rank::ALL.iter().map(|&rank| (rank, self.get(rank)))
    }
}

impl Index<Rank> for RankCounts {
    type Output = u32;

    fn index(&self, rank: Rank) -> &u32 {
        &self.0[rank.index()]
    }
}

impl FromIterator<Rank> for RankCounts {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut counts = Self::new();
        for rank in iter {
            counts.add(rank);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pip_values() {
        let values: [u8; RANK_COUNT] = Rank::ALL.map(Rank::pip_value);
        assert_eq!(values, [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 1]);
    }

    #[test]
    fn counts_iterate_in_rank_order_with_zero_default() {
        let counts: RankCounts = [Rank::Ace, Rank::Two, Rank::Ace].into_iter().collect();
        assert_eq!(counts[Rank::Ace], 2);
        assert_eq!(counts.get(Rank::King), 0);
        assert_eq!(counts.total(), 3);

        let order: Vec<Rank> = counts.iter().map(|(rank, _)| rank).collect();
        assert_eq!(order, Rank::ALL.to_vec());
    }

    #[test]
    fn full_shoe_counts() {
        let counts = RankCounts::full(4);
        assert_eq!(counts.total() as usize, 4 * DECK_SIZE);
        assert!(counts.iter().all(|(_, count)| count == 16));
    }
}
