//! Hands and hand valuation.

use crate::card::{Rank, RankCounts};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// The valuation of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Best legal total, or the bust total if every ace already counts as 1.
    pub total: u8,
    /// Two-card 21: ace with a ten-valued card, or a pair of aces.
    pub natural: bool,
    /// At least one ace counts as 11.
    pub soft: bool,
}

/// Evaluates a multiset of cards.
///
/// Aces start at 1 and each is promoted to 11 while that keeps the total at
/// 21 or below. A pair of aces is treated as a natural 21.
#[must_use]
pub fn evaluate(cards: &RankCounts) -> HandValue {
    let aces = cards[Rank::Ace];

    if cards.total() == 2 {
        let tens = cards.iter().filter(|(rank, _)| rank.is_ten_valued());
        if aces == 2 || (aces == 1 && tens.map(|(_, count)| count).sum::<u32>() == 1) {
            return HandValue {
                total: BLACKJACK,
                natural: true,
                soft: true,
            };
        }
    }

    let mut total: u32 = cards
        .iter()
        .map(|(rank, count)| u32::from(rank.pip_value()) * count)
        .sum();
    let mut soft = false;
    for _ in 0..aces {
        if total + 10 <= u32::from(BLACKJACK) {
            total += 10;
            soft = true;
        }
    }

    HandValue {
        total: total.min(u32::from(u8::MAX)) as u8,
        natural: false,
        soft,
    }
}

/// One participant's hand for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: RankCounts,
    first: Option<Rank>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: RankCounts::new(),
            first: None,
        }
    }

    /// Adds a card to the hand.
    pub const fn add_card(&mut self, rank: Rank) {
        self.cards.add(rank);
        if self.first.is_none() {
            self.first = Some(rank);
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &RankCounts {
        &self.cards
    }

    /// Returns the first card drawn this round.
    #[must_use]
    pub const fn first_card(&self) -> Option<Rank> {
        self.first
    }

    /// Full valuation of the hand.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Best legal total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().total
    }

    /// Value of the face-up first card, with an ace counted as 11.
    #[must_use]
    pub fn showing_value(&self) -> u8 {
        self.first.map_or(0, |rank| match rank {
            Rank::Ace => 11,
            rank => rank.pip_value(),
        })
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.evaluate().natural
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.total() as usize
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand and returns the cards it held.
    pub fn take(&mut self) -> RankCounts {
        self.first = None;
        core::mem::take(&mut self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(ranks: &[Rank]) -> HandValue {
        evaluate(&ranks.iter().copied().collect())
    }

    #[test]
    fn pair_of_aces_is_natural() {
        let value = value_of(&[Rank::Ace, Rank::Ace]);
        assert_eq!(value.total, 21);
        assert!(value.natural);
    }

    #[test]
    fn ace_with_court_card_is_natural() {
        for ten in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            let value = value_of(&[ten, Rank::Ace]);
            assert_eq!(value.total, 21);
            assert!(value.natural, "{ten:?}");
        }
    }

    #[test]
    fn three_card_twenty_one_is_not_natural() {
        let value = value_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(value.total, 21);
        assert!(!value.natural);
        assert!(value.soft);
    }

    #[test]
    fn bust_without_aces() {
        let value = value_of(&[Rank::Ten, Rank::Ten, Rank::Five]);
        assert_eq!(value.total, 25);
        assert!(!value.soft);
    }

    #[test]
    fn aces_demote_to_one() {
        assert_eq!(value_of(&[Rank::Ace, Rank::Six]).total, 17);
        assert_eq!(value_of(&[Rank::Ace, Rank::Six, Rank::King]).total, 17);
        assert_eq!(value_of(&[Rank::Ace, Rank::Ace, Rank::Ace]).total, 13);

        let hard = value_of(&[Rank::Ace, Rank::Nine, Rank::Five]);
        assert_eq!(hard.total, 15);
        assert!(!hard.soft);
    }

    #[test]
    fn hand_tracks_first_card() {
        let mut hand = Hand::new();
        assert_eq!(hand.showing_value(), 0);

        hand.add_card(Rank::Ace);
        hand.add_card(Rank::Seven);
        assert_eq!(hand.first_card(), Some(Rank::Ace));
        assert_eq!(hand.showing_value(), 11);
        assert_eq!(hand.value(), 18);
        assert_eq!(hand.len(), 2);

        let drained = hand.take();
        assert_eq!(drained.total(), 2);
        assert!(hand.is_empty());
        assert_eq!(hand.first_card(), None);
    }
}
