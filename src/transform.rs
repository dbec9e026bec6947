//! Built-in deck transforms.
//!
//! Each type here implements [`Transform`] and can be passed to
//! [`deck::new`](crate::deck::new) or added through
//! [`DeckOptions`](crate::DeckOptions).
//!
//! Filters remove every card matching any of their values and keep the
//! relative order of the rest. A filter with no values leaves the deck
//! unchanged.

use alloc::vec::Vec;
use core::iter;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{Card, Color, Rank, Suit};
use crate::deck::Transform;

/// Shuffles the deck uniformly.
///
/// Every application seeds a new generator from operating system entropy,
/// so repeated shuffles in the same process give different orders.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shuffle;

#[cfg(feature = "std")]
impl Transform for Shuffle {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        let mut rng = ChaCha8Rng::from_os_rng();
        cards.shuffle(&mut rng);
        cards
    }
}

/// Shuffles the deck with a generator seeded from the given value.
///
/// The same seed always produces the same order for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleSeeded(pub u64);

impl Transform for ShuffleSeeded {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        trace!(seed = self.0, "seeded shuffle");
        let mut rng = ChaCha8Rng::seed_from_u64(self.0);
        cards.shuffle(&mut rng);
        cards
    }
}

/// Sorts the deck into canonical order: spades, diamonds, clubs, hearts,
/// then jokers, with ranks ascending inside each suit.
///
/// The sort is stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSort;

impl Transform for DefaultSort {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort();
        cards
    }
}

/// Sorts the deck into reverse canonical order, jokers first.
///
/// The sort is stable, so equal cards keep their relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseSort;

impl Transform for ReverseSort {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_by(|a, b| b.cmp(a));
        cards
    }
}

/// Removes every card with one of the given ranks. Jokers are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRank(pub Vec<Rank>);

impl FilterRank {
    /// Creates a filter for the given ranks.
    #[must_use]
    pub fn new(ranks: impl IntoIterator<Item = Rank>) -> Self {
        Self(ranks.into_iter().collect())
    }
}

impl Transform for FilterRank {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        for &rank in &self.0 {
            cards.retain(|card| card.rank() != Some(rank));
        }
        cards
    }
}

/// Removes every card with one of the given suits.
///
/// Filtering [`Suit::Joker`] removes all jokers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSuit(pub Vec<Suit>);

impl FilterSuit {
    /// Creates a filter for the given suits.
    #[must_use]
    pub fn new(suits: impl IntoIterator<Item = Suit>) -> Self {
        Self(suits.into_iter().collect())
    }
}

impl Transform for FilterSuit {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        for &suit in &self.0 {
            cards.retain(|card| card.suit() != suit);
        }
        cards
    }
}

/// Removes every copy of the given cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpecific(pub Vec<Card>);

impl FilterSpecific {
    /// Creates a filter for the given cards.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self(cards.into_iter().collect())
    }
}

impl Transform for FilterSpecific {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        for &removed in &self.0 {
            cards.retain(|&card| card != removed);
        }
        cards
    }
}

/// Removes every card of the given colors. Jokers have no color and stay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterColor(pub Vec<Color>);

impl FilterColor {
    /// Creates a filter for the given colors.
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self(colors.into_iter().collect())
    }
}

impl Transform for FilterColor {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        for &color in &self.0 {
            cards.retain(|card| card.suit().color() != Some(color));
        }
        cards
    }
}

/// Appends the given number of jokers to the end of the deck.
///
/// Apply before [`Shuffle`] to mix the jokers into the deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jokers(pub usize);

impl Transform for Jokers {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.extend(iter::repeat_n(Card::joker(), self.0));
        cards
    }
}

/// Repeats the deck so it holds `n` copies of the input, in order.
///
/// `MultipleDecks(0)` and `MultipleDecks(1)` both leave the deck unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultipleDecks(pub usize);

impl Transform for MultipleDecks {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        if self.0 <= 1 {
            return cards;
        }

        let single = cards.len();
        cards.reserve(single * (self.0 - 1));
        for _ in 1..self.0 {
            cards.extend_from_within(..single);
        }
        cards
    }
}
