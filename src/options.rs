//! Deck configuration options.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Color, Rank, Suit};
use crate::deck::{self, Transform};
#[cfg(feature = "std")]
use crate::transform::Shuffle;
use crate::transform::{
    DefaultSort, FilterColor, FilterRank, FilterSpecific, FilterSuit, Jokers, MultipleDecks,
    ReverseSort, ShuffleSeeded,
};

/// An ordered list of transforms used to build a deck.
///
/// Use the builder pattern to describe the deck. Steps run in the order they
/// are added:
///
/// ```
/// use deckrs::{DeckOptions, Rank};
///
/// let cards = DeckOptions::default()
///     .with_filter_ranks([Rank::Two, Rank::Three])
///     .with_jokers(2)
///     .with_decks(2)
///     .build();
/// assert_eq!(cards.len(), 2 * (44 + 2));
/// ```
#[derive(Default)]
pub struct DeckOptions {
    steps: Vec<Box<dyn Transform>>,
}

impl fmt::Debug for DeckOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckOptions")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl DeckOptions {
    /// Adds an arbitrary transform step.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckOptions};
    ///
    /// let cards = DeckOptions::default()
    ///     .with_transform(|mut cards: Vec<Card>| {
    ///         cards.truncate(5);
    ///         cards
    ///     })
    ///     .build();
    /// assert_eq!(cards.len(), 5);
    /// ```
    #[must_use]
    pub fn with_transform(mut self, transform: impl Transform + 'static) -> Self {
        self.steps.push(Box::new(transform));
        self
    }

    /// Shuffles the deck with fresh entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_shuffle(self) -> Self {
        self.with_transform(Shuffle)
    }

    /// Shuffles the deck deterministically from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let a = DeckOptions::default().with_seeded_shuffle(7).build();
    /// let b = DeckOptions::default().with_seeded_shuffle(7).build();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_seeded_shuffle(self, seed: u64) -> Self {
        self.with_transform(ShuffleSeeded(seed))
    }

    /// Sorts the deck into canonical order.
    #[must_use]
    pub fn with_default_sort(self) -> Self {
        self.with_transform(DefaultSort)
    }

    /// Sorts the deck into reverse canonical order.
    #[must_use]
    pub fn with_reverse_sort(self) -> Self {
        self.with_transform(ReverseSort)
    }

    /// Removes cards of the given ranks.
    #[must_use]
    pub fn with_filter_ranks(self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.with_transform(FilterRank::new(ranks))
    }

    /// Removes cards of the given suits.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Suit};
    ///
    /// let cards = DeckOptions::default().with_filter_suits([Suit::Heart]).build();
    /// assert_eq!(cards.len(), 39);
    /// ```
    #[must_use]
    pub fn with_filter_suits(self, suits: impl IntoIterator<Item = Suit>) -> Self {
        self.with_transform(FilterSuit::new(suits))
    }

    /// Removes every copy of the given cards.
    #[must_use]
    pub fn with_filter_cards(self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.with_transform(FilterSpecific::new(cards))
    }

    /// Removes cards of the given colors.
    #[must_use]
    pub fn with_filter_color(self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.with_transform(FilterColor::new(colors))
    }

    /// Appends `count` jokers.
    #[must_use]
    pub fn with_jokers(self, count: usize) -> Self {
        self.with_transform(Jokers(count))
    }

    /// Repeats the deck built so far `count` times.
    #[must_use]
    pub fn with_decks(self, count: usize) -> Self {
        self.with_transform(MultipleDecks(count))
    }

    /// Returns the number of steps added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether no steps have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Builds the deck by running every step over the canonical deck.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        let steps: Vec<&dyn Transform> = self.steps.iter().map(|step| &**step).collect();
        deck::new(&steps)
    }
}
