//! Deck construction.
//!
//! A deck starts as the canonical 52-card sequence and is threaded through a
//! list of [`Transform`]s, left to right.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A step in the deck-construction pipeline.
///
/// Every `Fn(Vec<Card>) -> Vec<Card>` is a transform, so ad-hoc steps can be
/// passed as closures next to the built-in ones in [`crate::transform`].
pub trait Transform {
    /// Consumes a card sequence and returns the transformed sequence.
    fn apply(&self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: Fn(Vec<Card>) -> Vec<Card>,
{
    fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Returns the canonical 52-card deck.
///
/// Cards are grouped by suit (Spade, Diamond, Club, Heart) with ranks
/// ascending from Ace to King inside each suit.
#[must_use]
pub fn base() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck by applying `transforms` to the canonical deck in order.
///
/// # Example
///
/// ```
/// use deckrs::deck;
/// use deckrs::transform::{DefaultSort, Jokers, Shuffle};
///
/// let cards = deck::new(&[&Jokers(2), &Shuffle, &DefaultSort]);
/// assert_eq!(cards.len(), 54);
/// assert!(cards[52].is_joker());
/// ```
#[must_use]
pub fn new(transforms: &[&dyn Transform]) -> Vec<Card> {
    let mut cards = base();

    for (step, transform) in transforms.iter().enumerate() {
        let before = cards.len();
        cards = transform.apply(cards);
        trace!(step, before, after = cards.len(), "applied deck transform");
    }

    debug!(
        transforms = transforms.len(),
        cards = cards.len(),
        "built deck"
    );
    cards
}
