//! A playing-card deck builder with optional `no_std` support.
//!
//! A deck starts as the canonical 52 cards and is passed through an ordered
//! list of transforms: shuffling, sorting, filtering, adding jokers, or
//! combining several decks.
//!
//! # Example
//!
//! ```
//! use deckrs::{deck, Rank};
//! use deckrs::transform::{FilterRank, Jokers, Shuffle};
//!
//! let cards = deck::new(&[&FilterRank::new([Rank::Ace]), &Jokers(1), &Shuffle]);
//! assert_eq!(cards.len(), 49);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod transform;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, NUM_RANKS, NUM_SUITS, Rank, Suit};
pub use deck::Transform;
pub use error::{ParseCardError, RankError, SuitError};
pub use options::DeckOptions;
