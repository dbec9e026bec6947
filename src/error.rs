//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when converting an integer into a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is outside `1..=13`.
    #[error("rank {0} is out of range (expected 1..=13)")]
    OutOfRange(u8),
}

/// Errors that can occur when converting an integer into a [`Suit`](crate::Suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// Value is outside `0..=4`.
    #[error("suit {0} is out of range (expected 0..=4)")]
    OutOfRange(u8),
}

/// Errors that can occur when parsing a [`Card`](crate::Card) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Text is neither `"Joker"` nor of the form `"<Rank> of <Suit>s"`.
    #[error("expected \"<rank> of <suit>s\" or \"Joker\"")]
    MissingSeparator,
    /// Rank name is not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name is not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
}
