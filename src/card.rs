//! Card types and deck constants.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError, SuitError};

/// Number of ranks per suit.
pub const NUM_RANKS: usize = 13;

/// Number of playable suits.
pub const NUM_SUITS: usize = 4;

/// Number of cards per deck.
pub const DECK_SIZE: usize = NUM_RANKS * NUM_SUITS;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Diamonds and hearts.
    Red,
    /// Spades and clubs.
    Black,
}

/// Card suit.
///
/// [`Suit::Joker`] marks joker cards. It is not a playable suit and never
/// appears in a base deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker sentinel.
    Joker,
}

impl Suit {
    /// The four playable suits, in canonical order.
    pub const STANDARD: [Self; NUM_SUITS] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the color of the suit, or `None` for [`Suit::Joker`].
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Diamond | Self::Heart => Some(Color::Red),
            Self::Spade | Self::Club => Some(Color::Black),
            Self::Joker => None,
        }
    }

    /// Position of the suit in canonical order (Spade = 0 .. Joker = 4).
    pub(crate) const fn ordinal(self) -> u8 {
        match self {
            Self::Spade => 0,
            Self::Diamond => 1,
            Self::Club => 2,
            Self::Heart => 3,
            Self::Joker => 4,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = SuitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(SuitError::OutOfRange(value)),
        }
    }
}

/// Card rank, from Ace (low) to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
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
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; NUM_RANKS] = [
        Self::Ace,
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
    ];

    /// Face value of the rank (Ace = 1 .. King = 13). Zero is never used.
    pub(crate) const fn ordinal(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.name() == name)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[usize::from(value) - 1]),
            _ => Err(RankError::OutOfRange(value)),
        }
    }
}

/// A playing card.
///
/// Jokers carry no rank: any two jokers are equal, display as `"Joker"`, and
/// sort after every heart.
///
/// Cards order by absolute rank (`suit * 13 + rank`), which puts all spades
/// first, then diamonds, clubs, hearts and finally jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// The rank of a [`Suit::Joker`] card is discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Joker, Rank::Five), Card::joker());
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        let rank = if matches!(suit, Suit::Joker) {
            Rank::Ace
        } else {
            rank
        };
        Self { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, Rank::Ace)
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card, or `None` for a joker.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        if self.is_joker() {
            None
        } else {
            Some(self.rank)
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Sort key for canonical order.
    ///
    /// Jokers keep the normalized rank stored by [`Card::new`], so every joker
    /// shares key 53, above the King of Hearts at 52.
    const fn absolute_rank(self) -> u8 {
        self.suit.ordinal() * NUM_RANKS as u8 + self.rank.ordinal()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_rank().cmp(&other.absolute_rank())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{rank} of {}s", self.suit),
            None => write!(f, "{}", self.suit),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the [`Display`](fmt::Display) form of a card, such as
    /// `"Ace of Hearts"` or `"Joker"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Suit::Joker.name() {
            return Ok(Self::joker());
        }

        let (rank, suit) = s
            .split_once(" of ")
            .ok_or(ParseCardError::MissingSeparator)?;
        let rank = Rank::from_name(rank).ok_or(ParseCardError::UnknownRank)?;
        let suit = suit
            .strip_suffix('s')
            .and_then(|name| Suit::STANDARD.into_iter().find(|suit| suit.name() == name))
            .ok_or(ParseCardError::UnknownSuit)?;

        Ok(Self::new(suit, rank))
    }
}
