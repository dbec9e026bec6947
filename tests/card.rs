//! Card model tests.

use std::collections::HashSet;

use deckrs::{Card, Color, ParseCardError, Rank, RankError, Suit, SuitError, deck};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn display_uses_plural_suit_names() {
    assert_eq!(card(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Spade, Rank::Two).to_string(), "Two of Spades");
    assert_eq!(card(Suit::Club, Rank::Five).to_string(), "Five of Clubs");
    assert_eq!(card(Suit::Diamond, Rank::Queen).to_string(), "Queen of Diamonds");
}

#[test]
fn joker_display_ignores_rank() {
    assert_eq!(Card::joker().to_string(), "Joker");
    for rank in Rank::ALL {
        assert_eq!(card(Suit::Joker, rank).to_string(), "Joker");
    }
}

#[test]
fn jokers_are_rank_agnostic() {
    let low = card(Suit::Joker, Rank::Ace);
    let high = card(Suit::Joker, Rank::King);

    assert_eq!(low, high);
    assert_eq!(low.cmp(&high), core::cmp::Ordering::Equal);
    assert_eq!(high.rank(), None);
    assert!(high.is_joker());
    assert_eq!(high.suit(), Suit::Joker);

    let set: HashSet<Card> = [low, high, Card::joker()].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn equality_is_structural() {
    assert_eq!(card(Suit::Club, Rank::Ten), card(Suit::Club, Rank::Ten));
    assert_ne!(card(Suit::Club, Rank::Ten), card(Suit::Heart, Rank::Ten));
    assert_ne!(card(Suit::Club, Rank::Ten), card(Suit::Club, Rank::Jack));
    assert_eq!(card(Suit::Club, Rank::Ten).rank(), Some(Rank::Ten));
}

#[test]
fn ordering_follows_absolute_rank() {
    assert!(card(Suit::Spade, Rank::Ace) < card(Suit::Spade, Rank::Two));
    assert!(card(Suit::Spade, Rank::King) < card(Suit::Diamond, Rank::Ace));
    assert!(card(Suit::Diamond, Rank::King) < card(Suit::Club, Rank::Ace));
    assert!(card(Suit::Club, Rank::King) < card(Suit::Heart, Rank::Ace));
    assert!(card(Suit::Heart, Rank::King) < Card::joker());
}

#[test]
fn ordering_agrees_with_equality() {
    let mut cards = deck::base();
    cards.push(Card::joker());

    for &a in &cards {
        for &b in &cards {
            assert_eq!(a.cmp(&b) == core::cmp::Ordering::Equal, a == b, "{a} vs {b}");
        }
    }
}

#[test]
fn suit_colors() {
    assert_eq!(Suit::Spade.color(), Some(Color::Black));
    assert_eq!(Suit::Club.color(), Some(Color::Black));
    assert_eq!(Suit::Diamond.color(), Some(Color::Red));
    assert_eq!(Suit::Heart.color(), Some(Color::Red));
    assert_eq!(Suit::Joker.color(), None);
}

#[test]
fn rank_conversion_from_integer() {
    assert_eq!(Rank::try_from(1_u8), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(11_u8), Ok(Rank::Jack));
    assert_eq!(Rank::try_from(13_u8), Ok(Rank::King));
    assert_eq!(Rank::try_from(0_u8), Err(RankError::OutOfRange(0)));
    assert_eq!(Rank::try_from(14_u8), Err(RankError::OutOfRange(14)));
    assert_eq!(
        RankError::OutOfRange(0).to_string(),
        "rank 0 is out of range (expected 1..=13)"
    );
}

#[test]
fn suit_conversion_from_integer() {
    assert_eq!(Suit::try_from(0_u8), Ok(Suit::Spade));
    assert_eq!(Suit::try_from(3_u8), Ok(Suit::Heart));
    assert_eq!(Suit::try_from(4_u8), Ok(Suit::Joker));
    assert_eq!(Suit::try_from(5_u8), Err(SuitError::OutOfRange(5)));
}

#[test]
fn parse_accepts_display_form() {
    for expected in deck::base().into_iter().chain([Card::joker()]) {
        let parsed: Card = expected.to_string().parse().unwrap();
        assert_eq!(parsed, expected);
    }
}

#[test]
fn parse_errors() {
    assert_eq!(
        "Ace Hearts".parse::<Card>(),
        Err(ParseCardError::MissingSeparator)
    );
    assert_eq!(
        "One of Hearts".parse::<Card>(),
        Err(ParseCardError::UnknownRank)
    );
    assert_eq!(
        "Ace of Heart".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
    assert_eq!(
        "Ace of Jokers".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
    assert_eq!("joker".parse::<Card>(), Err(ParseCardError::MissingSeparator));
}
