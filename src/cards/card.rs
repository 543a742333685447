//! Card values: suits, ranks, and the compatibility rule.
//!
//! Suits and ranks are fixed-order enums. A rank's ordinal drives both
//! "same rank" comparisons and its scoring value, so the two can never
//! drift apart.

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Unicode symbol used when rendering a card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Zero-based position of the rank (`Two` = 0, `Ace` = 12).
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Scoring value: `Two` = 2 up to `Ace` = 14.
    #[must_use]
    pub const fn points(self) -> u32 {
        self.ordinal() + 2
    }

    /// Short label used when rendering a card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// ```
/// use staircase::cards::{Card, Rank, Suit};
///
/// let ace = Card::new(Suit::Hearts, Rank::Ace);
/// let queen = Card::new(Suit::Hearts, Rank::Queen);
///
/// assert!(ace.compatible(queen));
/// assert_eq!(ace.to_string(), "\u{2665}A");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Two cards can be combined when they share a suit or a rank.
    #[must_use]
    pub fn compatible(self, other: Card) -> bool {
        self.suit == other.suit || self.rank.ordinal() == other.rank.ordinal()
    }

    /// Scoring value of this card.
    #[must_use]
    pub const fn points(self) -> u32 {
        self.rank.points()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Build the full, unshuffled deck: suits in order, ranks ascending.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Clubs, Rank::Two).to_string(), "\u{2663}2");
        assert_eq!(Card::new(Suit::Spades, Rank::Four).to_string(), "\u{2660}4");
        assert_eq!(Card::new(Suit::Hearts, Rank::Six).to_string(), "\u{2665}6");
        assert_eq!(Card::new(Suit::Clubs, Rank::Queen).to_string(), "\u{2663}Q");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ace).to_string(), "\u{2666}A");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).to_string(), "\u{2666}10");
    }

    #[test]
    fn test_compatible() {
        let two_clubs = Card::new(Suit::Clubs, Rank::Two);
        let two_spades = Card::new(Suit::Spades, Rank::Two);
        let six_hearts = Card::new(Suit::Hearts, Rank::Six);
        let queen_clubs = Card::new(Suit::Clubs, Rank::Queen);

        assert!(two_clubs.compatible(queen_clubs));
        assert!(two_clubs.compatible(two_spades));
        assert!(!two_spades.compatible(six_hearts));
        assert!(six_hearts.compatible(six_hearts));
    }

    #[test]
    fn test_points_scale() {
        assert_eq!(Rank::Two.points(), 2);
        assert_eq!(Rank::Ten.points(), 10);
        assert_eq!(Rank::Jack.points(), 11);
        assert_eq!(Rank::Ace.points(), 14);

        let points: Vec<_> = Rank::ALL.iter().map(|r| r.points()).collect();
        assert_eq!(points, (2..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_full_deck() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.len(), 52);

        let distinct: HashSet<_> = deck.iter().collect();
        assert_eq!(distinct.len(), 52);
        assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Two));
        assert_eq!(deck[51], Card::new(Suit::Spades, Rank::Ace));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Suit::Hearts, Rank::King);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
