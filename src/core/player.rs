//! Players and seat identifiers.
//!
//! ## PlayerId
//!
//! Seat index for the two players. The first player is `PlayerId(0)`.
//!
//! ## Player
//!
//! Name, score, hand, collected cards and the last action taken this turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::PlayerAction;
use crate::cards::Card;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier. Only `0` and `1` are valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Hand storage. Hands never exceed five cards with the default rules.
pub type Hand = SmallVec<[Card; 5]>;

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub hand: Hand,
    /// Cards collected by combining.
    pub played_cards: Vec<Card>,
    /// Most recent action this turn, `None` at the start of a turn.
    pub last_action: Option<PlayerAction>,
}

impl Player {
    /// Create a player with an empty hand and no score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            hand: Hand::new(),
            played_cards: Vec::new(),
            last_action: None,
        }
    }

    /// Set the starting hand (builder pattern).
    #[must_use]
    pub fn with_hand(mut self, cards: &[Card]) -> Self {
        self.hand = Hand::from_slice(cards);
        self
    }

    /// Set the score (builder pattern).
    #[must_use]
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    /// Check whether a card is in hand.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Remove a card from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, card: Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }
}
