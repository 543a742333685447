//! Card model: the 52 standard playing cards.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: Fixed-order enums with display symbols
//! - `Card`: Suit plus rank, with the compatibility and scoring rules

pub mod card;

pub use card::{full_deck, Card, Rank, Suit, DECK_SIZE};
