//! # staircase
//!
//! Rules engine for Staircase, a two-player card game played with a
//! standard 52-card deck.
//!
//! ## The Game
//!
//! Fifteen cards are dealt face down into five stair stacks of heights
//! 5, 4, 3, 2 and 1; only the top card of each stack is in play. Each
//! player holds five cards. On a turn a player may destroy one stair top
//! by paying points, and then either combines a hand card with a
//! compatible stair top (same suit or same rank) for points or discards a
//! card. Both of the latter refill the hand and end the turn.
//!
//! The game ends when the stairs are cleared, or when the draw pile runs
//! out twice without any stair card being touched in between.
//!
//! ## Design Principles
//!
//! 1. **Validate, mutate, notify**: A failing call returns a `GameError`
//!    and leaves the game untouched. Observers only hear about applied
//!    changes.
//!
//! 2. **Serializable state**: `GameState` is plain data. The RNG and the
//!    observers live in `GameSession`, so a game can be snapshotted and
//!    resumed.
//!
//! 3. **Deterministic**: A seeded session replays the same shuffles.
//!
//! ## Modules
//!
//! - `cards`: Suits, ranks, cards, the deck
//! - `core`: Players, actions, RNG, configuration, state, invariants
//! - `events`: Events and the observer protocol
//! - `rules`: `GameSession` and its lifecycle and action services
//! - `error`: `GameError`

pub mod cards;
pub mod core;
pub mod error;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{full_deck, Card, Rank, Suit, DECK_SIZE};

pub use crate::core::{
    check_invariants, ActionRecord, GameRng, GameRngState, GameState, InvariantViolation, Player,
    PlayerAction, PlayerId, Reveal, StaircaseConfig,
};

pub use crate::error::{GameError, Result};

pub use crate::events::{EventRecorder, GameEvent, GameObserver, Observers};

pub use crate::rules::{GameResult, GameSession, LogEntry, Move, Reshuffle};
