//! Player actions and the action history.
//!
//! Each turn a player may destroy a stair card and then either combine or
//! discard. Every applied action is recorded as an `ActionRecord` so a game
//! can be replayed or inspected afterwards.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// The three kinds of per-turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Pair a hand card with a compatible stair top and score both.
    Combine,
    /// Move a hand card to the discard pile.
    Discard,
    /// Pay points to remove a stair top.
    Destroy,
}

impl PlayerAction {
    /// Whether this action completes a turn once the hand is refilled.
    #[must_use]
    pub const fn ends_turn(self) -> bool {
        matches!(self, PlayerAction::Combine | PlayerAction::Discard)
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerAction::Combine => "combine",
            PlayerAction::Discard => "discard",
            PlayerAction::Destroy => "destroy",
        };
        f.write_str(name)
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: PlayerAction,

    /// Cards involved: the hand card first (if any), then the stair card.
    pub cards: Vec<Card>,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: PlayerAction, cards: &[Card], turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            cards: cards.to_vec(),
            turn,
            sequence,
        }
    }
}
