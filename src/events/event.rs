//! Game event values.
//!
//! Every state change the engine makes is announced as a `GameEvent`.
//! Events own their data so observers can keep them after the game that
//! produced them is gone.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Player, PlayerId};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was dealt.
    GameStarted,
    /// The given player now has the turn.
    TurnStarted(PlayerId),
    /// The given player's turn is over; waiting for `start_turn`.
    TurnEnded(PlayerId),
    CardDrawn(Card),
    CardDiscarded(Card),
    CardDestroyed(Card),
    /// A stair card became the top of its stack.
    CardRevealed(Card),
    /// `source` from the hand was combined with `target` from the stairs.
    CardCombined { target: Card, source: Card },
    /// The discard pile was shuffled into the draw pile.
    PileReshuffled { draw_pile: usize },
    /// The action trail changed: previous entry, newline, latest entry.
    LogUpdated(String),
    /// The game is over. `None` means the scores were tied.
    GameEnded { winner: Option<Player> },
}

impl GameEvent {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameStarted => "game_started",
            GameEvent::TurnStarted(_) => "turn_started",
            GameEvent::TurnEnded(_) => "turn_ended",
            GameEvent::CardDrawn(_) => "card_drawn",
            GameEvent::CardDiscarded(_) => "card_discarded",
            GameEvent::CardDestroyed(_) => "card_destroyed",
            GameEvent::CardRevealed(_) => "card_revealed",
            GameEvent::CardCombined { .. } => "card_combined",
            GameEvent::PileReshuffled { .. } => "pile_reshuffled",
            GameEvent::LogUpdated(_) => "log_updated",
            GameEvent::GameEnded { .. } => "game_ended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_event_names() {
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        assert_eq!(GameEvent::GameStarted.name(), "game_started");
        assert_eq!(GameEvent::CardRevealed(ace).name(), "card_revealed");
        assert_eq!(
            GameEvent::CardCombined { target: ace, source: ace }.name(),
            "card_combined"
        );
        assert_eq!(GameEvent::GameEnded { winner: None }.name(), "game_ended");
    }
}
