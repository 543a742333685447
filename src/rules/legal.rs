//! Legal move enumeration.
//!
//! Lets bots and test drivers pick moves without probing the engine for
//! errors. `GameSession::apply` dispatches a `Move` to the matching action.

use serde::{Deserialize, Serialize};

use super::GameSession;
use crate::cards::Card;
use crate::core::{GameState, PlayerAction, StaircaseConfig};
use crate::error::Result;

/// One player action with its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Combine { card: Card, target: Card },
    Discard { card: Card },
    Destroy { target: Card },
}

impl Move {
    #[must_use]
    pub fn action(&self) -> PlayerAction {
        match self {
            Move::Combine { .. } => PlayerAction::Combine,
            Move::Discard { .. } => PlayerAction::Discard,
            Move::Destroy { .. } => PlayerAction::Destroy,
        }
    }
}

impl GameState {
    /// Every move the current player may make right now.
    ///
    /// Empty once the turn is over. Combines come first, then destroys,
    /// then discards, each in hand and stair order.
    #[must_use]
    pub fn legal_moves(&self, config: &StaircaseConfig) -> Vec<Move> {
        if self.turn_ended {
            return Vec::new();
        }

        let player = self.current();
        let mut moves = Vec::new();

        if !self.has_used(PlayerAction::Combine) {
            for &card in &player.hand {
                moves.extend(
                    self.stair_tops()
                        .filter(|&target| card.compatible(target))
                        .map(|target| Move::Combine { card, target }),
                );
            }
        }
        if !self.has_used(PlayerAction::Destroy) && player.score >= config.destroy_cost {
            moves.extend(self.stair_tops().map(|target| Move::Destroy { target }));
        }
        if !self.has_used(PlayerAction::Discard) {
            moves.extend(player.hand.iter().map(|&card| Move::Discard { card }));
        }
        moves
    }
}

impl GameSession {
    /// Legal moves for the current player of the active game.
    pub fn legal_moves(&self) -> Result<Vec<Move>> {
        Ok(self.active()?.legal_moves(&self.config))
    }

    /// Perform a move.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        match mv {
            Move::Combine { card, target } => self.combine(card, target),
            Move::Discard { card } => self.discard(card),
            Move::Destroy { target } => self.destroy(target),
        }
    }
}
