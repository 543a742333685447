//! Game lifecycle: dealing, reshuffling, and ending a game.

use tracing::info;

use super::{GameResult, GameSession};
use crate::cards::full_deck;
use crate::core::{GameState, PlayerId};
use crate::error::{GameError, Result};
use crate::events::GameEvent;

/// Outcome of `GameSession::reshuffle_from_discard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reshuffle {
    /// The discard pile went under the draw pile, which now holds
    /// `draw_pile` cards.
    Refilled { draw_pile: usize },
    /// The end condition already held, so the game was ended instead.
    Ended(GameResult),
}

impl GameSession {
    /// Shuffle a fresh deck and deal a new game, replacing any active one.
    pub fn start_new_game(&mut self, first: &str, second: &str) -> Result<()> {
        if first.is_empty() || second.is_empty() {
            return Err(GameError::invalid_argument("both players need a name"));
        }

        let mut deck = full_deck();
        self.rng.shuffle(&mut deck);
        let state = GameState::deal(&deck, [first, second], &self.config);

        info!(first, second, seed = self.rng.seed(), "starting new game");
        self.game = Some(state);
        self.publish(GameEvent::GameStarted);
        Ok(())
    }

    /// Finish the active game and report the winner.
    ///
    /// Fails unless the stairs are empty or the game has stalled
    /// (empty draw pile, no layout progress since the last reshuffle).
    pub fn end_game(&mut self) -> Result<GameResult> {
        let game = self.active()?;
        if !game.is_ended() {
            return Err(GameError::invalid_argument("the game is not over yet"));
        }

        let result = game.result();
        let winner = result.winner().map(|id| game.player(id).clone());
        info!(
            ?result,
            first_score = game.player(PlayerId::FIRST).score,
            second_score = game.player(PlayerId::SECOND).score,
            "game ended"
        );

        self.publish(GameEvent::GameEnded { winner });
        self.game = None;
        Ok(result)
    }

    /// Whether the active game meets its end condition.
    pub fn is_game_ended(&self) -> Result<bool> {
        Ok(self.active()?.is_ended())
    }

    /// Shuffle the discard pile back under the draw pile.
    ///
    /// When the end condition already holds the game is ended instead, so a
    /// stalled layout cannot be reshuffled forever.
    pub fn reshuffle_from_discard(&mut self) -> Result<Reshuffle> {
        let game = self.game.as_mut().ok_or_else(super::no_game)?;
        if game.discard_pile.is_empty() {
            return Err(GameError::invalid_argument("the discard pile is empty"));
        }
        if game.is_ended() {
            info!("no layout progress since the last reshuffle");
            return self.end_game().map(Reshuffle::Ended);
        }

        let mut cards = std::mem::take(&mut game.discard_pile);
        self.rng.shuffle(&mut cards);
        // Cards still in the draw pile stay on top
        cards.append(&mut game.draw_pile);
        game.draw_pile = cards;
        game.layout_touched = false;

        let draw_pile = game.draw_pile.len();
        info!(draw_pile, "discard pile reshuffled");
        self.publish(GameEvent::PileReshuffled { draw_pile });
        Ok(Reshuffle::Refilled { draw_pile })
    }
}
