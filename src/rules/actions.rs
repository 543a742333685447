//! Player actions: combine, discard, destroy, and turn handling.
//!
//! Each action kind can be used at most once per turn. Combining and
//! discarding refill the hand; once it is full again the turn is over and
//! the engine waits for `start_turn`.

use tracing::{debug, warn};

use super::{GameSession, LogEntry, Reshuffle};
use crate::cards::Card;
use crate::core::{GameState, Player, PlayerAction, Reveal};
use crate::error::{GameError, Result};
use crate::events::GameEvent;

fn ensure_turn_open(game: &GameState) -> Result<()> {
    if game.turn_ended {
        return Err(GameError::invalid_argument(format!(
            "{}'s turn is over, start the next turn first",
            game.current().name
        )));
    }
    Ok(())
}

fn ensure_in_hand(player: &Player, card: Card) -> Result<()> {
    if !player.holds(card) {
        return Err(GameError::invalid_argument(format!("{card} is not in {}'s hand", player.name)));
    }
    Ok(())
}

fn locate(game: &GameState, target: Card) -> Result<usize> {
    game.find_stair(target)
        .ok_or_else(|| GameError::illegal_state(format!("{target} is not on top of any stair stack")))
}

fn take_from_stairs(game: &mut GameState, stair: usize, target: Card) -> Result<Reveal> {
    game.pop_stair(stair)
        .map(|(_, reveal)| reveal)
        .ok_or_else(|| GameError::illegal_state(format!("stair stack for {target} disappeared")))
}

impl GameSession {
    /// Combine a hand card with a compatible stair top and score both.
    pub fn combine(&mut self, card: Card, target: Card) -> Result<()> {
        let stair = {
            let game = self.active()?;
            let player = game.current();
            if game.has_used(PlayerAction::Combine) {
                return Err(GameError::invalid_argument("cards can only be combined once per turn"));
            }
            if !card.compatible(target) {
                return Err(GameError::invalid_argument(format!(
                    "{card} and {target} share neither suit nor rank"
                )));
            }
            ensure_turn_open(game)?;
            ensure_in_hand(player, card)?;
            locate(game, target)?
        };

        let game = self.active_mut()?;
        let player = game.current_mut();
        player.remove_from_hand(card);
        player.played_cards.extend([card, target]);
        player.score += card.points() + target.points();
        player.last_action = Some(PlayerAction::Combine);
        debug!(player = %player.name, %card, %target, score = player.score, "combined cards");
        game.record_action(PlayerAction::Combine, &[card, target]);
        let reveal = take_from_stairs(game, stair, target)?;

        self.announce(reveal);
        self.log_action(LogEntry::Combined { card, target, revealed: reveal.card() })?;
        if reveal != Reveal::StairsCleared {
            self.draw_card()?;
        }
        self.publish_while_active(GameEvent::CardCombined { target, source: card });
        self.end_if_cleared(reveal)
    }

    /// Pay the destroy cost to remove a stair top onto the discard pile.
    ///
    /// Destroying neither draws a card nor ends the turn.
    pub fn destroy(&mut self, target: Card) -> Result<()> {
        let cost = self.config.destroy_cost;
        let stair = {
            let game = self.active()?;
            let player = game.current();
            if game.has_used(PlayerAction::Destroy) {
                return Err(GameError::invalid_argument("a card can only be destroyed once per turn"));
            }
            if player.score < cost {
                return Err(GameError::invalid_argument(format!(
                    "destroying needs {cost} points, {} has {}",
                    player.name, player.score
                )));
            }
            ensure_turn_open(game)?;
            locate(game, target)?
        };

        let game = self.active_mut()?;
        let reveal = take_from_stairs(game, stair, target)?;
        game.discard_pile.push(target);
        let player = game.current_mut();
        player.score -= cost;
        player.last_action = Some(PlayerAction::Destroy);
        debug!(player = %player.name, %target, score = player.score, "destroyed card");
        game.record_action(PlayerAction::Destroy, &[target]);

        self.announce(reveal);
        self.log_action(LogEntry::Destroyed { target, revealed: reveal.card() })?;
        self.publish(GameEvent::CardDestroyed(target));
        self.end_if_cleared(reveal)
    }

    /// Move a hand card to the discard pile and draw a replacement.
    pub fn discard(&mut self, card: Card) -> Result<()> {
        {
            let game = self.active()?;
            let player = game.current();
            if game.has_used(PlayerAction::Discard) {
                return Err(GameError::invalid_argument("a card can only be discarded once per turn"));
            }
            ensure_turn_open(game)?;
            ensure_in_hand(player, card)?;
        }

        let game = self.active_mut()?;
        let player = game.current_mut();
        player.remove_from_hand(card);
        player.last_action = Some(PlayerAction::Discard);
        debug!(player = %player.name, %card, "discarded card");
        game.discard_pile.push(card);
        game.record_action(PlayerAction::Discard, &[card]);

        self.log_action(LogEntry::Discarded { card })?;
        self.draw_card()?;
        self.publish_while_active(GameEvent::CardDiscarded(card));
        Ok(())
    }

    /// Hand the turn to the other player.
    ///
    /// Called by whoever drives the game once the next player is ready;
    /// the engine never switches players on its own.
    pub fn start_turn(&mut self) -> Result<()> {
        let game = self.active_mut()?;
        game.advance_turn();
        let player = game.current_player;
        debug!(%player, turn = game.turn_number, "turn started");

        self.publish(GameEvent::TurnStarted(player));
        Ok(())
    }

    /// Mark the current turn as finished. Only combine or discard can
    /// finish a turn.
    fn end_turn(&mut self) -> Result<()> {
        let game = self.active_mut()?;
        if !game.current().last_action.is_some_and(PlayerAction::ends_turn) {
            return Err(GameError::invalid_argument("combine or discard a card to end the turn"));
        }
        game.turn_ended = true;
        let player = game.current_player;
        debug!(%player, turn = game.turn_number, "turn ended");

        self.publish(GameEvent::TurnEnded(player));
        Ok(())
    }

    /// Refill the current hand by one card, reshuffling the discard pile
    /// when the draw pile is exhausted. A full hand ends the turn.
    fn draw_card(&mut self) -> Result<()> {
        let hand_size = self.config.hand_size;
        let game = self.active()?;
        if game.current().hand.len() >= hand_size {
            return Err(GameError::illegal_state(format!(
                "{} already holds {hand_size} cards",
                game.current().name
            )));
        }

        if game.draw_pile.is_empty() {
            if game.discard_pile.is_empty() {
                warn!(player = %game.current().name, "no cards left to draw");
                return self.end_turn();
            }
            if let Reshuffle::Ended(_) = self.reshuffle_from_discard()? {
                return Ok(());
            }
        }

        let game = self.active_mut()?;
        let card = game
            .draw_pile
            .pop()
            .ok_or_else(|| GameError::illegal_state("draw pile is empty after reshuffle"))?;
        let player = game.current_mut();
        player.hand.push(card);
        let hand_full = player.hand.len() == hand_size;

        self.publish(GameEvent::CardDrawn(card));
        if hand_full {
            self.end_turn()?;
        }
        Ok(())
    }

    fn announce(&self, reveal: Reveal) {
        if let Reveal::Revealed(card) = reveal {
            self.publish(GameEvent::CardRevealed(card));
        }
    }

    /// A reshuffle during the draw may have ended the game already.
    fn publish_while_active(&self, event: GameEvent) {
        if self.is_active() {
            self.publish(event);
        }
    }

    fn end_if_cleared(&mut self, reveal: Reveal) -> Result<()> {
        if reveal == Reveal::StairsCleared {
            self.end_game()?;
        }
        Ok(())
    }
}
