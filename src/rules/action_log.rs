//! Human-readable action trail.
//!
//! Each applied action appends one message to `GameState::action_log`.
//! Observers receive the previous message and the new one joined by a
//! newline, which is what a two-line log panel shows.

use super::GameSession;
use crate::cards::Card;
use crate::error::Result;
use crate::events::GameEvent;

/// An action to render into the log.
///
/// Entries are only written by the action methods themselves:
///
/// ```compile_fail
/// use staircase::{Card, GameSession, LogEntry, Rank, Suit};
///
/// let mut session = GameSession::with_seed(1);
/// session.start_new_game("Bob", "Alice").unwrap();
/// let card = Card::new(Suit::Clubs, Rank::Two);
/// session.log_action(LogEntry::Discarded { card }).unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEntry {
    Combined { card: Card, target: Card, revealed: Option<Card> },
    Discarded { card: Card },
    Destroyed { target: Card, revealed: Option<Card> },
}

impl LogEntry {
    /// Render the message for `actor`, with `next` being the other player.
    #[must_use]
    pub fn render(&self, actor: &str, next: &str) -> String {
        match *self {
            LogEntry::Combined { card, target, revealed } => {
                let mut message =
                    format!("- {actor} combined {card} with {target} from the stairs.\nThen drew a new card.\n");
                if let Some(revealed) = revealed {
                    message.push_str(&format!("The card {revealed} from below was revealed.\n"));
                }
                message.push_str(&format!("Now it's {next}'s turn."));
                message
            }
            LogEntry::Discarded { card } => {
                format!("- {actor} discarded {card} from hand.\nThen drew a new card.\nNow it's {next}'s turn.")
            }
            LogEntry::Destroyed { target, revealed } => match revealed {
                Some(revealed) => format!(
                    "- {actor} destroyed {target} from the stairs.\nThe card {revealed} from below was revealed."
                ),
                None => format!("- {actor} destroyed {target} from the stairs."),
            },
        }
    }
}

impl GameSession {
    /// Append an entry for the current player and publish the trail.
    pub(crate) fn log_action(&mut self, entry: LogEntry) -> Result<()> {
        let game = self.active_mut()?;
        let message = entry.render(&game.current().name, &game.opponent().name);
        let previous = game.action_log.back().cloned().unwrap_or_default();
        game.action_log.push_back(message.clone());

        self.publish(GameEvent::LogUpdated(format!("{previous}\n{message}")));
        Ok(())
    }

    /// The last two log messages joined by a newline.
    pub fn log_trail(&self) -> Result<String> {
        let log = &self.active()?.action_log;
        let trail = match log.len() {
            0 => String::new(),
            1 => format!("\n{}", log[0]),
            n => format!("{}\n{}", log[n - 2], log[n - 1]),
        };
        Ok(trail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::cards::{Rank, Suit};
    use crate::events::EventRecorder;

    const MESSAGE_COMBINE_REVEAL: &str = "- Bob combined \u{2666}K with \u{2660}9 from the stairs.\n\
        Then drew a new card.\nThe card \u{2665}8 from below was revealed.\nNow it's Alice's turn.";
    const MESSAGE_COMBINE: &str =
        "- Bob combined \u{2666}K with \u{2660}9 from the stairs.\nThen drew a new card.\nNow it's Alice's turn.";
    const MESSAGE_DISCARD: &str = "- Bob discarded \u{2666}K from hand.\nThen drew a new card.\nNow it's Alice's turn.";
    const MESSAGE_DESTROY_REVEAL: &str =
        "- Bob destroyed \u{2660}9 from the stairs.\nThe card \u{2665}8 from below was revealed.";
    const MESSAGE_DESTROY: &str = "- Bob destroyed \u{2660}9 from the stairs.";

    fn cards() -> (Card, Card, Card) {
        (
            Card::new(Suit::Diamonds, Rank::King),
            Card::new(Suit::Spades, Rank::Nine),
            Card::new(Suit::Hearts, Rank::Eight),
        )
    }

    #[test]
    fn test_render() {
        let (card, target, revealed) = cards();

        let combined = LogEntry::Combined { card, target, revealed: Some(revealed) };
        assert_eq!(combined.render("Bob", "Alice"), MESSAGE_COMBINE_REVEAL);

        let combined = LogEntry::Combined { card, target, revealed: None };
        assert_eq!(combined.render("Bob", "Alice"), MESSAGE_COMBINE);

        assert_eq!(LogEntry::Discarded { card }.render("Bob", "Alice"), MESSAGE_DISCARD);

        let destroyed = LogEntry::Destroyed { target, revealed: Some(revealed) };
        assert_eq!(destroyed.render("Bob", "Alice"), MESSAGE_DESTROY_REVEAL);

        let destroyed = LogEntry::Destroyed { target, revealed: None };
        assert_eq!(destroyed.render("Bob", "Alice"), MESSAGE_DESTROY);
    }

    #[test]
    fn test_log_action_publishes_trail() {
        let recorder = Rc::new(EventRecorder::new());
        let mut session = GameSession::with_seed(5);
        session.add_observer(recorder.clone());
        session.start_new_game("Bob", "Alice").unwrap();
        let (card, target, revealed) = cards();

        session
            .log_action(LogEntry::Combined { card, target, revealed: Some(revealed) })
            .unwrap();
        assert_eq!(
            recorder.last(),
            Some(GameEvent::LogUpdated(format!("\n{MESSAGE_COMBINE_REVEAL}")))
        );
        assert_eq!(session.log_trail().unwrap(), format!("\n{MESSAGE_COMBINE_REVEAL}"));

        session.log_action(LogEntry::Combined { card, target, revealed: None }).unwrap();
        assert_eq!(
            recorder.last(),
            Some(GameEvent::LogUpdated(format!("{MESSAGE_COMBINE_REVEAL}\n{MESSAGE_COMBINE}")))
        );

        session.log_action(LogEntry::Discarded { card }).unwrap();
        session.log_action(LogEntry::Destroyed { target, revealed: None }).unwrap();
        assert_eq!(
            recorder.last(),
            Some(GameEvent::LogUpdated(format!("{MESSAGE_DISCARD}\n{MESSAGE_DESTROY}")))
        );
        assert_eq!(session.log_trail().unwrap(), format!("{MESSAGE_DISCARD}\n{MESSAGE_DESTROY}"));
        assert_eq!(session.game().unwrap().action_log.len(), 4);
    }

    #[test]
    fn test_log_action_without_game() {
        let mut session = GameSession::with_seed(5);
        let (card, _, _) = cards();
        let err = session.log_action(LogEntry::Discarded { card }).unwrap_err();
        assert!(err.is_illegal_state());
    }
}
