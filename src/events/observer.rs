//! Observer protocol and registry.
//!
//! A presentation layer implements `GameObserver` and overrides only the
//! callbacks it cares about; every method defaults to a no-op. The engine
//! calls observers synchronously, in registration order, after each state
//! change. Observers must not call back into the engine from a callback.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use super::event::GameEvent;
use crate::cards::Card;
use crate::core::{Player, PlayerId};

/// Receives engine notifications.
///
/// `on_event` sees every event and forwards it to the matching typed
/// callback. Override `on_event` to handle events generically.
pub trait GameObserver {
    fn on_event(&self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted => self.on_game_started(),
            GameEvent::TurnStarted(player) => self.on_turn_started(*player),
            GameEvent::TurnEnded(player) => self.on_turn_ended(*player),
            GameEvent::CardDrawn(card) => self.on_card_drawn(*card),
            GameEvent::CardDiscarded(card) => self.on_card_discarded(*card),
            GameEvent::CardDestroyed(card) => self.on_card_destroyed(*card),
            GameEvent::CardRevealed(card) => self.on_card_revealed(*card),
            GameEvent::CardCombined { target, source } => self.on_card_combined(*target, *source),
            GameEvent::PileReshuffled { draw_pile } => self.on_pile_reshuffled(*draw_pile),
            GameEvent::LogUpdated(message) => self.on_log_updated(message),
            GameEvent::GameEnded { winner } => self.on_game_ended(winner.as_ref()),
        }
    }

    fn on_game_started(&self) {}

    fn on_turn_started(&self, _player: PlayerId) {}

    fn on_turn_ended(&self, _player: PlayerId) {}

    fn on_card_drawn(&self, _card: Card) {}

    fn on_card_discarded(&self, _card: Card) {}

    fn on_card_destroyed(&self, _card: Card) {}

    fn on_card_revealed(&self, _card: Card) {}

    fn on_card_combined(&self, _target: Card, _source: Card) {}

    fn on_pile_reshuffled(&self, _draw_pile: usize) {}

    fn on_log_updated(&self, _message: &str) {}

    fn on_game_ended(&self, _winner: Option<&Player>) {}
}

/// Registered observers, in registration order.
#[derive(Default, Clone)]
pub struct Observers {
    entries: Vec<Rc<dyn GameObserver>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer. It receives every event published afterwards.
    pub fn register(&mut self, observer: Rc<dyn GameObserver>) {
        self.entries.push(observer);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to every observer.
    pub fn publish(&self, event: &GameEvent) {
        trace!(event = event.name(), observers = self.entries.len(), "publishing event");
        for observer in &self.entries {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("count", &self.entries.len()).finish()
    }
}

/// Observer that keeps every event it receives.
///
/// Share it with `Rc` so the events can be inspected after registering:
///
/// ```
/// use std::rc::Rc;
/// use staircase::events::{EventRecorder, GameEvent, Observers};
///
/// let recorder = Rc::new(EventRecorder::new());
/// let mut observers = Observers::new();
/// observers.register(recorder.clone());
///
/// observers.publish(&GameEvent::GameStarted);
/// assert_eq!(recorder.events(), vec![GameEvent::GameStarted]);
/// ```
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RefCell<Vec<GameEvent>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(*e)).count()
    }

    /// Whether any recorded event matches a predicate.
    pub fn any(&self, predicate: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.borrow().iter().any(predicate)
    }

    /// Most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<GameEvent> {
        self.events.borrow().last().cloned()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventRecorder {
    fn on_event(&self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
