//! Game session and the rules services.
//!
//! `GameSession` owns the single active game together with the RNG and the
//! observers. Its operations are split by concern:
//!
//! - `lifecycle`: start, reshuffle, end
//! - `actions`: combine, discard, destroy, turn handling
//! - `action_log`: human-readable action trail
//! - `legal`: legal move enumeration and dispatch
//!
//! Every operation validates first, then mutates, then notifies. A failed
//! call leaves the game and the observers untouched.

mod action_log;
mod actions;
mod legal;
mod lifecycle;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, GameState, PlayerId, StaircaseConfig};
use crate::error::{GameError, Result};
use crate::events::{GameEvent, GameObserver, Observers};

pub use action_log::LogEntry;
pub use legal::Move;
pub use lifecycle::Reshuffle;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Owner of the active game.
///
/// ```
/// use staircase::rules::GameSession;
///
/// let mut session = GameSession::with_seed(7);
/// session.start_new_game("Bob", "Alice").unwrap();
///
/// let game = session.game().unwrap();
/// assert_eq!(game.stair_card_count(), 15);
/// assert_eq!(game.draw_pile.len(), 27);
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: StaircaseConfig,
    rng: GameRng,
    game: Option<GameState>,
    observers: Observers,
}

impl GameSession {
    /// Create a session with a validated configuration and no game.
    pub fn new(config: StaircaseConfig) -> Result<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            config,
            rng,
            game: None,
            observers: Observers::new(),
        })
    }

    /// Create a session with the default rules and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: StaircaseConfig::default().with_seed(seed),
            rng: GameRng::new(seed),
            game: None,
            observers: Observers::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StaircaseConfig {
        &self.config
    }

    /// RNG checkpoint, for replaying the shuffles of a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue shuffling from a checkpoint taken with `rng_state`.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Register an observer for all future events.
    pub fn add_observer(&mut self, observer: Rc<dyn GameObserver>) {
        self.observers.register(observer);
    }

    /// The active game, if any.
    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Mutable access to the active game.
    ///
    /// Meant for loading fixtures and front-end bookkeeping; edits made
    /// here bypass the rules and publish nothing.
    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Install a prepared game state, replacing any active game.
    ///
    /// Used to resume a snapshot. No event is published.
    pub fn load_game(&mut self, state: GameState) {
        self.game = Some(state);
    }

    pub(crate) fn active(&self) -> Result<&GameState> {
        self.game.as_ref().ok_or_else(no_game)
    }

    pub(crate) fn active_mut(&mut self) -> Result<&mut GameState> {
        self.game.as_mut().ok_or_else(no_game)
    }

    fn publish(&self, event: GameEvent) {
        self.observers.publish(&event);
    }
}

fn no_game() -> GameError {
    GameError::illegal_state("no game is currently running")
}
