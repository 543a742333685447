//! Core engine types: players, actions, RNG, configuration, state.
//!
//! Everything here is plain data plus the small helpers the rules services
//! build on. The services themselves live in `rules`.

pub mod action;
pub mod config;
pub mod invariants;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, PlayerAction};
pub use config::StaircaseConfig;
pub use invariants::{check_invariants, InvariantViolation};
pub use player::{Hand, Player, PlayerId, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Reveal, Stair};
