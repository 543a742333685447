//! Game invariants - sanity checks that detect bugs.
//!
//! These should never trigger for a state produced by the engine. Tests run
//! them after every step of a playout.

use rustc_hash::FxHashSet;

use super::config::StaircaseConfig;
use super::state::GameState;
use crate::cards::DECK_SIZE;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

fn violation(message: String) -> InvariantViolation {
    InvariantViolation { message }
}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState, config: &StaircaseConfig) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Every card exactly once
    let mut seen = FxHashSet::default();
    let mut total = 0usize;
    for card in state.all_cards() {
        total += 1;
        if !seen.insert(card) {
            violations.push(violation(format!("card {card} appears more than once")));
        }
    }
    if total != DECK_SIZE {
        violations.push(violation(format!("{total} cards in play, expected {DECK_SIZE}")));
    }

    for (index, stair) in state.stairs.iter().enumerate() {
        if stair.is_empty() {
            violations.push(violation(format!("stair stack {index} is empty")));
        }
    }

    for player in &state.players {
        if player.hand.len() > config.hand_size {
            violations.push(violation(format!(
                "{} holds {} cards, limit is {}",
                player.name,
                player.hand.len(),
                config.hand_size
            )));
        }
        if player.played_cards.len() % 2 != 0 {
            violations.push(violation(format!(
                "{} has an odd number of played cards",
                player.name
            )));
        }
    }

    violations
}
