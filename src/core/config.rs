//! Game configuration.
//!
//! The defaults describe the standard game: five stair stacks of heights
//! 5, 4, 3, 2 and 1, hands of five cards, and a five point destroy cost.
//! Whatever is left of the deck after building the stairs and dealing both
//! hands becomes the draw pile (27 cards with the defaults).

use serde::{Deserialize, Serialize};

use super::player::PLAYER_COUNT;
use crate::cards::DECK_SIZE;
use crate::error::{GameError, Result};

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaircaseConfig {
    /// Height of each stair stack, left to right.
    pub stair_heights: Vec<usize>,

    /// Cards per hand. Refilling the hand to this size ends a turn.
    pub hand_size: usize,

    /// Points a destroy costs. Also the minimum score needed to destroy.
    pub destroy_cost: u32,

    /// Seed for the session RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            stair_heights: vec![5, 4, 3, 2, 1],
            hand_size: 5,
            destroy_cost: 5,
            seed: None,
        }
    }
}

impl StaircaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the stair heights.
    #[must_use]
    pub fn with_stair_heights(mut self, heights: Vec<usize>) -> Self {
        self.stair_heights = heights;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the destroy cost.
    #[must_use]
    pub fn with_destroy_cost(mut self, cost: u32) -> Self {
        self.destroy_cost = cost;
        self
    }

    /// Total cards in the stairs.
    #[must_use]
    pub fn stair_card_count(&self) -> usize {
        self.stair_heights.iter().sum()
    }

    /// Cards left for the draw pile after building stairs and dealing.
    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        DECK_SIZE.saturating_sub(self.stair_card_count() + PLAYER_COUNT * self.hand_size)
    }

    /// Check that a deck can actually be dealt with this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.stair_heights.is_empty() {
            return Err(GameError::invalid_argument("at least one stair stack is required"));
        }
        if self.stair_heights.contains(&0) {
            return Err(GameError::invalid_argument("stair stacks must hold at least one card"));
        }
        if self.hand_size == 0 {
            return Err(GameError::invalid_argument("hand size must be positive"));
        }
        let dealt = self.stair_card_count() + PLAYER_COUNT * self.hand_size;
        if dealt > DECK_SIZE {
            return Err(GameError::invalid_argument(format!(
                "layout and hands need {dealt} cards but the deck holds {DECK_SIZE}"
            )));
        }
        Ok(())
    }
}
