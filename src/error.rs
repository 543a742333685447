//! Engine error type.
//!
//! Every failing call returns before the game state is touched, so an
//! error never leaves a half-applied action behind.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation needs a state that does not hold: no active game,
    /// a target that is not a stair top, a hand that is already full.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// A supplied value or a turn rule was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GameError {
    pub fn illegal_state(detail: impl Into<String>) -> Self {
        Self::IllegalState(detail.into())
    }

    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument(detail.into())
    }

    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result alias used throughout the engine.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::illegal_state("no game running");
        assert_eq!(err.to_string(), "illegal state: no game running");
        assert!(err.is_illegal_state());

        let err = GameError::invalid_argument("names must not be empty");
        assert_eq!(err.to_string(), "invalid argument: names must not be empty");
        assert!(err.is_invalid_argument());
    }
}
