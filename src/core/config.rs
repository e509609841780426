//! Match configuration.
//!
//! ## Defaults
//!
//! - `hand_size`: 5 cards per player
//! - `starting_score`: 5 points per player
//!
//! The board is always 3x3. Scores move in zero-sum transfers, so the sum of
//! both scores stays at `2 * starting_score` for the whole match.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::CELL_COUNT;

/// Cards the first player must hold to fill their share of the board.
pub const MIN_HAND_SIZE: usize = CELL_COUNT.div_ceil(2);

/// Complete match configuration.
///
/// ```
/// use triad_engine::core::MatchConfig;
///
/// let config = MatchConfig::default().with_starting_score(3);
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.total_score(), 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Exact number of cards each player starts with.
    pub hand_size: usize,

    /// Score each player starts (and restarts) with.
    pub starting_score: i32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            hand_size: MIN_HAND_SIZE,
            starting_score: 5,
        }
    }
}

impl MatchConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: i32) -> Self {
        self.starting_score = score;
        self
    }

    /// Combined score of both players at any point in a match.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.starting_score * 2
    }

    /// Check that a match can be played to completion with this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size < MIN_HAND_SIZE {
            return Err(ConfigError::HandTooSmall {
                hand_size: self.hand_size,
                required: MIN_HAND_SIZE,
            });
        }
        if self.starting_score < 0 {
            return Err(ConfigError::NegativeScore(self.starting_score));
        }
        Ok(())
    }
}
