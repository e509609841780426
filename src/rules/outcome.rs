//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};

/// Result of a match, as seen at any point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The board still has open cells.
    #[default]
    InProgress,
    /// Board full with equal scores.
    Draw,
    /// Board full and this player holds the higher score.
    Winner(PlayerId),
}

impl MatchOutcome {
    /// Decide a finished match from the final scores.
    #[must_use]
    pub fn from_scores(scores: PlayerPair<i32>) -> Self {
        let (one, two) = (scores[PlayerId::ONE], scores[PlayerId::TWO]);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => MatchOutcome::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => MatchOutcome::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchOutcome::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, MatchOutcome::InProgress)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::InProgress => write!(f, "in progress"),
            MatchOutcome::Draw => write!(f, "draw"),
            MatchOutcome::Winner(player) => write!(f, "{player} wins"),
        }
    }
}
