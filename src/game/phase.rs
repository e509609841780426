//! Match lifecycle phases and placement reports.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::CardId;
use crate::core::{PlayerId, PlayerPair};
use crate::rules::{Captures, MatchOutcome};

/// Where a match is in its lifecycle.
///
/// `Setup -> InProgress -> Finished -> Terminated`, with `reset` returning
/// any phase except `Terminated` to `Setup`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Hands dealt, board empty, waiting for `start`.
    #[default]
    Setup,
    /// Accepting placements.
    InProgress,
    /// Board full. Only `reset` or `terminate` are accepted.
    Finished(MatchOutcome),
    /// Closed for good.
    Terminated,
}

impl MatchPhase {
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, MatchPhase::InProgress)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchPhase::Finished(_))
    }
}

/// What one successful placement did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReport {
    /// Player who placed.
    pub player: PlayerId,

    /// Card that was placed.
    pub card: CardId,

    /// Cell it was placed in.
    pub position: Position,

    /// Flips in the order they were applied.
    pub captures: Captures,

    /// Scores after every flip was applied.
    pub scores: PlayerPair<i32>,

    /// Who places next, or `None` if this placement ended the match.
    pub next_player: Option<PlayerId>,

    /// Outcome after this placement.
    pub outcome: MatchOutcome,
}

impl CaptureReport {
    /// Positions that changed owner.
    pub fn flipped(&self) -> impl Iterator<Item = Position> + '_ {
        self.captures.iter().map(|c| c.position)
    }
}
