//! Match events.
//!
//! Events describe what a committed transaction did. They are plain data:
//! observers receive them by reference after the match is fully updated,
//! and the match keeps a turn-stamped copy of each in its log.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::CardId;
use crate::core::{PlayerId, PlayerPair};
use crate::rules::{Capture, MatchOutcome};

/// Something that happened in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// `Setup -> InProgress`.
    MatchStarted,

    /// A card left `player`'s hand and was written to `position`.
    CardPlaced {
        player: PlayerId,
        card: CardId,
        position: Position,
    },

    /// A neighbouring card changed owner.
    CardCaptured(Capture),

    /// Scores after a capture was applied.
    ScoreChanged { scores: PlayerPair<i32> },

    /// The turn counter moved; `active` may now place.
    TurnChanged { turn: u32, active: PlayerId },

    /// The board filled up.
    MatchFinished { outcome: MatchOutcome },

    /// The match returned to `Setup`.
    MatchReset,

    /// The match was closed; no further mutation is accepted.
    MatchTerminated,
}

impl MatchEvent {
    /// Short name for log output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MatchEvent::MatchStarted => "match_started",
            MatchEvent::CardPlaced { .. } => "card_placed",
            MatchEvent::CardCaptured(_) => "card_captured",
            MatchEvent::ScoreChanged { .. } => "score_changed",
            MatchEvent::TurnChanged { .. } => "turn_changed",
            MatchEvent::MatchFinished { .. } => "match_finished",
            MatchEvent::MatchReset => "match_reset",
            MatchEvent::MatchTerminated => "match_terminated",
        }
    }
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEvent::MatchStarted => write!(f, "match started"),
            MatchEvent::CardPlaced {
                player,
                card,
                position,
            } => write!(f, "{player} placed {card} at {position}"),
            MatchEvent::CardCaptured(capture) => write!(
                f,
                "{} captured {} from {} ({:?})",
                capture.to, capture.position, capture.from, capture.kind
            ),
            MatchEvent::ScoreChanged { scores } => {
                write!(f, "score {}-{}", scores[PlayerId::ONE], scores[PlayerId::TWO])
            }
            MatchEvent::TurnChanged { turn, active } => write!(f, "turn {turn}: {active} to play"),
            MatchEvent::MatchFinished { outcome } => write!(f, "match finished: {outcome}"),
            MatchEvent::MatchReset => write!(f, "match reset"),
            MatchEvent::MatchTerminated => write!(f, "match terminated"),
        }
    }
}

/// An event stamped with the turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: u32,
    pub event: MatchEvent,
}

impl LogEntry {
    #[must_use]
    pub fn new(turn: u32, event: MatchEvent) -> Self {
        Self { turn, event }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.turn, self.event)
    }
}
