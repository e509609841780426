//! # triad-engine
//!
//! Rule engine for two-player Triple Triad on a 3x3 board.
//!
//! ## Design Principles
//!
//! 1. **Pure Capture Resolution**: `CaptureEngine::resolve` reads a board
//!    and returns the flips. It never mutates, so rules are testable
//!    without a match.
//!
//! 2. **Atomic Transactions**: A placement either completes entirely
//!    (hand, board, captures, scores, turn) or changes nothing.
//!
//! 3. **Events After Commit**: Observers and the match log only see events
//!    once the match is fully updated.
//!
//! ## Modules
//!
//! - `core`: Players, per-player storage, configuration, RNG, errors
//! - `cards`: Card definitions, placed instances, registry, catalog, dealing
//! - `board`: Positions, directions and the 3x3 grid
//! - `rules`: Same and Basic capture rules, match outcome
//! - `events`: Match events, observers and the log entry type
//! - `game`: Turn controller and the match state machine
//!
//! The engine never reads files or installs a `tracing` subscriber; both
//! are the caller's concern.

pub mod board;
pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, ConfigError, GameRng, InvalidSeat, MatchConfig, MatchError, PlacementError, Player, PlayerId, PlayerPair,
};

pub use crate::cards::{CardDefinition, CardId, CardRegistry, Element, PlacedCard, Sides};

pub use crate::board::{Board, Direction, Position};

pub use crate::rules::{Capture, CaptureEngine, CaptureKind, CaptureRule, MatchOutcome};

pub use crate::events::{EventBus, LogEntry, MatchEvent, MatchObserver, ObserverId};

pub use crate::game::{CaptureReport, Hand, Match, MatchPhase, TurnController};
