//! Error types.
//!
//! None of these are fatal: every rejected operation leaves the match
//! exactly as it was, and the caller decides how to surface the condition.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Position;
use crate::cards::CardId;
use crate::game::MatchPhase;

/// Why a placement request was rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    InvalidPosition { row: usize, col: usize },

    #[error("cell {0} already holds a card")]
    CellOccupied(Position),

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { card: CardId, player: PlayerId },

    #[error("match is not in progress (phase: {0:?})")]
    MatchNotInProgress(MatchPhase),
}

/// A player index other than the two seats.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("player index {0} is not a seat, expected 0 or 1")]
pub struct InvalidSeat(pub u8);

/// Match setup and lifecycle failures.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    #[error("{player} must start with {expected} cards, got {actual}")]
    HandSize {
        player: PlayerId,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("match can only start from setup (phase: {0:?})")]
    AlreadyStarted(MatchPhase),

    #[error("match has not finished (phase: {0:?})")]
    NotFinished(MatchPhase),

    #[error("match has been terminated")]
    Terminated,
}

/// Invalid match configuration.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hand size {hand_size} cannot fill the board, need at least {required}")]
    HandTooSmall { hand_size: usize, required: usize },

    #[error("starting score must be non-negative, got {0}")]
    NegativeScore(i32),
}

/// Card catalog parsing and registration failures.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no card records")]
    Empty,

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount { line: usize, expected: usize, found: usize },

    #[error("line {line}: field `{field}` is not a non-negative integer: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("{0} is already registered")]
    DuplicateId(CardId),
}
