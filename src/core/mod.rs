//! Core engine types: players, configuration, RNG, errors.
//!
//! This module contains the building blocks shared by the board, the
//! capture rules and the match controller.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, MIN_HAND_SIZE};
pub use error::{CatalogError, ConfigError, InvalidSeat, MatchError, PlacementError};
pub use player::{Player, PlayerId, PlayerPair};
pub use rng::GameRng;
