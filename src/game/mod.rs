//! Match control: turn counter, lifecycle phases and the match itself.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup --start--> InProgress --board full--> Finished --terminate--> Terminated
//!   ^                  |                          |
//!   +------reset-------+----------reset-----------+
//! ```

pub mod controller;
pub mod phase;
pub mod turn;

pub use controller::{Hand, Match};
pub use phase::{CaptureReport, MatchPhase};
pub use turn::TurnController;
