//! Capture rules and match outcome.
//!
//! Capture resolution never touches match state. `CaptureEngine::resolve`
//! reads the board and returns the flips; the match controller applies
//! them together with the score changes.

pub mod capture;
pub mod outcome;

pub use capture::{BasicRule, Capture, CaptureContext, CaptureEngine, CaptureKind, CaptureRule, Captures, SameRule};
pub use outcome::MatchOutcome;
