//! Match events and observers.
//!
//! ## Key Types
//!
//! - `MatchEvent`: What a committed transaction did
//! - `LogEntry`: An event stamped with its turn
//! - `MatchObserver`: Callback contract; closures qualify
//! - `EventBus`: Ordered observer list owned by the match

pub mod bus;
pub mod event;

pub use bus::{EventBus, MatchObserver, ObserverId};
pub use event::{LogEntry, MatchEvent};
