//! Card system: definitions, placed instances, registry, catalog and dealing.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog definitions
//! - `CardDefinition`: Immutable card data (name, four sides, element)
//! - `PlacedCard`: A card on the board with an owner and modifier
//! - `CardRegistry`: Definition lookup
//!
//! Catalog parsing and dealing are setup helpers for callers; the match
//! controller only consumes already-built hands.

pub mod catalog;
pub mod deal;
pub mod definition;
pub mod instance;
pub mod registry;

pub use catalog::parse_catalog;
pub use deal::{deal_distinct_hand, deal_hand, deal_hands};
pub use definition::{CardDefinition, CardId, Element, Sides, UnknownElement};
pub use instance::PlacedCard;
pub use registry::CardRegistry;
