//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a catalog card: its
//! identity, its four directional strengths and its element tag. A
//! definition is created once when the catalog is loaded and shared behind
//! an `Arc` by every hand and placed card that references it.
//!
//! Instance-specific data (owner, modifier, face-down flag) is stored
//! separately in `PlacedCard`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Direction;

/// Unique identifier for a card definition.
///
/// This identifies the catalog entry, not a specific copy in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Element tag carried by a card.
///
/// Tags are catalog data only; no capture rule reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wind,
    Water,
    Earth,
    Thunder,
    Poison,
    Ice,
    Holy,
    Fire,
    #[default]
    None,
}

impl Element {
    /// Catalog spelling of this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Element::Wind => "WIND",
            Element::Water => "WATER",
            Element::Earth => "EARTH",
            Element::Thunder => "THUNDER",
            Element::Poison => "POISON",
            Element::Ice => "ICE",
            Element::Holy => "HOLY",
            Element::Fire => "FIRE",
            Element::None => "NONE",
        }
    }
}

/// Returned when a tag is not one of the known elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownElement(pub String);

impl FromStr for Element {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WIND" => Ok(Element::Wind),
            "WATER" => Ok(Element::Water),
            "EARTH" => Ok(Element::Earth),
            "THUNDER" => Ok(Element::Thunder),
            "POISON" => Ok(Element::Poison),
            "ICE" => Ok(Element::Ice),
            "HOLY" => Ok(Element::Holy),
            "FIRE" => Ok(Element::Fire),
            "NONE" | "" => Ok(Element::None),
            _ => Err(UnknownElement(s.to_string())),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four directional strengths of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides {
    pub up: u8,
    pub down: u8,
    pub left: u8,
    pub right: u8,
}

impl Sides {
    /// Create from values in up, down, left, right order.
    #[must_use]
    pub const fn new(up: u8, down: u8, left: u8, right: u8) -> Self {
        Self { up, down, left, right }
    }

    /// Strength on the side facing `direction`.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> u8 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use triad_engine::board::Direction;
/// use triad_engine::cards::{CardDefinition, CardId, Element, Sides};
///
/// let bomb = CardDefinition::new(CardId::new(4), "Bomb", Sides::new(2, 3, 1, 6), Element::Fire);
///
/// assert_eq!(bomb.value(Direction::Right), 6);
/// assert_eq!(bomb.value(Direction::Down), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Directional strengths.
    pub sides: Sides,

    /// Element tag.
    pub element: Element,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, sides: Sides, element: Element) -> Self {
        Self {
            id,
            name: name.into(),
            sides,
            element,
        }
    }

    /// Raw strength on the side facing `direction`.
    #[must_use]
    pub fn value(&self, direction: Direction) -> u8 {
        self.sides.get(direction)
    }
}
