//! Placed card instances - runtime card state on the board.
//!
//! A `PlacedCard` is created when a card moves from a hand onto the board.
//! The same instance stays in its cell for the rest of the match; only its
//! owner changes when it is captured.
//!
//! The owner is a `PlayerId` resolved through the match, not a reference to
//! the `Player` itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::board::Direction;
use crate::core::PlayerId;

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    definition: Arc<CardDefinition>,

    /// Current owner. Reassigned on capture.
    owner: PlayerId,

    /// Additive adjustment applied to every side before comparison.
    pub modifier: i32,

    /// Are the card's values hidden from the opponent?
    pub face_down: bool,
}

impl PlacedCard {
    /// Create a face-up card with no modifier.
    #[must_use]
    pub fn new(definition: Arc<CardDefinition>, owner: PlayerId) -> Self {
        Self {
            definition,
            owner,
            modifier: 0,
            face_down: false,
        }
    }

    /// Set the modifier (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// The shared catalog definition.
    #[must_use]
    pub fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    /// Catalog ID of the underlying definition.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.definition.id
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Reassign ownership. Returns the previous owner.
    pub(crate) fn set_owner(&mut self, owner: PlayerId) -> PlayerId {
        std::mem::replace(&mut self.owner, owner)
    }

    /// Effective strength on the side facing `direction`: raw value plus modifier.
    #[must_use]
    pub fn value(&self, direction: Direction) -> i32 {
        i32::from(self.definition.value(direction)) + self.modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Element, Sides};

    fn definition() -> Arc<CardDefinition> {
        Arc::new(CardDefinition::new(
            CardId::new(3),
            "Bite Bug",
            Sides::new(1, 3, 5, 3),
            Element::None,
        ))
    }

    #[test]
    fn test_placed_card_new() {
        let card = PlacedCard::new(definition(), PlayerId::ONE);

        assert_eq!(card.card_id(), CardId::new(3));
        assert_eq!(card.owner(), PlayerId::ONE);
        assert_eq!(card.modifier, 0);
        assert!(!card.face_down);
    }

    #[test]
    fn test_value_applies_modifier() {
        let card = PlacedCard::new(definition(), PlayerId::ONE);
        assert_eq!(card.value(Direction::Left), 5);

        let boosted = card.clone().with_modifier(1);
        assert_eq!(boosted.value(Direction::Left), 6);
        assert_eq!(boosted.value(Direction::Up), 2);

        let weakened = card.with_modifier(-2);
        assert_eq!(weakened.value(Direction::Up), -1);
    }

    #[test]
    fn test_owner_change_keeps_definition() {
        let shared = definition();
        let mut card = PlacedCard::new(Arc::clone(&shared), PlayerId::TWO);

        let previous = card.set_owner(PlayerId::ONE);
        assert_eq!(previous, PlayerId::TWO);
        assert_eq!(card.owner(), PlayerId::ONE);
        assert!(Arc::ptr_eq(card.definition(), &shared));
    }

    #[test]
    fn test_placed_card_serialization() {
        let card = PlacedCard::new(definition(), PlayerId::TWO).with_modifier(1);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: PlacedCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
