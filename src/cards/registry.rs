//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every catalog definition behind an `Arc` so
//! hands and placed cards share a single copy. It provides fast lookup by
//! `CardId` and a deterministic ID ordering for seeded dealing.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, Element};
use crate::core::CatalogError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use triad_engine::cards::{CardDefinition, CardId, CardRegistry, Element, Sides};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new(CardId::new(1), "Geezard", Sides::new(1, 1, 5, 4), Element::None))
///     .unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Geezard");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same ID already exists; the registry is
    /// left unchanged in that case.
    pub fn register(&mut self, card: CardDefinition) -> Result<Arc<CardDefinition>, CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        let card = Arc::new(card);
        self.cards.insert(card.id, Arc::clone(&card));
        Ok(card)
    }

    /// Get a shared handle to a card definition.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// All registered IDs in ascending order.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Find cards by element.
    pub fn find_by_element(&self, element: Element) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values().filter(move |c| c.element == element)
    }

    /// Resolve a list of IDs into a hand.
    ///
    /// Returns `None` if any ID is unknown.
    #[must_use]
    pub fn hand(&self, ids: &[CardId]) -> Option<Vec<Arc<CardDefinition>>> {
        ids.iter().map(|id| self.get(*id).cloned()).collect()
    }
}
