//! Seeded hand dealing.
//!
//! Dealing is a setup step performed by the caller before a match is
//! created; the match controller never deals. Two modes are provided:
//!
//! - `deal_hand`: uniform draws with replacement, so a hand may hold the
//!   same definition more than once.
//! - `deal_distinct_hand`: draws without replacement.

use std::sync::Arc;

use super::definition::CardDefinition;
use super::registry::CardRegistry;
use crate::core::{GameRng, PlayerId, PlayerPair};

/// Deal `size` cards with replacement.
///
/// Returns an empty hand if the registry is empty.
pub fn deal_hand(registry: &CardRegistry, rng: &mut GameRng, size: usize) -> Vec<Arc<CardDefinition>> {
    let ids = registry.sorted_ids();
    (0..size)
        .filter_map(|_| rng.choose(&ids))
        .filter_map(|id| registry.get(*id).cloned())
        .collect()
}

/// Deal up to `size` distinct cards.
///
/// Returns fewer than `size` cards if the registry is smaller than that.
pub fn deal_distinct_hand(
    registry: &CardRegistry,
    rng: &mut GameRng,
    size: usize,
) -> Vec<Arc<CardDefinition>> {
    let mut ids = registry.sorted_ids();
    rng.shuffle(&mut ids);
    ids.into_iter()
        .take(size)
        .filter_map(|id| registry.get(id).cloned())
        .collect()
}

/// Deal a with-replacement hand to each seat from its own RNG stream.
///
/// The same seed always produces the same pair of hands.
pub fn deal_hands(
    registry: &CardRegistry,
    seed: u64,
    size: usize,
) -> PlayerPair<Vec<Arc<CardDefinition>>> {
    let base = GameRng::new(seed);
    PlayerPair::from_fn(|player: PlayerId| {
        let mut rng = base.for_context(&format!("hand-{}", player.index()));
        deal_hand(registry, &mut rng, size)
    })
}
