//! Turn counter and hand visibility.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerPair};

/// Counts successful placements and derives the active player.
///
/// Player one is active on even turns, player two on odd turns. The active
/// player's hand is shown face-up, the other face-down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    turn: u32,
}

impl TurnController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements made so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Player whose placement is accepted next.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        PlayerId::for_turn(self.turn)
    }

    /// Move to the next turn and return the new active player.
    pub fn advance(&mut self) -> PlayerId {
        self.turn += 1;
        self.active()
    }

    pub fn reset(&mut self) {
        self.turn = 0;
    }

    /// Show the active player's hand and hide the other.
    pub fn apply_visibility(&self, players: &mut PlayerPair<Player>) {
        let active = self.active();
        for (id, player) in players.iter_mut() {
            player.set_hand_visible(id == active);
        }
    }
}
