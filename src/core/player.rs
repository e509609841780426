//! Player identification, per-player storage and player state.
//!
//! ## PlayerId
//!
//! The game always has exactly two seats. `PlayerId::ONE` moves on even
//! turns, `PlayerId::TWO` on odd turns.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`, the two-seat counterpart
//! of a per-player map.

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::InvalidSeat;
use crate::cards::{CardDefinition, CardId};

/// Player seat identifier.
///
/// Indices are 0-based: the first player is `PlayerId(0)`. Serialized as
/// the bare index; deserializing anything but 0 or 1 fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const ONE: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const TWO: PlayerId = PlayerId(1);

    /// Both seats in turn order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::ONE, PlayerId::TWO];

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// The seat that acts on a given turn number.
    ///
    /// ```
    /// use triad_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(0), PlayerId::ONE);
    /// assert_eq!(PlayerId::for_turn(1), PlayerId::TWO);
    /// assert_eq!(PlayerId::for_turn(8), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn for_turn(turn: u32) -> Self {
        PlayerId((turn % 2) as u8)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidSeat;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 | 1 => Ok(PlayerId(index)),
            _ => Err(InvalidSeat(index)),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player storage for a two-seat game.
///
/// ## Example
///
/// ```
/// use triad_engine::core::{PlayerId, PlayerPair};
///
/// let mut scores = PlayerPair::with_value(5);
/// scores[PlayerId::ONE] += 1;
/// scores[PlayerId::TWO] -= 1;
///
/// assert_eq!(scores[PlayerId::ONE], 6);
/// assert_eq!(scores[PlayerId::TWO], 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from explicit values for player one and player two.
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Map both entries to a new pair.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerPair<U> {
        PlayerPair::new(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seated player: display name, score and current hand.
///
/// The score is only written by the match controller. `hand_visible`
/// is presentation state toggled by the turn controller; it never affects
/// capture resolution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    score: i32,
    hand: Vec<Arc<CardDefinition>>,
    hand_visible: bool,
}

impl Player {
    /// Create a player with a starting score and hand.
    #[must_use]
    pub fn new(name: impl Into<String>, score: i32, hand: Vec<Arc<CardDefinition>>) -> Self {
        Self {
            name: name.into(),
            score,
            hand,
            hand_visible: false,
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = score;
    }

    pub(crate) fn adjust_score(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Cards still in hand, in dealt order.
    #[must_use]
    pub fn hand(&self) -> &[Arc<CardDefinition>] {
        &self.hand
    }

    /// Number of cards still in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Check if a definition is in hand.
    #[must_use]
    pub fn has_card(&self, card: CardId) -> bool {
        self.hand.iter().any(|c| c.id == card)
    }

    /// Remove the first copy of a card from hand.
    ///
    /// Returns the removed definition, or `None` if the card is not held.
    pub(crate) fn take_card(&mut self, card: CardId) -> Option<Arc<CardDefinition>> {
        let pos = self.hand.iter().position(|c| c.id == card)?;
        Some(self.hand.remove(pos))
    }

    pub(crate) fn replace_hand(&mut self, hand: Vec<Arc<CardDefinition>>) {
        self.hand = hand;
    }

    /// Are this player's hand values visible (face-up)?
    #[must_use]
    pub fn is_hand_visible(&self) -> bool {
        self.hand_visible
    }

    pub(crate) fn set_hand_visible(&mut self, visible: bool) {
        self.hand_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Element, Sides};

    fn card(id: u32) -> Arc<CardDefinition> {
        Arc::new(CardDefinition::new(
            CardId::new(id),
            format!("Card {id}"),
            Sides::new(1, 1, 1, 1),
            Element::None,
        ))
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 1");
    }

    #[test]
    fn test_deserialize_only_two_seats() {
        assert_eq!(serde_json::to_string(&PlayerId::TWO).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::ONE);
        assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::TWO);

        let err = serde_json::from_str::<PlayerId>("5").unwrap_err();
        assert!(err.to_string().contains("not a seat"));
        assert_eq!(PlayerId::try_from(2u8), Err(InvalidSeat(2)));
    }

    #[test]
    fn test_for_turn_alternates() {
        for turn in 0..10 {
            let expected = if turn % 2 == 0 { PlayerId::ONE } else { PlayerId::TWO };
            assert_eq!(PlayerId::for_turn(turn), expected);
        }
    }

    #[test]
    fn test_player_pair_indexing() {
        let mut pair = PlayerPair::new(1, 2);
        assert_eq!(pair[PlayerId::ONE], 1);
        assert_eq!(pair[PlayerId::TWO], 2);

        pair[PlayerId::TWO] = 7;
        assert_eq!(pair[PlayerId::TWO], 7);
    }

    #[test]
    fn test_player_pair_iter_and_map() {
        let pair = PlayerPair::from_fn(|p| p.index() * 10);
        let collected: Vec<_> = pair.iter().collect();
        assert_eq!(collected, vec![(PlayerId::ONE, &0), (PlayerId::TWO, &10)]);

        let doubled = pair.map(|v| v * 2);
        assert_eq!(doubled, PlayerPair::new(0, 20));
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair = PlayerPair::new(6, 4);
        let json = serde_json::to_string(&pair).unwrap();
        let back: PlayerPair<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, back);
    }

    #[test]
    fn test_take_card_removes_first_copy() {
        let mut player = Player::new("Ana", 5, vec![card(1), card(2), card(1)]);

        assert!(player.has_card(CardId::new(1)));
        let taken = player.take_card(CardId::new(1)).unwrap();
        assert_eq!(taken.id, CardId::new(1));
        assert_eq!(player.hand_size(), 2);
        assert!(player.has_card(CardId::new(1)));

        assert!(player.take_card(CardId::new(9)).is_none());
        assert_eq!(player.hand_size(), 2);
    }

    #[test]
    fn test_score_adjustment() {
        let mut player = Player::new("Ana", 5, Vec::new());
        player.adjust_score(1);
        assert_eq!(player.score(), 6);
        player.adjust_score(-2);
        assert_eq!(player.score(), 4);
        player.set_score(5);
        assert_eq!(player.score(), 5);
    }
}
