//! Property tests over random legal games.
//!
//! Each case deals random side values, then plays a full match choosing a
//! random open cell and a random card from the active hand every turn.

use std::sync::Arc;

use proptest::prelude::*;

use triad_engine::cards::{CardDefinition, CardId, Element, Sides};
use triad_engine::{
    Board, CaptureEngine, Hand, Match, MatchOutcome, PlacementError, PlayerId, Position,
};

fn hand(base: u32, sides: &[(u8, u8, u8, u8)]) -> Hand {
    sides
        .iter()
        .enumerate()
        .map(|(i, &(up, down, left, right))| {
            Arc::new(CardDefinition::new(
                CardId::new(base + i as u32),
                "Card",
                Sides::new(up, down, left, right),
                Element::None,
            ))
        })
        .collect()
}

fn sides() -> impl Strategy<Value = Vec<(u8, u8, u8, u8)>> {
    prop::collection::vec((0u8..=10, 0u8..=10, 0u8..=10, 0u8..=10), 5)
}

/// Turn choices: index into open cells and into the active hand.
fn choices() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..9, 0usize..5), 9)
}

fn owners(board: &Board) -> Vec<Option<PlayerId>> {
    Position::all().map(|p| board.get(p).map(|c| c.owner())).collect()
}

fn adjacent(a: Position, b: Position) -> bool {
    a.row().abs_diff(b.row()) + a.col().abs_diff(b.col()) == 1
}

proptest! {
    /// Property: scores always sum to 10, occupied cells stay occupied,
    /// turns alternate, and only direct neighbours ever change owner.
    #[test]
    fn prop_random_game_invariants(p1 in sides(), p2 in sides(), picks in choices()) {
        let mut game = Match::new("A", hand(0, &p1), "B", hand(100, &p2)).unwrap();
        game.start().unwrap();

        for (turn, (cell_pick, card_pick)) in picks.into_iter().enumerate() {
            let active = game.current_turn_owner();
            prop_assert_eq!(active, if turn % 2 == 0 { PlayerId::ONE } else { PlayerId::TWO });
            prop_assert!(game.is_hand_card_visible(active));
            prop_assert!(!game.is_hand_card_visible(active.opponent()));

            let open = game.open_positions();
            let target = open[cell_pick % open.len()];
            let held = game.player(active).hand();
            let card = held[card_pick % held.len()].id;

            let before = owners(game.board());
            let report = game.place_card(card, target.row(), target.col()).unwrap();
            let after = owners(game.board());

            let scores = game.scores();
            prop_assert_eq!(scores[PlayerId::ONE] + scores[PlayerId::TWO], 10);
            prop_assert_eq!(game.turn() as usize, turn + 1);

            for (index, (was, now)) in before.iter().zip(&after).enumerate() {
                if was.is_some() {
                    prop_assert!(now.is_some());
                }
                if was.is_some() && was != now {
                    let cell = Position::all().nth(index).unwrap();
                    prop_assert!(adjacent(cell, target));
                    prop_assert_eq!(*now, Some(active));
                }
            }

            let changed = before.iter().zip(&after).filter(|(a, b)| a.is_some() && a != b).count();
            prop_assert_eq!(changed, report.captures.len());
            for capture in &report.captures {
                prop_assert!(adjacent(capture.position, target));
            }
        }

        let scores = game.scores();
        let expected = match scores[PlayerId::ONE].cmp(&scores[PlayerId::TWO]) {
            std::cmp::Ordering::Greater => MatchOutcome::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => MatchOutcome::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        };
        prop_assert_eq!(game.outcome(), expected);
        prop_assert!(game.board().is_full());
    }

    /// Property: a rejected placement leaves the match untouched.
    #[test]
    fn prop_rejection_changes_nothing(p1 in sides(), p2 in sides(), cell in 0usize..9) {
        let mut game = Match::new("A", hand(0, &p1), "B", hand(100, &p2)).unwrap();
        game.start().unwrap();

        let target = Position::all().nth(cell).unwrap();
        game.place_card(CardId::new(0), target.row(), target.col()).unwrap();

        let board = game.board().clone();
        let scores = game.scores();
        let log_len = game.log().len();

        let err = game.place_card(CardId::new(100), target.row(), target.col()).unwrap_err();
        prop_assert_eq!(err, PlacementError::CellOccupied(target));
        prop_assert_eq!(game.board(), &board);
        prop_assert_eq!(game.scores(), scores);
        prop_assert_eq!(game.turn(), 1);
        prop_assert_eq!(game.current_turn_owner(), PlayerId::TWO);
        prop_assert_eq!(game.log().len(), log_len);
    }

    /// Property: resolving the same board twice gives the same captures.
    #[test]
    fn prop_resolution_deterministic(p1 in sides(), p2 in sides(), picks in choices()) {
        let mut game = Match::new("A", hand(0, &p1), "B", hand(100, &p2)).unwrap();
        game.start().unwrap();

        for (cell_pick, card_pick) in picks.into_iter().take(8) {
            let active = game.current_turn_owner();
            let open = game.open_positions();
            let target = open[cell_pick % open.len()];
            let held = game.player(active).hand();
            let card = held[card_pick % held.len()].id;
            game.place_card(card, target.row(), target.col()).unwrap();
        }

        let engine = CaptureEngine::standard();
        for (position, card) in game.board().occupied() {
            let first = engine.resolve(game.board(), position, card.owner().opponent());
            let second = engine.resolve(game.board(), position, card.owner().opponent());
            prop_assert_eq!(first, second);
        }
    }
}
