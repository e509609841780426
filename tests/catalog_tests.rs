//! Catalog parsing and dealing integration tests.

use triad_engine::cards::{deal_hand, deal_hands, parse_catalog, CardId, Element};
use triad_engine::core::{CatalogError, GameRng, PlayerId};
use triad_engine::Match;

const CATALOG: &str = "\
id;name;up;left;down;right;type
1;Geezard;1;5;1;4;NONE
2;Funguar;5;3;1;1;NONE
3;Bite Bug;1;5;3;3;NONE

4;Red Bat;6;2;1;1;NONE
5;Blobra;2;5;3;1;NONE
6;Gayla;2;4;1;4;THUNDER
7;Gesper;1;1;5;4;NONE
8;Fastitocalon-F;3;1;5;2;EARTH
9;Blood Soul;2;1;1;6;NONE
10;Caterchipillar;4;3;2;4;NONE
11;Bomb;2;1;3;6;fire
";

#[test]
fn test_parse_catalog() {
    let registry = parse_catalog(CATALOG).unwrap();
    assert_eq!(registry.len(), 11);

    let gayla = registry.get(CardId::new(6)).unwrap();
    assert_eq!(gayla.name, "Gayla");
    assert_eq!(gayla.element, Element::Thunder);
    assert_eq!((gayla.sides.up, gayla.sides.left, gayla.sides.down, gayla.sides.right), (2, 4, 1, 4));

    assert_eq!(registry.get(CardId::new(11)).unwrap().element, Element::Fire);
    assert_eq!(registry.find_by_element(Element::Earth).count(), 1);
}

#[test]
fn test_error_reports_file_line() {
    let text = "id;name;up;left;down;right;type\n1;Geezard;1;5;1;4;NONE\n2;Funguar;5;x;1;1;NONE\n";
    let err = parse_catalog(text).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidNumber {
            line: 3,
            field: "left",
            value: "x".to_string(),
        }
    );
}

#[test]
fn test_extra_columns_report_line() {
    let text = "id;name;up;left;down;right;type\n1;Geezard;1;5;1;4;NONE\n2;Funguar;5;3;1;1;NONE;extra\n";
    assert_eq!(
        parse_catalog(text).unwrap_err(),
        CatalogError::FieldCount {
            line: 3,
            expected: 7,
            found: 8,
        }
    );
}

#[test]
fn test_quoted_names() {
    let text = "id;name;up;left;down;right;type\n1;\"Geezard; the Elder\";1;5;1;4;NONE\n2;\"Bite \"\"Bug\"\"\";1;5;3;3;NONE\n";
    let registry = parse_catalog(text).unwrap();

    assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Geezard; the Elder");
    assert_eq!(registry.get(CardId::new(2)).unwrap().name, "Bite \"Bug\"");
    assert_eq!(registry.get(CardId::new(1)).unwrap().sides.left, 5);
}

#[test]
fn test_duplicate_ids_rejected() {
    let text = "id;name;up;left;down;right;type\n1;Geezard;1;5;1;4;NONE\n1;Funguar;5;3;1;1;NONE\n";
    assert_eq!(parse_catalog(text).unwrap_err(), CatalogError::DuplicateId(CardId::new(1)));
}

#[test]
fn test_seeded_deal_is_reproducible() {
    let registry = parse_catalog(CATALOG).unwrap();

    let ids = |seed: u64| -> Vec<CardId> {
        let mut rng = GameRng::new(seed);
        deal_hand(&registry, &mut rng, 5).iter().map(|c| c.id).collect()
    };

    assert_eq!(ids(42), ids(42));
    assert_eq!(ids(42).len(), 5);
    assert!(ids(42).iter().all(|id| registry.contains(*id)));
}

#[test]
fn test_dealt_hands_start_a_match() {
    let registry = parse_catalog(CATALOG).unwrap();
    let hands = deal_hands(&registry, 7, 5);

    let [p1, p2] = [hands[PlayerId::ONE].clone(), hands[PlayerId::TWO].clone()];
    let first = p1[0].id;

    let mut game = Match::new("Zell", p1, "Quistis", p2).unwrap();
    game.start().unwrap();
    game.place_card(first, 1, 1).unwrap();

    assert_eq!(game.player(PlayerId::ONE).hand_size(), 4);
}
