//! Integration tests for name resolution

use turnscan_foundation::{NameKind, NameResolver, RaceNames, TableResolver};

#[test]
fn standard_races_resolve_in_every_form() {
    let r = TableResolver::standard();
    assert_eq!(r.parse_name(NameKind::LongRaceName, "The Lizard Alliance"), 2);
    assert_eq!(r.parse_name(NameKind::ShortRaceName, "THE BIRD MEN"), 3);
    assert_eq!(r.parse_name(NameKind::AdjectiveRaceName, "crystalline"), 7);
    assert_eq!(r.parse_name(NameKind::AdjectiveRaceName, "The Lizards"), 0);
    assert_eq!(r.race(11).map(|n| n.short.as_str()), Some("The Colonies"));
    assert!(r.race(12).is_none());
    assert!(r.race(0).is_none());
}

#[test]
fn empty_resolver_knows_nothing() {
    let r = TableResolver::new();
    assert_eq!(r.player_number(), 0);
    assert_eq!(r.parse_name(NameKind::ShortRaceName, "The Feds"), 0);
    assert_eq!(r.expand_race_names("%1 attack"), "%1 attack");
}

#[test]
fn replacing_a_race() {
    let mut r = TableResolver::standard().with_player(4);
    r.set_race(4, RaceNames::new("The Klingon Empire", "The Klingons", "Klingon"));
    assert_eq!(r.player_number(), 4);
    assert_eq!(r.parse_name(NameKind::AdjectiveRaceName, "Klingon"), 4);
    assert_eq!(r.parse_name(NameKind::AdjectiveRaceName, "Fascist"), 0);
    assert_eq!(r.expand_race_names("%4 ship"), "The Klingons ship");
}

#[test]
fn race_list_file() {
    let mut r = TableResolver::new();
    let accepted = r.load_race_list(
        "; custom races\n\
         1, The Alpha League, The Alphas, Alphan\n\
         10,The Tenth,The Tens,Tenth\n\
         0,Nobody,Nobody,None\n\
         3,incomplete\n",
    );
    assert_eq!(accepted, 2);
    assert_eq!(r.parse_name(NameKind::ShortRaceName, "the alphas"), 1);
    assert_eq!(r.expand_race_names("%a and %1"), "The Tens and The Alphas");
}

#[test]
fn hull_names() {
    let r = TableResolver::new()
        .with_hull(16, "Medium Deep Space Freighter")
        .with_hull(105, "Merlin Class Alchemy Ship");
    assert_eq!(r.parse_name(NameKind::HullName, "merlin class alchemy ship"), 105);
    assert_eq!(r.parse_name(NameKind::HullName, "Merlin"), 0);
}
