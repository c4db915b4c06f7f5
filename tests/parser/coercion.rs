//! Integration tests for value coercion

use turnscan_foundation::TableResolver;
use turnscan_parser::{TypeTag, coerce, parse_fixed_point_100, parse_integer_value};

#[test]
fn integer_parsing() {
    assert_eq!(parse_integer_value("99 kt"), 99);
    assert_eq!(parse_integer_value(""), -1);
    assert_eq!(parse_integer_value("12.9"), 12);
    assert_eq!(parse_integer_value(" -7 ly"), -7);
}

#[test]
fn fixed_point_parsing() {
    assert_eq!(parse_fixed_point_100("3.14"), Some(314));
    assert_eq!(parse_fixed_point_100("-123.456%"), Some(-12345));
    assert_eq!(parse_fixed_point_100("0.07"), Some(7));
    assert_eq!(parse_fixed_point_100("n/a"), None);
}

#[test]
fn enum_index() {
    let r = TableResolver::new();
    let tag = TypeTag::Enum(vec!["aa".into(), "bb".into(), "cc".into(), "dd".into()]);
    assert_eq!(coerce(&tag, "bb", &r), "1");
    assert_eq!(coerce(&tag, " DD ", &r), "3");
    assert_eq!(coerce(&tag, "ddd", &r), "");
}

#[test]
fn race_and_hull_lookup() {
    let r = TableResolver::standard().with_hull(1, "Outrider Class Scout");
    assert_eq!(coerce(&TypeTag::RaceLong, "The Evil Empire", &r), "8");
    assert_eq!(coerce(&TypeTag::RaceShort, "the rebels", &r), "10");
    assert_eq!(coerce(&TypeTag::RaceAdjective, "Privateer", &r), "5");
    assert_eq!(coerce(&TypeTag::RaceAdjectivePlusAlliance, "Privateer!", &r), "5");
    assert_eq!(coerce(&TypeTag::HullName, "OUTRIDER CLASS SCOUT", &r), "1");
    assert_eq!(coerce(&TypeTag::HullName, "Nocturne", &r), "");
}
