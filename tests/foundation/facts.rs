//! Integration tests for facts, values and object kinds

use turnscan_foundation::{
    AllianceOffer, IdPolicy, IntegerAttribute, MessageInformation, MessageValue, ObjectKind,
    Offer, OfferVector, StringAttribute,
};

// =============================================================================
// Object Kinds
// =============================================================================

#[test]
fn id_policies() {
    for kind in [
        ObjectKind::Ship,
        ObjectKind::Planet,
        ObjectKind::Starbase,
        ObjectKind::Minefield,
        ObjectKind::IonStorm,
        ObjectKind::Ufo,
        ObjectKind::Wormhole,
        ObjectKind::ExtraShip,
        ObjectKind::ExtraPlanet,
        ObjectKind::ExtraMinefield,
    ] {
        assert_eq!(kind.id_policy(), IdPolicy::Mandatory, "{kind}");
        assert!(kind.is_mergeable(1));
    }
    assert_eq!(ObjectKind::PlayerScore.id_policy(), IdPolicy::Optional);
    assert_eq!(ObjectKind::Explosion.id_policy(), IdPolicy::Optional);
    assert_eq!(ObjectKind::Configuration.id_policy(), IdPolicy::Unused);
}

#[test]
fn mergeability() {
    assert!(!ObjectKind::PlayerScore.is_mergeable(0));
    assert!(ObjectKind::PlayerScore.is_mergeable(3));
    assert!(!ObjectKind::Explosion.is_mergeable(0));
    assert!(ObjectKind::Configuration.is_mergeable(0));
    assert!(ObjectKind::Alliance.is_mergeable(0));
    for drawing in [
        ObjectKind::Marker,
        ObjectKind::Line,
        ObjectKind::Circle,
        ObjectKind::Rectangle,
    ] {
        assert!(drawing.is_drawing());
        assert!(!drawing.is_mergeable(0));
    }
    assert!(!ObjectKind::NoObject.is_mergeable(0));
}

#[test]
fn every_kind_has_a_distinct_keyword() {
    let mut keywords: Vec<&str> = ObjectKind::ALL.iter().map(|k| k.keyword()).collect();
    keywords.sort_unstable();
    keywords.dedup();
    assert_eq!(keywords.len(), ObjectKind::ALL.len());
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn attribute_keywords_round_trip() {
    for attr in IntegerAttribute::ALL {
        assert_eq!(IntegerAttribute::from_keyword(attr.keyword()), Some(*attr));
    }
    for attr in StringAttribute::ALL {
        assert_eq!(StringAttribute::from_keyword(attr.keyword()), Some(*attr));
    }
    assert_eq!(IntegerAttribute::from_keyword("POINTS"), Some(IntegerAttribute::Score));
    assert_eq!(IntegerAttribute::from_keyword("x"), None);
    assert_eq!(StringAttribute::from_keyword("FCODE"), Some(StringAttribute::FriendlyCode));
}

// =============================================================================
// Facts
// =============================================================================

#[test]
fn fact_accessors_and_display() {
    let mut fact = MessageInformation::new(ObjectKind::Planet, 77, 12);
    fact.add_value(MessageValue::String(StringAttribute::Name, "Vulcan".into()));
    fact.add_value(MessageValue::Integer(IntegerAttribute::Temperature, 50));
    fact.add_value(MessageValue::Integer(IntegerAttribute::Temperature, 51));

    assert!(fact.is_about(ObjectKind::Planet, 77, 12));
    assert!(!fact.is_about(ObjectKind::Planet, 77, 13));
    assert_eq!(fact.values().len(), 2);
    assert_eq!(fact.integer(IntegerAttribute::Temperature), Some(51));
    assert_eq!(fact.string(StringAttribute::Name), Some("Vulcan"));

    let text = fact.to_string();
    assert!(text.contains("#77 (turn 12)"));
    assert!(text.contains("TEMP=51"));
}

#[test]
fn config_keys_are_case_insensitive() {
    let mut fact = MessageInformation::new(ObjectKind::Configuration, 0, 1);
    fact.add_value(MessageValue::Config("GameName".into(), "First".into()));
    fact.add_value(MessageValue::Config("GAMENAME".into(), "Second".into()));
    assert_eq!(fact.values().len(), 1);
    assert_eq!(fact.config("gamename"), Some("Second"));
}

#[test]
fn alliance_offers() {
    let mut offer = AllianceOffer::new("ships");
    offer.from_us.set(2, Offer::Yes);
    offer.to_us.set(11, Offer::Conditional);
    offer.to_us.set(12, Offer::Yes);
    offer.to_us.set(0, Offer::Yes);

    assert_eq!(offer.from_us.get(2), Offer::Yes);
    assert_eq!(offer.to_us.get(11), Offer::Conditional);
    assert_eq!(offer.to_us.get(12), Offer::Unknown);
    assert_eq!(offer.to_us.get(0), Offer::Unknown);
    assert!(OfferVector::new().is_unknown());
    assert!(offer.to_string().contains("ships"));
}
