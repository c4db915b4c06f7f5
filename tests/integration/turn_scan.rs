//! A full definition file applied to a batch of messages from one turn.

use turnscan::foundation::{
    CollectingSink, IntegerAttribute, MessageInformation, ObjectKind, StringAttribute,
    TableResolver,
};
use turnscan::parser::RuleCatalog;

const DEFINITIONS: &str = "\
; Messages sent by the host
; ------------------------

Minefield,mine scan
kind=m
check=Mine field ID#
parse=Mine field ID#$
parse=+1,$ mines
parse=+1,controlled by $
assign=Id,UNITS,OWNER:RACE.ADJ
continue=yes

Minefield,mine position
kind=m
parse=Mine field ID#$
parse=at ($,$)
assign=Id,X,Y

Planet,natives
kind=p
check=Natives
parse=Planet ID#$
parse=+1,Race  : $
parse=+1,Govt  : $
assign=Id,NATIVES.RACE:ENUM(none|Humanoid|Bovinoid|Reptilian|Avian|Amorphous|Insectoid|Amphibian|Ghipsoldal|Siliconoid),NATIVES.GOV:ENUM(none|Anarchy|Pre-Tribal|Early-Tribal|Tribal|Feudal|Monarchy|Representative|Participatory|Unity)

Base,fighters
kind=d
check=Starbase
parse=Planet ID#$
parse=Fighters: $
assign=Id,BASE.FIGHTERS

Ship,distress
kind=s
check=Distress call
parse=+1,Ship ID# $ named $
parse=at ( $ , $ )
find=towed
assign=Id,NAME,X,Y,_

Ionstorm,storm
kind=i
parse=Ion storm ID #$ at ($,$)
parse=+1,Voltage: $ MeV
parse=+1,Heading $ at warp $
assign=Id,X,Y,VOLTAGE,HEADING,SPEED

Explosion,boom
kind=x
parse=explosion at ($,$)
find=ship
assign=X,Y,_
";

const TURN: &str = "\
(-m0031)<<< Mine Scan >>>
Mine field ID#31
  2500 mines
  controlled by Robotic
at (1200, 2400)
---
(-p0208)<<< Natives >>>
Planet ID#208
Race  : Reptilian
Govt  : Feudal
---
(-d0208)<<< Starbase >>>
Planet ID#208
Fighters: 40
---
(-s0412)<<< Distress >>>
Distress call
Ship ID# 412 named SS Minnow
at ( 1500 , 1510 )
---
(-i0007)<<< Ion Advisory >>>
Ion storm ID #7 at (2020,1880)
Voltage: 160 MeV
Heading 90 at warp 6
---
(-x0000)<<< Explosion >>>
An explosion at (1000,1001) was detected
---
(-z0000)<<< Unknown >>>
Nothing we have a rule for.
";

fn run_turn() -> (Vec<MessageInformation>, CollectingSink) {
    let mut catalog = RuleCatalog::new();
    let mut sink = CollectingSink::new();
    catalog.load_str(DEFINITIONS, "turn.ini", &mut sink);
    assert!(sink.is_empty(), "definition problems: {:?}", sink.into_records());
    assert_eq!(catalog.num_templates(), 7);

    let resolver = TableResolver::standard().with_player(4);
    let mut sink = CollectingSink::new();
    let facts = TURN
        .split("---\n")
        .flat_map(|message| catalog.parse_message(message, &resolver, 55, &mut sink))
        .collect();
    (facts, sink)
}

fn find(facts: &[MessageInformation], kind: ObjectKind, id: i32) -> &MessageInformation {
    facts
        .iter()
        .find(|f| f.object_kind() == kind && f.object_id() == id)
        .unwrap_or_else(|| panic!("no {kind} #{id}"))
}

#[test]
fn every_message_produces_its_fact() {
    let (facts, sink) = run_turn();
    assert!(sink.is_empty(), "{:?}", sink.into_records());
    assert_eq!(facts.len(), 6);
    assert!(facts.iter().all(|f| f.turn_number() == 55));
}

#[test]
fn minefield_rules_merge() {
    let (facts, _) = run_turn();
    let field = find(&facts, ObjectKind::Minefield, 31);
    assert_eq!(field.integer(IntegerAttribute::Units), Some(2500));
    assert_eq!(field.integer(IntegerAttribute::Owner), Some(9));
    assert_eq!(field.integer(IntegerAttribute::X), Some(1200));
    assert_eq!(field.integer(IntegerAttribute::Y), Some(2400));
}

#[test]
fn planet_and_starbase_stay_separate() {
    let (facts, _) = run_turn();
    let planet = find(&facts, ObjectKind::Planet, 208);
    assert_eq!(planet.integer(IntegerAttribute::NativeRace), Some(3));
    assert_eq!(planet.integer(IntegerAttribute::NativeGovernment), Some(5));
    let base = find(&facts, ObjectKind::Starbase, 208);
    assert_eq!(base.integer(IntegerAttribute::BaseFighters), Some(40));
}

#[test]
fn ship_storm_and_explosion() {
    let (facts, _) = run_turn();
    let ship = find(&facts, ObjectKind::Ship, 412);
    assert_eq!(ship.string(StringAttribute::Name), Some("SS Minnow"));
    assert_eq!(ship.integer(IntegerAttribute::X), Some(1500));
    assert_eq!(ship.values().len(), 3);

    let storm = find(&facts, ObjectKind::IonStorm, 7);
    assert_eq!(storm.integer(IntegerAttribute::Voltage), Some(160));
    assert_eq!(storm.integer(IntegerAttribute::Heading), Some(90));
    assert_eq!(storm.integer(IntegerAttribute::Speed), Some(6));

    let boom = find(&facts, ObjectKind::Explosion, 0);
    assert_eq!(boom.integer(IntegerAttribute::Y), Some(1001));
}
