//! Integration tests for the rule definition loader

use turnscan_foundation::{CollectingSink, ObjectKind};
use turnscan_parser::{
    Instruction, KeywordMatching, LoaderConfig, RuleCatalog, Scope, TypeTag, load_rules,
};

const DEFINITIONS: &str = "\
; Rule definitions for tests
Base,starbase fighters
Kind=d
SUbid=f
CHeck=Starbase Status
PArse=+2,Fighters: $
ASsign=Id:x100

Ionstorm,storm
kind=i
bigid=12
fail=-1,dissipated
find==3,growing
array=$: $
values=5,6
assign=GROWING,VOLTAGE,A,B
continue=no
";

#[test]
fn parses_every_instruction_form() {
    let mut sink = CollectingSink::new();
    let rules = load_rules(DEFINITIONS.as_bytes(), "defs", &LoaderConfig::new(), &mut sink)
        .expect("in memory");
    assert!(sink.is_empty(), "{:?}", sink.into_records());
    assert_eq!(rules.len(), 2);

    let base = &rules[0];
    assert_eq!(base.kind(), ObjectKind::Starbase);
    assert_eq!(
        base.instructions(),
        &[
            Instruction::MatchKind('d'),
            Instruction::MatchSubId('f'),
            Instruction::Check {
                scope: Scope::Any,
                text: "Starbase Status".into()
            },
            Instruction::Parse {
                scope: Scope::Relative(2),
                pattern: turnscan_parser::Pattern::new("Fighters: $")
            },
        ]
    );
    assert_eq!(base.variables()[0].type_tag, TypeTag::FixedPoint100);

    let storm = &rules[1];
    assert_eq!(storm.kind(), ObjectKind::IonStorm);
    assert_eq!(storm.instructions()[0], Instruction::MatchBigId(12));
    assert!(matches!(
        storm.instructions()[1],
        Instruction::Fail {
            scope: Scope::Relative(-1),
            ..
        }
    ));
    assert!(matches!(
        storm.instructions()[2],
        Instruction::Find {
            scope: Scope::Fixed(3),
            ..
        }
    ));
    assert_eq!(storm.num_wildcards(), 4);
    assert_eq!(storm.num_restrictions(), 3);
    assert!(!storm.continue_flag());
}

#[test]
fn load_appends_and_reports_locations() {
    let mut catalog = RuleCatalog::new();
    let mut sink = CollectingSink::new();
    catalog.load_str(DEFINITIONS, "first.ini", &mut sink);
    catalog.load_str("Ship,broken\nparse=$ $\nassign=Id\n", "second.ini", &mut sink);

    assert_eq!(catalog.num_templates(), 3);
    assert_eq!(sink.error_count(), 1);
    let record = sink.iter().next().expect("one diagnostic");
    assert!(record.source.starts_with("second.ini:"));
}

#[test]
fn exact_keyword_mode_rejects_abbreviations() {
    let config = LoaderConfig::new().with_keyword_matching(KeywordMatching::Exact);
    let mut catalog = RuleCatalog::with_config(config);
    let mut sink = CollectingSink::new();
    catalog.load_str("Ship,a\nch=x\nCheck=y\n", "t", &mut sink);

    assert_eq!(catalog.num_templates(), 1);
    assert_eq!(catalog.rules()[0].instructions().len(), 1);
    assert!(sink.contains("unknown keyword"));
}

#[test]
fn every_kind_keyword_loads() {
    for kind in ObjectKind::ALL {
        let text = format!("{},rule\ncheck=x\n", kind.keyword());
        let mut sink = CollectingSink::new();
        let rules = load_rules(text.as_bytes(), "t", &LoaderConfig::new(), &mut sink).expect("in memory");
        assert_eq!(rules.len(), 1, "{kind}");
        assert_eq!(rules[0].kind(), kind);
    }
}

#[test]
fn display_lists_the_rule() {
    let mut sink = CollectingSink::new();
    let rules = load_rules(DEFINITIONS.as_bytes(), "defs", &LoaderConfig::new(), &mut sink)
        .expect("in memory");
    let text = rules[0].to_string();
    assert!(text.starts_with("Base,starbase fighters"));
    assert!(text.contains("parse=+2,Fighters: $"));
}
