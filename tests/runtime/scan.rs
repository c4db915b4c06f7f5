//! Scanning message files the way the `turnscan` binary does.

use std::fs;
use std::path::PathBuf;

use turnscan::runtime::{CliError, Verbosity, parse_args, run, split_messages};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("turnscan-it-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp file");
    path
}

const RULES: &str = "\
Planet,temperature
kind=p
parse=Planet $ has a temperature of $ F
assign=Id,TEMP

Ship,seen
kind=s
parse=We saw %3 ship $
assign=Id
";

#[test]
fn scans_every_message_of_every_file() {
    let rules = temp_file("rules.ini", RULES);
    let first = temp_file(
        "first.txt",
        "(-p0001)\nPlanet 1 has a temperature of 55 F\n---\n(-p0002)\nPlanet 2 has a temperature of 12 F\n",
    );
    let second = temp_file("second.txt", "(-s0099)\nWe saw The Bird Men ship 99\n");

    let config = parse_args([
        "-r".to_string(),
        rules.display().to_string(),
        "--turn".to_string(),
        "3".to_string(),
        "--quiet".to_string(),
        first.display().to_string(),
        second.display().to_string(),
    ])
    .expect("valid arguments");
    assert_eq!(config.verbosity, Verbosity::Quiet);

    let mut out = Vec::new();
    let summary = run(&config, &mut out).expect("scan succeeds");
    assert_eq!(summary.messages, 3);
    assert_eq!(summary.facts, 3);

    let printed = String::from_utf8(out).expect("utf-8");
    assert!(printed.contains("#1 (turn 3)"));
    assert!(printed.contains("TEMP=12"));
    assert!(printed.contains("#99 (turn 3)"));

    for path in [rules, first, second] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn unreadable_message_file_is_an_error() {
    let rules = temp_file("rules-only.ini", RULES);
    let config = parse_args([
        "-r".to_string(),
        rules.display().to_string(),
        "/nonexistent/turnscan/messages.txt".to_string(),
    ])
    .expect("valid arguments");

    let mut out = Vec::new();
    let err = run(&config, &mut out).expect_err("missing input");
    assert!(matches!(err, CliError::Scan(_)));
    assert!(err.to_string().contains("messages.txt"));
    let _ = fs::remove_file(rules);
}

#[test]
fn message_separators() {
    let messages = split_messages("one\n--- separator text\ntwo\n---\n---\n");
    assert_eq!(messages, vec!["one\n", "two\n"]);
}
