//! Integration tests for Error types

use std::io;

use turnscan_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn resource_unavailable_names_the_path() {
    let err = Error::resource_unavailable(
        "rules/msgparse.ini",
        io::Error::new(io::ErrorKind::NotFound, "gone"),
    );
    assert!(matches!(err.kind, ErrorKind::ResourceUnavailable { .. }));
    let msg = err.to_string();
    assert!(msg.contains("msgparse.ini"));
    assert!(msg.contains("gone"));
}

#[test]
fn io_errors_convert() {
    let err: Error = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated").into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.context.is_none());
}

#[test]
fn context_is_attached() {
    let err = Error::from(io::Error::new(io::ErrorKind::InvalidData, "bad state"))
        .with_context(ErrorContext::new().with_source("rules.ini").with_line(12));
    let context = err.context.as_ref().expect("context");
    assert_eq!(context.source.as_deref(), Some("rules.ini"));
    assert_eq!(context.line, Some(12));
    assert!(context.to_string().contains("rules.ini:12"));
}
