//! Value coercion.
//!
//! Captured text is converted according to the variable's [`TypeTag`] before
//! it enters the output buffer. Coercion never fails a rule: a value that
//! cannot be converted becomes the empty string.

use turnscan_foundation::{NameKind, NameResolver};

use crate::rule::TypeTag;

/// Parses the leading number of `text`.
///
/// Accepts an optional `-` and digits; a decimal point truncates the
/// fractional part. Parsing stops at the first other character, so
/// `"99 kt"` is 99. Returns -1 if there are no digits at all.
#[must_use]
pub fn parse_integer_value(text: &str) -> i32 {
    match scan_number(text) {
        Some(n) => clamp(n.sign * n.whole),
        None => -1,
    }
}

/// Parses a decimal number scaled by 100, keeping two fractional digits.
///
/// `"3.14"` is 314, `"-123.456%"` is -12345, `".5"` is 50.
#[must_use]
pub fn parse_fixed_point_100(text: &str) -> Option<i32> {
    scan_number(text).map(|n| clamp(n.sign * (n.whole * 100 + n.hundredths)))
}

/// Converts a captured value according to `type_tag`.
#[must_use]
pub fn coerce(type_tag: &TypeTag, raw: &str, resolver: &dyn NameResolver) -> String {
    match type_tag {
        TypeTag::Plain => raw.to_string(),
        TypeTag::FixedPoint100 => parse_fixed_point_100(raw).map_or_else(String::new, |n| n.to_string()),
        TypeTag::Enum(alternatives) => {
            let raw = raw.trim();
            alternatives
                .iter()
                .position(|alt| alt.eq_ignore_ascii_case(raw))
                .map_or_else(String::new, |i| i.to_string())
        }
        TypeTag::RaceLong => lookup(resolver, NameKind::LongRaceName, raw),
        TypeTag::RaceShort => lookup(resolver, NameKind::ShortRaceName, raw),
        TypeTag::RaceAdjective => lookup(resolver, NameKind::AdjectiveRaceName, raw),
        TypeTag::RaceAdjectivePlusAlliance => lookup(
            resolver,
            NameKind::AdjectiveRaceName,
            strip_alliance_markers(raw),
        ),
        TypeTag::HullName => lookup(resolver, NameKind::HullName, raw),
    }
}

/// Removes trailing `+`/`!` alliance markers (and whitespace) from a race name.
#[must_use]
pub fn strip_alliance_markers(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '+' || c == '!' || c.is_whitespace())
}

fn lookup(resolver: &dyn NameResolver, kind: NameKind, text: &str) -> String {
    match resolver.parse_name(kind, text.trim()) {
        0 => String::new(),
        id => id.to_string(),
    }
}

struct ScannedNumber {
    sign: i64,
    whole: i64,
    hundredths: i64,
}

fn scan_number(text: &str) -> Option<ScannedNumber> {
    let mut bytes = text.trim_start().bytes().peekable();
    let sign = if bytes.peek() == Some(&b'-') {
        bytes.next();
        -1
    } else {
        1
    };

    let mut seen_digit = false;
    let mut whole: i64 = 0;
    while let Some(&b) = bytes.peek() {
        if !b.is_ascii_digit() {
            break;
        }
        whole = (whole * 10 + i64::from(b - b'0')).min(i64::from(u32::MAX));
        seen_digit = true;
        bytes.next();
    }

    let mut hundredths: i64 = 0;
    if bytes.peek() == Some(&b'.') {
        bytes.next();
        let mut scale = 10;
        while let Some(&b) = bytes.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            hundredths += scale * i64::from(b - b'0');
            scale /= 10;
            seen_digit = true;
            bytes.next();
        }
    }

    seen_digit.then_some(ScannedNumber {
        sign,
        whole,
        hundredths,
    })
}

fn clamp(n: i64) -> i32 {
    i32::try_from(n.clamp(i64::from(i32::MIN), i64::from(i32::MAX))).unwrap_or_default()
}
