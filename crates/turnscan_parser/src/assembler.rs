//! Output assembly.
//!
//! Turns the captured values of one rule match into facts. A match about the
//! same object as the fact produced just before it (same kind, Id and turn)
//! is merged into that fact when the kind allows it; otherwise a new fact is
//! appended.

use turnscan_foundation::{
    AllianceOffer, DiagnosticsSink, IdPolicy, IntegerAttribute, MAX_PLAYERS, MessageInformation,
    MessageValue, NameKind, NameResolver, ObjectKind, Offer, OfferVector, StringAttribute,
};

use crate::coerce::{parse_integer_value, strip_alliance_markers};
use crate::rule::PatternRule;

/// Name of the variable holding the object Id.
pub const ID_VARIABLE: &str = "ID";

/// Name of the variable holding a score table.
pub const SCORE_VARIABLE: &str = "SCORE";

/// Adds the result of one rule match to `output`.
///
/// `values` holds one entry per declared variable of `rule`, as returned by
/// [`match_rule`](crate::matcher::match_rule). Problems are reported to `sink`
/// under the rule's name; a match that cannot be placed is dropped.
pub fn assemble(
    rule: &PatternRule,
    values: &[String],
    turn: i32,
    resolver: &dyn NameResolver,
    output: &mut Vec<MessageInformation>,
    sink: &mut dyn DiagnosticsSink,
) {
    let kind = rule.kind();
    match kind {
        ObjectKind::NoObject => {}
        ObjectKind::Alliance => assemble_alliance(rule, values, turn, resolver, output, sink),
        _ => assemble_object(rule, values, turn, output, sink),
    }
}

fn assemble_object(
    rule: &PatternRule,
    values: &[String],
    turn: i32,
    output: &mut Vec<MessageInformation>,
    sink: &mut dyn DiagnosticsSink,
) {
    let kind = rule.kind();
    let Some(id) = resolve_id(rule, values, sink) else {
        return;
    };

    let merge = kind.is_mergeable(id)
        && output
            .last()
            .is_some_and(|info| info.is_about(kind, id, turn));
    if !merge {
        output.push(MessageInformation::new(kind, id, turn));
    }
    let Some(info) = output.last_mut() else {
        return;
    };

    for (name, value) in produced_values(rule, values) {
        if kind == ObjectKind::Configuration {
            info.add_value(MessageValue::Config(name.to_string(), value.to_string()));
        } else if kind == ObjectKind::PlayerScore && name == SCORE_VARIABLE {
            add_scores(info, value);
        } else {
            add_attribute(info, name, value, rule.name(), sink);
        }
    }
}

/// Determines the object Id; `None` drops the match.
fn resolve_id(rule: &PatternRule, values: &[String], sink: &mut dyn DiagnosticsSink) -> Option<i32> {
    let text = rule
        .variable_index(ID_VARIABLE)
        .and_then(|i| values.get(i))
        .map_or("", |v| v.trim());
    let parsed = if text.is_empty() {
        0
    } else {
        parse_integer_value(text)
    };

    match rule.kind().id_policy() {
        IdPolicy::Unused => Some(0),
        IdPolicy::Optional => Some(parsed.max(0)),
        IdPolicy::Mandatory if parsed < 0 => {
            sink.error(
                rule.name(),
                &format!("{} Id {text:?} is out of range, ignoring", rule.kind()),
            );
            None
        }
        IdPolicy::Mandatory if parsed == 0 => {
            if produced_values(rule, values).next().is_some() {
                sink.error(
                    rule.name(),
                    &format!("{} data without object Id, ignoring", rule.kind()),
                );
            }
            None
        }
        IdPolicy::Mandatory => Some(parsed),
    }
}

/// Declared variables with a value worth storing: non-empty, named, not the Id.
fn produced_values<'r>(
    rule: &'r PatternRule,
    values: &'r [String],
) -> impl Iterator<Item = (&'r str, &'r str)> {
    rule.variables()
        .iter()
        .zip(values)
        .filter(|(var, value)| !value.is_empty() && !var.is_ignored() && var.name != ID_VARIABLE)
        .map(|(var, value)| (var.name.as_str(), value.as_str()))
}

fn add_scores(info: &mut MessageInformation, list: &str) {
    for (player, slot) in (1u8..).zip(list.split(',').take(MAX_PLAYERS)) {
        if !slot.trim().is_empty() {
            info.add_value(MessageValue::Score(player, parse_integer_value(slot)));
        }
    }
}

fn add_attribute(
    info: &mut MessageInformation,
    name: &str,
    value: &str,
    source: &str,
    sink: &mut dyn DiagnosticsSink,
) {
    if let Some(attr) = StringAttribute::from_keyword(name) {
        info.add_value(MessageValue::String(attr, value.to_string()));
        return;
    }
    if let Some(attr) = IntegerAttribute::from_keyword(name) {
        match integer_of(value) {
            Some(n) => info.add_value(MessageValue::Integer(attr, n)),
            None => sink.warn(source, &format!("value {value:?} for {name} is not a number")),
        }
        return;
    }

    let delta = name
        .strip_prefix('+')
        .map(|rest| (rest, false))
        .or_else(|| name.strip_prefix('-').map(|rest| (rest, true)));
    if let Some((base, negate)) = delta {
        if let Some(attr) = IntegerAttribute::from_keyword(base) {
            let Some(n) = integer_of(value) else {
                sink.warn(source, &format!("value {value:?} for {name} is not a number"));
                return;
            };
            let Some(n) = (if negate { n.checked_neg() } else { Some(n) }) else {
                sink.error(source, &format!("value {value:?} for {name} is out of range"));
                return;
            };
            if !info.add_delta(attr, n) {
                sink.error(
                    source,
                    &format!("cannot update {base}: no previous value in this message"),
                );
            }
            return;
        }
    }

    sink.error(source, &format!("unknown value {name}"));
}

fn integer_of(value: &str) -> Option<i32> {
    value
        .bytes()
        .any(|b| b.is_ascii_digit())
        .then(|| parse_integer_value(value))
}

// =============================================================================
// Alliances
// =============================================================================

fn assemble_alliance(
    rule: &PatternRule,
    values: &[String],
    turn: i32,
    resolver: &dyn NameResolver,
    output: &mut Vec<MessageInformation>,
    sink: &mut dyn DiagnosticsSink,
) {
    let mut offer: Option<AllianceOffer> = None;
    let mut from_us = OfferVector::new();
    let mut to_us = OfferVector::new();

    for (name, value) in produced_values(rule, values) {
        match name {
            "NAME" => offer = Some(AllianceOffer::new(value.trim())),
            "TO" => apply_list(&mut from_us, value, parse_simple_offer),
            "FROM" => apply_list(&mut to_us, value, parse_simple_offer),
            "TOFF" => apply_list(&mut from_us, value, parse_ff_offer),
            "FROMFF" => apply_list(&mut to_us, value, parse_ff_offer),
            "FLAGS" => apply_flags(&mut from_us, &mut to_us, value, resolver, rule.name(), sink),
            _ => sink.error(rule.name(), &format!("unknown value {name}")),
        }
    }

    let Some(mut offer) = offer else {
        sink.error(rule.name(), "alliance data without NAME, ignoring");
        return;
    };
    offer.from_us = from_us;
    offer.to_us = to_us;

    let merge = output
        .last()
        .is_some_and(|info| info.is_about(ObjectKind::Alliance, 0, turn));
    if !merge {
        output.push(MessageInformation::new(ObjectKind::Alliance, 0, turn));
    }
    if let Some(info) = output.last_mut() {
        info.add_value(MessageValue::Alliance(offer));
    }
}

fn apply_list(target: &mut OfferVector, list: &str, parse: fn(&str) -> Offer) {
    for (i, token) in list.split(',').take(MAX_PLAYERS).enumerate() {
        let offer = parse(token);
        if offer != Offer::Unknown {
            target.set(i + 1, offer);
        }
    }
}

/// `0`/`no`, `1`/`yes`, `2`/`conditional`.
fn parse_simple_offer(token: &str) -> Offer {
    match token.trim().to_ascii_lowercase().as_str() {
        "0" | "no" => Offer::No,
        "1" | "yes" => Offer::Yes,
        "2" | "conditional" => Offer::Conditional,
        _ => Offer::Unknown,
    }
}

/// `YES` (exactly) or anything else non-empty meaning no.
fn parse_ff_offer(token: &str) -> Offer {
    match token.trim() {
        "" => Offer::Unknown,
        "YES" => Offer::Yes,
        _ => Offer::No,
    }
}

/// Parses `Race+!` entries: `+` is our offer, `!` is theirs.
fn apply_flags(
    from_us: &mut OfferVector,
    to_us: &mut OfferVector,
    list: &str,
    resolver: &dyn NameResolver,
    source: &str,
    sink: &mut dyn DiagnosticsSink,
) {
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let name = strip_alliance_markers(entry);
        let markers = &entry[name.len()..];
        let player = [
            NameKind::ShortRaceName,
            NameKind::AdjectiveRaceName,
            NameKind::LongRaceName,
        ]
        .into_iter()
        .map(|kind| resolver.parse_name(kind, name))
        .find(|&n| n != 0);

        let Some(player) = player else {
            sink.warn(source, &format!("unknown race {name:?} in alliance flags"));
            continue;
        };
        if player == resolver.player_number() {
            continue;
        }
        let Ok(player) = usize::try_from(player) else {
            continue;
        };
        from_us.set(player, if markers.contains('+') { Offer::Yes } else { Offer::No });
        to_us.set(player, if markers.contains('!') { Offer::Yes } else { Offer::No });
    }
}
