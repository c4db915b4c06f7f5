//! Facts extracted from a message.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::{IntegerAttribute, StringAttribute};
use crate::kind::ObjectKind;
use crate::value::MessageValue;

/// Everything one message says about one object.
///
/// Values keep their insertion order. Adding a value whose index is already
/// present replaces the earlier one in place, so an attribute appears at most
/// once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageInformation {
    kind: ObjectKind,
    id: i32,
    turn: i32,
    values: Vec<MessageValue>,
}

impl MessageInformation {
    /// Creates an empty fact.
    #[must_use]
    pub fn new(kind: ObjectKind, id: i32, turn: i32) -> Self {
        Self {
            kind,
            id,
            turn,
            values: Vec::new(),
        }
    }

    /// Returns the kind of object described.
    #[must_use]
    pub fn object_kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the object Id (0 if not applicable).
    #[must_use]
    pub fn object_id(&self) -> i32 {
        self.id
    }

    /// Returns the turn number the message belongs to.
    #[must_use]
    pub fn turn_number(&self) -> i32 {
        self.turn
    }

    /// Returns all values in order.
    #[must_use]
    pub fn values(&self) -> &[MessageValue] {
        &self.values
    }

    /// Returns true if this fact describes the given object.
    #[must_use]
    pub fn is_about(&self, kind: ObjectKind, id: i32, turn: i32) -> bool {
        self.kind == kind && self.id == id && self.turn == turn
    }

    /// Adds a value, replacing an existing value with the same index.
    pub fn add_value(&mut self, value: MessageValue) {
        match self.values.iter_mut().find(|v| same_index(v, &value)) {
            Some(slot) => *slot = value,
            None => self.values.push(value),
        }
    }

    /// Adds `delta` to an existing integer value.
    ///
    /// Returns false (and changes nothing) if the attribute is not present.
    pub fn add_delta(&mut self, attr: IntegerAttribute, delta: i32) -> bool {
        for v in &mut self.values {
            match v {
                MessageValue::Integer(a, n) if *a == attr => {
                    *n = n.saturating_add(delta);
                    return true;
                }
                _ => {}
            }
        }
        false
    }

    /// Returns the value of an integer attribute.
    #[must_use]
    pub fn integer(&self, attr: IntegerAttribute) -> Option<i32> {
        self.values.iter().find_map(|v| match v {
            MessageValue::Integer(a, n) if *a == attr => Some(*n),
            _ => None,
        })
    }

    /// Returns the value of a string attribute.
    #[must_use]
    pub fn string(&self, attr: StringAttribute) -> Option<&str> {
        self.values.iter().find_map(|v| match v {
            MessageValue::String(a, s) if *a == attr => Some(s.as_str()),
            _ => None,
        })
    }

    /// Returns the value of a configuration option (key compared case-insensitively).
    #[must_use]
    pub fn config(&self, key: &str) -> Option<&str> {
        self.values.iter().find_map(|v| match v {
            MessageValue::Config(k, s) if k.eq_ignore_ascii_case(key) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Returns the score of a player.
    #[must_use]
    pub fn score(&self, player: u8) -> Option<i32> {
        self.values.iter().find_map(|v| match v {
            MessageValue::Score(p, n) if *p == player => Some(*n),
            _ => None,
        })
    }
}

fn same_index(a: &MessageValue, b: &MessageValue) -> bool {
    match (a, b) {
        (MessageValue::String(x, _), MessageValue::String(y, _)) => x == y,
        (MessageValue::Integer(x, _), MessageValue::Integer(y, _)) => x == y,
        (MessageValue::Config(x, _), MessageValue::Config(y, _)) => x.eq_ignore_ascii_case(y),
        (MessageValue::Score(x, _), MessageValue::Score(y, _)) => x == y,
        (MessageValue::Alliance(x), MessageValue::Alliance(y)) => x.id == y.id,
        _ => false,
    }
}

impl fmt::Display for MessageInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} (turn {})", self.kind, self.id, self.turn)?;
        for v in &self.values {
            write!(f, "\n  {v}")?;
        }
        Ok(())
    }
}
