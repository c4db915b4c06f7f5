//! Values carried by a fact.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MAX_PLAYERS;
use crate::attribute::{IntegerAttribute, StringAttribute};

/// One value of a [`MessageInformation`](crate::MessageInformation).
///
/// Every variant has the shape (index, value); the index type differs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MessageValue {
    /// A text attribute.
    String(StringAttribute, String),
    /// A numeric attribute.
    Integer(IntegerAttribute, i32),
    /// A configuration option, keyed by its name.
    Config(String, String),
    /// A score for one player.
    Score(u8, i32),
    /// An alliance offer.
    Alliance(AllianceOffer),
}

impl fmt::Display for MessageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(attr, text) => write!(f, "{attr}={text:?}"),
            Self::Integer(attr, n) => write!(f, "{attr}={n}"),
            Self::Config(key, text) => write!(f, "{key}={text:?}"),
            Self::Score(player, n) => write!(f, "score[{player}]={n}"),
            Self::Alliance(offer) => write!(f, "{offer}"),
        }
    }
}

// =============================================================================
// Alliance offers
// =============================================================================

/// One player's position on an alliance level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Offer {
    /// The message does not say.
    #[default]
    Unknown,
    /// No offer.
    No,
    /// Offer made.
    Yes,
    /// Offer made on the condition that it is returned.
    Conditional,
}

impl Offer {
    fn symbol(self) -> char {
        match self {
            Self::Unknown => '.',
            Self::No => '-',
            Self::Yes => '+',
            Self::Conditional => '~',
        }
    }
}

/// Offers indexed by player number (`1..=MAX_PLAYERS`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OfferVector {
    slots: [Offer; MAX_PLAYERS],
}

impl OfferVector {
    /// Creates a vector with every slot [`Offer::Unknown`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the offer for `player`, or `Unknown` if out of range.
    #[must_use]
    pub fn get(&self, player: usize) -> Offer {
        player
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .copied()
            .unwrap_or_default()
    }

    /// Sets the offer for `player`. Out-of-range players are ignored.
    pub fn set(&mut self, player: usize, offer: Offer) {
        if let Some(slot) = player.checked_sub(1).and_then(|i| self.slots.get_mut(i)) {
            *slot = offer;
        }
    }

    /// Returns true if no slot is known.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.slots.iter().all(|o| *o == Offer::Unknown)
    }
}

impl fmt::Display for OfferVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for offer in &self.slots {
            write!(f, "{}", offer.symbol())?;
        }
        Ok(())
    }
}

/// The state of one alliance level (e.g. "ships", "planets", "combat").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllianceOffer {
    /// Identifier of the alliance level.
    pub id: String,
    /// Our offers to each player.
    pub from_us: OfferVector,
    /// Each player's offer to us.
    pub to_us: OfferVector,
}

impl AllianceOffer {
    /// Creates an offer record with no known slots.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from_us: OfferVector::new(),
            to_us: OfferVector::new(),
        }
    }
}

impl fmt::Display for AllianceOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alliance {:?} from us [{}] to us [{}]",
            self.id, self.from_us, self.to_us
        )
    }
}
