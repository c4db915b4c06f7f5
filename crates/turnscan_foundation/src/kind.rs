//! Entity kinds a pattern rule can target.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of game object a fact describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectKind {
    /// A ship.
    Ship,
    /// A planet.
    Planet,
    /// A starbase.
    Starbase,
    /// A minefield.
    Minefield,
    /// An ion storm.
    IonStorm,
    /// An unidentified flying object.
    Ufo,
    /// A wormhole.
    Wormhole,
    /// An explosion.
    Explosion,
    /// Host configuration settings.
    Configuration,
    /// A score table.
    PlayerScore,
    /// An alliance offer.
    Alliance,
    /// A marker drawing.
    Marker,
    /// A circle drawing.
    Circle,
    /// A line drawing.
    Line,
    /// A rectangle drawing.
    Rectangle,
    /// Add-on ship data.
    ExtraShip,
    /// Add-on planet data.
    ExtraPlanet,
    /// Add-on minefield data.
    ExtraMinefield,
    /// Matches a message without producing anything.
    NoObject,
}

/// How a kind obtains its object Id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdPolicy {
    /// An `ID` value is required; matches without one are dropped.
    Mandatory,
    /// An `ID` value is used if present, 0 otherwise.
    Optional,
    /// The Id is always 0.
    Unused,
}

impl ObjectKind {
    /// All kinds, in definition-file vocabulary order.
    pub const ALL: [ObjectKind; 19] = [
        Self::Ship,
        Self::Planet,
        Self::Starbase,
        Self::Minefield,
        Self::IonStorm,
        Self::Ufo,
        Self::Wormhole,
        Self::Explosion,
        Self::Configuration,
        Self::PlayerScore,
        Self::Alliance,
        Self::Marker,
        Self::Line,
        Self::Circle,
        Self::Rectangle,
        Self::ExtraShip,
        Self::ExtraPlanet,
        Self::ExtraMinefield,
        Self::NoObject,
    ];

    /// Returns the definition-file keyword for this kind.
    ///
    /// The uppercase prefix is the shortest accepted abbreviation.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Ship => "Ship",
            Self::Planet => "Planet",
            Self::Starbase => "Base",
            Self::Minefield => "Minefield",
            Self::IonStorm => "Ionstorm",
            Self::Ufo => "Ufo",
            Self::Wormhole => "Wormhole",
            Self::Explosion => "Explosion",
            Self::Configuration => "Configuration",
            Self::PlayerScore => "PLAYerscore",
            Self::Alliance => "Alliance",
            Self::Marker => "MArker",
            Self::Line => "Line",
            Self::Circle => "CIrcle",
            Self::Rectangle => "Rectangle",
            Self::ExtraShip => "EXTRAShip",
            Self::ExtraPlanet => "EXTRAPlanet",
            Self::ExtraMinefield => "EXTRAMinefield",
            Self::NoObject => "NOne",
        }
    }

    /// Returns how facts of this kind get their Id.
    #[must_use]
    pub const fn id_policy(self) -> IdPolicy {
        match self {
            Self::Ship
            | Self::Planet
            | Self::Starbase
            | Self::Minefield
            | Self::IonStorm
            | Self::Ufo
            | Self::Wormhole
            | Self::ExtraShip
            | Self::ExtraPlanet
            | Self::ExtraMinefield => IdPolicy::Mandatory,
            Self::PlayerScore | Self::Explosion => IdPolicy::Optional,
            Self::Configuration
            | Self::Alliance
            | Self::Marker
            | Self::Circle
            | Self::Line
            | Self::Rectangle
            | Self::NoObject => IdPolicy::Unused,
        }
    }

    /// Returns true if consecutive matches for the same object may be merged
    /// into one fact.
    #[must_use]
    pub const fn is_mergeable(self, id: i32) -> bool {
        match self {
            Self::PlayerScore | Self::Explosion => id != 0,
            Self::NoObject => false,
            _ => !self.is_drawing(),
        }
    }

    /// Returns true for the drawing kinds.
    #[must_use]
    pub const fn is_drawing(self) -> bool {
        matches!(
            self,
            Self::Marker | Self::Circle | Self::Line | Self::Rectangle
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ship => "ship",
            Self::Planet => "planet",
            Self::Starbase => "starbase",
            Self::Minefield => "minefield",
            Self::IonStorm => "ion storm",
            Self::Ufo => "ufo",
            Self::Wormhole => "wormhole",
            Self::Explosion => "explosion",
            Self::Configuration => "configuration",
            Self::PlayerScore => "player score",
            Self::Alliance => "alliance",
            Self::Marker => "marker",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::ExtraShip => "extra ship",
            Self::ExtraPlanet => "extra planet",
            Self::ExtraMinefield => "extra minefield",
            Self::NoObject => "no object",
        };
        f.write_str(name)
    }
}
