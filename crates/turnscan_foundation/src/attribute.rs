//! Attribute vocabularies for string and integer values.
//!
//! A variable declared in a pattern rule is turned into a value by looking its
//! name up in these tables. Keywords are uppercase; lookups are exact.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// All attributes in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// Returns the rule-file keyword for this attribute.
            #[must_use]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword, )*
                }
            }

            /// Looks up an attribute by its (uppercase) keyword.
            #[must_use]
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $( $keyword => Some($name::$variant), )*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

attribute_enum! {
    /// Attributes carried as text.
    StringAttribute {
        /// Object name.
        Name => "NAME",
        /// Friendly code.
        FriendlyCode => "FCODE",
        /// Free-form comment (markers).
        Comment => "COMMENT",
    }
}

attribute_enum! {
    /// Attributes carried as 32-bit integers.
    IntegerAttribute {
        /// X coordinate.
        X => "X",
        /// Y coordinate.
        Y => "Y",
        /// Radius.
        Radius => "RADIUS",
        /// Owning player.
        Owner => "OWNER",
        /// Drawing colour.
        Color => "COLOR",
        /// X coordinate of a line or rectangle end point.
        EndX => "ENDX",
        /// Y coordinate of a line or rectangle end point.
        EndY => "ENDY",
        /// Marker shape.
        Shape => "SHAPE",
        /// Turn at which a drawing expires.
        Expire => "EXPIRE",
        /// Speed (warp factor).
        Speed => "SPEED",
        /// Heading in degrees.
        Heading => "HEADING",
        /// Mass in kt.
        Mass => "MASS",
        /// Damage percentage.
        Damage => "DAMAGE",
        /// Generic type code (minefield type, UFO type).
        Type => "TYPE",
        /// Hull number.
        Hull => "HULL",
        /// Engine type.
        Engine => "ENGINE",
        /// Beam type.
        BeamType => "BEAM",
        /// Number of beams.
        BeamCount => "BEAMS",
        /// Torpedo type.
        TorpedoType => "TORP",
        /// Number of torpedo launchers.
        TorpedoCount => "TORPS",
        /// Number of fighter bays.
        BayCount => "BAYS",
        /// Torpedoes or fighters on board.
        Ammo => "AMMO",
        /// Crew.
        Crew => "CREW",
        /// Fuel (Neutronium on a ship).
        Fuel => "FUEL",
        /// Mission.
        Mission => "MISSION",
        /// Primary enemy.
        Enemy => "ENEMY",
        /// Remote control state.
        Remote => "REMOTE",
        /// Waypoint X distance.
        WaypointDx => "WAYPOINTDX",
        /// Waypoint Y distance.
        WaypointDy => "WAYPOINTDY",
        /// Tritanium.
        Tritanium => "T",
        /// Duranium.
        Duranium => "D",
        /// Molybdenum.
        Molybdenum => "M",
        /// Neutronium.
        Neutronium => "N",
        /// Megacredits.
        Money => "MONEY",
        /// Supplies.
        Supplies => "SUPPLIES",
        /// Colonist clans.
        Colonists => "COLONISTS",
        /// Mined Tritanium on a planet.
        MinedTritanium => "MINED.T",
        /// Mined Duranium on a planet.
        MinedDuranium => "MINED.D",
        /// Mined Molybdenum on a planet.
        MinedMolybdenum => "MINED.M",
        /// Mined Neutronium on a planet.
        MinedNeutronium => "MINED.N",
        /// Number of mines on a planet.
        Mines => "MINES",
        /// Number of factories.
        Factories => "FACTORIES",
        /// Planetary defense posts.
        Defense => "DEFENSE",
        /// Planet temperature.
        Temperature => "TEMP",
        /// Native race.
        NativeRace => "NATIVES.RACE",
        /// Native government.
        NativeGovernment => "NATIVES.GOV",
        /// Native clans.
        NativeClans => "NATIVES",
        /// Colonist happiness.
        ColonistHappiness => "COLONISTS.HAPPY",
        /// Colonist tax rate.
        ColonistTax => "COLONISTS.TAX",
        /// Industry level.
        Industry => "INDUSTRY",
        /// Whether the planet has a starbase.
        HasBase => "BASE",
        /// Starbase defense posts.
        BaseDefense => "BASE.DEFENSE",
        /// Starbase damage.
        BaseDamage => "BASE.DAMAGE",
        /// Starbase fighters.
        BaseFighters => "BASE.FIGHTERS",
        /// Minefield units.
        Units => "UNITS",
        /// Whether a minefield is a web minefield.
        Web => "WEB",
        /// Ion storm voltage.
        Voltage => "VOLTAGE",
        /// Ion storm growth status.
        Growing => "GROWING",
        /// Range at which a UFO is visible from planets.
        PlanetRange => "PLANETRANGE",
        /// Range at which a UFO is visible from ships.
        ShipRange => "SHIPRANGE",
        /// Real Id of a UFO or wormhole object.
        RealId => "REALID",
        /// Wormhole stability code.
        Stability => "STABILITY",
        /// Wormhole bidirectional flag.
        Bidirectional => "BIDIR",
        /// Score value (team/total scores in score tables).
        Score => "POINTS",
    }
}
