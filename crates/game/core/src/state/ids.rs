use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty), $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $inner);

        impl $name {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

id_type!(
    /// Unique identifier of any host entity (casters and candidates alike).
    EntityId(u64),
    "#"
);

id_type!(
    /// Identifier of a channeled effect type; keys the definition table.
    EffectId(u32),
    "effect:"
);

id_type!(
    /// Identifier of the trigger action applied to each resolved target.
    ActionId(u32),
    "action:"
);

id_type!(
    /// Faction identifier, either an entity's faction template or a
    /// reputation-bearing faction.
    FactionId(u32),
    "faction:"
);

id_type!(
    /// Party identifier. Two players sharing a group id are in the same party.
    GroupId(u32),
    "group:"
);

id_type!(
    /// Identifier of one running channeled effect instance.
    ///
    /// Allocated by the engine, monotonically increasing, never reused.
    InstanceId(u64),
    "instance:"
);

/// Whether an entity is controlled by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Player,
    #[default]
    Creature,
}

/// Standing of a player with a reputation-bearing faction, worst first.
///
/// The ordering is meaningful: the hostile threshold comparison uses `<=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReputationRank {
    Hated,
    Hostile,
    Unfriendly,
    #[default]
    Neutral,
    Friendly,
    Honored,
    Revered,
    Exalted,
}

/// Continuous world position with a facing angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub orientation: f32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        orientation: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            orientation: 0.0,
        }
    }

    /// Straight-line distance, ignoring orientation.
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Returns true if `other` lies inside the closed sphere of `radius`.
    pub fn is_within(&self, other: &Position, radius: f32) -> bool {
        self.distance_to(other) <= radius
    }
}
