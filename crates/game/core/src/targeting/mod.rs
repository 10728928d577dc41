//! Target selection for channeled effects.
//!
//! A [`TargetMode`] names how an effect picks its targets; the
//! [`TargetResolver`] turns a caster and a mode into the current target set
//! using the host oracles. Resolution is stateless and produces a fresh set on
//! every call.
mod resolver;

pub use resolver::TargetResolver;

/// How a channeled effect selects targets.
///
/// Only the area and party modes carry a radius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetMode {
    /// The caster only. Ignores liveness and surroundings.
    #[strum(serialize = "SELF")]
    SelfOnly,

    /// The caster's selected target, if it is a live visible enemy.
    EnemySingle,

    /// The caster's selected target, if it is a live visible friend.
    FriendlySingle,

    /// The caster's selected target, whatever side it is on.
    ///
    /// The caster itself, an enemy, or a friend are all accepted; anything
    /// failing both classifications yields nothing.
    Any,

    /// Every live visible enemy around the caster.
    EnemyArea { radius: f32 },

    /// The caster plus live visible party members around it.
    FriendlyParty { radius: f32 },
}

impl TargetMode {
    /// Search radius, present only for area and party modes.
    pub fn radius(&self) -> Option<f32> {
        match *self {
            TargetMode::EnemyArea { radius } | TargetMode::FriendlyParty { radius } => {
                Some(radius)
            }
            _ => None,
        }
    }

    /// Returns true if this mode reads the caster's selected target.
    pub fn uses_selection(&self) -> bool {
        matches!(
            self,
            TargetMode::EnemySingle | TargetMode::FriendlySingle | TargetMode::Any
        )
    }

    /// Returns true if this mode needs a player-controlled caster.
    ///
    /// Selection and party membership only exist for players. Self and area
    /// modes work for any caster.
    pub fn requires_player_caster(&self) -> bool {
        self.uses_selection() || matches!(self, TargetMode::FriendlyParty { .. })
    }

    /// Returns true if this mode enumerates the caster's surroundings.
    pub fn is_area(&self) -> bool {
        self.radius().is_some()
    }
}
