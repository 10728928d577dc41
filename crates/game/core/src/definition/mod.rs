//! Static effect definitions.
//!
//! Every channeled effect type is described by one [`EffectDefinition`],
//! loaded once at startup into a [`DefinitionTable`] and read-only afterwards.
//! An effect id without a definition is outside the governed category.
mod duration;
mod focus;

use std::collections::HashMap;

pub use duration::DurationScaling;
pub use focus::{FocusAura, FocusAuraKind, FocusFamily, apply_focus_boost, focus_boost_percent};

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActionId, EffectId};
use crate::targeting::TargetMode;

/// Whether a re-trigger clears the previous application on a target first.
///
/// Some effect families must not stack duplicate instances of their trigger
/// action on one target; others tolerate re-application on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReapplyPolicy {
    /// Remove the previous application, then apply again.
    #[default]
    ClearThenApply,
    /// Apply on top of whatever is already there.
    ApplyOnTop,
}

/// Static configuration of one channeled effect type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDefinition {
    pub effect: EffectId,
    pub mode: TargetMode,
    /// Action applied to each resolved target on apply and on every tick.
    pub trigger_action: ActionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reapply: ReapplyPolicy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<DurationScaling>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub focus: Option<FocusFamily>,
}

impl EffectDefinition {
    pub fn new(effect: EffectId, mode: TargetMode, trigger_action: ActionId) -> Self {
        Self {
            effect,
            mode,
            trigger_action,
            reapply: ReapplyPolicy::default(),
            duration: None,
            focus: None,
        }
    }

    pub fn with_reapply(mut self, reapply: ReapplyPolicy) -> Self {
        self.reapply = reapply;
        self
    }

    pub fn with_duration(mut self, duration: DurationScaling) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_focus(mut self, focus: FocusFamily) -> Self {
        self.focus = Some(focus);
        self
    }

    fn validate(&self) -> Result<(), DefinitionError> {
        if let Some(radius) = self.mode.radius()
            && !(radius.is_finite() && radius >= 0.0)
        {
            return Err(DefinitionError::InvalidRadius {
                effect: self.effect,
                radius,
            });
        }
        if let Some(duration) = &self.duration
            && duration.max_ms != 0
            && duration.base_ms > duration.max_ms
        {
            return Err(DefinitionError::InvalidDuration {
                effect: self.effect,
                base_ms: duration.base_ms,
                max_ms: duration.max_ms,
            });
        }
        Ok(())
    }
}

/// Read-only table of effect definitions keyed by effect id.
#[derive(Clone, Debug, Default)]
pub struct DefinitionTable {
    definitions: HashMap<EffectId, EffectDefinition>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a validated table.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate effect id, non-finite or negative radius,
    /// or duration whose base exceeds its maximum.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EffectDefinition>,
    ) -> Result<Self, DefinitionError> {
        let mut table = HashMap::new();
        for definition in definitions {
            definition.validate()?;
            let effect = definition.effect;
            if table.insert(effect, definition).is_some() {
                return Err(DefinitionError::Duplicate(effect));
            }
        }
        Ok(Self { definitions: table })
    }

    pub fn get(&self, effect: EffectId) -> Option<&EffectDefinition> {
        self.definitions.get(&effect)
    }

    /// Returns true if `effect` belongs to the governed category.
    pub fn contains(&self, effect: EffectId) -> bool {
        self.definitions.contains_key(&effect)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectDefinition> {
        self.definitions.values()
    }
}

/// Invariant violations in effect definitions, detected at load time.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("effect {0} is defined more than once")]
    Duplicate(EffectId),

    #[error("effect {effect} has invalid radius {radius}")]
    InvalidRadius { effect: EffectId, radius: f32 },

    #[error("effect {effect} has base duration {base_ms}ms above maximum {max_ms}ms")]
    InvalidDuration {
        effect: EffectId,
        base_ms: u32,
        max_ms: u32,
    },
}

impl GameError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Duplicate(_) => "DEFINITION_DUPLICATE",
            Self::InvalidRadius { .. } => "DEFINITION_INVALID_RADIUS",
            Self::InvalidDuration { .. } => "DEFINITION_INVALID_DURATION",
        }
    }
}
