//! Handlers for host events.
//!
//! Each handler forwards one host callback to the engine, logs the outcome
//! and publishes it on the event bus. Gameplay edge cases end here: they are
//! logged and absorbed, never returned to the host.

mod caster;
mod effect;

use chorus_core::{CycleOutcome, EffectId, EntityId};

use crate::events::DispatchEvent;
use crate::runtime::Runtime;

impl Runtime {
    /// Logs and publishes the outcome of one resolve-and-trigger cycle.
    pub(crate) fn report_cycle(&self, caster: EntityId, effect: EffectId, outcome: CycleOutcome) {
        match outcome {
            CycleOutcome::Triggered {
                targets,
                boost_percent,
            } => {
                tracing::debug!(
                    caster = %caster,
                    effect = %effect,
                    targets = targets.len(),
                    boost_percent,
                    "Trigger cycle applied"
                );
                self.events.publish(DispatchEvent::Triggered {
                    caster,
                    effect,
                    targets,
                    boost_percent,
                });
            }
            CycleOutcome::MissingDefinition => {
                tracing::warn!(
                    caster = %caster,
                    effect = %effect,
                    "No definition for effect, skipping cycle"
                );
            }
            CycleOutcome::CasterLost => {
                tracing::debug!(
                    caster = %caster,
                    effect = %effect,
                    "Caster no longer resolvable, instance ended"
                );
                self.events
                    .publish(DispatchEvent::CasterLost { caster, effect });
            }
            CycleOutcome::Inactive => {
                tracing::debug!(caster = %caster, effect = %effect, "Tick for inactive instance ignored");
            }
        }
    }
}
