//! Effect lifecycle handlers.

use chorus_core::{CycleOutcome, EffectId, EffectSink, EndReason, EntityId, WorldEnv};

use crate::api::Result;
use crate::events::{DispatchEvent, SlotEvent};
use crate::runtime::Runtime;

impl Runtime {
    pub(crate) fn on_effect_applied(
        &mut self,
        env: WorldEnv<'_>,
        caster: EntityId,
        effect: EffectId,
        sink: &mut dyn EffectSink,
    ) -> Result<()> {
        let Some(report) = self.engine.effect_started(env, caster, effect, sink)? else {
            tracing::debug!(caster = %caster, effect = %effect, "Effect not governed, ignoring");
            return Ok(());
        };

        for &evicted in &report.admission.evicted {
            tracing::debug!(
                caster = %caster,
                effect = %evicted,
                admitted = %effect,
                "Evicted oldest effect to respect capacity"
            );
            self.events.publish(SlotEvent::Evicted {
                caster,
                effect: evicted,
            });
            self.events.publish(DispatchEvent::Ended {
                caster,
                effect: evicted,
                reason: EndReason::Evicted,
            });
        }

        tracing::debug!(
            caster = %caster,
            effect = %effect,
            instance = %report.instance.id,
            refreshed = report.admission.refreshed,
            "Effect admitted"
        );
        self.events.publish(SlotEvent::Admitted {
            caster,
            effect,
            refreshed: report.admission.refreshed,
        });

        let lost = report.cycle == CycleOutcome::CasterLost;
        self.report_cycle(caster, effect, report.cycle);
        if lost {
            self.publish_released(caster, effect, EndReason::CasterLost);
        }
        Ok(())
    }

    pub(crate) fn on_periodic_tick(
        &mut self,
        env: WorldEnv<'_>,
        caster: EntityId,
        effect: EffectId,
        sink: &mut dyn EffectSink,
    ) -> Result<()> {
        let outcome = self.engine.tick(env, caster, effect, sink)?;
        let lost = outcome == CycleOutcome::CasterLost;
        self.report_cycle(caster, effect, outcome);
        if lost {
            self.publish_released(caster, effect, EndReason::CasterLost);
        }
        Ok(())
    }

    pub(crate) fn on_effect_removed(&mut self, caster: EntityId, effect: EffectId, reason: EndReason) {
        match self.engine.effect_ended(caster, effect) {
            Some(instance) => {
                tracing::debug!(
                    caster = %caster,
                    effect = %effect,
                    instance = %instance.id,
                    reason = %reason,
                    "Effect ended"
                );
                self.publish_released(caster, effect, reason);
            }
            None => {
                tracing::trace!(
                    caster = %caster,
                    effect = %effect,
                    reason = %reason,
                    "Removal for untracked effect absorbed"
                );
            }
        }
    }

    pub(crate) fn cancel_effect(
        &mut self,
        caster: EntityId,
        effect: EffectId,
        sink: &mut dyn EffectSink,
    ) -> bool {
        if !self.engine.cancel(caster, effect, sink) {
            return false;
        }
        tracing::debug!(caster = %caster, effect = %effect, "Effect cancelled");
        self.publish_released(caster, effect, EndReason::Cancelled);
        true
    }

    fn publish_released(&self, caster: EntityId, effect: EffectId, reason: EndReason) {
        self.events.publish(SlotEvent::Released {
            caster,
            effect,
            reason,
        });
        self.events.publish(DispatchEvent::Ended {
            caster,
            effect,
            reason,
        });
    }
}
