//! Caster lifecycle handlers.

use chorus_core::{EffectId, EffectSink, EndReason, EntityId};

use crate::events::{DispatchEvent, SlotEvent};
use crate::runtime::Runtime;

impl Runtime {
    pub(crate) fn on_caster_connected(
        &mut self,
        caster: EntityId,
        active_effects: &[EffectId],
        sink: &mut dyn EffectSink,
    ) {
        let evicted = self.engine.rehydrate(caster, active_effects, sink);
        let active = self.engine.active_effects(caster);

        tracing::info!(
            caster = %caster,
            active = active.len(),
            evicted = evicted.len(),
            "Caster rehydrated"
        );

        for &effect in &evicted {
            self.events.publish(DispatchEvent::Ended {
                caster,
                effect,
                reason: EndReason::Evicted,
            });
        }
        self.events.publish(SlotEvent::Rehydrated {
            caster,
            active,
            evicted,
        });
    }

    pub(crate) fn on_caster_departed(&mut self, caster: EntityId) {
        let dropped = self.engine.caster_departed(caster);
        tracing::info!(caster = %caster, dropped, "Caster departed, slots cleared");
        self.events.publish(SlotEvent::Cleared { caster, dropped });
    }
}
