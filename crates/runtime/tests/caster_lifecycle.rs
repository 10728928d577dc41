mod common;

use chorus_core::{ChorusConfig, EndReason, RecordingSink, WorldEnv};
use chorus_runtime::{DispatchEvent, Event, HostEvent, SlotEvent, Topic};
use common::*;

#[test]
fn reconnect_rehydrates_governed_effects_in_order() {
    init_tracing();
    let world = battlefield();
    let env = WorldEnv::from_world(&world);
    let mut runtime = runtime_with(ChorusConfig::default(), battlefield());
    let mut slots = runtime.subscribe(Topic::Slots);
    let mut dispatch = runtime.subscribe(Topic::Dispatch);
    let mut sink = RecordingSink::new();

    runtime
        .handle_in(
            env,
            HostEvent::CasterConnected {
                caster: BARD,
                active_effects: vec![BALLAD, WAR_DRUMS, UNRELATED, DIRGE, ARIA, FANFARE],
            },
            &mut sink,
        )
        .unwrap();

    assert_eq!(
        runtime.active_effects(BARD),
        vec![WAR_DRUMS, DIRGE, ARIA, FANFARE]
    );
    assert!(sink.applied.is_empty());
    assert_eq!(sink.ended.len(), 1);
    assert_eq!(sink.ended[0].0.effect, BALLAD);
    assert_eq!(sink.ended[0].1, EndReason::Evicted);

    assert_eq!(
        drain(&mut slots),
        vec![Event::Slot(SlotEvent::Rehydrated {
            caster: BARD,
            active: vec![WAR_DRUMS, DIRGE, ARIA, FANFARE],
            evicted: vec![BALLAD],
        })]
    );
    assert_eq!(
        drain(&mut dispatch),
        vec![Event::Dispatch(DispatchEvent::Ended {
            caster: BARD,
            effect: BALLAD,
            reason: EndReason::Evicted,
        })]
    );

    // Restored songs keep ticking.
    runtime
        .handle_in(
            env,
            HostEvent::PeriodicTick {
                caster: BARD,
                effect: WAR_DRUMS,
            },
            &mut sink,
        )
        .unwrap();
    assert_eq!(sink.applied_targets(), vec![ORC, WOLF]);
}

#[test]
fn departure_clears_slots_without_ending_effects() {
    let world = battlefield();
    let env = WorldEnv::from_world(&world);
    let mut runtime = runtime_with(ChorusConfig::default(), battlefield());
    let mut slots = runtime.subscribe(Topic::Slots);
    let mut sink = RecordingSink::new();

    for effect in [BALLAD, FANFARE, CHANT] {
        runtime
            .handle_in(
                env,
                HostEvent::EffectApplied {
                    caster: BARD,
                    effect,
                },
                &mut sink,
            )
            .unwrap();
    }
    drain(&mut slots);

    runtime
        .handle_in(env, HostEvent::CasterDeparted { caster: BARD }, &mut sink)
        .unwrap();

    assert!(sink.ended.is_empty());
    assert!(runtime.active_effects(BARD).is_empty());
    assert_eq!(
        drain(&mut slots),
        vec![Event::Slot(SlotEvent::Cleared {
            caster: BARD,
            dropped: 3
        })]
    );

    // The host's own cleanup reports the removals afterwards.
    runtime
        .handle_in(
            env,
            HostEvent::EffectRemoved {
                caster: BARD,
                effect: BALLAD,
                reason: EndReason::CasterDeparted,
            },
            &mut sink,
        )
        .unwrap();
    assert!(drain(&mut slots).is_empty());
}

#[test]
fn casters_do_not_share_slots() {
    let world = battlefield().with_caster(chorus_core::CasterView::player(
        ALLY,
        chorus_core::Position::new(4.0, 0.0, 0.0),
    ));
    let env = WorldEnv::from_world(&world);
    let mut runtime = runtime_with(
        ChorusConfig::default().with_max_concurrent_slots(1),
        battlefield(),
    );
    let mut sink = RecordingSink::new();

    for caster in [BARD, ALLY] {
        runtime
            .handle_in(
                env,
                HostEvent::EffectApplied {
                    caster,
                    effect: FANFARE,
                },
                &mut sink,
            )
            .unwrap();
    }

    assert!(sink.ended.is_empty());
    assert_eq!(runtime.active_effects(BARD), vec![FANFARE]);
    assert_eq!(runtime.active_effects(ALLY), vec![FANFARE]);
}
