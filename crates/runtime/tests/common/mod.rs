#![allow(dead_code)]

use chorus_content::ContentFactory;
use chorus_core::{
    Candidate, CasterView, ChorusConfig, DefinitionTable, EffectId, EntityId, EntityKind, GroupId,
    Position, WorldSnapshot,
};
use chorus_runtime::{Event, Runtime, ServiceManager};
use std::sync::Arc;
use tokio::sync::broadcast;

pub const BARD: EntityId = EntityId(1);
pub const ALLY: EntityId = EntityId(2);
pub const ORC: EntityId = EntityId(10);
pub const WOLF: EntityId = EntityId(11);

pub const BALLAD: EffectId = EffectId(1001);
pub const WAR_DRUMS: EffectId = EffectId(1002);
pub const DIRGE: EffectId = EffectId(1003);
pub const ARIA: EffectId = EffectId(1004);
pub const FANFARE: EffectId = EffectId(1005);
pub const CHANT: EffectId = EffectId(1006);
pub const UNRELATED: EffectId = EffectId(9999);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn song_book() -> (ChorusConfig, DefinitionTable) {
    ContentFactory::embedded().unwrap()
}

/// A bard in a party with one ally, facing an orc and a wolf.
pub fn battlefield() -> WorldSnapshot {
    let party = GroupId(1);
    WorldSnapshot::new()
        .with_caster(CasterView::player(BARD, Position::ORIGIN).with_level(20))
        .with_candidate(Candidate::new(
            ALLY,
            Position::new(4.0, 0.0, 0.0),
            EntityKind::Player,
        ))
        .with_candidate(Candidate::new(
            ORC,
            Position::new(8.0, 0.0, 0.0),
            EntityKind::Creature,
        ))
        .with_candidate(Candidate::new(
            WOLF,
            Position::new(0.0, 12.0, 0.0),
            EntityKind::Creature,
        ))
        .hostile_pair(BARD, ORC)
        .hostile_pair(BARD, WOLF)
        .join_group(BARD, party)
        .join_group(ALLY, party)
}

pub fn runtime_with(config: ChorusConfig, world: WorldSnapshot) -> Runtime {
    let (_, definitions) = song_book();
    Runtime::builder()
        .chorus_config(config)
        .definitions(definitions)
        .services(ServiceManager::from_world(Arc::new(world)))
        .build()
        .unwrap()
}

pub fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
