//! Spawner events

use bevy::prelude::*;

use crate::blueprint::BlueprintId;

/// Событие: spawner выдал новый item в руку
#[derive(Event, Clone, Debug)]
pub struct ItemSpawned {
    pub source: Entity,
    pub item: Entity,
    pub hand: Entity,
    pub blueprint: BlueprintId,
}
