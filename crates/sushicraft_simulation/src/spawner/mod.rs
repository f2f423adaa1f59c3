//! Spawner module — grab-triggered instancing
//!
//! # Architecture
//!
//! Spawner — статичный dispenser в сцене (rice source, fish source):
//! - Игрок хватает spawner → `GrabNotification::Attached`
//! - `spawn_on_grab` создаёт item из blueprint и кладёт его в ту же руку
//! - Spawner сразу отпускается (dispenser никогда не держится)
//! - Per-spawner cooldown между спавнами

use bevy::prelude::*;

use crate::CraftingSet;

pub mod components;
pub mod events;
pub mod systems;


// Re-exports
pub use components::*;
pub use events::*;
pub use systems::*;

/// Spawner plugin
pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ItemSpawned>()
            .add_systems(Update, spawn_on_grab.in_set(CraftingSet::Spawn));
    }
}
