//! SUSHICRAFT Simulation Core
//!
//! ECS-логика hand-tracked крафта на Bevy 0.16:
//! - Source spawners выдают held items по grab (с cooldown)
//! - Rice + ingredient в контакте → nigiri (one-shot guard)
//! - Готовый nigiri автоматически уходит во вторую руку
//!
//! HYBRID ARCHITECTURE:
//! - ECS = crafting state (grip bookkeeping, cooldowns, guard, recipes)
//! - XR runtime / physics / renderer = внешние слои, общаются через events

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

// Публичные модули
pub mod blueprint;
pub mod components;
pub mod config;
pub mod crafting;
pub mod error;
pub mod hand;
pub mod logger;
pub mod physics;
pub mod presentation;
pub mod scene;
pub mod spawner;

// Re-export базовых типов для удобства
pub use blueprint::{spawn_blueprint, Blueprint, BlueprintId, BlueprintKind, Blueprints, SpawnedFrom};
pub use components::*;
pub use config::{CombinationConfig, CraftingConfig, SpawnerConfig};
pub use crafting::{
    CombinationAgent, CombinationCompleted, CombinationState, ContactBegan, CraftingPlugin,
    TypeResolver,
};
pub use error::CraftError;
pub use hand::{GrabNotification, GripRequest, HandPlugin};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use physics::ContactBridgePlugin;
pub use presentation::{AudioCueRequested, PresentationPlugin, VisualEffect};
pub use scene::{spawn_player_rig, spawn_source_spawner, RigEntities};
pub use spawner::{ItemSpawned, SourceSpawner, SpawnerPlugin};

/// Порядок crafting pipeline внутри Update
///
/// Grip → HeldState → Contacts → Spawn → Combine → Cleanup
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CraftingSet {
    /// Grip requests → Grip компоненты + notifications
    Grip,
    /// Notifications → HeldObjectState
    HeldState,
    /// Physics collisions → ContactBegan
    Contacts,
    /// Grab на spawner → новый item
    Spawn,
    /// ContactBegan → crafting
    Combine,
    /// Timed despawn (VFX)
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CraftingConfig>()
            .init_resource::<Blueprints>()
            .configure_sets(
                Update,
                (
                    CraftingSet::Grip,
                    CraftingSet::HeldState,
                    CraftingSet::Contacts,
                    CraftingSet::Spawn,
                    CraftingSet::Combine,
                    CraftingSet::Cleanup,
                )
                    .chain(),
            )
            .add_plugins((
                HandPlugin,
                SpawnerPlugin,
                CraftingPlugin,
                PresentationPlugin,
                ContactBridgePlugin,
            ));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается ровно на `frame_time` за `app.update()` (детерминизм для тестов).
/// Первый update — нулевой delta.
pub fn create_headless_app(frame_time: Duration) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame_time));

    app
}
