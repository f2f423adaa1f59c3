//! Hand module — grip bookkeeping для tracked рук
//!
//! # Architecture
//!
//! **Requests → Systems → Notifications:**
//! - XR слой / spawner / crafting пишут `GripRequest`
//! - `apply_grip_requests` меняет `Grip` на руках
//! - `GrabNotification` → `track_held_state` и spawner'ы
//!
//! Pose руки (`Transform`) пишет XR слой, здесь только читается.

use bevy::prelude::*;

use crate::CraftingSet;

pub mod events;
pub mod systems;

#[cfg(test)]
mod systems_tests;

// Re-exports
pub use events::*;
pub use systems::*;

/// Hand plugin (grip lifecycle)
pub struct HandPlugin;

impl Plugin for HandPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GripRequest>()
            .add_event::<GrabNotification>()
            .add_systems(
                Update,
                (
                    (apply_grip_requests, release_despawned_objects)
                        .chain()
                        .in_set(CraftingSet::Grip),
                    track_held_state.in_set(CraftingSet::HeldState),
                ),
            );
    }
}
