//! Crafting module — collision-triggered composition
//!
//! ECS ответственность:
//! - CombinationAgent на rice: guard (Armed → Consumed), recipe
//! - TypeResolver: ingredient → IngredientType (layered fallback)
//! - Spawn output, despawn inputs, hand-to-hand transfer
//!
//! Physics ответственность:
//! - Contact detection → `ContactBegan` events

use bevy::prelude::*;

use crate::CraftingSet;

pub mod agent;
pub mod events;
pub mod resolver;
pub mod systems;


// Re-export основных типов
pub use agent::{CombinationAgent, CombinationState};
pub use events::{CombinationCompleted, ContactBegan};
pub use resolver::{Fallback, IngredientProbe, Resolution, ResolutionPath, TypeResolver};
pub use systems::combine_on_contact;

/// Crafting Plugin
pub struct CraftingPlugin;

impl Plugin for CraftingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ContactBegan>()
            .add_event::<CombinationCompleted>()
            .add_systems(Update, combine_on_contact.in_set(CraftingSet::Combine));
    }
}
