//! HeldObjectState: кто держит spawned item

use bevy::prelude::*;

/// Held state для grabbable item
///
/// `holder` — weak back-reference (просто id руки, не ownership).
/// Despawn item не трогает руку, detach не despawn'ит item.
/// Обновляется из `GrabNotification` (см. `hand::track_held_state`).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct HeldObjectState {
    pub holder: Option<Entity>,
}

impl HeldObjectState {
    pub fn is_held(&self) -> bool {
        self.holder.is_some()
    }

    pub fn attach(&mut self, hand: Entity) {
        self.holder = Some(hand);
    }

    /// Detach только от той руки, которая держит (stale notification игнорируем)
    pub fn detach(&mut self, hand: Entity) -> bool {
        if self.holder == Some(hand) {
            self.holder = None;
            true
        } else {
            false
        }
    }
}
