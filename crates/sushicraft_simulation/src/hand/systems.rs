//! Hand grip system implementations
//!
//! # Systems
//!
//! - `apply_grip_requests` — применяет attach/detach запросы, генерирует notifications
//! - `release_despawned_objects` — освобождает руки от despawned объектов
//! - `track_held_state` — notifications → `HeldObjectState`
//!
//! # Helpers
//!
//! - `opposite_hand` — вторая рука rig'а (для hand-to-hand transfer)

use bevy::ecs::entity::Entities;
use bevy::prelude::*;

use crate::components::{Grip, Hand, HeldObjectState, PlayerRig};
use crate::hand::events::{GrabNotification, GripRequest};
use crate::{log, log_warning};

// ============================================================================
// Grip requests
// ============================================================================

/// Process grip requests
///
/// # Инварианты
/// - Рука держит максимум один объект: attach к занятой руке отпускает старый объект
/// - Объект держит максимум одна рука: attach к другой руке = transfer
/// - Detach объекта, который рука не держит — no-op
pub fn apply_grip_requests(
    mut requests: EventReader<GripRequest>,
    mut hands: Query<(Entity, &mut Grip), With<Hand>>,
    entities: &Entities,
    mut notifications: EventWriter<GrabNotification>,
) {
    for request in requests.read() {
        match *request {
            GripRequest::Attach { hand, object, grip } => {
                if !entities.contains(object) {
                    log_warning(&format!("Attach {:?} → {:?}: object no longer exists", object, hand));
                    continue;
                }

                if !hands.contains(hand) {
                    log_warning(&format!("Attach {:?}: {:?} is not a hand", object, hand));
                    continue;
                }

                // 1. Transfer: отпускаем объект в другой руке
                for (other_hand, mut other_grip) in hands.iter_mut() {
                    if other_hand != hand && other_grip.is_holding(object) {
                        other_grip.held = None;
                        notifications.write(GrabNotification::Detached {
                            hand: other_hand,
                            object,
                        });
                    }
                }

                let Ok((_, mut hand_grip)) = hands.get_mut(hand) else {
                    continue;
                };

                if hand_grip.is_holding(object) {
                    continue;
                }

                // 2. Старый объект этой руки отпускается
                if let Some(previous) = hand_grip.held.replace(object) {
                    notifications.write(GrabNotification::Detached {
                        hand,
                        object: previous,
                    });
                }
                hand_grip.kind = grip;

                // 3. Attach notification
                notifications.write(GrabNotification::Attached { hand, object, grip });
                log(&format!("✋ {:?} grabbed {:?} ({:?})", hand, object, grip));
            }
            GripRequest::Detach { hand, object } => {
                let Ok((_, mut hand_grip)) = hands.get_mut(hand) else {
                    continue;
                };

                if !hand_grip.is_holding(object) {
                    continue;
                }

                hand_grip.held = None;
                notifications.write(GrabNotification::Detached { hand, object });
                log(&format!("🖐️ {:?} released {:?}", hand, object));
            }
        }
    }
}

/// Руки, которые держат despawned объект, становятся пустыми
///
/// Crafting despawn'ит consumed items без detach запросов — здесь подчищаем.
pub fn release_despawned_objects(
    mut hands: Query<(Entity, &mut Grip), With<Hand>>,
    entities: &Entities,
    mut notifications: EventWriter<GrabNotification>,
) {
    for (hand, mut grip) in hands.iter_mut() {
        let Some(object) = grip.held else {
            continue;
        };

        if entities.contains(object) {
            continue;
        }

        grip.held = None;
        notifications.write(GrabNotification::Detached { hand, object });
    }
}

// ============================================================================
// Held state
// ============================================================================

/// Notifications → `HeldObjectState` (в порядке генерации)
pub fn track_held_state(
    mut notifications: EventReader<GrabNotification>,
    mut objects: Query<&mut HeldObjectState>,
) {
    for notification in notifications.read() {
        let Ok(mut state) = objects.get_mut(notification.object()) else {
            continue;
        };

        match *notification {
            GrabNotification::Attached { hand, .. } => state.attach(hand),
            GrabNotification::Detached { hand, .. } => {
                state.detach(hand);
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Вторая рука того же rig'а
///
/// `None` если рука вне rig'а или rig entity без `PlayerRig` —
/// caller просто пропускает transfer.
pub fn opposite_hand(
    hand: Entity,
    hands: &Query<&Hand>,
    rigs: &Query<&PlayerRig>,
) -> Option<Entity> {
    let rig = hands.get(hand).ok()?.rig?;
    rigs.get(rig).ok()?.opposite(hand)
}
