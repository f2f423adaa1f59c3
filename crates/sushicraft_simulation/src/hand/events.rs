//! Hand grip events
//!
//! # Architecture
//!
//! **Requests (hand capability):**
//! - `GripRequest::Attach` → рука берёт объект (старый объект отпускается)
//! - `GripRequest::Detach` → рука отпускает объект (no-op если не держит)
//!
//! Пишут: внешний XR слой (игрок сжал grip), spawner, crafting.
//!
//! **Notifications:**
//! - `GrabNotification::Attached` / `Detached` — генерирует только
//!   `apply_grip_requests`, в порядке применения.

use bevy::prelude::*;

use crate::components::GripKind;

/// Запрос к руке (attach/detach capability)
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GripRequest {
    Attach {
        hand: Entity,
        object: Entity,
        grip: GripKind,
    },
    Detach {
        hand: Entity,
        object: Entity,
    },
}

/// Notification: grip state руки изменился
///
/// Один enum (а не два event типа) — чтобы подписчики видели
/// attach/detach в порядке применения (re-grab в одном кадре).
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabNotification {
    Attached {
        hand: Entity,
        object: Entity,
        grip: GripKind,
    },
    Detached {
        hand: Entity,
        object: Entity,
    },
}

impl GrabNotification {
    pub fn hand(&self) -> Entity {
        match *self {
            GrabNotification::Attached { hand, .. } | GrabNotification::Detached { hand, .. } => hand,
        }
    }

    pub fn object(&self) -> Entity {
        match *self {
            GrabNotification::Attached { object, .. }
            | GrabNotification::Detached { object, .. } => object,
        }
    }
}
