//! Hand компоненты: tracked руки игрока + grip state

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Какая из двух рук rig'а
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum HandSide {
    Primary,
    Secondary,
}

impl HandSide {
    pub fn opposite(self) -> Self {
        match self {
            HandSide::Primary => HandSide::Secondary,
            HandSide::Secondary => HandSide::Primary,
        }
    }
}

/// Tracked рука
///
/// Pose руки — её `Transform` (world space, руки не вложены в иерархию).
/// `rig` — aggregate которому принадлежит рука (для поиска второй руки).
/// `None` = рука вне rig'а (тестовые/debug руки), opposite-hand lookup пропускается.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Hand {
    pub side: HandSide,
    pub rig: Option<Entity>,
}

/// Тип хвата (как рука держит объект)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum GripKind {
    /// Полный хват кулаком (основной для held items)
    #[default]
    Grip,
    /// Щипок двумя пальцами
    Pinch,
}

/// Что рука сейчас держит
///
/// Инвариант: максимум один grip-held объект на руку.
/// Меняется только через `GripRequest` (см. `hand::apply_grip_requests`).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Grip {
    pub held: Option<Entity>,
    pub kind: GripKind,
}

impl Grip {
    pub fn is_holding(&self, object: Entity) -> bool {
        self.held == Some(object)
    }
}

/// Player aggregate: ровно две руки
///
/// Read-only для crafting систем (query only).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PlayerRig {
    pub primary: Entity,
    pub secondary: Entity,
}

impl PlayerRig {
    /// Вторая рука rig'а; `None` если `hand` не из этого rig'а
    pub fn opposite(&self, hand: Entity) -> Option<Entity> {
        if hand == self.primary {
            Some(self.secondary)
        } else if hand == self.secondary {
            Some(self.primary)
        } else {
            None
        }
    }

    pub fn hand(&self, side: HandSide) -> Entity {
        match side {
            HandSide::Primary => self.primary,
            HandSide::Secondary => self.secondary,
        }
    }
}
