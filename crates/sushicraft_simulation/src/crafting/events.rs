//! Crafting events
//!
//! **Input:**
//! - `ContactBegan` — physics слой: два объекта начали контакт
//!
//! **Output:**
//! - `CombinationCompleted` — rice + ingredient превратились в output

use bevy::prelude::*;

use crate::components::IngredientType;
use crate::crafting::resolver::ResolutionPath;

/// Событие: начало физического контакта
///
/// Порядок `a`/`b` не важен — crafting проверяет агента с обеих сторон.
/// `points` — world-space точки контакта (physics обещает хотя бы одну).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ContactBegan {
    pub a: Entity,
    pub b: Entity,
    pub points: Vec<Vec3>,
}

impl ContactBegan {
    pub fn new(a: Entity, b: Entity, point: Vec3) -> Self {
        Self {
            a,
            b,
            points: vec![point],
        }
    }
}

/// Событие: крафт завершён (оба input'а уже в очереди на despawn)
#[derive(Event, Debug, Clone)]
pub struct CombinationCompleted {
    pub base: Entity,
    pub ingredient: Entity,
    pub output: Entity,
    pub ingredient_type: IngredientType,
    pub resolved_by: ResolutionPath,
    /// Рука, в которую отправлен output (`None` = остался лежать)
    pub transferred_to: Option<Entity>,
}
