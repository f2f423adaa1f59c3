//! CombinationAgent — one-shot крафт на base item (rice)

use bevy::prelude::*;

use crate::blueprint::BlueprintId;
use crate::components::{HeldObjectState, IngredientType};
use crate::config::CombinationConfig;
use crate::error::CraftError;

/// Guard state: Armed → Consumed (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinationState {
    #[default]
    Armed,
    Consumed,
}

/// Агент крафта на base item
///
/// Recipe у каждого экземпляра свой (копия `CombinationConfig` на момент spawn).
/// Guard переключается в Consumed ровно один раз, после этого все
/// contact события игнорируются.
#[derive(Component, Debug, Clone)]
pub struct CombinationAgent {
    pub config: CombinationConfig,
    state: CombinationState,
}

impl CombinationAgent {
    pub fn new(config: CombinationConfig) -> Self {
        Self {
            config,
            state: CombinationState::Armed,
        }
    }

    pub fn state(&self) -> CombinationState {
        self.state
    }

    pub fn is_consumed(&self) -> bool {
        self.state == CombinationState::Consumed
    }

    /// Guard + held precondition (ingredient проверяется отдельно)
    pub fn can_combine(&self, held: Option<&HeldObjectState>) -> bool {
        if self.is_consumed() {
            return false;
        }
        self.config.allow_unheld || held.is_some_and(HeldObjectState::is_held)
    }

    pub fn output_for(&self, ingredient: IngredientType) -> Result<&BlueprintId, CraftError> {
        self.config
            .recipe
            .get(&ingredient)
            .ok_or(CraftError::NoRecipe(ingredient))
    }

    /// Поза output: точка контакта + world offset, поворот фиксированный
    pub fn output_transform(&self, contact_point: Vec3) -> Transform {
        Transform::from_translation(contact_point + self.config.spawn_offset)
            .with_rotation(self.config.spawn_rotation)
    }

    /// Armed → Consumed. `false` если уже Consumed
    pub fn consume(&mut self) -> bool {
        if self.is_consumed() {
            return false;
        }
        self.state = CombinationState::Consumed;
        true
    }
}
