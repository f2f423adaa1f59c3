//! Configuration errors (recoverable: лог + abort операции, state не трогаем)

use std::fmt;

use crate::blueprint::BlueprintId;
use crate::components::IngredientType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CraftError {
    /// Spawner без blueprint (не настроен в сцене)
    MissingBlueprint,
    /// Blueprint id не найден в `Blueprints` registry
    UnknownBlueprint(BlueprintId),
    /// В recipe агента нет output для resolved типа
    NoRecipe(IngredientType),
}

impl fmt::Display for CraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CraftError::MissingBlueprint => write!(f, "blueprint is not configured"),
            CraftError::UnknownBlueprint(id) => write!(f, "blueprint '{}' is not registered", id.0),
            CraftError::NoRecipe(ingredient) => {
                write!(f, "no output blueprint configured for {:?}", ingredient)
            }
        }
    }
}

impl std::error::Error for CraftError {}
