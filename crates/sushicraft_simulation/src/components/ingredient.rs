//! Ingredient capabilities + output markers
//!
//! Ingredient распознаётся по наличию компонентов (capability query):
//! - `IngredientTag` — явный type tag (строка)
//! - `Ingredient` — richer capability, сам сообщает имя своего типа
//! - `CategoryTag` — legacy marker без capability (старые prefabs)
//!
//! `Name` (display name) используется как последний heuristic fallback.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Логический тип ингредиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
pub enum IngredientType {
    Tuna,
    Salmon,
    Shrimp,
}

impl IngredientType {
    /// Порядок проверки в name heuristic (первый совпавший выигрывает)
    pub const ALL: [IngredientType; 3] = [
        IngredientType::Tuna,
        IngredientType::Salmon,
        IngredientType::Shrimp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientType::Tuna => "Tuna",
            IngredientType::Salmon => "Salmon",
            IngredientType::Shrimp => "Shrimp",
        }
    }

    /// Parse tag/type name (case-insensitive, без trim)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ingredient| ingredient.as_str().eq_ignore_ascii_case(name))
    }
}

/// Explicit type tag capability
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct IngredientTag(pub String);

/// Richer ingredient capability (type name + held state через `HeldObjectState`)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Ingredient {
    pub type_name: String,
}

impl Ingredient {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

/// Legacy category marker (например "Fish")
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CategoryTag(pub String);

/// Marker: output можно взять в руку / бросить
///
/// Только throwable outputs автоматически передаются во вторую руку.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Throwable;
