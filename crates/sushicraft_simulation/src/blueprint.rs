//! Blueprint registry — шаблоны spawnable объектов
//!
//! # Архитектура
//!
//! **Blueprint** — статический шаблон (id + display name + kind):
//! - Хранится в `Blueprints` resource (HashMap lookup)
//! - Immutable данные, создаются hardcoded в `Blueprints::default()`
//!
//! **BlueprintKind** — что получает spawned entity:
//! - BaseItem → `HeldObjectState` + `CombinationAgent` (rice)
//! - Ingredient → `HeldObjectState` + одна из ingredient capabilities
//! - Output → результат крафта (опционально `Throwable`)
//!
//! Визуал (меши, материалы) — забота внешнего слоя: он матчит `SpawnedFrom` id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::components::{CategoryTag, HeldObjectState, Ingredient, IngredientTag, Throwable};
use crate::config::CraftingConfig;
use crate::crafting::CombinationAgent;
use crate::error::CraftError;
use crate::physics::held_item_collider;

// ============================================================================
// BlueprintId
// ============================================================================

/// Blueprint identifier (unique string ID)
///
/// # Examples
/// - "rice"
/// - "salmon"
/// - "salmon_nigiri"
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
pub struct BlueprintId(pub String);

impl From<&str> for BlueprintId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// BlueprintKind
// ============================================================================

/// Как ingredient сообщает свой тип (какую capability получает entity)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientIdentity {
    /// `IngredientTag` с явным tag
    TypeTag(String),
    /// `Ingredient` capability с type name
    TypeName(String),
    /// Legacy `CategoryTag` без capability
    Category(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlueprintKind {
    /// Base item (rice) — носитель `CombinationAgent`
    BaseItem,
    /// Ingredient для крафта
    Ingredient { identity: IngredientIdentity },
    /// Результат крафта
    Output { throwable: bool },
}

// ============================================================================
// Blueprint
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blueprint {
    pub id: BlueprintId,
    /// Display name (→ `Name` компонент, используется name heuristic)
    pub name: String,
    pub kind: BlueprintKind,
}

impl Blueprint {
    pub fn new(id: impl Into<BlueprintId>, name: impl Into<String>, kind: BlueprintKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn is_throwable(&self) -> bool {
        matches!(self.kind, BlueprintKind::Output { throwable: true })
    }

    /// Holdable blueprints получают `HeldObjectState` + collider
    pub fn is_holdable(&self) -> bool {
        match self.kind {
            BlueprintKind::BaseItem | BlueprintKind::Ingredient { .. } => true,
            BlueprintKind::Output { throwable } => throwable,
        }
    }
}

/// Marker: из какого blueprint создан entity
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SpawnedFrom(pub BlueprintId);

// ============================================================================
// Blueprints (Resource)
// ============================================================================

/// Blueprint lookup table (resource)
#[derive(Resource, Clone, Debug)]
pub struct Blueprints {
    blueprints: HashMap<BlueprintId, Blueprint>,
}

impl Blueprints {
    pub fn empty() -> Self {
        Self {
            blueprints: HashMap::new(),
        }
    }

    pub fn get(&self, id: &BlueprintId) -> Option<&Blueprint> {
        self.blueprints.get(id)
    }

    pub fn insert(&mut self, blueprint: Blueprint) {
        self.blueprints.insert(blueprint.id.clone(), blueprint);
    }

    pub fn remove(&mut self, id: &BlueprintId) -> Option<Blueprint> {
        self.blueprints.remove(id)
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    /// Lookup с configuration error вместо `None`
    pub fn resolve(&self, id: Option<&BlueprintId>) -> Result<&Blueprint, CraftError> {
        let id = id.ok_or(CraftError::MissingBlueprint)?;
        self.get(id)
            .ok_or_else(|| CraftError::UnknownBlueprint(id.clone()))
    }
}

impl Default for Blueprints {
    fn default() -> Self {
        let mut blueprints = Self::empty();

        blueprints.insert(Blueprint::new("rice", "Rice Ball", BlueprintKind::BaseItem));

        // Три ingredient'а — по одному на каждый путь распознавания
        blueprints.insert(Blueprint::new(
            "tuna",
            "Tuna Slice",
            BlueprintKind::Ingredient {
                identity: IngredientIdentity::TypeTag("Tuna".into()),
            },
        ));
        blueprints.insert(Blueprint::new(
            "salmon",
            "Salmon Slice",
            BlueprintKind::Ingredient {
                identity: IngredientIdentity::TypeName("Salmon".into()),
            },
        ));
        blueprints.insert(Blueprint::new(
            "shrimp",
            "Shrimp",
            BlueprintKind::Ingredient {
                identity: IngredientIdentity::Category("Fish".into()),
            },
        ));

        blueprints.insert(Blueprint::new(
            "tuna_nigiri",
            "Tuna Nigiri",
            BlueprintKind::Output { throwable: true },
        ));
        blueprints.insert(Blueprint::new(
            "salmon_nigiri",
            "Salmon Nigiri",
            BlueprintKind::Output { throwable: true },
        ));
        blueprints.insert(Blueprint::new(
            "shrimp_nigiri",
            "Shrimp Nigiri",
            BlueprintKind::Output { throwable: true },
        ));

        blueprints
    }
}

// ============================================================================
// Spawn
// ============================================================================

/// Spawn entity из blueprint в заданной позе
///
/// BaseItem получает `CombinationAgent` со свежим (Armed) guard'ом
/// и копией recipe из `CraftingConfig`.
pub fn spawn_blueprint(
    commands: &mut Commands,
    blueprint: &Blueprint,
    transform: Transform,
    config: &CraftingConfig,
) -> Entity {
    let mut entity = commands.spawn((
        Name::new(blueprint.name.clone()),
        SpawnedFrom(blueprint.id.clone()),
        transform,
    ));

    if blueprint.is_holdable() {
        entity.insert((HeldObjectState::default(), held_item_collider(config.item_radius)));
    }

    match &blueprint.kind {
        BlueprintKind::BaseItem => {
            entity.insert(CombinationAgent::new(config.combination.clone()));
        }
        BlueprintKind::Ingredient { identity } => match identity {
            IngredientIdentity::TypeTag(tag) => {
                entity.insert(IngredientTag(tag.clone()));
            }
            IngredientIdentity::TypeName(type_name) => {
                entity.insert(Ingredient::new(type_name.clone()));
            }
            IngredientIdentity::Category(category) => {
                entity.insert(CategoryTag(category.clone()));
            }
        },
        BlueprintKind::Output { throwable } => {
            if *throwable {
                entity.insert(Throwable);
            }
        }
    }

    entity.id()
}
