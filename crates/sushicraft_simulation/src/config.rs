//! CraftingConfig — настройки спавнеров, recipe и resolver'а
//!
//! Hardcoded defaults (как `Blueprints::default()`), serde для загрузки из файла.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::blueprint::BlueprintId;
use crate::components::{GripKind, IngredientType};
use crate::crafting::TypeResolver;

/// Настройки одного source spawner'а
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// `None` = не настроен (spawn abort + error в лог)
    pub blueprint: Option<BlueprintId>,
    /// Минимальный интервал между спавнами (секунды)
    pub cooldown: f64,
    /// Offset в локальном frame руки
    pub spawn_offset: Vec3,
    /// Каким хватом рука берёт spawned item
    pub grip: GripKind,
    pub audio_cue: Option<String>,
}

/// Настройки `CombinationAgent` (копируются в каждый base item)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombinationConfig {
    /// IngredientType → output blueprint
    pub recipe: HashMap<IngredientType, BlueprintId>,
    pub resolver: TypeResolver,
    /// World-space offset от точки контакта
    pub spawn_offset: Vec3,
    /// Фиксированный поворот output (не от contact normal)
    pub spawn_rotation: Quat,
    /// Debug: разрешить крафт когда rice никто не держит
    pub allow_unheld: bool,
    pub audio_cue: Option<String>,
    /// Prefab одноразового VFX (`None` = без эффекта)
    pub effect: Option<String>,
}

impl Default for CombinationConfig {
    fn default() -> Self {
        let recipe = HashMap::from([
            (IngredientType::Tuna, BlueprintId::from("tuna_nigiri")),
            (IngredientType::Salmon, BlueprintId::from("salmon_nigiri")),
            (IngredientType::Shrimp, BlueprintId::from("shrimp_nigiri")),
        ]);

        Self {
            recipe,
            resolver: TypeResolver::default(),
            spawn_offset: Vec3::new(0.0, 0.05, 0.0),
            spawn_rotation: Quat::IDENTITY,
            allow_unheld: false,
            audio_cue: Some("combine".into()),
            effect: Some("sparkle".into()),
        }
    }
}

/// Crafting configuration (resource)
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraftingConfig {
    pub rice_source: SpawnerConfig,
    pub fish_source: SpawnerConfig,
    pub combination: CombinationConfig,
    /// Радиус sensor collider у held items (метры)
    pub item_radius: f32,
}

impl Default for CraftingConfig {
    fn default() -> Self {
        Self {
            rice_source: SpawnerConfig {
                blueprint: Some("rice".into()),
                cooldown: 0.5,
                spawn_offset: Vec3::new(0.0, 0.0, -0.08),
                grip: GripKind::Grip,
                audio_cue: Some("pop".into()),
            },
            fish_source: SpawnerConfig {
                blueprint: Some("salmon".into()),
                cooldown: 0.5,
                spawn_offset: Vec3::new(0.0, 0.0, -0.08),
                grip: GripKind::Grip,
                audio_cue: Some("pop".into()),
            },
            combination: CombinationConfig::default(),
            item_radius: 0.04,
        }
    }
}
