//! Presentation sinks (fire-and-forget)
//!
//! ECS ответственность:
//! - `AudioCueRequested` events (внешний audio слой проигрывает one-shot звук)
//! - `VisualEffect` entity с фиксированным временем жизни
//!
//! Внешний слой ответственность:
//! - Проигрывание звука, рендер эффекта по `VisualEffect::prefab`
//!
//! Ничто отсюда не влияет на crafting state.

use bevy::prelude::*;

use crate::CraftingSet;

/// Scale одноразового VFX
pub const EFFECT_SCALE: f32 = 2.0;

/// Время жизни VFX (секунды)
pub const EFFECT_LIFETIME_SECS: f32 = 3.0;

/// Событие: проиграть one-shot звук в точке
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AudioCueRequested {
    pub cue: String,
    pub position: Vec3,
}

/// Одноразовый визуальный эффект
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct VisualEffect {
    pub prefab: String,
}

/// Компонент-маркер: деспавн entity после указанного времени
#[derive(Component, Debug)]
pub struct DespawnAfter {
    /// Время деспавна (в секундах от старта симуляции)
    pub despawn_time: f32,
}

/// Spawn VFX в точке: scale 2×, деспавн через 3 секунды
pub fn spawn_visual_effect(
    commands: &mut Commands,
    prefab: &str,
    position: Vec3,
    now: f32,
) -> Entity {
    commands
        .spawn((
            VisualEffect {
                prefab: prefab.to_string(),
            },
            Transform::from_translation(position).with_scale(Vec3::splat(EFFECT_SCALE)),
            DespawnAfter {
                despawn_time: now + EFFECT_LIFETIME_SECS,
            },
        ))
        .id()
}

/// Система: деспавн entities с истёкшим DespawnAfter timeout
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            commands.entity(entity).despawn();
        }
    }
}

/// Presentation plugin
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AudioCueRequested>()
            .add_systems(Update, despawn_after_timeout.in_set(CraftingSet::Cleanup));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_visual_effect_lifetime() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_systems(Update, despawn_after_timeout);

        let effect = {
            let mut commands = app.world_mut().commands();
            spawn_visual_effect(&mut commands, "sparkle", Vec3::ONE, 0.0)
        };
        app.world_mut().flush();

        let transform = app.world().get::<Transform>(effect).unwrap();
        assert_eq!(transform.scale, Vec3::splat(2.0));
        assert_eq!(transform.translation, Vec3::ONE);

        // 2.9s — ещё живой
        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_millis(2900));
        app.update();
        assert!(app.world().entities().contains(effect));

        // 3.0s — деспавн
        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_millis(100));
        app.update();
        assert!(!app.world().entities().contains(effect));
    }
}
