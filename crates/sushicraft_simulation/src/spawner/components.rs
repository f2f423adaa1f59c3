//! SourceSpawner компонент (dispenser, который никогда не остаётся в руке)

use bevy::prelude::*;
use std::time::Duration;

use crate::blueprint::BlueprintId;
use crate::components::GripKind;
use crate::config::SpawnerConfig;

/// Source spawner (rice source, fish source)
///
/// # Cooldown
/// - `last_spawn` — момент последнего спавна (elapsed time симуляции)
/// - Новый item только если `now - last_spawn >= cooldown`
/// - Сравнение в `Duration` (целые наносекунды): ровно cooldown = готов
/// - Spawner без истории спавнов готов сразу
#[derive(Component, Debug, Clone)]
pub struct SourceSpawner {
    pub blueprint: Option<BlueprintId>,
    /// Секунды (отрицательный / NaN = без cooldown)
    pub cooldown: f64,
    /// Offset в локальном frame руки
    pub spawn_offset: Vec3,
    pub grip: GripKind,
    pub audio_cue: Option<String>,
    last_spawn: Option<Duration>,
}

impl SourceSpawner {
    pub fn new(blueprint: impl Into<BlueprintId>, cooldown: f64) -> Self {
        Self {
            blueprint: Some(blueprint.into()),
            cooldown,
            spawn_offset: Vec3::ZERO,
            grip: GripKind::Grip,
            audio_cue: None,
            last_spawn: None,
        }
    }

    pub fn from_config(config: &SpawnerConfig) -> Self {
        Self {
            blueprint: config.blueprint.clone(),
            cooldown: config.cooldown,
            spawn_offset: config.spawn_offset,
            grip: config.grip,
            audio_cue: config.audio_cue.clone(),
            last_spawn: None,
        }
    }

    pub fn last_spawn(&self) -> Option<Duration> {
        self.last_spawn
    }

    pub fn cooldown_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.cooldown).unwrap_or(Duration::ZERO)
    }

    pub fn is_ready(&self, now: Duration) -> bool {
        self.remaining_cooldown(now).is_zero()
    }

    /// Сколько осталось до готовности (`ZERO` = готов)
    pub fn remaining_cooldown(&self, now: Duration) -> Duration {
        match self.last_spawn {
            Some(last_spawn) => self
                .cooldown_duration()
                .saturating_sub(now.saturating_sub(last_spawn)),
            None => Duration::ZERO,
        }
    }

    pub fn mark_spawned(&mut self, now: Duration) {
        self.last_spawn = Some(now);
    }

    /// Поза нового item: offset из frame руки в world, поворот руки
    pub fn spawn_transform(&self, hand: &Transform) -> Transform {
        Transform::from_translation(hand.transform_point(self.spawn_offset))
            .with_rotation(hand.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: f64) -> Duration {
        Duration::from_secs_f64(value)
    }

    #[test]
    fn test_spawner_cooldown() {
        let mut spawner = SourceSpawner::new("rice", 0.5);
        assert!(spawner.is_ready(Duration::ZERO));

        spawner.mark_spawned(secs(1.0));
        assert!(!spawner.is_ready(secs(1.0)));
        assert!(!spawner.is_ready(secs(1.25)));
        assert_eq!(spawner.remaining_cooldown(secs(1.25)), Duration::from_millis(250));

        // Ровно cooldown — уже готов
        assert!(spawner.is_ready(secs(1.5)));
        assert!(spawner.is_ready(secs(3.0)));
        assert_eq!(spawner.remaining_cooldown(secs(3.0)), Duration::ZERO);
    }

    #[test]
    fn test_non_dyadic_cooldown_ready_at_boundary() {
        // 0.3 не представимо точно в двоичном виде
        let mut spawner = SourceSpawner::new("rice", 0.3);
        spawner.mark_spawned(Duration::from_millis(100));

        assert!(!spawner.is_ready(Duration::from_millis(399)));
        assert!(spawner.is_ready(Duration::from_millis(400)));
        assert_eq!(spawner.remaining_cooldown(Duration::from_millis(400)), Duration::ZERO);
    }

    #[test]
    fn test_invalid_cooldown_means_no_cooldown() {
        let mut spawner = SourceSpawner::new("rice", -1.0);
        spawner.mark_spawned(Duration::from_millis(100));
        assert!(spawner.is_ready(Duration::from_millis(100)));

        spawner.cooldown = f64::NAN;
        assert!(spawner.is_ready(Duration::from_millis(100)));
    }

    #[test]
    fn test_spawn_transform_in_hand_frame() {
        let spawner = SourceSpawner {
            spawn_offset: Vec3::new(0.0, 0.0, -1.0),
            ..SourceSpawner::new("rice", 0.5)
        };

        // Рука повёрнута на 90° вокруг Y: локальный -Z смотрит в world -X
        let hand = Transform::from_translation(Vec3::new(1.0, 1.0, 0.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));

        let transform = spawner.spawn_transform(&hand);
        assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-5));
        assert_eq!(transform.rotation, hand.rotation);
    }

    #[test]
    fn test_from_config() {
        let config = crate::config::CraftingConfig::default();
        let spawner = SourceSpawner::from_config(&config.fish_source);
        assert_eq!(spawner.blueprint, Some(BlueprintId::from("salmon")));
        assert_eq!(spawner.cooldown, 0.5);
        assert!(spawner.last_spawn().is_none());
    }
}
