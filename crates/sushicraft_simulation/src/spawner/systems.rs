//! Spawner system implementations

use bevy::prelude::*;

use crate::blueprint::{spawn_blueprint, Blueprints};
use crate::components::Hand;
use crate::config::CraftingConfig;
use crate::hand::{GrabNotification, GripRequest};
use crate::presentation::AudioCueRequested;
use crate::spawner::{ItemSpawned, SourceSpawner};
use crate::{log, log_error, log_info, log_warning};

/// Process grab на source spawner
///
/// # Flow
/// 1. Cooldown не истёк → молча игнорируем
/// 2. Blueprint не настроен → error, spawner остаётся в руке, cooldown не трогаем
/// 3. Spawn item в позе руки + local offset
/// 4. Attach item к той же руке
/// 5. Запоминаем время спавна
/// 6. Detach spawner от руки
/// 7. Audio cue + ItemSpawned
pub fn spawn_on_grab(
    mut commands: Commands,
    mut notifications: EventReader<GrabNotification>,
    mut spawners: Query<&mut SourceSpawner>,
    hands: Query<&Transform, With<Hand>>,
    blueprints: Res<Blueprints>,
    config: Res<CraftingConfig>,
    time: Res<Time>,
    mut grip_requests: EventWriter<GripRequest>,
    mut audio_cues: EventWriter<AudioCueRequested>,
    mut spawned_events: EventWriter<ItemSpawned>,
) {
    let now = time.elapsed();

    for notification in notifications.read() {
        let GrabNotification::Attached { hand, object: source, .. } = *notification else {
            continue;
        };

        let Ok(mut spawner) = spawners.get_mut(source) else {
            continue;
        };

        // 1. Cooldown (не ошибка)
        if !spawner.is_ready(now) {
            log(&format!(
                "Spawner {:?} on cooldown ({:?} left)",
                source,
                spawner.remaining_cooldown(now)
            ));
            continue;
        }

        // 2. Blueprint
        let blueprint = match blueprints.resolve(spawner.blueprint.as_ref()) {
            Ok(blueprint) => blueprint,
            Err(err) => {
                log_error(&format!("Spawner {:?}: {}", source, err));
                continue;
            }
        };

        let Ok(hand_transform) = hands.get(hand) else {
            log_warning(&format!("Spawner {:?}: hand {:?} has no pose", source, hand));
            continue;
        };

        // 3. Spawn
        let transform = spawner.spawn_transform(hand_transform);
        let item = spawn_blueprint(&mut commands, blueprint, transform, &config);

        // 4-6. Item в руку, spawner из руки
        grip_requests.write(GripRequest::Attach {
            hand,
            object: item,
            grip: spawner.grip,
        });
        spawner.mark_spawned(now);
        grip_requests.write(GripRequest::Detach {
            hand,
            object: source,
        });

        // 7. Presentation + notification
        if let Some(cue) = &spawner.audio_cue {
            audio_cues.write(AudioCueRequested {
                cue: cue.clone(),
                position: transform.translation,
            });
        }

        spawned_events.write(ItemSpawned {
            source,
            item,
            hand,
            blueprint: blueprint.id.clone(),
        });

        log_info(&format!("🍙 Spawner {:?} → {} {:?} in hand {:?}", source, blueprint.name, item, hand));
    }
}
