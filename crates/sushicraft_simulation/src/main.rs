//! Headless симуляция SUSHICRAFT
//!
//! Прогоняет один цикл крафта без XR/рендера:
//! rice source + fish source → два held item'а → контакт → nigiri во второй руке

use bevy::prelude::*;
use std::time::Duration;

use sushicraft_simulation::*;

/// 90 Hz (частота типичного XR headset'а)
const FRAME_TIME: Duration = Duration::from_micros(11_111);

fn held_by(app: &App, hand: Entity) -> Option<Entity> {
    app.world().get::<Grip>(hand).and_then(|grip| grip.held)
}

fn describe(app: &App, entity: Option<Entity>) -> String {
    entity
        .and_then(|entity| app.world().get::<Name>(entity))
        .map(|name| name.as_str().to_string())
        .unwrap_or_else(|| "empty".to_string())
}

fn main() {
    println!("Starting SUSHICRAFT headless simulation");

    let mut app = create_headless_app(FRAME_TIME);
    app.add_plugins(SimulationPlugin);

    let config = app.world().resource::<CraftingConfig>().clone();
    let (rig, rice_source, fish_source) = {
        let mut commands = app.world_mut().commands();
        let rig = spawn_player_rig(
            &mut commands,
            Transform::from_xyz(0.25, 1.2, -0.3),
            Transform::from_xyz(-0.25, 1.2, -0.3),
        );
        let rice_source = spawn_source_spawner(
            &mut commands,
            "RiceSource",
            SourceSpawner::from_config(&config.rice_source),
            Transform::from_xyz(0.4, 1.0, -0.5),
        );
        let fish_source = spawn_source_spawner(
            &mut commands,
            "FishSource",
            SourceSpawner::from_config(&config.fish_source),
            Transform::from_xyz(-0.4, 1.0, -0.5),
        );
        (rig, rice_source, fish_source)
    };
    app.world_mut().flush();
    app.update();

    // Grab: primary → rice source, secondary → fish source
    for (hand, source) in [(rig.primary, rice_source), (rig.secondary, fish_source)] {
        app.world_mut().send_event(GripRequest::Attach {
            hand,
            object: source,
            grip: GripKind::Grip,
        });
    }
    app.update();
    app.update();

    let (Some(rice), Some(fish)) = (held_by(&app, rig.primary), held_by(&app, rig.secondary)) else {
        log_error("Spawners did not hand out items");
        return;
    };
    println!(
        "Primary: {}, secondary: {}",
        describe(&app, Some(rice)),
        describe(&app, Some(fish))
    );

    // Контакт (XR слой свёл руки вместе)
    let contact_point = Vec3::new(0.0, 1.2, -0.3);
    app.world_mut()
        .send_event(ContactBegan::new(rice, fish, contact_point));
    app.update();
    app.update();

    println!(
        "After combination — primary: {}, secondary: {}",
        describe(&app, held_by(&app, rig.primary)),
        describe(&app, held_by(&app, rig.secondary))
    );

    // VFX живёт 3 секунды
    let frames = (3.5 / FRAME_TIME.as_secs_f32()) as usize;
    for _ in 0..frames {
        app.update();
    }

    let effects = app
        .world_mut()
        .query::<&VisualEffect>()
        .iter(app.world())
        .count();
    println!(
        "Simulation complete! {} entities, {} active effects",
        app.world().entities().len(),
        effects
    );
}
