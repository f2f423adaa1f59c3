//! Scene setup helpers (player rig, source spawners)
//!
//! XR слой обычно строит сцену сам; helpers нужны headless runner'у и тестам.

use bevy::prelude::*;

use crate::components::{Grip, Hand, HandSide, PlayerRig};
use crate::spawner::SourceSpawner;

/// Entities player rig'а
#[derive(Debug, Clone, Copy)]
pub struct RigEntities {
    pub rig: Entity,
    pub primary: Entity,
    pub secondary: Entity,
}

/// Spawn player rig с двумя пустыми руками
pub fn spawn_player_rig(
    commands: &mut Commands,
    primary_pose: Transform,
    secondary_pose: Transform,
) -> RigEntities {
    let rig = commands.spawn(Name::new("PlayerRig")).id();

    let primary = commands
        .spawn((
            Name::new("PrimaryHand"),
            Hand {
                side: HandSide::Primary,
                rig: Some(rig),
            },
            Grip::default(),
            primary_pose,
        ))
        .id();

    let secondary = commands
        .spawn((
            Name::new("SecondaryHand"),
            Hand {
                side: HandSide::Secondary,
                rig: Some(rig),
            },
            Grip::default(),
            secondary_pose,
        ))
        .id();

    commands.entity(rig).insert(PlayerRig { primary, secondary });

    RigEntities {
        rig,
        primary,
        secondary,
    }
}

/// Spawn source spawner (статичный fixture сцены)
pub fn spawn_source_spawner(
    commands: &mut Commands,
    name: &str,
    spawner: SourceSpawner,
    transform: Transform,
) -> Entity {
    commands
        .spawn((Name::new(name.to_string()), spawner, transform))
        .id()
}
