//! Physics bridge (Rapier → crafting)
//!
//! Held items — kinematic sensors: двигает их XR слой через руку,
//! Rapier только детектит пересечения.
//!
//! `CollisionEvent::Started` → `ContactBegan` (точка контакта = середина между центрами).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::crafting::ContactBegan;
use crate::CraftingSet;

/// Collision group held items (контакт только между собой)
pub const HELD_ITEM_GROUP: Group = Group::GROUP_2;

/// Rapier компоненты held item'а
///
/// Kinematic-kinematic пары по умолчанию не генерируют events, включаем явно.
pub fn held_item_collider(radius: f32) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::ball(radius),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
        CollisionGroups::new(HELD_ITEM_GROUP, HELD_ITEM_GROUP),
    )
}

/// Система: Rapier collisions → ContactBegan
///
/// `Stopped` игнорируется (crafting реагирует только на начало контакта).
pub fn bridge_rapier_collisions(
    mut collisions: EventReader<CollisionEvent>,
    transforms: Query<&Transform>,
    mut contacts: EventWriter<ContactBegan>,
) {
    for collision in collisions.read() {
        let (a, b) = match collision {
            CollisionEvent::Started(a, b, _) => (*a, *b),
            CollisionEvent::Stopped(..) => continue,
        };

        // Sensor пары не дают manifold — берём середину
        let points = match (transforms.get(a), transforms.get(b)) {
            (Ok(ta), Ok(tb)) => vec![ta.translation.lerp(tb.translation, 0.5)],
            _ => Vec::new(),
        };

        contacts.write(ContactBegan { a, b, points });
    }
}

/// Contact bridge plugin
///
/// Сам Rapier (`RapierPhysicsPlugin`) добавляет внешний слой;
/// здесь только регистрация event'а, чтобы bridge работал и без него.
pub struct ContactBridgePlugin;

impl Plugin for ContactBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollisionEvent>()
            .add_systems(Update, bridge_rapier_collisions.in_set(CraftingSet::Contacts));
    }
}
