//! Tests for hand grip systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::components::{Grip, GripKind, Hand, HandSide, HeldObjectState};
    use crate::hand::{
        apply_grip_requests, release_despawned_objects, track_held_state, GrabNotification,
        GripRequest,
    };

    fn create_hand_app() -> App {
        let mut app = App::new();
        app.add_event::<GripRequest>()
            .add_event::<GrabNotification>()
            .add_systems(
                Update,
                (apply_grip_requests, release_despawned_objects, track_held_state).chain(),
            );
        app
    }

    fn spawn_hand(app: &mut App, side: HandSide) -> Entity {
        app.world_mut()
            .spawn((Hand { side, rig: None }, Grip::default(), Transform::default()))
            .id()
    }

    fn spawn_object(app: &mut App) -> Entity {
        app.world_mut().spawn(HeldObjectState::default()).id()
    }

    fn attach(app: &mut App, hand: Entity, object: Entity) {
        app.world_mut().send_event(GripRequest::Attach {
            hand,
            object,
            grip: GripKind::Grip,
        });
        app.update();
    }

    fn detach(app: &mut App, hand: Entity, object: Entity) {
        app.world_mut().send_event(GripRequest::Detach { hand, object });
        app.update();
    }

    fn held_by(app: &App, hand: Entity) -> Option<Entity> {
        app.world().get::<Grip>(hand).unwrap().held
    }

    fn holder_of(app: &App, object: Entity) -> Option<Entity> {
        app.world().get::<HeldObjectState>(object).unwrap().holder
    }

    #[test]
    fn test_attach_and_detach() {
        let mut app = create_hand_app();
        let hand = spawn_hand(&mut app, HandSide::Primary);
        let object = spawn_object(&mut app);

        attach(&mut app, hand, object);
        assert_eq!(held_by(&app, hand), Some(object));
        assert_eq!(holder_of(&app, object), Some(hand));

        detach(&mut app, hand, object);
        assert_eq!(held_by(&app, hand), None);
        assert_eq!(holder_of(&app, object), None);
    }

    #[test]
    fn test_attach_to_occupied_hand_releases_previous() {
        let mut app = create_hand_app();
        let hand = spawn_hand(&mut app, HandSide::Primary);
        let first = spawn_object(&mut app);
        let second = spawn_object(&mut app);

        attach(&mut app, hand, first);
        attach(&mut app, hand, second);

        assert_eq!(held_by(&app, hand), Some(second));
        assert_eq!(holder_of(&app, first), None);
        assert_eq!(holder_of(&app, second), Some(hand));
    }

    #[test]
    fn test_attach_to_other_hand_transfers() {
        let mut app = create_hand_app();
        let primary = spawn_hand(&mut app, HandSide::Primary);
        let secondary = spawn_hand(&mut app, HandSide::Secondary);
        let object = spawn_object(&mut app);

        attach(&mut app, primary, object);
        attach(&mut app, secondary, object);

        assert_eq!(held_by(&app, primary), None);
        assert_eq!(held_by(&app, secondary), Some(object));
        assert_eq!(holder_of(&app, object), Some(secondary));

        // Stale detach от первой руки — no-op
        detach(&mut app, primary, object);
        assert_eq!(holder_of(&app, object), Some(secondary));
    }

    #[test]
    fn test_attach_missing_object_ignored() {
        let mut app = create_hand_app();
        let hand = spawn_hand(&mut app, HandSide::Primary);
        let object = spawn_object(&mut app);
        app.world_mut().despawn(object);

        attach(&mut app, hand, object);
        assert_eq!(held_by(&app, hand), None);
    }

    #[test]
    fn test_despawned_object_released() {
        let mut app = create_hand_app();
        let hand = spawn_hand(&mut app, HandSide::Primary);
        let object = spawn_object(&mut app);

        attach(&mut app, hand, object);
        app.world_mut().despawn(object);
        app.update();

        assert_eq!(held_by(&app, hand), None);
    }

    #[test]
    fn test_grip_kind_recorded() {
        let mut app = create_hand_app();
        let hand = spawn_hand(&mut app, HandSide::Secondary);
        let object = spawn_object(&mut app);

        app.world_mut().send_event(GripRequest::Attach {
            hand,
            object,
            grip: GripKind::Pinch,
        });
        app.update();

        assert_eq!(app.world().get::<Grip>(hand).unwrap().kind, GripKind::Pinch);
    }
}
