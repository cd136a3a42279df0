//! Simple input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! sets the velocity of entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Diagonal movement is normalized to keep a constant speed.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Update each controlled entity's `RigidBody` velocity based on input.
pub fn input_simple_controller(
    mut query: Query<(&InputControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    let axis = input_state.move_axis();
    let length = axis.length();
    let direction = if length > 0.0 {
        Vector2 {
            x: axis.x / length,
            y: axis.y / length,
        }
    } else {
        Vector2 { x: 0.0, y: 0.0 }
    };

    for (controlled, mut rigidbody) in query.iter_mut() {
        rigidbody.velocity = direction.scale_by(controlled.speed);
    }
}
