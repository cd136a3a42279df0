//! Keyboard-driven movement component.
//!
//! The [`input_simple_controller`](crate::systems::inputsimplecontroller::input_simple_controller)
//! system reads [`InputState`](crate::resources::input::InputState) and sets
//! the [`RigidBody`](super::rigidbody::RigidBody) velocity of every entity
//! carrying [`InputControlled`].

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
///
/// The pressed directions are summed into a direction vector, normalized so
/// diagonals are not faster, then scaled by `speed`.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Speed in world units per second.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
