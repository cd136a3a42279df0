//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity an entity moves with. Input
//! controllers write it, the movement system integrates it into
//! [`MapPosition`](super::mapposition::MapPosition) once per tick.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing a velocity in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    /// When true, the movement system leaves the entity where it is.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            frozen: false,
        }
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}
