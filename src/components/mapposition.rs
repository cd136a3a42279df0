//! World-space position component.
//!
//! Positions are expressed in world units, the same units as the target
//! resolution: a 16x16 tile at `(32, 16)` covers world pixels 32..48 x 16..32.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of an entity in world space.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
