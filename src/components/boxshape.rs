//! Solid rectangle component.
//!
//! Entities with a [`BoxShape`] and a
//! [`MapPosition`](super::mapposition::MapPosition) are drawn as a filled
//! rectangle whose top-left corner sits at the position.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Copy, Debug)]
pub struct BoxShape {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl BoxShape {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// A square of side `size`.
    pub fn square(size: f32, color: Color) -> Self {
        Self::new(size, size, color)
    }
}
