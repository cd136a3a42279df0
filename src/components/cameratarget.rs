//! Camera target marker component.
//!
//! The camera follow system centers the view on the first entity that has
//! both [`CameraTarget`] and a
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;

/// Tag component for the entity the camera tracks.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
