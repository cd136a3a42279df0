//! Debug toggle resource.
//!
//! While present, the render pass draws the camera/screen overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the debug overlay is drawn.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
