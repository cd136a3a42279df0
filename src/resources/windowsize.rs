//! Window size resource.
//!
//! Holds the physical window dimensions in pixels as last reported by raylib.
//! The main loop refreshes it every frame; the screen system turns it into
//! [`Screen`](crate::resources::screen::Screen) viewport and effective
//! resolutions.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
///
/// May be zero while the window is minimized.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}
