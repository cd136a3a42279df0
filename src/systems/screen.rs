//! Screen resolution system.
//!
//! Keeps [`Screen`] in sync with the [`WindowSize`] reported by raylib. The
//! effective resolution is recalculated only when the window size actually
//! changes.
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::screen::Screen;
use crate::resources::windowsize::WindowSize;

/// Recalculate the effective resolution after a window resize.
///
/// Sizes the screen rejects (a minimized window reports 0x0) keep the last
/// valid resolution; each rejected size is logged once.
pub fn update_effective_resolution(
    window: Res<WindowSize>,
    mut screen: ResMut<Screen>,
    mut rejected: Local<Option<(i32, i32)>>,
) {
    let size = (window.w, window.h);
    if size == (screen.viewport_width(), screen.viewport_height()) {
        *rejected = None;
        return;
    }
    if *rejected == Some(size) {
        return;
    }

    match screen.calculate_effective_resolution(window.w, window.h) {
        Ok(()) => {
            *rejected = None;
            info!(
                "Viewport {}x{}, effective resolution {:.0}x{:.0}",
                window.w,
                window.h,
                screen.effective_width(),
                screen.effective_height()
            );
        }
        Err(e) => {
            *rejected = Some(size);
            warn!("Keeping previous resolution: {}", e);
        }
    }
}
