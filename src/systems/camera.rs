//! Camera systems.
//!
//! Zooming and following run as one piped pair every tick:
//! `camera_zoom.pipe(camera_follow)`. The [`ZoomChange`] returned by the zoom
//! step tells the follow step whether it must re-center.
use bevy_ecs::prelude::*;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::resources::camera::{OrthographicCamera, ZoomChange};
use crate::resources::input::InputState;
use crate::resources::screen::Screen;

/// Step the zoom from the held zoom keys.
pub fn camera_zoom(input: Res<InputState>, mut camera: ResMut<OrthographicCamera>) -> ZoomChange {
    camera.zoom(input.zoom_in.active, input.zoom_out.active)
}

/// Ease the camera toward the first [`CameraTarget`] entity.
///
/// Without a target the camera keeps looking at its current view center,
/// which still applies zoom re-centering and clamping.
pub fn camera_follow(
    In(change): In<ZoomChange>,
    screen: Res<Screen>,
    mut camera: ResMut<OrthographicCamera>,
    targets: Query<&MapPosition, With<CameraTarget>>,
) {
    let target = match targets.iter().next() {
        Some(position) => position.pos,
        None => camera.view_center(&screen),
    };
    camera.follow_target(&screen, target, change);
}
