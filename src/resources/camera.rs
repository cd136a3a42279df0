//! Orthographic follow camera.
//!
//! [`OrthographicCamera`] keeps a view over the fixed-size world described by
//! [`Screen`]: it eases toward a followed point, zooms in small steps and
//! never shows anything outside the target resolution.
//!
//! Zooming and following are two calls per tick. [`OrthographicCamera::zoom`]
//! returns a [`ZoomChange`] that must be handed to
//! [`OrthographicCamera::follow_target`], which uses it to keep the world
//! point under the viewport center in place when the zoom level moves.

use bevy_ecs::prelude::Resource;
use log::debug;
use raylib::prelude::{Camera2D, Matrix, Rectangle, Vector2};

use crate::resources::screen::Screen;

/// Fraction of the remaining distance covered per follow call.
pub const DEFAULT_CAMERA_SPEED: f32 = 0.1;
/// Zoom added or removed per zoom call while a zoom key is held.
pub const DEFAULT_ZOOM_STEP: f32 = 0.01;
pub const DEFAULT_MIN_ZOOM: f32 = 1.0;
pub const DEFAULT_MAX_ZOOM: f32 = 4.0;

/// Tuning values for [`OrthographicCamera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Lerp coefficient applied once per follow call, in (0, 1].
    pub speed: f32,
    /// Zoom delta per zoom call.
    pub zoom_step: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_CAMERA_SPEED,
            zoom_step: DEFAULT_ZOOM_STEP,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl CameraSettings {
    /// Check that the settings describe a usable camera.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.speed > 0.0 && self.speed <= 1.0) {
            return Err(format!("Camera speed must be in (0, 1], got {}", self.speed));
        }
        if !(self.zoom_step > 0.0) {
            return Err(format!(
                "Zoom step must be positive, got {}",
                self.zoom_step
            ));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(format!(
                "Zoom range must satisfy 0 < min <= max, got [{}, {}]",
                self.min_zoom, self.max_zoom
            ));
        }
        Ok(())
    }
}

/// Zoom level before and after a zoom update.
///
/// Produced by [`OrthographicCamera::zoom`] and consumed by
/// [`OrthographicCamera::follow_target`] in the same tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomChange {
    pub previous: f32,
    pub current: f32,
}

impl ZoomChange {
    /// A change that leaves `zoom` as it is.
    pub fn unchanged(zoom: f32) -> Self {
        Self {
            previous: zoom,
            current: zoom,
        }
    }

    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Camera resource with smoothing, stepped zoom and world clamping.
///
/// `position` is the world-space top-left corner of the view. After every
/// [`follow_target`](Self::follow_target) it lies within
/// `[0, target - effective / zoom]` on both axes. If the view is bigger than
/// the world on an axis, the position on that axis is pinned to 0.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrthographicCamera {
    position: Vector2,
    target: Vector2,
    zoom_factor: f32,
    matrix: Matrix,
    settings: CameraSettings,
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl OrthographicCamera {
    /// Create a camera at the world origin, zoomed out as far as allowed.
    pub fn new(settings: CameraSettings) -> Self {
        let zoom_factor = clamp_min_first(1.0, settings.min_zoom, settings.max_zoom);
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            target: Vector2 { x: 0.0, y: 0.0 },
            zoom_factor,
            matrix: scale_translate(zoom_factor, 0.0, 0.0),
            settings,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Move the view's top-left corner directly, without smoothing or clamping.
    ///
    /// The next [`follow_target`](Self::follow_target) eases from here.
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.refresh_matrix_at_origin();
    }

    /// The top-left corner the camera is currently easing toward.
    pub fn target(&self) -> Vector2 {
        self.target
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    /// World-to-render-target transform computed by the last follow.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    pub fn settings(&self) -> CameraSettings {
        self.settings
    }

    /// Apply one zoom step per active key and clamp to the zoom range.
    ///
    /// Holding both keys cancels out.
    pub fn zoom(&mut self, zoom_in: bool, zoom_out: bool) -> ZoomChange {
        let direction = (zoom_in as i8 - zoom_out as i8) as f32;
        self.apply_zoom(self.zoom_factor + direction * self.settings.zoom_step)
    }

    /// Jump to a zoom level, clamped to the zoom range.
    pub fn set_zoom(&mut self, zoom: f32) -> ZoomChange {
        self.apply_zoom(zoom)
    }

    fn apply_zoom(&mut self, zoom: f32) -> ZoomChange {
        let previous = self.zoom_factor;
        self.zoom_factor = clamp_min_first(zoom, self.settings.min_zoom, self.settings.max_zoom);

        let change = ZoomChange {
            previous,
            current: self.zoom_factor,
        };
        if change.changed() {
            debug!("Zoom factor: {:.2}", self.zoom_factor);
        }
        change
    }

    /// Ease the view toward `target` (a world point to center on).
    ///
    /// Steps, in order:
    /// 1. turn `target` into the top-left corner that would center it,
    /// 2. lerp the current position toward that corner by `speed`,
    /// 3. if the zoom changed, move the position so the world point under
    ///    the viewport center stays put under the new zoom, then clamp,
    /// 4. clamp to the world bounds,
    /// 5. rebuild the transform matrix.
    ///
    /// Must be called once per logical tick: convergence speed depends on how
    /// often it runs. `change` must be the value returned by this tick's
    /// [`zoom`](Self::zoom) or [`set_zoom`](Self::set_zoom), so its `current`
    /// equals the camera's zoom.
    pub fn follow_target(&mut self, screen: &Screen, target: Vector2, change: ZoomChange) {
        debug_assert_eq!(
            change.current, self.zoom_factor,
            "ZoomChange does not describe the camera's current zoom"
        );
        let zoom = self.zoom_factor;
        let effective_w = screen.effective_width();
        let effective_h = screen.effective_height();

        self.target = Vector2 {
            x: target.x - effective_w / (2.0 * zoom),
            y: target.y - effective_h / (2.0 * zoom),
        };

        let mut next = lerp_v2(self.position, self.target, self.settings.speed);

        if change.changed() {
            let viewport_center = Vector2 {
                x: effective_w / 2.0,
                y: effective_h / 2.0,
            };
            let world_center = Vector2 {
                x: next.x + viewport_center.x / change.previous,
                y: next.y + viewport_center.y / change.previous,
            };
            next = Vector2 {
                x: world_center.x - viewport_center.x / zoom,
                y: world_center.y - viewport_center.y / zoom,
            };

            // Clamp right after re-centering so zooming out near an edge never shows the clear color
            next = self.clamp_to_world(screen, next);
        }

        self.position = self.clamp_to_world(screen, next);

        self.update_matrix(effective_w / (2.0 * zoom), effective_h / (2.0 * zoom));
    }

    /// Transform a world point into render-target space.
    ///
    /// The point is divided by the zoom factor before the matrix is applied.
    /// The matrix scales by the zoom factor as well, so the result is
    /// `point - position * zoom`.
    pub fn world_to_screen(&self, world_position: Vector2) -> Vector2 {
        let scaled = Vector2 {
            x: world_position.x / self.zoom_factor,
            y: world_position.y / self.zoom_factor,
        };
        transform_point(&self.matrix, scaled)
    }

    /// World point drawn at `target_position` in render-target space.
    ///
    /// Inverse of [`Self::matrix`]: `position + target_position / zoom`.
    pub fn target_to_world(&self, target_position: Vector2) -> Vector2 {
        Vector2 {
            x: self.position.x + target_position.x / self.zoom_factor,
            y: self.position.y + target_position.y / self.zoom_factor,
        }
    }

    /// The world point currently at the center of the view.
    pub fn view_center(&self, screen: &Screen) -> Vector2 {
        Vector2 {
            x: self.position.x + screen.effective_width() / (2.0 * self.zoom_factor),
            y: self.position.y + screen.effective_height() / (2.0 * self.zoom_factor),
        }
    }

    /// World-space rectangle covered by the view.
    pub fn visible_area(&self, screen: &Screen) -> Rectangle {
        Rectangle {
            x: self.position.x,
            y: self.position.y,
            width: screen.effective_width() / self.zoom_factor,
            height: screen.effective_height() / self.zoom_factor,
        }
    }

    /// A raylib camera that draws with the same transform as [`Self::matrix`].
    pub fn raylib_camera(&self) -> Camera2D {
        Camera2D {
            offset: Vector2 { x: 0.0, y: 0.0 },
            target: self.position,
            rotation: 0.0,
            zoom: self.zoom_factor,
        }
    }

    fn clamp_to_world(&self, screen: &Screen, point: Vector2) -> Vector2 {
        let max_x = screen.target_width() as f32 - screen.effective_width() / self.zoom_factor;
        let max_y = screen.target_height() as f32 - screen.effective_height() / self.zoom_factor;
        Vector2 {
            x: clamp_min_first(point.x, 0.0, max_x),
            y: clamp_min_first(point.y, 0.0, max_y),
        }
    }

    /// Compose translate(-center - position), scale(zoom), translate(center * zoom).
    fn update_matrix(&mut self, viewport_center_x: f32, viewport_center_y: f32) {
        let zoom = self.zoom_factor;
        let translate_x = -viewport_center_x - self.position.x;
        let translate_y = -viewport_center_y - self.position.y;
        let offset_x = viewport_center_x * zoom;
        let offset_y = viewport_center_y * zoom;

        self.matrix = scale_translate(
            zoom,
            translate_x * zoom + offset_x,
            translate_y * zoom + offset_y,
        );
    }

    // The center terms of update_matrix cancel out, so no screen is needed here.
    fn refresh_matrix_at_origin(&mut self) {
        self.update_matrix(0.0, 0.0);
    }
}

/// Apply an affine 2D transform stored in a raylib matrix (z = 0, w = 1).
pub fn transform_point(matrix: &Matrix, point: Vector2) -> Vector2 {
    Vector2 {
        x: matrix.m0 * point.x + matrix.m4 * point.y + matrix.m12,
        y: matrix.m1 * point.x + matrix.m5 * point.y + matrix.m13,
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Clamp where the lower bound wins when `max < min`.
///
/// `f32::clamp` panics in that case, which happens whenever the view is
/// larger than the world.
fn clamp_min_first(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Uniform x/y scale followed by a translation; z is left untouched.
fn scale_translate(scale: f32, translate_x: f32, translate_y: f32) -> Matrix {
    Matrix {
        m0: scale,
        m4: 0.0,
        m8: 0.0,
        m12: translate_x,
        m1: 0.0,
        m5: scale,
        m9: 0.0,
        m13: translate_y,
        m2: 0.0,
        m6: 0.0,
        m10: 1.0,
        m14: 0.0,
        m3: 0.0,
        m7: 0.0,
        m11: 0.0,
        m15: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn v2(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    fn distance(a: Vector2, b: Vector2) -> f32 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    /// 2560x1280 world seen through a 1280x640 window.
    fn half_size_screen() -> Screen {
        Screen::new(640, 320, 4, 1280, 640).unwrap()
    }

    #[test]
    fn test_new_camera_defaults() {
        let cam = OrthographicCamera::default();
        assert_eq!(cam.zoom_factor(), 1.0);
        assert_eq!(cam.position().x, 0.0);
        assert_eq!(cam.position().y, 0.0);
        assert_eq!(cam.settings(), CameraSettings::default());
    }

    #[test]
    fn test_new_camera_starts_inside_zoom_range() {
        let cam = OrthographicCamera::new(CameraSettings {
            min_zoom: 2.0,
            max_zoom: 3.0,
            ..CameraSettings::default()
        });
        assert_eq!(cam.zoom_factor(), 2.0);
    }

    #[test]
    fn test_settings_validation() {
        assert!(CameraSettings::default().validate().is_ok());
        let bad_speed = CameraSettings {
            speed: 0.0,
            ..CameraSettings::default()
        };
        assert!(bad_speed.validate().is_err());
        let too_fast = CameraSettings {
            speed: 1.5,
            ..CameraSettings::default()
        };
        assert!(too_fast.validate().is_err());
        let reversed = CameraSettings {
            min_zoom: 4.0,
            max_zoom: 1.0,
            ..CameraSettings::default()
        };
        assert!(reversed.validate().is_err());
        let no_step = CameraSettings {
            zoom_step: -0.01,
            ..CameraSettings::default()
        };
        assert!(no_step.validate().is_err());
    }

    #[test]
    fn test_zoom_in_increases_up_to_max() {
        let mut cam = OrthographicCamera::default();
        let mut last = cam.zoom_factor();
        for _ in 0..400 {
            let change = cam.zoom(true, false);
            assert_eq!(change.previous, last);
            assert!(cam.zoom_factor() >= last);
            if last < DEFAULT_MAX_ZOOM {
                assert!(cam.zoom_factor() > last);
            }
            last = cam.zoom_factor();
        }
        assert_eq!(cam.zoom_factor(), 4.0);

        let change = cam.zoom(true, false);
        assert!(!change.changed());
        assert_eq!(cam.zoom_factor(), 4.0);
    }

    #[test]
    fn test_zoom_out_decreases_down_to_min() {
        let mut cam = OrthographicCamera::default();
        cam.set_zoom(4.0);
        let mut last = cam.zoom_factor();
        for _ in 0..400 {
            cam.zoom(false, true);
            assert!(cam.zoom_factor() <= last);
            last = cam.zoom_factor();
        }
        assert_eq!(cam.zoom_factor(), 1.0);

        let change = cam.zoom(false, true);
        assert!(!change.changed());
        assert_eq!(cam.zoom_factor(), 1.0);
    }

    #[test]
    fn test_zoom_single_step() {
        let mut cam = OrthographicCamera::default();
        let change = cam.zoom(true, false);
        assert!(change.changed());
        assert_eq!(change.previous, 1.0);
        assert!(approx_eq(change.current, 1.01));
        assert_eq!(change.current, cam.zoom_factor());
    }

    #[test]
    fn test_zoom_both_keys_cancel() {
        let mut cam = OrthographicCamera::default();
        cam.set_zoom(2.37);
        let change = cam.zoom(true, true);
        assert!(!change.changed());
        assert_eq!(cam.zoom_factor(), 2.37);
    }

    #[test]
    fn test_zoom_no_keys_is_unchanged() {
        let mut cam = OrthographicCamera::default();
        let change = cam.zoom(false, false);
        assert_eq!(change, ZoomChange::unchanged(1.0));
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut cam = OrthographicCamera::default();
        cam.set_zoom(10.0);
        assert_eq!(cam.zoom_factor(), 4.0);
        cam.set_zoom(0.1);
        assert_eq!(cam.zoom_factor(), 1.0);
    }

    #[test]
    fn test_follow_negative_target_stays_at_origin() {
        // Window the size of the world: no room to move at zoom 1
        let screen = Screen::new(640, 320, 4, 2560, 1280).unwrap();
        let mut cam = OrthographicCamera::default();
        for _ in 0..50 {
            cam.follow_target(&screen, v2(100.0, 100.0), ZoomChange::unchanged(1.0));
            assert_eq!(cam.position().x, 0.0);
            assert_eq!(cam.position().y, 0.0);
        }
        assert!(approx_eq(cam.target().x, 100.0 - 1280.0));
        assert!(approx_eq(cam.target().y, 100.0 - 640.0));
    }

    #[test]
    fn test_follow_first_step_is_lerp() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        cam.follow_target(&screen, v2(1500.0, 900.0), ZoomChange::unchanged(1.0));
        // target' = (1500 - 640, 900 - 320) = (860, 580)
        assert!(approx_eq(cam.position().x, 86.0));
        assert!(approx_eq(cam.position().y, 58.0));
    }

    #[test]
    fn test_follow_converges_monotonically() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        let goal = v2(860.0, 580.0);
        let mut last = distance(cam.position(), goal);
        for _ in 0..300 {
            cam.follow_target(&screen, v2(1500.0, 900.0), ZoomChange::unchanged(1.0));
            let d = distance(cam.position(), goal);
            if last > 1e-3 {
                assert!(d < last, "distance went from {} to {}", last, d);
            } else {
                assert!(d <= last + 1e-4);
            }
            last = d;
        }
        assert!(approx_eq(cam.position().x, goal.x));
        assert!(approx_eq(cam.position().y, goal.y));
    }

    #[test]
    fn test_follow_respects_bounds_for_all_zooms() {
        let screen = Screen::new(640, 320, 4, 1920, 1080).unwrap();
        let targets = [
            v2(-5000.0, -5000.0),
            v2(0.0, 0.0),
            v2(1280.0, 640.0),
            v2(2560.0, 1280.0),
            v2(9000.0, 300.0),
            v2(300.0, 9000.0),
        ];
        let zooms = [1.0, 1.25, 1.5, 2.0, 3.3, 4.0];
        for zoom in zooms {
            for target in targets {
                let mut cam = OrthographicCamera::default();
                cam.set_position(v2(500.0, 100.0));
                let change = cam.set_zoom(zoom);
                for _ in 0..100 {
                    cam.follow_target(&screen, target, change);
                    let max_x = 2560.0 - screen.effective_width() / zoom;
                    let max_y = 1280.0 - screen.effective_height() / zoom;
                    let pos = cam.position();
                    assert!(pos.x >= 0.0 && pos.x <= max_x + EPSILON);
                    assert!(pos.y >= 0.0 && pos.y <= max_y + EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_follow_pins_to_origin_when_view_exceeds_world() {
        // 3000x1500 effective view on a 2560x1280 world
        let screen = Screen::new(640, 320, 4, 3000, 1500).unwrap();
        let mut cam = OrthographicCamera::default();
        cam.follow_target(&screen, v2(2000.0, 1000.0), ZoomChange::unchanged(1.0));
        assert_eq!(cam.position().x, 0.0);
        assert_eq!(cam.position().y, 0.0);
    }

    #[test]
    fn test_zoom_change_keeps_view_center_world_point() {
        let screen = half_size_screen();
        let center = v2(1280.0, 640.0);
        let mut cam = OrthographicCamera::default();
        // Already centered on the world center at zoom 1
        cam.set_position(v2(640.0, 320.0));

        let before = cam.position();
        let change = cam.set_zoom(1.5);
        cam.follow_target(&screen, center, change);

        // Where the lerp alone would have put the view center under the old zoom
        let target_x = center.x - 1280.0 / 3.0;
        let target_y = center.y - 640.0 / 3.0;
        let lerped_center_x = before.x + (target_x - before.x) * 0.1 + 640.0;
        let lerped_center_y = before.y + (target_y - before.y) * 0.1 + 320.0;

        let view_center = cam.view_center(&screen);
        assert!(approx_eq(view_center.x, lerped_center_x));
        assert!(approx_eq(view_center.y, lerped_center_y));
    }

    #[test]
    fn test_centered_camera_without_zoom_change_does_not_move() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        cam.set_zoom(1.5);
        let centered = v2(1280.0 - 1280.0 / 3.0, 640.0 - 640.0 / 3.0);
        cam.set_position(centered);
        cam.follow_target(&screen, v2(1280.0, 640.0), ZoomChange::unchanged(1.5));
        assert!(approx_eq(cam.position().x, centered.x));
        assert!(approx_eq(cam.position().y, centered.y));
    }

    #[test]
    fn test_zoom_out_near_edge_is_clamped() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        cam.set_zoom(4.0);
        // Bottom-right corner of the view area at zoom 4
        cam.set_position(v2(2560.0 - 320.0, 1280.0 - 160.0));
        let change = cam.set_zoom(1.0);
        cam.follow_target(&screen, v2(2560.0, 1280.0), change);
        assert!(cam.position().x <= 1280.0);
        assert!(cam.position().y <= 640.0);
    }

    #[test]
    fn test_matrix_matches_step_by_step_transform() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        let change = cam.set_zoom(2.0);
        cam.set_position(v2(300.0, 200.0));
        cam.follow_target(&screen, v2(900.0, 500.0), change);

        let zoom = cam.zoom_factor();
        let pos = cam.position();
        let cx = screen.effective_width() / (2.0 * zoom);
        let cy = screen.effective_height() / (2.0 * zoom);

        for p in [v2(0.0, 0.0), v2(123.0, 456.0), v2(2560.0, 1280.0)] {
            // translate, scale, offset
            let expected_x = ((p.x - cx - pos.x) * zoom) + cx * zoom;
            let expected_y = ((p.y - cy - pos.y) * zoom) + cy * zoom;
            let got = transform_point(&cam.matrix(), p);
            assert!(approx_eq(got.x, expected_x));
            assert!(approx_eq(got.y, expected_y));
        }

        let m = cam.matrix();
        assert_eq!(m.m10, 1.0);
        assert_eq!(m.m15, 1.0);
        assert_eq!(m.m8, 0.0);
        assert_eq!(m.m14, 0.0);
    }

    #[test]
    fn test_world_to_screen_divides_before_transform() {
        // Pins the current convention: the point is divided by zoom and the
        // matrix scales it back, so the result is point - position * zoom.
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        let change = cam.set_zoom(2.0);
        cam.set_position(v2(100.0, 50.0));
        // Target that keeps the camera exactly where it is
        cam.follow_target(
            &screen,
            v2(100.0 + 320.0, 50.0 + 160.0),
            ZoomChange::unchanged(change.current),
        );
        assert!(approx_eq(cam.position().x, 100.0));
        assert!(approx_eq(cam.position().y, 50.0));

        let screen_pos = cam.world_to_screen(v2(400.0, 200.0));
        assert!(approx_eq(screen_pos.x, 200.0));
        assert!(approx_eq(screen_pos.y, 100.0));
    }

    #[test]
    fn test_raylib_camera_matches_matrix() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        let change = cam.set_zoom(3.0);
        cam.set_position(v2(700.0, 300.0));
        cam.follow_target(&screen, v2(1000.0, 500.0), change);

        let rl_cam = cam.raylib_camera();
        for p in [v2(0.0, 0.0), v2(1000.0, 500.0), v2(2000.0, 1000.0)] {
            // raylib 2D camera: (p - target) * zoom + offset
            let expected_x = (p.x - rl_cam.target.x) * rl_cam.zoom + rl_cam.offset.x;
            let expected_y = (p.y - rl_cam.target.y) * rl_cam.zoom + rl_cam.offset.y;
            let got = transform_point(&cam.matrix(), p);
            assert!(approx_eq(got.x, expected_x));
            assert!(approx_eq(got.y, expected_y));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "current zoom")]
    fn test_follow_rejects_stale_zoom_change() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        // The change returned here is dropped, so the next follow gets a stale one.
        let _ = cam.set_zoom(2.0);
        cam.follow_target(&screen, v2(640.0, 320.0), ZoomChange::unchanged(1.0));
    }

    #[test]
    fn test_set_position_refreshes_matrix() {
        let mut cam = OrthographicCamera::default();
        cam.set_position(v2(10.0, 20.0));
        let origin = transform_point(&cam.matrix(), v2(10.0, 20.0));
        assert!(approx_eq(origin.x, 0.0));
        assert!(approx_eq(origin.y, 0.0));
    }

    #[test]
    fn test_visible_area_scales_with_zoom() {
        let screen = half_size_screen();
        let mut cam = OrthographicCamera::default();
        cam.set_zoom(2.0);
        cam.set_position(v2(50.0, 60.0));
        let area = cam.visible_area(&screen);
        assert_eq!(area.x, 50.0);
        assert_eq!(area.y, 60.0);
        assert!(approx_eq(area.width, 640.0));
        assert!(approx_eq(area.height, 320.0));
    }

    #[test]
    fn test_clamp_min_first_handles_reversed_bounds() {
        assert_eq!(clamp_min_first(5.0, 0.0, -10.0), 0.0);
        assert_eq!(clamp_min_first(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_min_first(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_min_first(5.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn test_target_to_world_inverts_matrix() {
        let mut camera = OrthographicCamera::default();
        camera.set_zoom(2.0);
        camera.set_position(v2(100.0, 40.0));
        let world = v2(150.0, 90.0);
        let on_target = transform_point(&camera.matrix(), world);
        let back = camera.target_to_world(on_target);
        assert!(approx_eq(back.x, world.x));
        assert!(approx_eq(back.y, world.y));
    }

    #[test]
    fn test_lerp_v2() {
        let p = lerp_v2(v2(0.0, 10.0), v2(100.0, 20.0), 0.1);
        assert!(approx_eq(p.x, 10.0));
        assert!(approx_eq(p.y, 11.0));
    }
}
