//! Screen resolution resource.
//!
//! Tracks the three resolutions the camera and the presentation pass work
//! with:
//! - the fixed *target* resolution the world is authored against and the
//!   render target is sized to,
//! - the *viewport*, i.e. the physical window size, refreshed every frame,
//! - the *effective* resolution, the part of the viewport used to frame the
//!   world. It equals the viewport until the window outgrows the target, then
//!   keeps the target aspect ratio.
//!
//! The same aspect fit drives [`Screen::presentation_rect`], the letterboxed
//! (or pillarboxed) destination of the final blit.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

/// Base logical width before scaling.
pub const DEFAULT_BASE_WIDTH: u32 = 640;
/// Base logical height before scaling.
pub const DEFAULT_BASE_HEIGHT: u32 = 320;
/// Integer factor applied to the base resolution to get the target resolution.
pub const DEFAULT_SCALE_FACTOR: u32 = 4;

/// Target, viewport and effective resolutions.
///
/// Target dimensions never change after construction. Viewport and effective
/// dimensions are updated through [`Screen::calculate_effective_resolution`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    target_width: u32,
    target_height: u32,
    viewport_width: i32,
    viewport_height: i32,
    effective_width: f32,
    effective_height: f32,
}

impl Screen {
    /// Create a screen whose target resolution is `base * scale_factor`.
    ///
    /// Fails when the target would be empty or the initial viewport has a
    /// non-positive dimension.
    pub fn new(
        base_width: u32,
        base_height: u32,
        scale_factor: u32,
        viewport_width: i32,
        viewport_height: i32,
    ) -> Result<Self, String> {
        if base_width == 0 || base_height == 0 || scale_factor == 0 {
            return Err(format!(
                "Invalid target resolution: {}x{} scaled by {}",
                base_width, base_height, scale_factor
            ));
        }
        let target_width = base_width
            .checked_mul(scale_factor)
            .ok_or_else(|| format!("Target width overflows: {} * {}", base_width, scale_factor))?;
        let target_height = base_height.checked_mul(scale_factor).ok_or_else(|| {
            format!("Target height overflows: {} * {}", base_height, scale_factor)
        })?;

        let mut screen = Self {
            target_width,
            target_height,
            viewport_width: 0,
            viewport_height: 0,
            effective_width: 0.0,
            effective_height: 0.0,
        };
        screen.calculate_effective_resolution(viewport_width, viewport_height)?;
        Ok(screen)
    }

    /// Store a new viewport size and recompute the effective resolution.
    ///
    /// While the viewport fits inside the target in both dimensions the world
    /// is framed 1:1 and the effective resolution is the viewport itself.
    /// Once it is larger in either dimension, the effective resolution is the
    /// biggest target-shaped area that fits the viewport: width-constrained
    /// when the viewport is relatively taller than the target, otherwise
    /// height-constrained.
    ///
    /// Non-positive sizes are rejected and leave the screen untouched.
    pub fn calculate_effective_resolution(
        &mut self,
        viewport_width: i32,
        viewport_height: i32,
    ) -> Result<(), String> {
        if viewport_width <= 0 || viewport_height <= 0 {
            return Err(format!(
                "Invalid viewport size: {}x{}",
                viewport_width, viewport_height
            ));
        }

        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;

        let (effective_width, effective_height) = if self.is_larger_than_target() {
            let preferred_aspect = self.preferred_aspect();
            if self.output_aspect() <= preferred_aspect {
                (
                    viewport_width as f32,
                    viewport_width as f32 / preferred_aspect,
                )
            } else {
                (
                    viewport_height as f32 * preferred_aspect,
                    viewport_height as f32,
                )
            }
        } else {
            (viewport_width as f32, viewport_height as f32)
        };

        self.effective_width = effective_width;
        self.effective_height = effective_height;
        Ok(())
    }

    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    pub fn target_height(&self) -> u32 {
        self.target_height
    }

    pub fn viewport_width(&self) -> i32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    pub fn effective_width(&self) -> f32 {
        self.effective_width
    }

    pub fn effective_height(&self) -> f32 {
        self.effective_height
    }

    /// Aspect ratio of the target resolution.
    pub fn preferred_aspect(&self) -> f32 {
        self.target_width as f32 / self.target_height as f32
    }

    /// Aspect ratio of the current viewport.
    pub fn output_aspect(&self) -> f32 {
        self.viewport_width as f32 / self.viewport_height as f32
    }

    /// True when the viewport exceeds the target in either dimension.
    pub fn is_larger_than_target(&self) -> bool {
        i64::from(self.viewport_width) > i64::from(self.target_width)
            || i64::from(self.viewport_height) > i64::from(self.target_height)
    }

    /// Destination rectangle for drawing the render target into the window.
    ///
    /// Small windows get the render target drawn 1:1 from the top-left corner
    /// (the window crops it). Larger windows get it scaled to fit, centered,
    /// with bars on top/bottom (letterbox) or on the sides (pillarbox).
    /// Sizes and bar offsets are truncated to whole pixels.
    pub fn presentation_rect(&self) -> Rectangle {
        if !self.is_larger_than_target() {
            return Rectangle {
                x: 0.0,
                y: 0.0,
                width: self.target_width as f32,
                height: self.target_height as f32,
            };
        }

        let preferred_aspect = self.preferred_aspect();
        if self.output_aspect() <= preferred_aspect {
            let present_height = (self.viewport_width as f32 / preferred_aspect) as i32;
            let bar_height = (self.viewport_height - present_height) / 2;
            Rectangle {
                x: 0.0,
                y: bar_height as f32,
                width: self.viewport_width as f32,
                height: present_height as f32,
            }
        } else {
            let present_width = (self.viewport_height as f32 * preferred_aspect) as i32;
            let bar_width = (self.viewport_width - present_width) / 2;
            Rectangle {
                x: bar_width as f32,
                y: 0.0,
                width: present_width as f32,
                height: self.viewport_height as f32,
            }
        }
    }

    /// Map a window-space position (e.g. the mouse) into render-target space.
    ///
    /// Positions on the bars are clamped to the render target edges.
    pub fn window_to_target(&self, window_pos: Vector2) -> Vector2 {
        let rect = self.presentation_rect();
        let target_w = self.target_width as f32;
        let target_h = self.target_height as f32;

        let scale_x = target_w / rect.width;
        let scale_y = target_h / rect.height;

        Vector2 {
            x: ((window_pos.x - rect.x) * scale_x).clamp(0.0, target_w),
            y: ((window_pos.y - rect.y) * scale_y).clamp(0.0, target_h),
        }
    }
}

impl Default for Screen {
    /// 2560x1280 target with a viewport of the same size.
    fn default() -> Self {
        let target_width = DEFAULT_BASE_WIDTH * DEFAULT_SCALE_FACTOR;
        let target_height = DEFAULT_BASE_HEIGHT * DEFAULT_SCALE_FACTOR;
        Self {
            target_width,
            target_height,
            viewport_width: target_width as i32,
            viewport_height: target_height as i32,
            effective_width: target_width as f32,
            effective_height: target_height as f32,
        }
    }
}
