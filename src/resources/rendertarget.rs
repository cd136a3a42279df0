//! Render target resource for fixed-resolution rendering.
//!
//! The world is drawn into a texture the size of the target resolution, which
//! is then blitted into the window at the
//! [`Screen::presentation_rect`](crate::resources::screen::Screen::presentation_rect).

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::resources::screen::Screen;

/// Render texture at the target resolution.
///
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    /// Create a render target matching the screen's target resolution.
    ///
    /// Uses point filtering so tile edges stay sharp when scaled.
    pub fn new(rl: &mut RaylibHandle, th: &RaylibThread, screen: &Screen) -> Result<Self, String> {
        let width = screen.target_width();
        let height = screen.target_height();
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create {}x{} render texture: {}", width, height, e))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            width,
            height,
        })
    }

    /// Source rectangle for drawing this texture.
    ///
    /// Negative height flips the Y axis, compensating for OpenGL's inverted
    /// texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32),
        }
    }
}
