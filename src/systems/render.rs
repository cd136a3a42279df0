//! Rendering.
//!
//! A frame is drawn in two passes:
//! 1. the world (tiles, then boxes) into the [`RenderTarget`] texture through
//!    the camera transform,
//! 2. that texture scaled into the window at the screen's presentation
//!    rectangle, followed by the debug overlay in window pixels.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxshape::BoxShape;
use crate::components::mapposition::MapPosition;
use crate::resources::camera::OrthographicCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screen::Screen;
use crate::resources::tilegrid::TileGrid;
use crate::resources::worldtime::WorldTime;

const OVERLAY_FONT_SIZE: i32 = 10;
const OVERLAY_LINE_HEIGHT: i32 = 14;

/// Draw one frame.
///
/// The raylib handle, thread and render target are taken out of the world for
/// the duration of the frame so the world can be queried while drawing.
pub fn render_frame(world: &mut World) -> Result<(), String> {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .ok_or_else(|| "RaylibHandle missing from world".to_string())?;
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return Err("RaylibThread missing from world".to_string());
    };
    let Some(mut target) = world.remove_non_send_resource::<RenderTarget>() else {
        world.insert_non_send_resource(rl);
        world.insert_non_send_resource(thread);
        return Err("RenderTarget missing from world".to_string());
    };

    {
        let camera = world.resource::<OrthographicCamera>().raylib_camera();
        let presentation = world.resource::<Screen>().presentation_rect();

        let mut d = rl.begin_drawing(&thread);
        {
            let mut texture_mode = d.begin_texture_mode(&thread, &mut target.texture);
            texture_mode.clear_background(Color::BLACK);
            let mut d2 = texture_mode.begin_mode2D(camera);
            render_pass(world, &mut d2);
        }

        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &target.texture,
            target.source_rect(),
            presentation,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(target);
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
    Ok(())
}

/// Draw the tile world and every box in world coordinates.
///
/// `d` must already carry the camera transform.
pub fn render_pass<D: RaylibDraw>(world: &mut World, d: &mut D) {
    if let Some(grid) = world.get_resource::<TileGrid>() {
        for (rect, color) in grid.iter() {
            d.draw_rectangle_rec(rect, color);
        }
    }

    let mut boxes = world.query::<(&BoxShape, &MapPosition)>();
    for (shape, position) in boxes.iter(world) {
        d.draw_rectangle_rec(
            Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: shape.width,
                height: shape.height,
            },
            shape.color,
        );
    }

    if world.contains_resource::<DebugMode>() {
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            let (x, y) = (position.pos.x as i32, position.pos.y as i32);
            d.draw_line(x - 5, y, x + 5, y, Color::GREEN);
            d.draw_line(x, y - 5, x, y + 5, Color::GREEN);
        }
    }
}

/// Draw the camera and screen diagnostics in window pixels.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<Screen>();
    let camera = *world.resource::<OrthographicCamera>();
    let time = *world.resource::<WorldTime>();

    let lines = debug_overlay_lines(&screen, &camera, &time, d.get_fps(), d.get_mouse_position());
    for (i, line) in lines.iter().enumerate() {
        let y = 10 + i as i32 * OVERLAY_LINE_HEIGHT;
        d.draw_text(line, 11, y + 1, OVERLAY_FONT_SIZE, Color::BLACK);
        d.draw_text(line, 10, y, OVERLAY_FONT_SIZE, Color::WHITE);
    }
}

/// Text of the debug overlay, one entry per line.
///
/// `mouse_window` is the mouse position in window pixels.
pub fn debug_overlay_lines(
    screen: &Screen,
    camera: &OrthographicCamera,
    time: &WorldTime,
    fps: u32,
    mouse_window: Vector2,
) -> Vec<String> {
    let mouse_target = screen.window_to_target(mouse_window);
    let mouse_world = camera.target_to_world(mouse_target);
    let view = camera.visible_area(screen);

    vec![
        format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
        format!("Ticks: {} Time: {:.2}s", time.frame_count, time.elapsed),
        format!(
            "View: ({:.1}, {:.1}) {:.0}x{:.0} Zoom: {:.2}",
            view.x,
            view.y,
            view.width,
            view.height,
            camera.zoom_factor()
        ),
        format!(
            "Effective: {:.0}x{:.0} Viewport: {}x{} Target: {}x{}",
            screen.effective_width(),
            screen.effective_height(),
            screen.viewport_width(),
            screen.viewport_height(),
            screen.target_width(),
            screen.target_height()
        ),
        format!(
            "Mouse target: ({:.1}, {:.1}) World: ({:.1}, {:.1})",
            mouse_target.x, mouse_target.y, mouse_world.x, mouse_world.y
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_reports_view_and_ticks() {
        let screen = Screen::new(640, 320, 4, 1280, 720).unwrap();
        let mut camera = OrthographicCamera::default();
        camera.set_zoom(2.0);
        camera.set_position(Vector2 { x: 100.0, y: 40.0 });
        let time = WorldTime {
            elapsed: 1.5,
            delta: 1.0 / 60.0,
            frame_count: 90,
        };

        let lines = debug_overlay_lines(&screen, &camera, &time, 120, Vector2 { x: 20.0, y: 10.0 });

        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("FPS: 120"));
        assert_eq!(lines[1], "Ticks: 90 Time: 1.50s");
        assert_eq!(lines[2], "View: (100.0, 40.0) 640x360 Zoom: 2.00");
        assert_eq!(lines[3], "Effective: 1280x720 Viewport: 1280x720 Target: 2560x1280");
        assert_eq!(lines[4], "Mouse target: (20.0, 10.0) World: (110.0, 45.0)");
    }
}
