//! Scene setup.
//!
//! [`setup`] builds the single scene: the tile world covering the target
//! resolution, the camera configured from [`GameConfig`], and the player box
//! the camera follows.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Color;

use crate::components::boxshape::BoxShape;
use crate::components::cameratarget::CameraTarget;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::camera::OrthographicCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::screen::Screen;
use crate::resources::tilegrid::{TILE_SEED, TILE_SIZE, TileGrid};

/// Side of the player box in world units.
pub const PLAYER_SIZE: f32 = 16.0;

pub fn setup(mut commands: Commands, config: Res<GameConfig>, screen: Res<Screen>) {
    let grid = TileGrid::generate(
        screen.target_width(),
        screen.target_height(),
        TILE_SIZE,
        TILE_SEED,
    );
    info!(
        "World {}x{} ({}x{} tiles)",
        screen.target_width(),
        screen.target_height(),
        grid.columns(),
        grid.rows()
    );
    commands.insert_resource(grid);
    commands.insert_resource(OrthographicCamera::new(config.camera_settings()));

    commands.spawn((
        MapPosition::new(0.0, 0.0),
        RigidBody::new(),
        InputControlled::new(config.player_speed),
        CameraTarget,
        BoxShape::square(PLAYER_SIZE, Color::RED),
    ));
}
