//! Tile world resource.
//!
//! The world is a grid of square tiles covering the target resolution
//! exactly. Each tile stores an index into a small palette; the render pass
//! draws one filled square per tile.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use raylib::prelude::{Color, Rectangle};

/// Side of a tile in world units.
pub const TILE_SIZE: u32 = 16;

/// Seed for the tile layout, fixed so every run shows the same world.
pub const TILE_SEED: u64 = 0;

/// Ground colors the tiles pick from.
pub const PALETTE: [Color; 4] = [
    Color::new(58, 94, 51, 255),
    Color::new(71, 112, 60, 255),
    Color::new(94, 78, 54, 255),
    Color::new(62, 99, 55, 255),
];

#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    tile_size: u32,
    columns: u32,
    rows: u32,
    tiles: Vec<u8>,
}

impl TileGrid {
    /// Fill a `world_width x world_height` area with randomly colored tiles.
    ///
    /// Partial tiles at the right/bottom edges are dropped.
    pub fn generate(world_width: u32, world_height: u32, tile_size: u32, seed: u64) -> Self {
        let tile_size = tile_size.max(1);
        let columns = world_width / tile_size;
        let rows = world_height / tile_size;

        let mut rng = Rng::with_seed(seed);
        let tiles = (0..columns * rows)
            .map(|_| rng.u8(0..PALETTE.len() as u8))
            .collect();

        Self {
            tile_size,
            columns,
            rows,
            tiles,
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Palette color of the tile at (`column`, `row`), if inside the grid.
    pub fn color_at(&self, column: u32, row: u32) -> Option<Color> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let index = self.tiles[(row * self.columns + column) as usize];
        Some(PALETTE[index as usize])
    }

    /// World rectangle of every tile together with its color, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Rectangle, Color)> + '_ {
        let size = self.tile_size as f32;
        self.tiles.iter().enumerate().map(move |(i, &index)| {
            let column = i as u32 % self.columns;
            let row = i as u32 / self.columns;
            (
                Rectangle {
                    x: column as f32 * size,
                    y: row as f32 * size,
                    width: size,
                    height: size,
                },
                PALETTE[index as usize],
            )
        })
    }
}
