//! Level data provider
//!
//! Hand-authored layouts as plain coordinate lists: the built-in demo level
//! or a JSON spec. Only obstacle placement lives here; frame sets come from
//! the asset collaborator.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};
use crate::sim::{CollisionMask, FireSprites, Obstacle, Rect};

/// Placement of every obstacle in a level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Top-left corners of solid terrain tiles, each `TILE_SIZE` square
    pub blocks: Vec<[f32; 2]>,
    /// Top-left corners of fire traps
    pub fires: Vec<[f32; 2]>,
}

impl LevelSpec {
    /// Parse a hand-authored JSON level
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Instantiate the obstacle collection
    ///
    /// Terrain tiles get a fully solid mask; each fire trap clones the
    /// supplied frame sets.
    pub fn build(&self, fire_sprites: &FireSprites) -> Vec<Obstacle> {
        let tile = TILE_SIZE as u32;
        let tile_mask = CollisionMask::filled(tile, tile);
        let mut obstacles: Vec<Obstacle> = self
            .blocks
            .iter()
            .map(|&[x, y]| {
                Obstacle::solid(Rect::new(x, y, TILE_SIZE, TILE_SIZE), tile_mask.clone())
            })
            .collect();
        obstacles.extend(
            self.fires
                .iter()
                .map(|&[x, y]| Obstacle::fire(x, y, fire_sprites.clone())),
        );
        obstacles
    }

    /// The built-in layout: a long floor, stairs, gaps, a zig-zag climb,
    /// isolated jump targets, and a row of fire traps along the floor
    pub fn demo() -> Self {
        let size = TILE_SIZE;
        // Tile column `col`, `rows` tiles up from the bottom of the screen
        let at = |col: i32, rows: i32| [col as f32 * size, SCREEN_HEIGHT - size * rows as f32];

        let mut blocks = Vec::new();

        // Floor strip running well past both viewport edges
        let first = (-SCREEN_WIDTH / size) as i32;
        let last = (SCREEN_WIDTH * 10.0 / size) as i32;
        for col in first..last {
            blocks.push(at(col, 1));
        }

        // Elevated platforms
        blocks.push(at(10, 5));
        blocks.push(at(15, 2));
        blocks.push(at(16, 2));
        blocks.push(at(17, 2));

        // Challenging gaps
        blocks.push(at(20, 4));
        blocks.push(at(24, 4));

        // High platform
        for col in 25..30 {
            blocks.push(at(col, 6));
        }

        // Stair-like ascending platforms
        for i in 0..5 {
            blocks.push(at(2 + i, 2 + i));
        }

        // Isolated platforms requiring precise jumps
        blocks.push(at(8, 7));
        blocks.push(at(22, 5));
        blocks.push(at(23, 5));

        // A longer jump with a landing platform after the gap
        blocks.push(at(13, 3));
        blocks.push(at(19, 3));

        // The highest point of the level
        blocks.push(at(28, 7));
        blocks.push(at(29, 8));

        // Zig-zag climb
        blocks.push(at(12, 6));
        blocks.push(at(13, 7));
        blocks.push(at(14, 8));

        // Small-platform maze
        for j in 1..5 {
            blocks.push(at(30 - j, 2 + j));
            blocks.push(at(25 - j, 3 + j));
        }

        // Fire row on the floor, three trap widths per tile
        let fires = (9..45)
            .map(|i| [i as f32 * size / 3.0, SCREEN_HEIGHT - size - 64.0])
            .collect();

        Self { blocks, fires }
    }
}
