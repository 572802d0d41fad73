//! This module contains all the constants shared by the demos.

use std::time::Duration;

use glam::{UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// How often the FPS readout in the window title is refreshed.
pub const TITLE_REFRESH: Duration = Duration::from_millis(100);

/// Default window size of the tile-map explorer, in pixels.
pub const MAP_WINDOW_SIZE: UVec2 = UVec2::new(800, 600);
/// Window size of the parallax walker and the sprite showcase, in pixels.
pub const SQUARE_WINDOW_SIZE: UVec2 = UVec2::new(800, 800);

/// Default animation cadence for every sprite sheet, in frames per second.
pub const ANIMATION_FPS: f32 = 12.0;
/// Highest accepted animation cadence, in frames per second.
pub const MAX_ANIMATION_FPS: f32 = 1000.0;

/// Tile id a collected item leaves behind.
pub const EMPTY_TILE_ID: usize = 0;
/// Tile id a transform-on-entry tile becomes once visited.
pub const VISITED_TILE_ID: usize = 1;

/// Layout of the walking character sheet shipped with the demos.
pub mod character {
    /// One row per facing direction.
    pub const ROWS: u32 = 4;
    /// Frames in each walk cycle.
    pub const FRAMES: u32 = 6;
    pub const SHEET: &str = "sprites/Vampires1_Walk_full.png";
}

/// Parallax walker tuning.
pub mod parallax {
    use glam::Vec2;

    /// Scroll factor of each background layer, back to front.
    pub const LAYER_FACTORS: [f32; 6] = [0.1, 0.2, 0.4, 0.6, 0.8, 1.0];
    /// World units to pixels for background scrolling.
    pub const BACKGROUND_SPEED: f32 = 500.0;
    /// Walker speed, in world units per second.
    pub const WALK_SPEED: f32 = 2.0;
    pub const SPRITE_SIZE: Vec2 = Vec2::splat(100.0);
    pub const START: Vec2 = Vec2::new(800.0 / 2.0 - 200.0, 800.0 / 2.0);
}

pub const SHOWCASE_TEXTURE: &str = "Vampirinho.png";

/// Initial placement of the showcase sprites: `(position, size)`.
pub const SHOWCASE_SPRITES: [(Vec2, Vec2); 2] = [
    (Vec2::new(400.0, 400.0), Vec2::splat(100.0)),
    (Vec2::new(200.0, 200.0), Vec2::splat(150.0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_tile_ids_are_distinct() {
        assert_ne!(EMPTY_TILE_ID, VISITED_TILE_ID);
    }

    #[test]
    fn test_layer_factors_increase() {
        assert!(parallax::LAYER_FACTORS.windows(2).all(|w| w[0] < w[1]));
    }
}
