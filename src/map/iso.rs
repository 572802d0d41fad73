//! Isometric projection of the tile grid onto the screen.

use glam::{UVec2, Vec2};
use sdl2::rect::Rect;

use crate::map::state::Cell;

/// Maps grid cells to screen positions for a diamond-shaped map layout.
///
/// Cell `(i, j)` has its quad's top-left corner at
/// `x = x0 + (j - i) * w/2`, `y = y0 + (j + i) * h/2`.
/// The origin `(x0, y0)` is chosen once so the whole diamond is centered in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    origin: Vec2,
    tile_size: Vec2,
    width: usize,
    height: usize,
}

impl IsoProjection {
    /// Centers a `width` x `height` grid of `tile_size` tiles in `viewport`.
    pub fn centered(viewport: UVec2, tile_size: UVec2, width: usize, height: usize) -> Self {
        let tile = tile_size.as_vec2();
        let span = (width + height) as f32;
        let map_size = Vec2::new(span * tile.x / 2.0, span * tile.y / 2.0);

        // Leftmost quad belongs to the last row's first cell, `(height - 1)` half-tiles left of the origin.
        let left = (viewport.x as f32 - map_size.x) / 2.0;
        let top = (viewport.y as f32 - map_size.y) / 2.0;
        let origin = Vec2::new(left + (height as f32 - 1.0) * tile.x / 2.0, top);

        Self {
            origin,
            tile_size: tile,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// Top-left corner of a cell's quad.
    pub fn cell_to_screen(&self, cell: Cell) -> Vec2 {
        let (i, j) = (cell.row as f32, cell.col as f32);
        Vec2::new(
            self.origin.x + (j - i) * self.tile_size.x / 2.0,
            self.origin.y + (j + i) * self.tile_size.y / 2.0,
        )
    }

    /// Inverse of [`cell_to_screen`](Self::cell_to_screen) for a quad corner.
    /// Rounds to the nearest cell and returns `None` off the grid.
    pub fn screen_to_cell(&self, corner: Vec2) -> Option<Cell> {
        let half = self.tile_size / 2.0;
        let a = (corner.x - self.origin.x) / half.x; // j - i
        let b = (corner.y - self.origin.y) / half.y; // j + i

        let row = ((b - a) / 2.0).round();
        let col = ((a + b) / 2.0).round();
        if row < 0.0 || col < 0.0 || row >= self.height as f32 || col >= self.width as f32 {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }

    /// Picks the cell whose diamond center is closest to a screen point.
    pub fn point_to_cell(&self, point: Vec2) -> Option<Cell> {
        self.screen_to_cell(point - self.tile_size / 2.0)
    }

    /// Destination rectangle of a cell's tile quad.
    pub fn tile_rect(&self, cell: Cell) -> Rect {
        let corner = self.cell_to_screen(cell);
        Rect::new(
            corner.x.round() as i32,
            corner.y.round() as i32,
            self.tile_size.x as u32,
            self.tile_size.y as u32,
        )
    }

    /// Destination rectangle of a character standing on a cell.
    ///
    /// The sprite is tile-sized and centered at `(w/2, h/4)` from the quad corner,
    /// so its feet sit on the diamond.
    pub fn sprite_rect(&self, cell: Cell) -> Rect {
        let corner = self.cell_to_screen(cell);
        let center = corner + Vec2::new(self.tile_size.x * 0.5, self.tile_size.y * 0.25);
        let top_left = center - self.tile_size / 2.0;
        Rect::new(
            top_left.x.round() as i32,
            top_left.y.round() as i32,
            self.tile_size.x as u32,
            self.tile_size.y as u32,
        )
    }
}
