use glam::{UVec2, Vec2};
use sdl2::rect::Rect;

use crate::error::TextureError;

/// Addresses one frame of a sprite sheet laid out as a uniform grid.
///
/// Columns are animation frames and rows are animations (usually one per
/// facing direction). Every sprite draw goes through this type, so the
/// sheet arithmetic lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteFrame {
    pub frame: u32,
    pub row: u32,
    pub frame_count: u32,
    pub row_count: u32,
}

impl SpriteFrame {
    pub const fn new(frame: u32, row: u32, frame_count: u32, row_count: u32) -> Self {
        Self {
            frame,
            row,
            frame_count,
            row_count,
        }
    }

    /// A sheet with a single frame covering the whole texture.
    pub const fn whole() -> Self {
        Self::new(0, 0, 1, 1)
    }

    /// Validates the layout before it is used for drawing.
    pub fn checked(frame: u32, row: u32, frame_count: u32, row_count: u32) -> Result<Self, TextureError> {
        if frame_count == 0 || row_count == 0 {
            return Err(TextureError::InvalidLayout(format!(
                "sheet must have at least one frame and one row, got {frame_count}x{row_count}"
            )));
        }
        if frame >= frame_count || row >= row_count {
            return Err(TextureError::InvalidLayout(format!(
                "frame ({frame}, {row}) is outside a {frame_count}x{row_count} sheet"
            )));
        }
        Ok(Self::new(frame, row, frame_count, row_count))
    }

    /// Texture-space offset of the frame's corner.
    pub fn uv_offset(&self) -> Vec2 {
        Vec2::new(
            self.frame as f32 / self.frame_count as f32,
            self.row as f32 / self.row_count as f32,
        )
    }

    /// Texture-space size of one frame.
    pub fn uv_scale(&self) -> Vec2 {
        Vec2::new(1.0 / self.frame_count as f32, 1.0 / self.row_count as f32)
    }

    /// Size of one frame in pixels for a sheet texture of `texture_size`.
    pub fn frame_size(&self, texture_size: UVec2) -> UVec2 {
        UVec2::new(texture_size.x / self.frame_count, texture_size.y / self.row_count)
    }

    /// Pixel rectangle of this frame within a sheet texture of `texture_size`.
    pub fn source_rect(&self, texture_size: UVec2) -> Rect {
        let size = self.frame_size(texture_size);
        Rect::new(
            (self.frame * size.x) as i32,
            (self.row * size.y) as i32,
            size.x.max(1),
            size.y.max(1),
        )
    }

    /// Same sheet, another frame. Wraps around the frame count.
    pub fn with_frame(self, frame: u32) -> Self {
        Self {
            frame: frame % self.frame_count,
            ..self
        }
    }

    /// Same sheet, another row. Wraps around the row count.
    pub fn with_row(self, row: u32) -> Self {
        Self {
            row: row % self.row_count,
            ..self
        }
    }
}

impl Default for SpriteFrame {
    fn default() -> Self {
        Self::whole()
    }
}
