use glam::UVec2;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture};

use crate::error::TextureError;
use crate::texture::sprite::SpriteFrame;

pub mod animated;
pub mod sprite;

/// A loaded texture together with its pixel size, so sheet frames can be addressed.
pub struct SheetTexture {
    pub texture: Texture,
    pub size: UVec2,
}

impl SheetTexture {
    pub fn new(texture: Texture) -> Self {
        let query = texture.query();
        Self {
            texture,
            size: UVec2::new(query.width, query.height),
        }
    }

    /// Copies one sheet frame into `dest`.
    pub fn render<C: RenderTarget>(&self, canvas: &mut Canvas<C>, frame: SpriteFrame, dest: Rect) -> Result<(), TextureError> {
        canvas
            .copy(&self.texture, frame.source_rect(self.size), dest)
            .map_err(TextureError::RenderFailed)
    }

    /// Copies one sheet frame into `dest`, rotated by `angle` degrees around its center.
    pub fn render_rotated<C: RenderTarget>(
        &self,
        canvas: &mut Canvas<C>,
        frame: SpriteFrame,
        dest: Rect,
        angle: f64,
    ) -> Result<(), TextureError> {
        canvas
            .copy_ex(&self.texture, frame.source_rect(self.size), dest, angle, None, false, false)
            .map_err(TextureError::RenderFailed)
    }
}
