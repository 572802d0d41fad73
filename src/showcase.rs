//! Several textured sprites, each with its own position, size and rotation.

use glam::Vec2;
use sdl2::event::Event;
use sdl2::keyboard::KeyboardState;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::app::{Flow, Scene};
use crate::asset::{Asset, AssetLoader};
use crate::constants::SHOWCASE_SPRITES;
use crate::error::GameResult;
use crate::texture::sprite::SpriteFrame;
use crate::texture::SheetTexture;

/// Placement of one sprite on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Center of the sprite, in pixels.
    pub position: Vec2,
    /// Drawn size, in pixels.
    pub scale: Vec2,
    /// Clockwise rotation, in degrees.
    pub rotation: f32,
    /// Index into the scene's texture list.
    pub texture: usize,
}

impl Sprite {
    pub fn new(position: Vec2, scale: Vec2, texture: usize) -> Self {
        Self {
            position,
            scale,
            rotation: 0.0,
            texture,
        }
    }

    /// Destination rectangle centered on `position`.
    pub fn dest_rect(&self) -> Rect {
        let top_left = self.position - self.scale / 2.0;
        Rect::new(
            top_left.x.round() as i32,
            top_left.y.round() as i32,
            self.scale.x.max(0.0) as u32,
            self.scale.y.max(0.0) as u32,
        )
    }
}

/// Sprite showcase scene.
pub struct Showcase {
    textures: Vec<SheetTexture>,
    pub sprites: Vec<Sprite>,
}

impl Showcase {
    /// Loads one texture per default sprite and places them.
    ///
    /// # Errors
    ///
    /// Fails if the sprite image is missing or cannot be decoded.
    pub fn new(assets: &AssetLoader<'_>) -> GameResult<Self> {
        let mut textures = Vec::with_capacity(SHOWCASE_SPRITES.len());
        let mut sprites = Vec::with_capacity(SHOWCASE_SPRITES.len());
        for (position, size) in SHOWCASE_SPRITES {
            sprites.push(Sprite::new(position, size, textures.len()));
            textures.push(assets.load(&Asset::ShowcaseSprite)?);
        }

        Ok(Self { textures, sprites })
    }
}

impl Scene for Showcase {
    const TITLE: &'static str = "Multiple Sprites";

    fn event(&mut self, _event: &Event) -> Flow {
        Flow::Continue
    }

    fn update(&mut self, _dt: f32, _keyboard: &KeyboardState) -> Flow {
        Flow::Continue
    }

    fn draw(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        for sprite in &self.sprites {
            if let Some(texture) = self.textures.get(sprite.texture) {
                texture.render_rotated(canvas, SpriteFrame::whole(), sprite.dest_rect(), sprite.rotation as f64)?;
            }
        }
        Ok(())
    }
}
