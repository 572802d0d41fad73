//! The parallax walker: a character walking in front of wrap-around background layers.

use glam::{UVec2, Vec2};
use sdl2::event::Event;
use sdl2::keyboard::KeyboardState;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::app::{Flow, Scene};
use crate::asset::{Asset, AssetLoader};
use crate::config::Config;
use crate::constants::{character, parallax};
use crate::error::GameResult;
use crate::input::walk_direction;
use crate::map::direction::Direction;
use crate::texture::animated::{AnimatedSprite, FrameClock};
use crate::texture::sprite::SpriteFrame;
use crate::texture::SheetTexture;

/// Floating-point modulus mapped into `[0, size)`.
pub fn wrap(value: f32, size: f32) -> f32 {
    let wrapped = value % size;
    if wrapped < 0.0 {
        wrapped + size
    } else {
        wrapped
    }
}

/// Scroll offset of a layer, in pixels within `[0, viewport)`, for a camera at `scroll`.
pub fn layer_offset(scroll: Vec2, factor: f32, viewport: Vec2) -> Vec2 {
    Vec2::new(
        wrap(-scroll.x * parallax::BACKGROUND_SPEED * factor, viewport.x),
        wrap(-scroll.y * parallax::BACKGROUND_SPEED * factor, viewport.y),
    )
}

/// The four viewport-sized copies that cover the screen for a given offset.
pub fn layer_tiles(offset: Vec2, viewport: UVec2) -> [Rect; 4] {
    let (w, h) = (viewport.x as i32, viewport.y as i32);
    let x = -offset.x.round() as i32;
    let y = -offset.y.round() as i32;
    [
        Rect::new(x, y, viewport.x, viewport.y),
        Rect::new(x + w, y, viewport.x, viewport.y),
        Rect::new(x, y + h, viewport.x, viewport.y),
        Rect::new(x + w, y + h, viewport.x, viewport.y),
    ]
}

/// Walk-cycle row for each held direction in the walker's sheet.
pub const fn walk_row(direction: Direction) -> u32 {
    match direction {
        Direction::Up => 1,
        Direction::Left => 2,
        Direction::Right => 3,
        _ => 0,
    }
}

/// Moves the walking character and the world scroll from held keys.
#[derive(Debug, Clone)]
pub struct Walker {
    pub position: Vec2,
    pub size: Vec2,
    /// Camera position driving the background layers, in world units.
    pub scroll: Vec2,
    pub speed: f32,
    max_y: f32,
    sprite: AnimatedSprite,
}

impl Walker {
    pub fn new(position: Vec2, viewport: UVec2, clock: FrameClock) -> Self {
        let size = parallax::SPRITE_SIZE;
        Self {
            position,
            size,
            scroll: Vec2::ZERO,
            speed: parallax::WALK_SPEED,
            max_y: (viewport.y as f32 - size.y).max(0.0),
            sprite: AnimatedSprite::new(SpriteFrame::new(0, 0, character::FRAMES, character::ROWS), clock),
        }
    }

    /// Steps the walker for one frame. Returns whether it moved.
    ///
    /// Scrolling right pushes the sprite left on screen, matching how the layers
    /// slide, and the walk cycle only advances while a key is held.
    pub fn update(&mut self, dt: f32, direction: Option<Direction>) -> bool {
        let Some(direction) = direction else {
            self.sprite.tick(dt, false);
            return false;
        };

        let step = self.speed * dt;
        let delta = match direction {
            Direction::Up => Vec2::new(0.0, step),
            Direction::Down => Vec2::new(0.0, -step),
            Direction::Left => Vec2::new(step, 0.0),
            Direction::Right => Vec2::new(-step, 0.0),
            _ => Vec2::ZERO,
        };

        self.position += delta;
        self.position.y = self.position.y.clamp(0.0, self.max_y);
        self.scroll += delta;

        self.sprite.set_row(walk_row(direction));
        self.sprite.tick(dt, true);
        true
    }

    pub fn frame(&self) -> SpriteFrame {
        self.sprite.frame()
    }

    pub fn dest_rect(&self) -> Rect {
        Rect::new(
            self.position.x.round() as i32,
            self.position.y.round() as i32,
            self.size.x as u32,
            self.size.y as u32,
        )
    }
}

struct Layer {
    texture: SheetTexture,
    factor: f32,
}

/// Parallax walker scene.
pub struct ParallaxScene {
    layers: Vec<Layer>,
    walker: Walker,
    walker_sheet: SheetTexture,
    viewport: UVec2,
}

impl ParallaxScene {
    /// Loads the six background layers and the character sheet.
    ///
    /// # Errors
    ///
    /// Fails if any image is missing or cannot be decoded.
    pub fn new(config: &Config, assets: &AssetLoader<'_>) -> GameResult<Self> {
        let layers = parallax::LAYER_FACTORS
            .iter()
            .enumerate()
            .map(|(i, &factor)| {
                Ok(Layer {
                    texture: assets.load(&Asset::BackgroundLayer(i + 1))?,
                    factor,
                })
            })
            .collect::<GameResult<Vec<_>>>()?;

        let viewport = config.window_size();
        let walker = Walker::new(parallax::START, viewport, FrameClock::from_fps(config.animation_fps)?);

        Ok(Self {
            layers,
            walker,
            walker_sheet: assets.load(&Asset::CharacterSheet)?,
            viewport,
        })
    }
}

impl Scene for ParallaxScene {
    const TITLE: &'static str = "Parallax Scene";

    fn event(&mut self, _event: &Event) -> Flow {
        Flow::Continue
    }

    fn update(&mut self, dt: f32, keyboard: &KeyboardState) -> Flow {
        let direction = walk_direction(|key| keyboard.is_scancode_pressed(key));
        self.walker.update(dt, direction);
        Flow::Continue
    }

    fn draw(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        let viewport = self.viewport.as_vec2();
        for layer in &self.layers {
            let offset = layer_offset(self.walker.scroll, layer.factor, viewport);
            for dest in layer_tiles(offset, self.viewport) {
                layer.texture.render(canvas, SpriteFrame::whole(), dest)?;
            }
        }

        self.walker_sheet.render(canvas, self.walker.frame(), self.walker.dest_rect())?;
        Ok(())
    }

    fn clear_color(&self) -> Color {
        Color::RGB(25, 25, 25)
    }
}
