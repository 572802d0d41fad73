//! The isometric tile-map explorer.

use glam::{UVec2, Vec2};
use sdl2::event::Event;
use sdl2::keyboard::KeyboardState;
use sdl2::mouse::MouseButton;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::{debug, info};

use crate::app::{Flow, Scene};
use crate::asset::{Asset, AssetLoader};
use crate::config::Config;
use crate::constants::character;
use crate::error::GameResult;
use crate::input::StepBindings;
use crate::map::direction::Direction;
use crate::map::iso::IsoProjection;
use crate::map::parser::MapParser;
use crate::map::render::MapRenderer;
use crate::map::state::{GameOver, MapState, MoveOutcome, Rejection};
use crate::texture::animated::{AnimatedSprite, FrameClock};
use crate::texture::sprite::SpriteFrame;
use crate::texture::SheetTexture;

/// Tile-map explorer: map state plus the textures used to draw it.
pub struct Game {
    pub state: MapState,
    projection: IsoProjection,
    bindings: StepBindings,
    tileset: SheetTexture,
    player_sheet: SheetTexture,
    player: AnimatedSprite,
    /// Set once the game ends; the window closes after the current frame.
    finished: Option<GameOver>,
}

impl Game {
    /// Loads the map description and every texture it needs.
    ///
    /// # Errors
    ///
    /// Fails if the map file is missing or malformed, or an image cannot be loaded.
    pub fn new(config: &Config, assets: &AssetLoader<'_>) -> GameResult<Self> {
        let parsed = MapParser::load(&config.map_path)?;
        let tileset = assets.load(&Asset::Tileset(parsed.catalog.tileset.clone()))?;
        let state = MapState::new(parsed)?;

        let catalog = state.catalog();
        let projection = IsoProjection::centered(
            config.window_size(),
            UVec2::new(catalog.tile_width, catalog.tile_height),
            state.width(),
            state.height(),
        );
        debug!(origin = ?projection.origin(), "Centered isometric map");

        let player_sheet = assets.load(&Asset::CharacterSheet)?;
        let player = AnimatedSprite::new(
            SpriteFrame::checked(0, state.facing().facing_row(), character::FRAMES, character::ROWS)?,
            FrameClock::from_fps(config.animation_fps)?,
        );

        Ok(Self {
            state,
            projection,
            bindings: StepBindings::default(),
            tileset,
            player_sheet,
            player,
            finished: None,
        })
    }

    /// Applies one step and reports what happened.
    fn step(&mut self, direction: Direction, outcome: MoveOutcome) {
        self.player.set_row(self.state.facing().facing_row());

        match outcome {
            MoveOutcome::Rejected(Rejection::OutOfBounds { row, col }) => {
                debug!(direction = direction.as_ref(), row, col, "Ignored move outside the map");
            }
            MoveOutcome::Rejected(Rejection::GameAlreadyOver(_)) => {}
            MoveOutcome::Accepted { to, game_over, .. } => {
                debug!(direction = direction.as_ref(), row = to.row, col = to.col, "Player moved");
                if let Some(reason) = game_over {
                    debug!(reason = reason.as_ref(), "Game over");
                    match reason {
                        GameOver::Hazard => info!("You stepped on a hazard. Game over!"),
                        GameOver::Victory => info!(
                            collected = self.state.collected(),
                            "You collected every item and won the game!"
                        ),
                    }
                    self.finished = Some(reason);
                }
            }
        }
    }

    /// Logs the tile under a clicked screen point.
    fn inspect(&self, point: Vec2) {
        let Some(cell) = self.projection.point_to_cell(point) else {
            debug!(x = point.x, y = point.y, "Clicked outside the map");
            return;
        };
        if let Ok(tile) = self.state.tile(cell) {
            info!(row = cell.row, col = cell.col, tile, flags = ?self.state.flags(tile), "Inspected tile");
        }
    }

    pub fn finished(&self) -> Option<GameOver> {
        self.finished
    }
}

impl Scene for Game {
    const TITLE: &'static str = "Isowalk";

    fn event(&mut self, event: &Event) -> Flow {
        match *event {
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(direction) = self.bindings.direction(key) {
                    let outcome = self.state.attempt_move(direction);
                    self.step(direction, outcome);
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => self.inspect(Vec2::new(x as f32, y as f32)),
            _ => {}
        }
        Flow::Continue
    }

    fn update(&mut self, dt: f32, _keyboard: &KeyboardState) -> Flow {
        // The walk cycle plays continuously on the tile map.
        self.player.tick(dt, true);

        match self.finished {
            Some(_) => Flow::Exit,
            None => Flow::Continue,
        }
    }

    fn draw(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        MapRenderer::render_map(
            canvas,
            &self.state,
            &self.projection,
            &self.tileset,
            &self.player_sheet,
            self.player.frame(),
        )?;
        Ok(())
    }
}
