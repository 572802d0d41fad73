use std::time::{Duration, Instant};

use glam::UVec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{KeyboardState, Keycode};
use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};
use tracing::{debug, error, info, trace};

use crate::constants::{LOOP_TIME, TITLE_REFRESH};
use crate::error::{GameResult, SdlResultExt};
use crate::formatter;
use crate::platform;

/// Whether the loop keeps going after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// What the window shows: one of the demos.
pub trait Scene {
    /// Window title; the FPS readout is appended to it.
    const TITLE: &'static str;

    /// Handles one polled event, before the frame's update.
    fn event(&mut self, event: &Event) -> Flow;

    /// Advances the scene by `dt` seconds with the keys currently held.
    fn update(&mut self, dt: f32, keyboard: &KeyboardState) -> Flow;

    fn draw(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()>;

    fn clear_color(&self) -> Color {
        Color::RGB(0, 0, 0)
    }
}

/// Window, canvas and event pump, created before the scene so the scene can
/// load textures through [`Display::texture_creator`].
pub struct Display {
    pub canvas: Canvas<Window>,
    pub event_pump: EventPump,
    texture_creator: TextureCreator<WindowContext>,
    // Keep SDL alive for the app lifetime
    _sdl_context: Sdl,
}

impl Display {
    /// Initializes SDL and opens a centered window with a hardware canvas.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new(title: &str, size: UVec2) -> GameResult<Self> {
        info!(title, width = size.x, height = size.y, "Initializing SDL2 window");
        let sdl_context = sdl2::init().sdl_context("SDL init")?;
        let video_subsystem = sdl_context.video().sdl_context("video subsystem")?;
        let event_pump = sdl_context.event_pump().sdl_context("event pump")?;

        let window = video_subsystem
            .window(title, size.x, size.y)
            .position_centered()
            .build()
            .sdl_context("window")?;

        let mut canvas = window.into_canvas().accelerated().build().sdl_context("canvas")?;
        canvas.set_logical_size(size.x, size.y).sdl_context("logical size")?;
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();

        Ok(Self {
            canvas,
            event_pump,
            texture_creator,
            _sdl_context: sdl_context,
        })
    }

    pub fn texture_creator(&self) -> &TextureCreator<WindowContext> {
        &self.texture_creator
    }
}

/// Main application wrapper that drives a [`Scene`] at a fixed loop rate.
pub struct App<S: Scene> {
    scene: S,
    display: Display,
    last_tick: Instant,
    title_countdown: Duration,
    focused: bool,
}

impl<S: Scene> App<S> {
    pub fn new(display: Display, scene: S) -> Self {
        Self {
            scene,
            display,
            last_tick: Instant::now(),
            title_countdown: TITLE_REFRESH,
            focused: true,
        }
    }

    /// Executes a single frame: events, update, draw, present, then sleeps out
    /// the rest of `LOOP_TIME`.
    ///
    /// # Returns
    ///
    /// `true` if the loop should continue, `false` once the window closed or the scene exited.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        let elapsed = start - self.last_tick;
        self.last_tick = start;
        formatter::increment_frame();

        for event in self.display.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    info!("Exit requested. Exiting...");
                    return false;
                }
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::FocusGained => self.focused = true,
                    WindowEvent::FocusLost => self.focused = false,
                    _ => {}
                },
                _ => {}
            }

            if self.scene.event(&event) == Flow::Exit {
                return false;
            }
        }

        let keyboard = self.display.event_pump.keyboard_state();
        if self.scene.update(elapsed.as_secs_f32(), &keyboard) == Flow::Exit {
            return false;
        }

        self.display.canvas.set_draw_color(self.scene.clear_color());
        self.display.canvas.clear();
        if let Err(e) = self.scene.draw(&mut self.display.canvas) {
            error!("Failed to draw frame: {e}");
        }
        self.display.canvas.present();

        self.refresh_title(elapsed);

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        } else {
            trace!(behind = ?(start.elapsed() - LOOP_TIME), "Frame behind schedule");
        }

        true
    }

    /// Shows the FPS in the title bar, but not every frame to keep it readable.
    fn refresh_title(&mut self, elapsed: Duration) {
        self.title_countdown = self.title_countdown.saturating_sub(elapsed);
        if self.title_countdown.is_zero() && !elapsed.is_zero() {
            let fps = 1.0 / elapsed.as_secs_f64();
            let title = format!("{}\tFPS {fps:.2}", S::TITLE);
            if let Err(e) = self.display.canvas.window_mut().set_title(&title) {
                debug!("Failed to update window title: {e}");
            }
            self.title_countdown = TITLE_REFRESH;
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }
}
