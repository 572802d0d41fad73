use crate::error::TextureError;
use crate::texture::sprite::SpriteFrame;

/// Advances a sprite frame on a fixed real-time cadence.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    frame_duration: f32,
    time_bank: f32,
}

impl FrameClock {
    pub fn new(frame_duration: f32) -> Result<Self, TextureError> {
        if !(frame_duration.is_finite() && frame_duration > 0.0) {
            return Err(TextureError::InvalidLayout(format!(
                "frame duration must be positive, got {frame_duration}"
            )));
        }
        Ok(Self {
            frame_duration,
            time_bank: 0.0,
        })
    }

    pub fn from_fps(fps: f32) -> Result<Self, TextureError> {
        Self::new(1.0 / fps)
    }

    /// Banks `dt` seconds and returns how many whole frames elapsed.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.time_bank += dt.max(0.0);
        let frames = (self.time_bank / self.frame_duration).floor();
        self.time_bank %= self.frame_duration;
        frames as u32
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }
}

/// A sprite sheet frame driven by a [`FrameClock`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSprite {
    frame: SpriteFrame,
    clock: FrameClock,
}

impl AnimatedSprite {
    pub fn new(frame: SpriteFrame, clock: FrameClock) -> Self {
        Self { frame, clock }
    }

    /// Advances the walk cycle. The clock only runs while `advancing` is true,
    /// so a stopped sprite keeps its current frame.
    pub fn tick(&mut self, dt: f32, advancing: bool) {
        if !advancing {
            return;
        }

        let frames = self.clock.tick(dt);
        if frames > 0 {
            self.frame = self.frame.with_frame(self.frame.frame + frames % self.frame.frame_count);
        }
    }

    /// Switches the animation row, keeping the frame column.
    pub fn set_row(&mut self, row: u32) {
        self.frame = self.frame.with_row(row);
    }

    pub fn frame(&self) -> SpriteFrame {
        self.frame
    }
}
