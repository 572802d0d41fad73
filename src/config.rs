use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ANIMATION_FPS, MAP_WINDOW_SIZE, MAX_ANIMATION_FPS};
use crate::error::ConfigError;

/// Prefix of every environment variable read into [`Config`].
pub const ENV_PREFIX: &str = "ISOWALK_";

/// Runtime configuration shared by the demos.
///
/// Built-in defaults are overridden by `ISOWALK_*` environment variables,
/// e.g. `ISOWALK_MAP_PATH=maps/cave.txt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Map description file read by the tile-map explorer.
    pub map_path: PathBuf,
    /// Directory holding `tilesets/`, `sprites/` and `backgrounds/`.
    pub asset_root: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    /// Walk-cycle cadence, in frames per second.
    pub animation_fps: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("../map.txt"),
            asset_root: PathBuf::from("../assets"),
            window_width: MAP_WINDOW_SIZE.x,
            window_height: MAP_WINDOW_SIZE.y,
            animation_fps: ANIMATION_FPS,
        }
    }
}

impl Config {
    /// Defaults for a demo with a different window size.
    pub fn with_window(size: UVec2) -> Self {
        Self {
            window_width: size.x,
            window_height: size.y,
            ..Self::default()
        }
    }

    /// Layers the environment over `defaults`.
    pub fn figment(defaults: Config) -> Figment {
        Figment::from(Serialized::defaults(defaults)).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn window_size(&self) -> UVec2 {
        UVec2::new(self.window_width, self.window_height)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid {
                field: "window size",
                reason: format!("{}x{} has no area", self.window_width, self.window_height),
            });
        }
        if !(self.animation_fps > 0.0 && self.animation_fps <= MAX_ANIMATION_FPS) {
            return Err(ConfigError::Invalid {
                field: "animation_fps",
                reason: format!("{} is outside (0, {MAX_ANIMATION_FPS}]", self.animation_fps),
            });
        }
        Ok(self)
    }
}

/// Loads the configuration from the built-in defaults and the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_with(Config::default())
}

/// Loads the configuration from the given defaults and the environment.
pub fn load_config_with(defaults: Config) -> Result<Config, ConfigError> {
    let config: Config = Config::figment(defaults).extract()?;
    config.validate()
}
