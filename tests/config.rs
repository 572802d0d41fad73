use std::path::PathBuf;

use figment::Jail;
use glam::UVec2;
use isowalk::config::{load_config, load_config_with, Config};
use isowalk::constants::SQUARE_WINDOW_SIZE;
use isowalk::error::ConfigError;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_defaults() {
    Jail::expect_with(|_| {
        let config = load_config().map_err(|e| e.to_string())?;
        assert_eq!(config, Config::default());
        assert_eq!(config.map_path, PathBuf::from("../map.txt"));
        assert_eq!(config.window_size(), UVec2::new(800, 600));
        assert_eq!(config.animation_fps, 12.0);
        Ok(())
    });
}

#[test]
fn test_env_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("ISOWALK_MAP_PATH", "maps/cave.txt");
        jail.set_env("ISOWALK_WINDOW_WIDTH", "1024");
        jail.set_env("ISOWALK_ANIMATION_FPS", "24.0");

        let config = load_config().map_err(|e| e.to_string())?;
        assert_eq!(config.map_path, PathBuf::from("maps/cave.txt"));
        assert_eq!(config.window_size(), UVec2::new(1024, 600));
        assert_eq!(config.animation_fps, 24.0);
        assert_eq!(config.asset_root, PathBuf::from("../assets"));
        Ok(())
    });
}

#[test]
fn test_custom_defaults() {
    Jail::expect_with(|jail| {
        let config = load_config_with(Config::with_window(SQUARE_WINDOW_SIZE)).map_err(|e| e.to_string())?;
        assert_eq!(config.window_size(), SQUARE_WINDOW_SIZE);

        jail.set_env("ISOWALK_WINDOW_HEIGHT", "700");
        let config = load_config_with(Config::with_window(SQUARE_WINDOW_SIZE)).map_err(|e| e.to_string())?;
        assert_eq!(config.window_size(), UVec2::new(800, 700));
        Ok(())
    });
}

#[test]
fn test_zero_window_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ISOWALK_WINDOW_HEIGHT", "0");
        let result = load_config();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "window size",
                ..
            })
        ));
        Ok(())
    });
}

#[test]
fn test_bad_frame_rate_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ISOWALK_ANIMATION_FPS", "-3.0");
        let result = load_config();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "animation_fps",
                ..
            })
        ));
        Ok(())
    });
}

#[test]
fn test_unparseable_value_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ISOWALK_WINDOW_WIDTH", "wide");
        let result = load_config();
        assert_that(&matches!(result, Err(ConfigError::Extract(_)))).is_true();
        Ok(())
    });
}

#[test]
fn test_excessive_frame_rate_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ISOWALK_ANIMATION_FPS", "10000000000.0");
        let result = load_config();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "animation_fps",
                ..
            })
        ));

        jail.set_env("ISOWALK_ANIMATION_FPS", "1000.0");
        let config = load_config().map_err(|e| e.to_string())?;
        assert_eq!(config.animation_fps, 1000.0);
        Ok(())
    });
}
