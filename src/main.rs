#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use isowalk::app::{App, Display, Scene};
use isowalk::asset::AssetLoader;
use isowalk::config::load_config;
use isowalk::constants::LOOP_TIME;
use isowalk::error::GameResult;
use isowalk::game::Game;
use isowalk::logging::setup_logging;
use isowalk::map::state::GameOver;
use tracing::{error, info};

/// The main entry point of the tile-map explorer.
///
/// Usage: `isowalk [MAP_FILE]`. Without an argument the map path comes from
/// `ISOWALK_MAP_PATH` or the built-in default.
pub fn main() -> ExitCode {
    setup_logging(env!("CARGO_CRATE_NAME"));

    match run() {
        Ok(outcome) => {
            info!(outcome = ?outcome, "Exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> GameResult<Option<GameOver>> {
    let mut config = load_config()?;
    if let Some(path) = env::args().nth(1) {
        config.map_path = PathBuf::from(path);
    }

    let display = Display::new(Game::TITLE, config.window_size())?;
    let game = {
        let assets = AssetLoader::new(&config.asset_root, display.texture_creator());
        Game::new(&config, &assets)?
    };

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    let mut app = App::new(display, game);
    while app.run() {}

    Ok(app.scene().finished())
}
