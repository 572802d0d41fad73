#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::process::ExitCode;

use anyhow::Context;
use isowalk::app::{App, Display, Scene};
use isowalk::asset::AssetLoader;
use isowalk::config::{load_config_with, Config};
use isowalk::constants::SQUARE_WINDOW_SIZE;
use isowalk::logging::setup_logging;
use isowalk::parallax::ParallaxScene;
use tracing::{error, info};

fn run() -> anyhow::Result<()> {
    let config = load_config_with(Config::with_window(SQUARE_WINDOW_SIZE))?;
    let display = Display::new(ParallaxScene::TITLE, config.window_size())?;
    let scene = {
        let assets = AssetLoader::new(&config.asset_root, display.texture_creator());
        ParallaxScene::new(&config, &assets).context("loading parallax layers")?
    };

    info!("Walk with WASD or the arrow keys");
    let mut app = App::new(display, scene);
    while app.run() {}
    Ok(())
}

fn main() -> ExitCode {
    setup_logging(env!("CARGO_CRATE_NAME"));

    if let Err(e) = run() {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
