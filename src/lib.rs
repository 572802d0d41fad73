//! Sprite-sheet demos on SDL2: an isometric tile-map explorer, a parallax walker and a sprite showcase.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod logging;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod platform;

pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod map;
pub mod parallax;
pub mod showcase;
pub mod texture;
