//! The isometric tile map: file format, runtime state, projection and rendering.

pub mod direction;
pub mod iso;
pub mod parser;
pub mod render;
pub mod state;
pub mod tiles;
