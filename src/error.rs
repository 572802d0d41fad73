//! Centralized error types for the demos.
//!
//! Configuration and resource problems are fatal and bubble up as `GameError`.
//! Invalid player input is not an error at all; see [`crate::map::state::MoveOutcome`].

use std::io;
use std::path::PathBuf;

/// Main error type for the demos.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for reading a map description file.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not open map description {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Line {line}: expected {expected}")]
    MissingField { line: usize, expected: &'static str },

    #[error("Line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("Line {line}: map row has {found} tiles, expected {expected}")]
    ShortRow { line: usize, found: usize, expected: usize },

    #[error("Map description ended before row {row} of {height}")]
    MissingRow { row: usize, height: usize },

    #[error("TileProperties section not found")]
    MissingPropertiesSection,

    #[error("Tile id {id} at row {row}, column {col} has no tile properties (only {available} defined)")]
    UnknownTileId {
        id: usize,
        row: usize,
        col: usize,
        available: usize,
    },

    #[error("Tile id {id} at row {row}, column {col} is outside the tileset ({tile_count} tiles)")]
    TileOutsideCatalog {
        id: usize,
        row: usize,
        col: usize,
        tile_count: usize,
    },

    #[error("Invalid map dimensions: {0}")]
    InvalidDimensions(String),
}

/// Errors related to map operations at runtime.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        width: usize,
        height: usize,
    },

    #[error("Invalid map configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {}: {reason}", path.display())]
    LoadFailed { path: PathBuf, reason: String },

    #[error("Invalid sprite sheet layout: {0}")]
    InvalidLayout(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Extract(Box::new(error))
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Converts SDL's stringly-typed errors into `GameError::Sdl`.
pub trait SdlResultExt<T> {
    fn sdl_context(self, what: &str) -> GameResult<T>;
}

impl<T, E: std::fmt::Display> SdlResultExt<T> for Result<T, E> {
    fn sdl_context(self, what: &str) -> GameResult<T> {
        self.map_err(|e| GameError::Sdl(format!("{what}: {e}")))
    }
}
