//! Tile catalog and per-tile gameplay flags.

use bitflags::bitflags;

use crate::texture::sprite::SpriteFrame;

/// Index into the tile catalog, as stored in the map grid.
pub type TileId = usize;

bitflags! {
    /// Gameplay effects applied when the player enters a tile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TileFlags: u8 {
        /// The tile becomes the visited tile once entered.
        const CHANGE = 1 << 0;
        /// Entering the tile ends the game.
        const HAZARD = 1 << 1;
        /// Entering the tile collects it.
        const COLLECTIBLE = 1 << 2;
    }
}

impl TileFlags {
    /// Builds the flags from the three columns of a `TileProperties` line.
    pub fn from_columns(change: bool, hazard: bool, collectible: bool) -> Self {
        let mut flags = TileFlags::empty();
        flags.set(TileFlags::CHANGE, change);
        flags.set(TileFlags::HAZARD, hazard);
        flags.set(TileFlags::COLLECTIBLE, collectible);
        flags
    }
}

/// A single tileset entry: which column of the tileset strip it is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub index: TileId,
    /// Horizontal UV step between tiles in the strip.
    pub ds: f32,
    /// Vertical UV extent; the strip is a single row.
    pub dt: f32,
}

impl Tile {
    /// Sheet addressing for this tile within a strip of `tile_count` tiles.
    pub fn frame(&self, tile_count: usize) -> SpriteFrame {
        SpriteFrame::new(self.index as u32, 0, tile_count as u32, 1)
    }
}

/// The tileset strip named by a map description, split into equal-width tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCatalog {
    pub tileset: String,
    pub tile_width: u32,
    pub tile_height: u32,
    tiles: Vec<Tile>,
}

impl TileCatalog {
    pub fn new(tileset: impl Into<String>, tile_count: usize, tile_width: u32, tile_height: u32) -> Self {
        let ds = 1.0 / tile_count.max(1) as f32;
        let tiles = (0..tile_count).map(|index| Tile { index, ds, dt: 1.0 }).collect();

        Self {
            tileset: tileset.into(),
            tile_width,
            tile_height,
            tiles,
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
