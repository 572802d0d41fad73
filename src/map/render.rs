//! Map rendering functionality.

use sdl2::render::{Canvas, RenderTarget};

use crate::error::TextureError;
use crate::map::iso::IsoProjection;
use crate::map::state::MapState;
use crate::texture::sprite::SpriteFrame;
use crate::texture::SheetTexture;

/// Handles rendering operations for the map.
pub struct MapRenderer;

impl MapRenderer {
    /// Draws every tile back to front, and the player right after its own
    /// cell so tiles further down the diamond overlap it.
    pub fn render_map<T: RenderTarget>(
        canvas: &mut Canvas<T>,
        state: &MapState,
        projection: &IsoProjection,
        tileset: &SheetTexture,
        player_sheet: &SheetTexture,
        player_frame: SpriteFrame,
    ) -> Result<(), TextureError> {
        let catalog = state.catalog();
        let player = state.player();

        for (cell, id) in state.cells() {
            // Ids are validated against the catalog when the map is parsed.
            if let Some(tile) = catalog.get(id) {
                tileset.render(canvas, tile.frame(catalog.len()), projection.tile_rect(cell))?;
            }

            if cell == player {
                player_sheet.render(canvas, player_frame, projection.sprite_rect(cell))?;
            }
        }

        Ok(())
    }
}
