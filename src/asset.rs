//! Asset lookup and texture loading from the asset directory on disk.

use std::path::{Path, PathBuf};

use sdl2::image::LoadTexture;
use sdl2::render::TextureCreator;
use sdl2::video::WindowContext;
use tracing::debug;

use crate::constants::{character, SHOWCASE_TEXTURE};
use crate::error::{AssetError, TextureError};
use crate::texture::SheetTexture;

/// Images the demos draw, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Tileset strip named by the map description.
    Tileset(String),
    /// Four-direction walk cycle of the character.
    CharacterSheet,
    /// Background layer `1..=6`, back to front.
    BackgroundLayer(usize),
    /// Single-frame sprite used by the showcase.
    ShowcaseSprite,
}

impl Asset {
    /// Path of the asset relative to the asset root.
    pub fn relative_path(&self) -> PathBuf {
        match self {
            Asset::Tileset(name) => Path::new("tilesets").join(name),
            Asset::CharacterSheet => PathBuf::from(character::SHEET),
            Asset::BackgroundLayer(index) => Path::new("backgrounds/layers").join(format!("{index}.png")),
            Asset::ShowcaseSprite => PathBuf::from(SHOWCASE_TEXTURE),
        }
    }

    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }

    /// Resolves the asset and checks that it exists.
    pub fn locate(&self, root: &Path) -> Result<PathBuf, AssetError> {
        let path = self.path(root);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::NotFound(path))
        }
    }
}

/// Loads textures from an asset root directory.
pub struct AssetLoader<'a> {
    root: PathBuf,
    texture_creator: &'a TextureCreator<WindowContext>,
}

impl<'a> AssetLoader<'a> {
    pub fn new(root: impl Into<PathBuf>, texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        Self {
            root: root.into(),
            texture_creator,
        }
    }

    /// Decodes an image asset into a texture.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::NotFound` wrapped in `GameError` if the file is missing,
    /// or `TextureError::LoadFailed` if it cannot be decoded.
    pub fn load(&self, asset: &Asset) -> crate::error::GameResult<SheetTexture> {
        let path = asset.locate(&self.root)?;
        let texture = self
            .texture_creator
            .load_texture(&path)
            .map_err(|reason| TextureError::LoadFailed { path: path.clone(), reason })?;

        let sheet = SheetTexture::new(texture);
        debug!(path = %path.display(), width = sheet.size.x, height = sheet.size.y, "Loaded texture");
        Ok(sheet)
    }
}
