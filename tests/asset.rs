use std::path::{Path, PathBuf};

use isowalk::asset::Asset;
use isowalk::error::AssetError;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_relative_paths() {
    assert_eq!(
        Asset::Tileset("tiles.png".to_string()).relative_path(),
        PathBuf::from("tilesets/tiles.png")
    );
    assert_eq!(
        Asset::CharacterSheet.relative_path(),
        PathBuf::from("sprites/Vampires1_Walk_full.png")
    );
    assert_eq!(
        Asset::BackgroundLayer(3).relative_path(),
        PathBuf::from("backgrounds/layers/3.png")
    );
    assert_eq!(Asset::ShowcaseSprite.relative_path(), PathBuf::from("Vampirinho.png"));
}

#[test]
fn test_path_joins_root() {
    let root = Path::new("assets");
    assert_eq!(Asset::ShowcaseSprite.path(root), PathBuf::from("assets/Vampirinho.png"));
}

#[test]
fn test_locate_missing_asset() {
    let root = Path::new("definitely/not/an/asset/root");
    let result = Asset::CharacterSheet.locate(root);

    assert!(matches!(result, Err(AssetError::NotFound(ref path)) if path.ends_with("Vampires1_Walk_full.png")));
}

#[test]
fn test_locate_existing_asset() {
    let root = std::env::temp_dir().join(format!("isowalk-assets-{}", std::process::id()));
    std::fs::create_dir_all(root.join("tilesets")).unwrap();
    std::fs::write(root.join("tilesets/grass.png"), b"not really a png").unwrap();

    let located = Asset::Tileset("grass.png".to_string()).locate(&root);
    std::fs::remove_dir_all(&root).ok();

    assert_that(&located.is_ok()).is_true();
}
