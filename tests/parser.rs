use isowalk::error::ParseError;
use isowalk::map::parser::MapParser;
use isowalk::map::tiles::TileFlags;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_parse_valid_map() {
    let text = common::map_text(&[&[0, 1, 2], &[2, 1, 0]], &[(0, 0, 0), (1, 0, 0), (0, 1, 1)]);
    let parsed = MapParser::parse(&text).unwrap();

    assert_eq!(parsed.catalog.tileset, "tiles.png");
    assert_eq!(parsed.catalog.len(), 4);
    assert_eq!((parsed.catalog.tile_width, parsed.catalog.tile_height), (128, 64));
    assert_eq!((parsed.width, parsed.height), (3, 2));
    assert_eq!(parsed.grid, vec![vec![0, 1, 2], vec![2, 1, 0]]);
    assert_eq!(
        parsed.properties,
        vec![
            TileFlags::empty(),
            TileFlags::CHANGE,
            TileFlags::HAZARD | TileFlags::COLLECTIBLE,
        ]
    );
}

#[test]
fn test_parse_ignores_lines_before_separator() {
    let text = "tiles.png 2 64 32\n2 1\n0 1\nnotes about the map\n\n--\nTileProperties\n0 0 0\n0 0 1\n";
    let parsed = MapParser::parse(text).unwrap();

    assert_eq!(parsed.grid, vec![vec![0, 1]]);
    assert_eq!(parsed.properties.len(), 2);
}

#[test]
fn test_parse_skips_blank_property_lines() {
    let text = "tiles.png 2 64 32\n2 1\n0 1\n--\nTileProperties\n\n0 0 0\n\n1 0 0\n\n";
    let parsed = MapParser::parse(text).unwrap();

    assert_eq!(parsed.properties, vec![TileFlags::empty(), TileFlags::CHANGE]);
}

#[test]
fn test_parse_nonzero_flag_is_true() {
    let text = "tiles.png 1 64 32\n1 1\n0\n--\nTileProperties\n2 0 7\n";
    let parsed = MapParser::parse(text).unwrap();

    assert_eq!(parsed.properties, vec![TileFlags::CHANGE | TileFlags::COLLECTIBLE]);
}

#[test]
fn test_parse_extra_row_tokens_ignored() {
    let text = "tiles.png 2 64 32\n2 1\n0 1 1 1\n--\nTileProperties\n0 0 0\n0 0 0\n";
    let parsed = MapParser::parse(text).unwrap();

    assert_eq!(parsed.grid, vec![vec![0, 1]]);
}

#[test]
fn test_parse_missing_marker() {
    let text = "tiles.png 2 64 32\n2 1\n0 1\n0 0 0\n0 0 0\n";
    assert_eq!(MapParser::parse(text), Err(ParseError::MissingPropertiesSection));
}

#[test]
fn test_parse_wrong_marker_after_separator() {
    let text = "tiles.png 2 64 32\n2 1\n0 1\n--\nProperties\n0 0 0\n0 0 0\n";
    assert_eq!(MapParser::parse(text), Err(ParseError::MissingPropertiesSection));
}

#[test]
fn test_parse_short_row() {
    let text = "tiles.png 2 64 32\n3 2\n0 1 0\n0 1\n--\nTileProperties\n0 0 0\n0 0 0\n";
    assert_eq!(
        MapParser::parse(text),
        Err(ParseError::ShortRow {
            line: 4,
            found: 2,
            expected: 3,
        })
    );
}

#[test]
fn test_parse_missing_row() {
    let text = "tiles.png 2 64 32\n2 3\n0 1\n";
    assert_eq!(MapParser::parse(text), Err(ParseError::MissingRow { row: 1, height: 3 }));
}

#[test]
fn test_parse_invalid_number() {
    let text = "tiles.png 2 64 32\n2 1\n0 x\n--\nTileProperties\n0 0 0\n0 0 0\n";
    assert_eq!(
        MapParser::parse(text),
        Err(ParseError::InvalidNumber {
            line: 3,
            token: "x".to_string(),
        })
    );
}

#[test]
fn test_parse_missing_header_field() {
    let text = "tiles.png 2 64\n2 1\n0 1\n";
    assert_eq!(
        MapParser::parse(text),
        Err(ParseError::MissingField {
            line: 1,
            expected: "tile height",
        })
    );
}

#[test]
fn test_parse_zero_dimensions() {
    let text = "tiles.png 2 64 32\n0 4\n--\nTileProperties\n";
    assert!(matches!(MapParser::parse(text), Err(ParseError::InvalidDimensions(_))));
}

#[test]
fn test_parse_unknown_tile_id() {
    let text = common::map_text(&[&[0, 3]], &[(0, 0, 0), (0, 0, 0)]);
    assert_eq!(
        MapParser::parse(&text),
        Err(ParseError::UnknownTileId {
            id: 3,
            row: 0,
            col: 1,
            available: 2,
        })
    );
}

#[test]
fn test_parse_tile_outside_catalog() {
    // Properties cover id 5 but the tileset only has 4 tiles.
    let properties = [(0, 0, 0); 6];
    let text = common::map_text(&[&[5]], &properties);
    assert_eq!(
        MapParser::parse(&text),
        Err(ParseError::TileOutsideCatalog {
            id: 5,
            row: 0,
            col: 0,
            tile_count: 4,
        })
    );
}

#[test]
fn test_load_missing_file() {
    let result = MapParser::load("definitely/not/a/map.txt");
    assert_that(&matches!(result, Err(ParseError::Open { .. }))).is_true();
}

#[test]
fn test_load_from_disk() {
    let path = std::env::temp_dir().join(format!("isowalk-parser-{}.txt", std::process::id()));
    std::fs::write(&path, common::map_text(&[&[0, 0], &[0, 1]], &[(0, 0, 0), (0, 0, 1)])).unwrap();

    let parsed = MapParser::load(&path);
    std::fs::remove_file(&path).ok();

    let parsed = parsed.unwrap();
    assert_that(&parsed.width).is_equal_to(2);
    assert_that(&parsed.height).is_equal_to(2);
    assert_that(&parsed.grid[1][1]).is_equal_to(1);
}
