#![allow(dead_code)]

use isowalk::map::parser::{MapParser, ParsedMap};
use isowalk::map::state::MapState;

/// Property columns for one tile id: `(change, hazard, collectible)`.
pub type Props = (u8, u8, u8);

/// Renders a map description with a 4-tile `tiles.png` tileset of 128x64 tiles.
pub fn map_text(grid: &[&[usize]], properties: &[Props]) -> String {
    let height = grid.len();
    let width = grid.first().map_or(0, |row| row.len());

    let mut text = format!("tiles.png 4 128 64\n{width} {height}\n");
    for row in grid {
        let ids: Vec<String> = row.iter().map(ToString::to_string).collect();
        text.push_str(&ids.join(" "));
        text.push('\n');
    }
    text.push_str("--\nTileProperties\n");
    for (change, hazard, collectible) in properties {
        text.push_str(&format!("{change} {hazard} {collectible}\n"));
    }
    text
}

pub fn parse(grid: &[&[usize]], properties: &[Props]) -> ParsedMap {
    MapParser::parse(&map_text(grid, properties)).expect("map should parse")
}

pub fn state(grid: &[&[usize]], properties: &[Props]) -> MapState {
    MapState::new(parse(grid, properties)).expect("map state should build")
}

/// 5x5 map of plain tiles with a single collectible (id 1) in the center.
pub fn center_collectible() -> MapState {
    state(
        &[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ],
        &[(0, 0, 0), (0, 0, 1)],
    )
}
