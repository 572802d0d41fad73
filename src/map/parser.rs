//! Reader for the line-oriented map description file.
//!
//! ```text
//! <tileset_filename> <tileCount> <tileWidth> <tileHeight>
//! <mapWidth> <mapHeight>
//! <mapWidth tile ids>            (mapHeight lines, row-major)
//! --
//! TileProperties
//! <isChangeTile> <isHazard> <isCollectible>   (one line per tile id)
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::ParseError;
use crate::map::tiles::{TileCatalog, TileFlags, TileId};

/// Line that ends the grid section.
const SECTION_SEPARATOR: &str = "--";
/// Marker that must follow the separator.
const PROPERTIES_MARKER: &str = "TileProperties";

/// Structured representation of a map description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMap {
    pub catalog: TileCatalog,
    pub width: usize,
    pub height: usize,
    /// Tile ids indexed as `grid[row][col]`.
    pub grid: Vec<Vec<TileId>>,
    /// Flags indexed by tile id.
    pub properties: Vec<TileFlags>,
}

/// Parser for map description files.
pub struct MapParser;

impl MapParser {
    /// Reads and parses a map description from disk.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Open` if the file cannot be read, or any error from [`MapParser::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<ParsedMap, ParseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ParseError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let parsed = Self::parse(&text)?;
        info!(
            path = %path.display(),
            width = parsed.width,
            height = parsed.height,
            tiles = parsed.catalog.len(),
            "Loaded map description"
        );
        Ok(parsed)
    }

    /// Parses a map description and validates every grid id against the
    /// tile properties and the tileset.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed header or row, a missing `TileProperties`
    /// section, or a grid id that has no properties or no tileset entry.
    pub fn parse(text: &str) -> Result<ParsedMap, ParseError> {
        let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

        let (line_no, header) = lines.next().ok_or(ParseError::MissingField {
            line: 1,
            expected: "tileset filename",
        })?;
        let mut tokens = header.split_whitespace();
        let tileset = tokens.next().ok_or(ParseError::MissingField {
            line: line_no,
            expected: "tileset filename",
        })?;
        let tile_count: usize = next_number(&mut tokens, line_no, "tile count")?;
        let tile_width: u32 = next_number(&mut tokens, line_no, "tile width")?;
        let tile_height: u32 = next_number(&mut tokens, line_no, "tile height")?;

        let (line_no, dimensions) = lines.next().ok_or(ParseError::MissingField {
            line: 2,
            expected: "map width",
        })?;
        let mut tokens = dimensions.split_whitespace();
        let width: usize = next_number(&mut tokens, line_no, "map width")?;
        let height: usize = next_number(&mut tokens, line_no, "map height")?;

        if width == 0 || height == 0 {
            return Err(ParseError::InvalidDimensions(format!("{width}x{height}")));
        }
        if tile_count == 0 || tile_width == 0 || tile_height == 0 {
            return Err(ParseError::InvalidDimensions(format!(
                "{tile_count} tiles of {tile_width}x{tile_height}"
            )));
        }

        let mut grid = Vec::with_capacity(height);
        for row in 0..height {
            let (line_no, line) = lines.next().ok_or(ParseError::MissingRow { row, height })?;
            let ids = line
                .split_whitespace()
                .take(width)
                .map(|token| parse_token::<TileId>(token, line_no))
                .collect::<Result<Vec<_>, _>>()?;

            if ids.len() < width {
                return Err(ParseError::ShortRow {
                    line: line_no,
                    found: ids.len(),
                    expected: width,
                });
            }
            grid.push(ids);
        }

        // Anything between the grid and the separator is ignored.
        if !lines.by_ref().any(|(_, line)| line == SECTION_SEPARATOR) {
            return Err(ParseError::MissingPropertiesSection);
        }
        match lines.next() {
            Some((_, line)) if line == PROPERTIES_MARKER => {}
            _ => return Err(ParseError::MissingPropertiesSection),
        }

        let mut properties = Vec::new();
        for (line_no, line) in lines.filter(|(_, line)| !line.is_empty()) {
            let mut tokens = line.split_whitespace();
            let change: u8 = next_number(&mut tokens, line_no, "isChangeTile flag")?;
            let hazard: u8 = next_number(&mut tokens, line_no, "isHazard flag")?;
            let collectible: u8 = next_number(&mut tokens, line_no, "isCollectible flag")?;
            properties.push(TileFlags::from_columns(change != 0, hazard != 0, collectible != 0));
        }
        debug!(count = properties.len(), "Parsed tile properties");

        let catalog = TileCatalog::new(tileset, tile_count, tile_width, tile_height);
        validate_grid(&grid, &properties, &catalog)?;

        Ok(ParsedMap {
            catalog,
            width,
            height,
            grid,
            properties,
        })
    }
}

/// Every grid id must name a tile with properties and a tileset entry.
fn validate_grid(grid: &[Vec<TileId>], properties: &[TileFlags], catalog: &TileCatalog) -> Result<(), ParseError> {
    for (row, ids) in grid.iter().enumerate() {
        for (col, &id) in ids.iter().enumerate() {
            if id >= properties.len() {
                return Err(ParseError::UnknownTileId {
                    id,
                    row,
                    col,
                    available: properties.len(),
                });
            }
            if id >= catalog.len() {
                return Err(ParseError::TileOutsideCatalog {
                    id,
                    row,
                    col,
                    tile_count: catalog.len(),
                });
            }
        }
    }
    Ok(())
}

fn next_number<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    expected: &'static str,
) -> Result<T, ParseError> {
    let token = tokens.next().ok_or(ParseError::MissingField { line, expected })?;
    parse_token(token, line)
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}
