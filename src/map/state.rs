//! Runtime map state: the tile grid, the player cell and the rules applied
//! when the player steps onto a tile.

use glam::IVec2;
use smallvec::SmallVec;
use strum_macros::AsRefStr;
use tracing::{debug, info, warn};

use crate::constants::{EMPTY_TILE_ID, VISITED_TILE_ID};
use crate::error::MapError;
use crate::map::direction::Direction;
use crate::map::parser::ParsedMap;
use crate::map::tiles::{TileCatalog, TileFlags, TileId};

/// A grid cell, `row` first like the map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.row as i32, self.col as i32)
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum GameOver {
    /// The player stepped on a hazard tile.
    Hazard,
    /// The player collected every collectible tile.
    Victory,
}

/// A side effect of entering a tile, in the order it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    HazardEntered { tile: TileId },
    Collected { collected: usize, total: usize },
    Transformed { from: TileId, to: TileId },
}

/// Why a move was not taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The target cell is outside the grid. Carries the attempted `(row, col)`.
    OutOfBounds { row: i32, col: i32 },
    /// The game already ended; no further moves are accepted.
    GameAlreadyOver(GameOver),
}

/// Result of [`MapState::attempt_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(Rejection),
    Accepted {
        from: Cell,
        to: Cell,
        /// Tile id that was entered, before any rewrite.
        tile: TileId,
        events: SmallVec<[TileEvent; 3]>,
        game_over: Option<GameOver>,
    },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    pub fn game_over(&self) -> Option<GameOver> {
        match self {
            MoveOutcome::Accepted { game_over, .. } => *game_over,
            MoveOutcome::Rejected(_) => None,
        }
    }
}

/// Mutable game state for the tile-map explorer.
#[derive(Debug, Clone)]
pub struct MapState {
    catalog: TileCatalog,
    grid: Vec<Vec<TileId>>,
    properties: Vec<TileFlags>,
    width: usize,
    height: usize,
    player: Cell,
    facing: Direction,
    collected: usize,
    total_collectibles: usize,
    game_over: Option<GameOver>,
}

impl MapState {
    /// Builds the state from a parsed map; the player starts at the top corner.
    pub fn new(parsed: ParsedMap) -> Result<Self, MapError> {
        let ParsedMap {
            catalog,
            width,
            height,
            grid,
            properties,
        } = parsed;

        if grid.len() != height || grid.iter().any(|row| row.len() != width) {
            return Err(MapError::InvalidConfig(format!("grid does not match its {width}x{height} size")));
        }
        if let Some(id) = grid.iter().flatten().find(|&&id| id >= properties.len()) {
            return Err(MapError::InvalidConfig(format!("tile id {id} has no properties")));
        }
        let used_flags = grid
            .iter()
            .flatten()
            .fold(TileFlags::empty(), |acc, &id| acc | properties[id]);
        for (flag, id) in [(TileFlags::COLLECTIBLE, EMPTY_TILE_ID), (TileFlags::CHANGE, VISITED_TILE_ID)] {
            if !used_flags.contains(flag) {
                continue;
            }
            if id >= properties.len() {
                return Err(MapError::InvalidConfig(format!(
                    "replacement tile id {id} has no properties"
                )));
            }
            if id >= catalog.len() {
                return Err(MapError::InvalidConfig(format!(
                    "replacement tile id {id} is outside the tileset ({} tiles)",
                    catalog.len()
                )));
            }
        }

        let total_collectibles = grid
            .iter()
            .flatten()
            .filter(|&&id| properties[id].contains(TileFlags::COLLECTIBLE))
            .count();
        info!(total_collectibles, "Counted collectibles on the map");

        Ok(Self {
            catalog,
            grid,
            properties,
            width,
            height,
            player: Cell::default(),
            facing: Direction::default(),
            collected: 0,
            total_collectibles,
            game_over: None,
        })
    }

    /// Moves the player one step and applies the entered tile's effects.
    ///
    /// Effects run in a fixed order: hazard, then collectible, then transform.
    /// Flags are read once from the tile that was entered, so a tile that is both
    /// collectible and transforming ends up as the visited tile. The first game
    /// over recorded is the one reported.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        if let Some(reason) = self.game_over {
            return MoveOutcome::Rejected(Rejection::GameAlreadyOver(reason));
        }

        self.facing = direction;
        let target = self.player.as_ivec2() + direction.delta();

        let Some(to) = self.cell_at(target) else {
            warn!(row = target.x, col = target.y, "Move outside the map");
            return MoveOutcome::Rejected(Rejection::OutOfBounds {
                row: target.x,
                col: target.y,
            });
        };

        let from = self.player;
        self.player = to;

        let tile = self.grid[to.row][to.col];
        let flags = self.properties[tile];
        let mut events = SmallVec::new();
        let mut game_over = None;

        if flags.contains(TileFlags::HAZARD) {
            info!(tile, row = to.row, col = to.col, "Stepped on a hazard");
            events.push(TileEvent::HazardEntered { tile });
            game_over = Some(GameOver::Hazard);
        }

        if flags.contains(TileFlags::COLLECTIBLE) {
            self.grid[to.row][to.col] = EMPTY_TILE_ID;
            self.collected += 1;
            info!(
                row = to.row,
                col = to.col,
                collected = self.collected,
                total = self.total_collectibles,
                "Collected an item"
            );
            events.push(TileEvent::Collected {
                collected: self.collected,
                total: self.total_collectibles,
            });

            if self.collected == self.total_collectibles {
                info!("Collected every item");
                game_over = game_over.or(Some(GameOver::Victory));
            }
        }

        if flags.contains(TileFlags::CHANGE) {
            let previous = self.grid[to.row][to.col];
            self.grid[to.row][to.col] = VISITED_TILE_ID;
            debug!(from = previous, to = VISITED_TILE_ID, "Tile transformed");
            events.push(TileEvent::Transformed {
                from: previous,
                to: VISITED_TILE_ID,
            });
        }

        self.game_over = game_over;

        MoveOutcome::Accepted {
            from,
            to,
            tile,
            events,
            game_over,
        }
    }

    /// Converts a signed `(row, col)` into a cell if it lies on the grid.
    fn cell_at(&self, pos: IVec2) -> Option<Cell> {
        let row = usize::try_from(pos.x).ok().filter(|&r| r < self.height)?;
        let col = usize::try_from(pos.y).ok().filter(|&c| c < self.width)?;
        Some(Cell::new(row, col))
    }

    /// Tile id at a cell.
    ///
    /// # Errors
    ///
    /// Returns `MapError::OutOfBounds` if the cell is off the grid.
    pub fn tile(&self, cell: Cell) -> Result<TileId, MapError> {
        self.grid
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .ok_or(MapError::OutOfBounds {
                row: cell.row as i32,
                col: cell.col as i32,
                width: self.width,
                height: self.height,
            })
    }

    /// Flags of a tile id; ids are validated at load so this never misses for grid ids.
    pub fn flags(&self, id: TileId) -> TileFlags {
        self.properties.get(id).copied().unwrap_or_default()
    }

    /// Iterates every cell with its current tile id, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, TileId)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(row, ids)| ids.iter().enumerate().map(move |(col, &id)| (Cell::new(row, col), id)))
    }

    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    pub fn total_collectibles(&self) -> usize {
        self.total_collectibles
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }
}
