//! Board generation.
//!
//! A `Board` is computed once per size and layout, then shared by value.
//! Tiles live in an `im::Vector` so handing a board to a session or a view
//! is an O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Point, Tile, TileLabel};
use crate::core::{Layout, QuestError, Result};

/// Ordered tiles `0..N-1`; the last one is the castle.
///
/// Deserialization goes through `TryFrom<Vec<Tile>>`, so a decoded board
/// obeys the same rules as a generated one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Board {
    tiles: Vector<Tile>,
}

impl TryFrom<Vec<Tile>> for Board {
    type Error = QuestError;

    /// Requires at least one tile, indices `0..N-1` in order, and labels
    /// matching `TileLabel::for_index` (Start first, castle last only).
    fn try_from(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(QuestError::Configuration(
                "board needs at least one tile".to_string(),
            ));
        }

        let total = tiles.len();
        for (i, tile) in tiles.iter().enumerate() {
            if tile.index != i {
                return Err(QuestError::Configuration(format!(
                    "tile at position {i} has index {}",
                    tile.index
                )));
            }
            let expected = TileLabel::for_index(i, total);
            if tile.label != expected {
                return Err(QuestError::Configuration(format!(
                    "tile {i} is labeled {} but should be {expected}",
                    tile.label
                )));
            }
        }

        Ok(Board {
            tiles: tiles.into_iter().collect(),
        })
    }
}

impl From<Board> for Vec<Tile> {
    fn from(board: Board) -> Self {
        board.tiles.into_iter().collect()
    }
}

impl Board {
    /// Generate a board on the default five-column grid.
    pub fn generate(total_spaces: usize) -> Result<Self> {
        generate_board(total_spaces, &Layout::default_grid())
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a generated board; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of the castle tile.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Coordinate of tile `index`, if it exists.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> Option<Point> {
        self.tiles.get(index).map(|t| t.coordinate)
    }

    /// The castle tile.
    #[must_use]
    pub fn terminal(&self) -> Option<&Tile> {
        self.tiles.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

/// Build the tile sequence for `total_spaces` tiles placed by `layout`.
///
/// Grid coordinates are `origin + (i mod columns, i / columns) * spacing`.
/// Path coordinates are read from the table; extra entries are ignored.
pub fn generate_board(total_spaces: usize, layout: &Layout) -> Result<Board> {
    if total_spaces == 0 {
        return Err(QuestError::Configuration(
            "board needs at least one tile".to_string(),
        ));
    }

    let coordinates: Vec<Point> = match layout {
        Layout::Grid {
            origin,
            columns,
            spacing_x,
            spacing_y,
        } => {
            if *columns == 0 {
                return Err(QuestError::Configuration(
                    "grid layout needs at least one column".to_string(),
                ));
            }
            (0..total_spaces)
                .map(|i| {
                    let col = (i % columns) as i32;
                    let row = (i / columns) as i32;
                    Point::new(origin.x + col * spacing_x, origin.y + row * spacing_y)
                })
                .collect()
        }
        Layout::Path(table) => {
            if table.len() < total_spaces {
                return Err(QuestError::Configuration(format!(
                    "path table has {} entries but the board has {} tiles",
                    table.len(),
                    total_spaces
                )));
            }
            table[..total_spaces].to_vec()
        }
    };

    let tiles = coordinates
        .into_iter()
        .enumerate()
        .map(|(index, coordinate)| Tile {
            index,
            coordinate,
            label: TileLabel::for_index(index, total_spaces),
        })
        .collect();

    Ok(Board { tiles })
}
