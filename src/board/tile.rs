//! Tiles and their coordinates.

use serde::{Deserialize, Serialize};

/// Pixel coordinate of a tile's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What a tile displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileLabel {
    /// First tile, where the player starts.
    Start,
    /// Intermediate tile showing its 0-based index.
    Number(usize),
    /// Last tile. Reaching it wins the game.
    Castle,
}

impl TileLabel {
    /// Label for tile `index` on a board of `total` tiles.
    ///
    /// The castle takes precedence over Start, so a one-tile board is a
    /// single castle.
    #[must_use]
    pub fn for_index(index: usize, total: usize) -> Self {
        if index + 1 == total {
            TileLabel::Castle
        } else if index == 0 {
            TileLabel::Start
        } else {
            TileLabel::Number(index)
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == TileLabel::Castle
    }
}

impl std::fmt::Display for TileLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileLabel::Start => f.write_str("Start"),
            TileLabel::Number(n) => write!(f, "{n}"),
            TileLabel::Castle => f.write_str("🏰"),
        }
    }
}

/// One position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub index: usize,
    pub coordinate: Point,
    pub label: TileLabel,
}
