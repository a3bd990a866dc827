//! Board layout: tiles, coordinates and labels.
//!
//! Boards are pure values. Rendering them is the view layer's job.

pub mod layout;
pub mod tile;

pub use layout::{generate_board, Board};
pub use tile::{Point, Tile, TileLabel};
