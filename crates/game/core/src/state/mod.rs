//! Grid primitives shared by the map authority and every participant.
mod position;
mod tile;

pub use position::{Direction, Position};
pub use tile::{Terrain, Tile};
