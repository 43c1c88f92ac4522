//! The dungeon as the map authority sees it and as participants observe it.
//!
//! [`DungeonMap`] is the authoritative layout owned by the engine;
//! [`LocalView`] is the immutable window handed to a participant on `LOOK`.
mod error;
mod map;
mod view;

pub use error::{MapError, ViewError};
pub use map::{DungeonMap, MapDimensions};
pub use view::LocalView;
