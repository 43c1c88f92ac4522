//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in dungeon and the loaders for data files:
//! - Map layouts (plain-text `name`/`win` header followed by glyph rows)
//! - Game and bot configuration (TOML)
//!
//! Content is consumed by the runtime and the client; it never reaches into
//! the engine's state.

pub mod maps;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use maps::{DEFAULT_GOLD_REQUIRED, DEFAULT_MAP_NAME, default_map};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MapLoader};
