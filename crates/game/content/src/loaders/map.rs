//! Map file loader.
//!
//! Map files are plain text:
//!
//! ```text
//! name Small Labyrinth
//! win 2
//! #########
//! #..G..E.#
//! #########
//! ```
//!
//! The first line names the map, the second gives the gold required to leave,
//! and every following line is one row of terrain glyphs.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow, bail};
use game_core::DungeonMap;

use crate::loaders::{LoadResult, read_file};

const NAME_PREFIX: &str = "name ";
const WIN_PREFIX: &str = "win ";
const MAP_EXTENSION: &str = "txt";

/// Loader for map data from text files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a file.
    pub fn load(path: &Path) -> LoadResult<DungeonMap> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid map file {}", path.display()))
    }

    /// Load a map by the name a player typed, with or without `.txt`.
    pub fn load_named(name: &str) -> LoadResult<DungeonMap> {
        Self::load(&Self::resolve(name))
    }

    /// Appends the map extension when the name does not carry it already.
    pub fn resolve(name: &str) -> PathBuf {
        let name = name.trim();
        let path = PathBuf::from(name);
        if path.extension().is_some_and(|ext| ext == MAP_EXTENSION) {
            path
        } else {
            PathBuf::from(format!("{name}.{MAP_EXTENSION}"))
        }
    }

    /// Parse map text.
    pub fn parse(content: &str) -> LoadResult<DungeonMap> {
        let mut lines = content.lines().map(|line| line.trim_end_matches('\r'));

        let name = lines
            .next()
            .and_then(|line| line.strip_prefix(NAME_PREFIX))
            .ok_or_else(|| anyhow!("first line must be `{NAME_PREFIX}<map name>`"))?
            .trim()
            .to_string();

        let gold_line = lines
            .next()
            .and_then(|line| line.strip_prefix(WIN_PREFIX))
            .ok_or_else(|| anyhow!("second line must be `{WIN_PREFIX}<gold required>`"))?;
        let gold_required: u32 = gold_line
            .trim()
            .parse()
            .with_context(|| format!("gold requirement {:?} is not a number", gold_line.trim()))?;

        let rows: Vec<&str> = lines.collect();
        // Trailing blank lines come from editors, not from the layout.
        let end = rows
            .iter()
            .rposition(|row| !row.is_empty())
            .map_or(0, |last| last + 1);
        if end == 0 {
            bail!("map {name:?} has no rows");
        }

        let map = DungeonMap::from_glyphs(name, gold_required, &rows[..end])?;
        tracing::debug!(
            "Loaded map {:?}: {}x{}, gold required {}",
            map.name(),
            map.dimensions().height,
            map.dimensions().width,
            map.gold_required()
        );
        Ok(map)
    }
}
