//! Built-in layouts.

use game_core::{DungeonMap, MapError};

pub const DEFAULT_MAP_NAME: &str = "Very small Labyrinth of Doom";
pub const DEFAULT_GOLD_REQUIRED: u32 = 2;

const DEFAULT_LAYOUT: [&str; 9] = [
    "####################",
    "#..................#",
    "#......G.........E.#",
    "#..................#",
    "#..E...............#",
    "#...........G......#",
    "#..................#",
    "#..................#",
    "####################",
];

/// The map played when no map file is chosen or the chosen one fails to load.
pub fn default_map() -> DungeonMap {
    build_default().unwrap_or_else(|err| panic!("built-in default map is invalid: {err}"))
}

fn build_default() -> Result<DungeonMap, MapError> {
    DungeonMap::from_glyphs(DEFAULT_MAP_NAME, DEFAULT_GOLD_REQUIRED, &DEFAULT_LAYOUT)
}
