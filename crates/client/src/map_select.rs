//! Picking the map a game is played on.
use std::io::{self, Write};

use game_content::{MapLoader, default_map};
use game_core::DungeonMap;

pub const MAP_PROMPT: &str =
    "Please input the name of the map you want to play, or type nothing to play the default map.";

/// Loads `name`, or the built-in map when no name is given.
///
/// A map that fails to load is reported on `err` and replaced by the
/// built-in one; the game always starts.
pub fn select_map(
    name: Option<&str>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<DungeonMap> {
    let Some(name) = name.map(str::trim).filter(|name| !name.is_empty()) else {
        let map = default_map();
        writeln!(
            out,
            "\nDefault map created: \"{}\"\nGold required to leave dungeon: {}\n",
            map.name(),
            map.gold_required()
        )?;
        return Ok(map);
    };

    match MapLoader::load_named(name) {
        Ok(map) => {
            tracing::info!("Loaded map file {:?}", name);
            writeln!(
                out,
                "\nMap \"{}\" created:\n\"{}\"\nGold required to leave dungeon: {}\n",
                name.trim_end_matches(".txt"),
                map.name(),
                map.gold_required()
            )?;
            Ok(map)
        }
        Err(error) => {
            tracing::warn!("Map {:?} failed to load, using default: {:#}", name, error);
            let map = default_map();
            writeln!(
                err,
                "\nSomething went wrong in the initialisation of the map, so the default map has been used (gold required to win: {}).\nPlease check the validity of your chosen map file.\nError message: \"{:#}\"\n",
                map.gold_required(),
                error
            )?;
            Ok(map)
        }
    }
}
