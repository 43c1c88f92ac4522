//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::DungeonConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game and bot configuration from TOML files.
///
/// Both the `[game]` and `[bot]` tables are optional; missing fields keep
/// their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<DungeonConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<DungeonConfig> {
        let config: DungeonConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.game.view_radius == 0 {
            anyhow::bail!("game.view_radius must be at least 1");
        }
        if config.bot.look_interval == 0 {
            anyhow::bail!("bot.look_interval must be at least 1");
        }

        // Any wall-free route inside the window costs fewer steps than it has cells.
        let size = config.game.window_size();
        let Some(cells) = (size as u64).checked_pow(2) else {
            anyhow::bail!("game.view_radius {} is too large", config.game.view_radius);
        };
        if config.bot.wall_penalty <= cells {
            anyhow::bail!("bot.wall_penalty must exceed {} for a {}x{} window", cells, size, size);
        }

        Ok(config)
    }
}
