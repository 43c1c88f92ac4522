//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use game_content::ConfigLoader;
use game_core::DungeonConfig;

/// Settings the binary needs before a session can start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Map to play; the player is asked when unset.
    pub map: Option<String>,
    /// TOML file with `[game]` and `[bot]` tables.
    pub config_path: Option<PathBuf>,
    /// Seed for spawning and the bot.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DUNGEON_MAP`
    /// - `DUNGEON_CONFIG`
    /// - `DUNGEON_SEED`
    /// - `GAME_SESSION_ID`
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            map: non_empty("DUNGEON_MAP"),
            config_path: non_empty("DUNGEON_CONFIG").map(PathBuf::from),
            seed: read_value(&lookup, "DUNGEON_SEED"),
            session_id: non_empty("GAME_SESSION_ID"),
        }
    }

    /// Game and bot tunables, defaults when no file is configured.
    pub fn dungeon_config(&self) -> anyhow::Result<DungeonConfig> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("DUNGEON_CONFIG points at {}", path.display())),
            None => Ok(DungeonConfig::default()),
        }
    }
}

fn read_value<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ClientConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), ClientConfig::default());
        assert_eq!(
            config(&[]).dungeon_config().unwrap(),
            DungeonConfig::default()
        );
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            ("DUNGEON_MAP", "maze"),
            ("DUNGEON_CONFIG", "dungeon.toml"),
            ("DUNGEON_SEED", " 42 "),
            ("GAME_SESSION_ID", "run-1"),
        ]);
        assert_eq!(config.map.as_deref(), Some("maze"));
        assert_eq!(config.config_path, Some(PathBuf::from("dungeon.toml")));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.session_id.as_deref(), Some("run-1"));
    }

    #[test]
    fn ignores_blank_and_malformed_values() {
        let config = config(&[("DUNGEON_MAP", "  "), ("DUNGEON_SEED", "soon")]);
        assert_eq!(config.map, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let config = config(&[("DUNGEON_CONFIG", "/nonexistent/dungeon.toml")]);
        let err = config.dungeon_config().unwrap_err();
        assert!(format!("{err:#}").contains("DUNGEON_CONFIG"));
    }
}
