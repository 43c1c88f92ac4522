//! Dungeon game client binary.
//!
//! Composition root: reads the environment, sets up file logging, picks a
//! map, then runs a [`runtime::Session`] with a console explorer against the
//! bot.
//!
//! ```bash
//! DUNGEON_MAP=maps/small DUNGEON_SEED=7 cargo run -p dungeon-client
//! ```

use std::io::Write;

use anyhow::Result;
use dungeon_client::map_select::MAP_PROMPT;
use dungeon_client::{ClientConfig, ConsoleExplorer, select_map};
use runtime::{BotParticipant, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = dungeon_client::logging::setup_logging(config.session_id.as_deref())?;
    let dungeon_config = config.dungeon_config()?;

    tracing::info!("Starting Dungeon client");
    tracing::debug!("Configuration: {:?}", dungeon_config);

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    let map_name = match &config.map {
        Some(name) => Some(name.clone()),
        None => {
            writeln!(stdout, "\n{MAP_PROMPT}\n")?;
            input.next_line().await?
        }
    };
    let map = select_map(map_name.as_deref(), &mut stdout, &mut std::io::stderr())?;
    writeln!(stdout, "See what commands you can use by typing \"COMMANDS\".\n")?;

    let mut builder = Session::builder()
        .map(map)
        .config(dungeon_config.game)
        .explorer(ConsoleExplorer::new(input, stdout))
        .bot(BotParticipant::new(dungeon_config.bot, config.seed));
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }

    let mut session = builder.build()?;
    let status = session.run().await?;

    tracing::info!("Session finished: {} after {} rounds", status, session.rounds());
    Ok(())
}
