//! Console client for the dungeon pursuit game.
//!
//! The binary in `main.rs` is the composition root; this library holds the
//! pieces it assembles so they can be tested in isolation.
pub mod config;
pub mod console;
pub mod logging;
pub mod map_select;

pub use config::ClientConfig;
pub use console::{ConsoleExplorer, parse_command};
pub use map_select::select_map;
