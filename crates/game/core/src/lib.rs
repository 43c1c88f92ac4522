//! Game rules and data types shared across the dungeon workspace.
//!
//! `game-core` defines the grid primitives, the turn protocol between the
//! orchestrator and its participants, the authoritative map and the
//! [`engine::GameEngine`] that enforces the rules. It has no I/O; loaders and
//! orchestration live in `game-content` and `runtime`.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, Feedback, MoveOutcome, Pickup, Role};
pub use config::{BotConfig, DungeonConfig, GameConfig};
pub use engine::{EngineError, GameEngine, GameStatus};
pub use env::{DungeonMap, LocalView, MapDimensions, MapError, ViewError};
pub use error::{ErrorSeverity, GameError};
pub use state::{Direction, Position, Terrain, Tile};
