//! Error types for engine construction.

use crate::action::Role;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{role} spawn {position} is outside the map")]
    SpawnOffMap { role: Role, position: Position },

    #[error("{role} spawn {position} is a wall")]
    SpawnOnWall { role: Role, position: Position },

    #[error("explorer and bot cannot both spawn at {0}")]
    SpawnOverlap(Position),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn position(&self) -> Option<Position> {
        match self {
            Self::SpawnOffMap { position, .. } | Self::SpawnOnWall { position, .. } => {
                Some(*position)
            }
            Self::SpawnOverlap(position) => Some(*position),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SpawnOffMap { .. } => "ENGINE_SPAWN_OFF_MAP",
            Self::SpawnOnWall { .. } => "ENGINE_SPAWN_ON_WALL",
            Self::SpawnOverlap(_) => "ENGINE_SPAWN_OVERLAP",
        }
    }
}
