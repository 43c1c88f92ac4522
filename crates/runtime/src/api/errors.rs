//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from participants, spawning and engine setup so clients can
//! bubble them up with consistent context.
use game_core::{EngineError, ErrorSeverity, GameError, Role};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{role} participant not set")]
    ParticipantNotSet { role: Role },

    #[error("session requires a map before building")]
    MissingMap,

    #[error("no free tile to spawn the {role}")]
    NoSpawnTile { role: Role },

    #[error("participant I/O failed")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ParticipantNotSet { .. } | Self::MissingMap | Self::NoSpawnTile { .. } => {
                ErrorSeverity::Validation
            }
            Self::Io(_) => ErrorSeverity::Fatal,
            Self::Engine(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ParticipantNotSet { .. } => "RUNTIME_PARTICIPANT_NOT_SET",
            Self::MissingMap => "RUNTIME_MISSING_MAP",
            Self::NoSpawnTile { .. } => "RUNTIME_NO_SPAWN_TILE",
            Self::Io(_) => "RUNTIME_IO",
            Self::Engine(err) => err.error_code(),
        }
    }
}
