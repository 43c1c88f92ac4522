use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Reasons a dungeon layout is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("map is not rectangular: row {row} has width {found}, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown map glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("map has no passable tile to spawn on")]
    NoOpenTile,
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn position(&self) -> Option<Position> {
        match self {
            Self::UnknownGlyph { position, .. } => Some(*position),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "MAP_EMPTY",
            Self::NotRectangular { .. } => "MAP_NOT_RECTANGULAR",
            Self::UnknownGlyph { .. } => "MAP_UNKNOWN_GLYPH",
            Self::NoOpenTile => "MAP_NO_OPEN_TILE",
        }
    }
}

/// Reasons a look window is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("view has no rows")]
    Empty,

    #[error("view size {0} is even; a window needs a centre cell")]
    EvenSize(usize),

    #[error("view is not square: row {row} has width {found}, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown view glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("unknown tile stored at {0}")]
    StoredUnknown(Position),
}

impl GameError for ViewError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn position(&self) -> Option<Position> {
        match self {
            Self::UnknownGlyph { position, .. } | Self::StoredUnknown(position) => Some(*position),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "VIEW_EMPTY",
            Self::EvenSize(_) => "VIEW_EVEN_SIZE",
            Self::NotSquare { .. } => "VIEW_NOT_SQUARE",
            Self::UnknownGlyph { .. } => "VIEW_UNKNOWN_GLYPH",
            Self::StoredUnknown(_) => "VIEW_STORED_UNKNOWN",
        }
    }
}
