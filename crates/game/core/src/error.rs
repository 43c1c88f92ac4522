//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`MapError`, `EngineError`) live next to the code
//! that produces them; this module only provides the shared classification.

use crate::state::Position;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can fall back to an alternative (e.g. the
///   default map, or a different heading)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Fatal,
}

/// Common trait for all game errors.
///
/// Implementors use `#[derive(thiserror::Error)]` for `Display`/`Error` and
/// classify each variant by recoverability, not impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Position the error refers to, if any.
    fn position(&self) -> Option<Position> {
        None
    }

    /// Stable identifier for the variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
