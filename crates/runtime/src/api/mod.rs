//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the session and the bot can stay focused on orchestration and decisions.

pub mod errors;
pub mod participant;

pub use errors::{Result, RuntimeError};
pub use participant::{Participant, ScriptedParticipant};
