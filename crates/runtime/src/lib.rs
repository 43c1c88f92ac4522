//! Runtime orchestration for the pursuit game.
//!
//! This crate wires the participant abstraction, the autonomous pursuer and
//! spawning into a [`Session`] that drives turns against the authoritative
//! [`game_core::GameEngine`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the participant trait and error types
//! - [`providers`] hosts the bot and its decision core
//! - [`session`] hosts the orchestrator and builder
//! - [`spawn`] picks start positions
pub mod api;
pub mod providers;
pub mod session;
pub mod spawn;

pub use api::{Participant, Result, RuntimeError, ScriptedParticipant};
pub use providers::bot::{
    BeliefState, BotParticipant, DecisionEngine, Dijkstra, ObstacleGraph, PathPlanner,
    PathSolver, PlanError,
};
pub use session::{Session, SessionBuilder};
pub use spawn::spawn_positions;
