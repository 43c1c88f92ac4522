//! Autonomous pursuer.
//!
//! The bot only knows the last window it looked at. [`BeliefState`] holds
//! that memory, [`ObstacleGraph`] and [`PathPlanner`] turn it into a route
//! towards a remembered explorer, [`HeadingSearch`] wanders when nobody is in
//! sight, and [`DecisionEngine`] ties them into one turn-level state machine.

pub mod belief;
pub mod engine;
pub mod explore;
pub mod graph;
pub mod planner;
pub mod provider;
pub mod solver;

pub use belief::BeliefState;
pub use engine::DecisionEngine;
pub use explore::HeadingSearch;
pub use graph::{Edge, NodeId, ObstacleGraph};
pub use planner::{PathPlanner, PlanError};
pub use provider::BotParticipant;
pub use solver::{Dijkstra, PathSolver, Route};
