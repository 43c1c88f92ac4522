//! Participant implementations shipped with the runtime.

pub mod bot;

pub use bot::{BotParticipant, DecisionEngine};
