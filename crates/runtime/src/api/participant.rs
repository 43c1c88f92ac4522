//! Capability shared by everything that takes turns in a session.
//!
//! The explorer (human console, scripted fixture) and the bot are independent
//! implementations of [`Participant`]; each owns its own state and only ever
//! sees value copies of the world.
use std::collections::VecDeque;

use async_trait::async_trait;
use game_core::{Action, Feedback, LocalView};

use super::errors::Result;

#[async_trait]
pub trait Participant: Send {
    /// Intent for the current turn.
    async fn request_action(&mut self) -> Result<Action>;

    /// Called only in response to [`Action::Observe`].
    fn deliver_observation(&mut self, view: LocalView);

    /// Called after every other action, and once more when the game ends.
    fn report_outcome(&mut self, feedback: Feedback);
}

/// Participant that replays a fixed list of actions and then passes.
/// Useful as a stand-in explorer for tests and headless runs.
#[derive(Debug, Default)]
pub struct ScriptedParticipant {
    script: VecDeque<Action>,
}

impl ScriptedParticipant {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Participant that never does anything but pass.
    pub fn idle() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Participant for ScriptedParticipant {
    async fn request_action(&mut self) -> Result<Action> {
        Ok(self.script.pop_front().unwrap_or(Action::Pass))
    }

    fn deliver_observation(&mut self, _view: LocalView) {}

    fn report_outcome(&mut self, _feedback: Feedback) {}
}
