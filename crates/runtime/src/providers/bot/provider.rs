//! [`Participant`] adapter around the decision engine.

use async_trait::async_trait;
use game_core::{Action, BotConfig, Feedback, LocalView};

use super::engine::DecisionEngine;
use super::solver::{Dijkstra, PathSolver};
use crate::api::{Participant, Result};

/// The pursuer as seen by a session.
///
/// The engine decides synchronously; this wrapper only routes the session's
/// calls into it.
pub struct BotParticipant<S = Dijkstra> {
    engine: DecisionEngine<S>,
}

impl BotParticipant<Dijkstra> {
    pub fn new(config: BotConfig, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => DecisionEngine::with_seed(config, seed),
            None => DecisionEngine::new(config),
        };
        Self { engine }
    }
}

impl<S> BotParticipant<S> {
    pub fn from_engine(engine: DecisionEngine<S>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &DecisionEngine<S> {
        &self.engine
    }
}

#[async_trait]
impl<S: PathSolver + Send> Participant for BotParticipant<S> {
    async fn request_action(&mut self) -> Result<Action> {
        let action = self.engine.request_action();
        tracing::trace!("Bot chose {:?}", action);
        Ok(action)
    }

    fn deliver_observation(&mut self, view: LocalView) {
        self.engine.on_observation(view);
    }

    fn report_outcome(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Move(outcome) => self.engine.on_move_outcome(outcome),
            Feedback::GameOver(status) => tracing::debug!("Bot notified game over: {}", status),
            other => tracing::warn!("Bot ignoring unexpected feedback {:?}", other),
        }
    }
}
