//! Turn protocol between the orchestrator and its participants.
//!
//! A participant is asked for an [`Action`]; the orchestrator answers an
//! `Observe` with a [`crate::LocalView`] and everything else with
//! [`Feedback`].
use crate::engine::GameStatus;
use crate::state::Direction;

/// Which side of the pursuit an actor plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Explorer,
    Bot,
}

/// Intent returned by a participant for its turn.
///
/// The pursuer only ever emits `Observe` and `Move`; the remaining variants
/// are explorer commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Request a fresh look window.
    Observe,
    Move(Direction),
    /// Ask how much gold is still needed to leave.
    Hello,
    Pickup,
    Pass,
    Quit,
}

impl Action {
    pub fn is_move(self) -> bool {
        matches!(self, Action::Move(_))
    }
}

/// Result of a movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveOutcome {
    Success,
    Failure,
    /// The move succeeded and ended the game.
    SuccessGameEnd,
}

impl MoveOutcome {
    pub fn succeeded(self) -> bool {
        matches!(self, MoveOutcome::Success | MoveOutcome::SuccessGameEnd)
    }
}

/// Result of a gold pickup attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pickup {
    pub picked: bool,
    pub gold_owned: u32,
}

/// Everything the orchestrator reports back besides look windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feedback {
    Move(MoveOutcome),
    GoldRemaining(u32),
    Pickup(Pickup),
    GameOver(GameStatus),
}
