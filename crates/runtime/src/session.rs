//! Turn orchestration for one game.
//!
//! A [`Session`] owns the authoritative [`GameEngine`] and both participants.
//! Each round asks the explorer, then the bot, for one action and answers it
//! with a value-copied window or a [`Feedback`].

use game_core::{
    Action, DungeonMap, Feedback, GameConfig, GameEngine, GameStatus, Position, Role,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::api::{Participant, Result, RuntimeError};
use crate::spawn::spawn_positions;

pub struct Session {
    engine: GameEngine,
    explorer: Box<dyn Participant>,
    bot: Box<dyn Participant>,
    rounds: u64,
    notified: bool,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Completed rounds.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Plays one round and returns the status afterwards.
    ///
    /// The bot does not act once the explorer's turn has ended the game.
    pub async fn step(&mut self) -> Result<GameStatus> {
        if self.status().is_over() {
            return Ok(self.status());
        }

        self.take_turn(Role::Explorer).await?;
        if !self.status().is_over() {
            self.take_turn(Role::Bot).await?;
        }
        self.rounds += 1;
        tracing::trace!("Board after round {}:\n{}", self.rounds, self.engine.render());

        let status = self.status();
        if status.is_over() {
            self.finish(status);
        }
        Ok(status)
    }

    /// Plays rounds until the game is over.
    pub async fn run(&mut self) -> Result<GameStatus> {
        loop {
            let status = self.step().await?;
            if status.is_over() {
                return Ok(status);
            }
        }
    }

    async fn take_turn(&mut self, role: Role) -> Result<()> {
        let participant = match role {
            Role::Explorer => &mut self.explorer,
            Role::Bot => &mut self.bot,
        };
        let action = participant.request_action().await?;
        tracing::debug!("{} requested {:?}", role, action);

        match (role, action) {
            (_, Action::Observe) => participant.deliver_observation(self.engine.look(role)),
            (_, Action::Move(direction)) => {
                let outcome = self.engine.move_actor(role, direction);
                participant.report_outcome(Feedback::Move(outcome));
            }
            (_, Action::Pass) => {}
            (Role::Explorer, Action::Hello) => {
                participant.report_outcome(Feedback::GoldRemaining(self.engine.hello()));
            }
            (Role::Explorer, Action::Pickup) => {
                participant.report_outcome(Feedback::Pickup(self.engine.pickup()));
            }
            (Role::Explorer, Action::Quit) => self.engine.quit(),
            (Role::Bot, other) => {
                tracing::warn!("Bot cannot {:?}; turn skipped", other);
            }
        }
        Ok(())
    }

    fn finish(&mut self, status: GameStatus) {
        if self.notified {
            return;
        }
        self.notified = true;
        tracing::info!(
            "Game over after {} rounds: {} (gold owned {})",
            self.rounds,
            status,
            self.engine.gold_owned()
        );
        self.explorer.report_outcome(Feedback::GameOver(status));
        self.bot.report_outcome(Feedback::GameOver(status));
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    map: Option<DungeonMap>,
    config: GameConfig,
    explorer: Option<Box<dyn Participant>>,
    bot: Option<Box<dyn Participant>>,
    spawns: Option<(Position, Position)>,
    seed: Option<u64>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            map: None,
            config: GameConfig::default(),
            explorer: None,
            bot: None,
            spawns: None,
            seed: None,
        }
    }

    pub fn map(mut self, map: DungeonMap) -> Self {
        self.map = Some(map);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn explorer(mut self, participant: impl Participant + 'static) -> Self {
        self.explorer = Some(Box::new(participant));
        self
    }

    pub fn bot(mut self, participant: impl Participant + 'static) -> Self {
        self.bot = Some(Box::new(participant));
        self
    }

    /// Fixed start positions instead of random spawning.
    pub fn spawns(mut self, explorer: Position, bot: Position) -> Self {
        self.spawns = Some((explorer, bot));
        self
    }

    /// Seed for random spawning.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Session> {
        let map = self.map.ok_or(RuntimeError::MissingMap)?;
        let explorer = self.explorer.ok_or(RuntimeError::ParticipantNotSet {
            role: Role::Explorer,
        })?;
        let bot = self
            .bot
            .ok_or(RuntimeError::ParticipantNotSet { role: Role::Bot })?;

        let (explorer_at, bot_at) = match self.spawns {
            Some(spawns) => spawns,
            None => {
                let mut rng = match self.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                spawn_positions(&map, &mut rng)?
            }
        };

        tracing::info!(
            "Starting {:?}: explorer at {}, bot at {}, gold required {}",
            map.name(),
            explorer_at,
            bot_at,
            map.gold_required()
        );
        let engine = GameEngine::new(map, self.config, explorer_at, bot_at)?;

        Ok(Session {
            engine,
            explorer,
            bot,
            rounds: 0,
            notified: false,
        })
    }
}
