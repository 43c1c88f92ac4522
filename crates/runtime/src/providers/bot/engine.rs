//! Turn-level state machine of the pursuer.

use game_core::{Action, BotConfig, Direction, LocalView, MoveOutcome, Position, Tile};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::belief::BeliefState;
use super::explore::HeadingSearch;
use super::graph::ObstacleGraph;
use super::planner::{PathPlanner, PlanError};
use super::solver::{Dijkstra, PathSolver};

/// Decides each turn between looking and moving, and folds every
/// observation and move outcome back into the [`BeliefState`].
///
/// # Design
///
/// Each [`Self::request_action`] call:
/// 1. Looks if a look is pending or `look_interval` moves have passed
/// 2. Plans toward the remembered explorer with the [`PathPlanner`]
/// 3. Drops the target and explores if the planner finds no route
/// 4. Without a target, keeps the current heading while it is feasible
///    and otherwise asks the [`HeadingSearch`] for a new one
///
/// Only a successful move advances the believed position; a failed one
/// just picks a new heading. Reaching the remembered target clears it and
/// forces a look, as does stepping outside the remembered window.
///
/// All methods are synchronous and never block. The only nondeterminism is
/// the seedable generator behind the exploration search.
pub struct DecisionEngine<S = Dijkstra> {
    belief: BeliefState,
    config: BotConfig,
    planner: PathPlanner<S>,
    search: HeadingSearch,
    rng: ChaCha8Rng,
}

impl DecisionEngine<Dijkstra> {
    /// Engine seeded from OS entropy.
    pub fn new(config: BotConfig) -> Self {
        Self::from_rng(config, ChaCha8Rng::from_entropy(), Dijkstra)
    }

    /// Engine with a fixed seed; identical inputs replay identically.
    pub fn with_seed(config: BotConfig, seed: u64) -> Self {
        Self::from_rng(config, ChaCha8Rng::seed_from_u64(seed), Dijkstra)
    }
}

impl<S: PathSolver> DecisionEngine<S> {
    pub fn with_solver(config: BotConfig, seed: u64, solver: S) -> Self {
        Self::from_rng(config, ChaCha8Rng::seed_from_u64(seed), solver)
    }

    fn from_rng(config: BotConfig, mut rng: ChaCha8Rng, solver: S) -> Self {
        let heading = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        Self {
            belief: BeliefState::new(heading),
            planner: PathPlanner::new(solver, config.wall_penalty),
            search: HeadingSearch::new(config.heading_sample_limit),
            config,
            rng,
        }
    }

    /// Overrides the initial random heading.
    pub fn with_heading(mut self, heading: Direction) -> Self {
        self.belief.current_heading = heading;
        self.belief.last_heading = heading;
        self
    }

    pub fn belief(&self) -> &BeliefState {
        &self.belief
    }

    /// Either a look or a step along [`Self::choose_heading`].
    pub fn request_action(&mut self) -> Action {
        let belief = &mut self.belief;
        if belief.needs_observation || belief.turns_since_observation >= self.config.look_interval {
            belief.turns_since_observation = 0;
            belief.needs_observation = false;
            return Action::Observe;
        }

        belief.turns_since_observation += 1;
        Action::Move(self.choose_heading())
    }

    /// Heading for the next move.
    ///
    /// Pursues the remembered target through the planner; without one, keeps
    /// the current heading while it stays feasible.
    pub fn choose_heading(&mut self) -> Direction {
        match self.belief.target {
            Some(target) => match self.plan_towards(target) {
                Ok(heading) => {
                    self.belief.last_heading = self.belief.current_heading;
                    self.belief.current_heading = heading;
                }
                Err(err) => {
                    tracing::debug!("Bot dropping target: {}", err);
                    self.belief.target = None;
                    self.replan(false);
                }
            },
            None => {
                if !self.belief.is_feasible(self.belief.current_heading, true) {
                    self.replan(false);
                }
            }
        }
        self.belief.current_heading
    }

    fn plan_towards(&self, target: Position) -> Result<Direction, PlanError> {
        let Some(window) = self.belief.window.as_ref() else {
            return Err(PlanError::Unreachable {
                origin: self.belief.self_position,
                target,
            });
        };
        let graph = ObstacleGraph::from_view(window, self.planner.wall_penalty());
        self.planner
            .plan_next_heading(&graph, self.belief.self_position, target)
    }

    pub fn on_observation(&mut self, view: LocalView) {
        self.belief.observe(view);
        if let Some(target) = self.belief.target {
            tracing::debug!("Bot spotted explorer at {}", target);
        }

        if !self.belief.is_feasible(self.belief.current_heading, true) {
            // Judge backtracking against the heading actually executed last.
            self.belief.current_heading = self.belief.last_heading;
            self.replan(false);
        }
    }

    /// `SuccessGameEnd` is handled exactly like `Success`.
    pub fn on_move_outcome(&mut self, outcome: MoveOutcome) {
        if !outcome.succeeded() {
            tracing::debug!(
                "Bot move {} failed at {}",
                self.belief.current_heading,
                self.belief.self_position
            );
            self.replan(false);
            return;
        }

        let belief = &mut self.belief;
        belief.self_position = belief.self_position.step(belief.current_heading);

        if belief.target == Some(belief.self_position) {
            belief.target = None;
            belief.needs_observation = true;
            self.replan(true);
        } else if belief.target.is_none()
            && belief.tile_ahead(belief.current_heading) == Tile::Unknown
        {
            self.replan(false);
        }

        if !self.belief.is_inside_window() {
            self.belief.needs_observation = true;
        }
    }

    /// Picks a new exploration heading, discouraging a reversal of the
    /// current one unless `allow_backtrack` is set.
    fn replan(&mut self, allow_backtrack: bool) {
        let belief = &mut self.belief;
        belief.forbidden_heading = (!allow_backtrack).then(|| belief.current_heading.opposite());

        let Some(next) = self.search.search(&self.belief, &mut self.rng) else {
            tracing::warn!(
                "Bot boxed in at {}; looking again",
                self.belief.self_position
            );
            self.belief.needs_observation = true;
            return;
        };

        let belief = &mut self.belief;
        if belief.tile_ahead(next) == Tile::Unknown {
            belief.needs_observation = true;
        }
        belief.last_heading = belief.current_heading;
        belief.current_heading = next;
        tracing::debug!("Bot heading {} from {}", next, belief.self_position);
    }
}
