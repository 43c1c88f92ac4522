//! Turns a shortest route into the next heading.

use game_core::{Direction, ErrorSeverity, GameError, Position};

use super::graph::ObstacleGraph;
use super::solver::{Dijkstra, PathSolver};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// No route, or only one that crosses a believed wall.
    #[error("target {target} unreachable from {origin}")]
    Unreachable { origin: Position, target: Position },
}

impl GameError for PlanError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn position(&self) -> Option<Position> {
        match self {
            Self::Unreachable { target, .. } => Some(*target),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "PLAN_UNREACHABLE",
        }
    }
}

/// Translates the first hop of a shortest route into a [`Direction`].
///
/// # Design
///
/// The planner runs its [`PathSolver`] on an [`ObstacleGraph`] built from
/// the remembered window. Edges touching a believed wall carry the wall
/// penalty, so a route at or above it must cross a wall and is reported as
/// [`PlanError::Unreachable`]. The engine treats that as a cue to explore.
///
/// A solver that returns a non-adjacent first hop breaks the graph contract
/// and panics.
pub struct PathPlanner<S = Dijkstra> {
    solver: S,
    wall_penalty: u64,
}

impl<S: PathSolver> PathPlanner<S> {
    pub fn new(solver: S, wall_penalty: u64) -> Self {
        Self {
            solver,
            wall_penalty,
        }
    }

    pub fn wall_penalty(&self) -> u64 {
        self.wall_penalty
    }

    /// First step of the cheapest route from `source` to `target`.
    ///
    /// A route whose cost reaches the wall penalty has to cross a believed
    /// wall and counts as unreachable.
    ///
    /// # Panics
    ///
    /// Panics if the solver's second node is not orthogonally adjacent to
    /// `source`; that means the graph was built wrong.
    pub fn plan_next_heading(
        &self,
        graph: &ObstacleGraph,
        source: Position,
        target: Position,
    ) -> Result<Direction, PlanError> {
        let unreachable = PlanError::Unreachable {
            origin: source,
            target,
        };
        let (Some(from), Some(to)) = (graph.node_of(source), graph.node_of(target)) else {
            return Err(unreachable);
        };

        let route = self
            .solver
            .shortest_path(graph, from, to)
            .filter(|route| route.nodes.len() >= 2 && route.cost < self.wall_penalty)
            .ok_or(unreachable)?;

        let next = graph.position_of(route.nodes[1]);
        let (d_row, d_col) = source.displacement_to(next);
        match Direction::from_delta(d_row, d_col) {
            Some(direction) => Ok(direction),
            None => panic!("solver returned non-adjacent hop {source} -> {next}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::bot::graph::NodeId;
    use crate::providers::bot::solver::Route;
    use game_core::LocalView;

    const PENALTY: u64 = 99_999;

    fn graph(rows: &[&str]) -> ObstacleGraph {
        ObstacleGraph::from_view(&LocalView::from_glyphs(rows).unwrap(), PENALTY)
    }

    fn planner() -> PathPlanner {
        PathPlanner::new(Dijkstra, PENALTY)
    }

    #[test]
    fn target_two_steps_east_plans_east() {
        let graph = graph(&[".....", ".....", "....P", ".....", "....."]);
        let heading = planner()
            .plan_next_heading(&graph, Position::new(2, 2), Position::new(2, 4))
            .unwrap();
        assert_eq!(heading, Direction::East);
    }

    #[test]
    fn every_displacement_maps_to_its_heading() {
        let graph = graph(&[".....", ".....", ".....", ".....", "....."]);
        let centre = Position::new(2, 2);
        for direction in Direction::ALL {
            let target = centre.step(direction);
            assert_eq!(
                planner().plan_next_heading(&graph, centre, target),
                Ok(direction)
            );
        }
    }

    #[test]
    fn detours_around_wall_between_bot_and_target() {
        let graph = graph(&[".....", ".....", "..#..", ".....", "....."]);
        let heading = planner()
            .plan_next_heading(&graph, Position::new(2, 1), Position::new(2, 3))
            .unwrap();
        assert!(matches!(heading, Direction::North | Direction::South));
    }

    #[test]
    fn walled_in_target_is_unreachable() {
        let graph = graph(&["...#P", "...##", ".....", ".....", "....."]);
        let source = Position::new(2, 2);
        let target = Position::new(0, 4);
        assert_eq!(
            planner().plan_next_heading(&graph, source, target),
            Err(PlanError::Unreachable {
                origin: source,
                target
            })
        );
    }

    #[test]
    fn target_outside_window_is_unreachable() {
        let graph = graph(&["...", "...", "..."]);
        let err = planner()
            .plan_next_heading(&graph, Position::new(1, 1), Position::new(1, 3))
            .unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    }

    struct Teleporting;

    impl PathSolver for Teleporting {
        fn shortest_path(
            &self,
            _graph: &ObstacleGraph,
            source: NodeId,
            destination: NodeId,
        ) -> Option<Route> {
            Some(Route {
                nodes: vec![source, destination],
                cost: 1,
            })
        }
    }

    #[test]
    #[should_panic(expected = "non-adjacent hop")]
    fn non_adjacent_hop_is_fatal() {
        let graph = graph(&[".....", ".....", ".....", ".....", "....."]);
        let _ = PathPlanner::new(Teleporting, PENALTY).plan_next_heading(
            &graph,
            Position::new(2, 2),
            Position::new(2, 4),
        );
    }
}
