//! Random heading search used while no target is remembered.

use arrayvec::ArrayVec;
use game_core::Direction;
use rand::Rng;
use rand::seq::SliceRandom;

use super::belief::BeliefState;

/// Bounded random sampling that relaxes backtrack avoidance once the budget
/// runs out, so the pursuer always gets out of a dead end.
#[derive(Clone, Copy, Debug)]
pub struct HeadingSearch {
    sample_limit: u32,
}

impl HeadingSearch {
    pub fn new(sample_limit: u32) -> Self {
        Self { sample_limit }
    }

    /// A feasible heading, or `None` when every neighbour is a believed wall.
    pub fn search<R: Rng + ?Sized>(&self, belief: &BeliefState, rng: &mut R) -> Option<Direction> {
        for _ in 0..self.sample_limit {
            let candidate = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            if belief.is_feasible(candidate, false) {
                return Some(candidate);
            }
        }

        let relaxed: ArrayVec<Direction, 4> = Direction::ALL
            .into_iter()
            .filter(|direction| belief.is_feasible(*direction, true))
            .collect();
        relaxed.choose(rng).copied()
    }
}
