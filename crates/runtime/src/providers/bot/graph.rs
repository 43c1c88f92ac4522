//! Weighted grid graph over the remembered window.

use arrayvec::ArrayVec;
use game_core::{Direction, LocalView, Position};

/// Index of a window cell, row-major.
pub type NodeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub to: NodeId,
    pub weight: u64,
}

/// One node per window cell with orthogonal, bidirectional edges.
///
/// Plain edges weigh 1. Every edge touching a believed wall, in either
/// direction, weighs the wall penalty instead, so a solver routes around
/// walls without the graph ever becoming disconnected. The graph is rebuilt
/// from scratch for each query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleGraph {
    size: usize,
    adjacency: Vec<ArrayVec<Edge, 4>>,
}

impl ObstacleGraph {
    pub const UNIT_WEIGHT: u64 = 1;

    pub fn from_view(view: &LocalView, wall_penalty: u64) -> Self {
        let size = view.size();
        let mut graph = Self {
            size,
            adjacency: vec![ArrayVec::new(); size * size],
        };

        // Each undirected pair once: look east and south only.
        for (position, _) in view.cells() {
            for direction in [Direction::East, Direction::South] {
                if let Some(next) = graph.node_of(position.step(direction)) {
                    graph.connect(graph.index(position), next);
                }
            }
        }

        for (position, tile) in view.cells() {
            if tile.is_wall() {
                graph.penalize(graph.index(position), wall_penalty);
            }
        }

        graph
    }

    fn connect(&mut self, a: NodeId, b: NodeId) {
        self.adjacency[a].push(Edge {
            to: b,
            weight: Self::UNIT_WEIGHT,
        });
        self.adjacency[b].push(Edge {
            to: a,
            weight: Self::UNIT_WEIGHT,
        });
    }

    fn penalize(&mut self, node: NodeId, penalty: u64) {
        let neighbours: ArrayVec<NodeId, 4> = self.adjacency[node]
            .iter_mut()
            .map(|edge| {
                edge.weight = penalty;
                edge.to
            })
            .collect();

        for neighbour in neighbours {
            for edge in self.adjacency[neighbour]
                .iter_mut()
                .filter(|edge| edge.to == node)
            {
                edge.weight = penalty;
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Node for a window position, `None` outside the window.
    pub fn node_of(&self, position: Position) -> Option<NodeId> {
        let inside = position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.size
            && (position.col as usize) < self.size;
        inside.then(|| self.index(position))
    }

    pub fn position_of(&self, node: NodeId) -> Position {
        Position::new((node / self.size) as i32, (node % self.size) as i32)
    }

    pub fn edges(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(|edges| edges.as_slice())
            .unwrap_or_default()
    }

    /// Weight of the edge `from -> to`, if the two nodes are adjacent.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<u64> {
        self.edges(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    fn index(&self, position: Position) -> NodeId {
        position.row as usize * self.size + position.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENALTY: u64 = 1_000;

    fn graph(rows: &[&str]) -> ObstacleGraph {
        ObstacleGraph::from_view(&LocalView::from_glyphs(rows).unwrap(), PENALTY)
    }

    #[test]
    fn open_window_has_unit_grid_edges() {
        let graph = graph(&["...", "...", "..."]);
        assert_eq!(graph.node_count(), 9);

        // Corner, edge and centre degrees.
        assert_eq!(graph.edges(0).len(), 2);
        assert_eq!(graph.edges(1).len(), 3);
        assert_eq!(graph.edges(4).len(), 4);

        assert_eq!(graph.weight(4, 5), Some(1));
        assert_eq!(graph.weight(5, 4), Some(1));
        assert_eq!(graph.weight(0, 4), None);
    }

    #[test]
    fn edges_touching_walls_carry_penalty_both_ways() {
        let graph = graph(&[".#.", "...", "..."]);
        let wall = graph.node_of(Position::new(0, 1)).unwrap();
        let below = graph.node_of(Position::new(1, 1)).unwrap();

        assert_eq!(graph.weight(wall, below), Some(PENALTY));
        assert_eq!(graph.weight(below, wall), Some(PENALTY));
        assert_eq!(graph.weight(0, wall), Some(PENALTY));
        assert_eq!(graph.weight(0, 3), Some(1));
    }

    #[test]
    fn adjacent_walls_share_penalized_edge() {
        let graph = graph(&["##.", "...", "..."]);
        assert_eq!(graph.weight(0, 1), Some(PENALTY));
        assert_eq!(graph.weight(1, 0), Some(PENALTY));
        assert_eq!(graph.weight(1, 2), Some(PENALTY));
    }

    #[test]
    fn node_lookup_respects_window_bounds() {
        let graph = graph(&["...", "...", "..."]);
        assert_eq!(graph.node_of(Position::new(2, 2)), Some(8));
        assert_eq!(graph.node_of(Position::new(3, 0)), None);
        assert_eq!(graph.node_of(Position::new(0, -1)), None);
        assert_eq!(graph.position_of(5), Position::new(1, 2));
        assert!(graph.edges(42).is_empty());
    }
}
