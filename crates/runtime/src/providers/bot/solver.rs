//! Shortest-path search over an [`ObstacleGraph`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::graph::{NodeId, ObstacleGraph};

/// Minimum-weight path, source first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub cost: u64,
}

/// Weighted shortest-path primitive the planner is written against.
pub trait PathSolver {
    /// Cheapest route from `source` to `destination`, `None` if unreachable.
    fn shortest_path(
        &self,
        graph: &ObstacleGraph,
        source: NodeId,
        destination: NodeId,
    ) -> Option<Route>;
}

/// Dijkstra with a binary heap. Ties break on the lower node id, so equal
/// cost routes always resolve the same way.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dijkstra;

impl PathSolver for Dijkstra {
    fn shortest_path(
        &self,
        graph: &ObstacleGraph,
        source: NodeId,
        destination: NodeId,
    ) -> Option<Route> {
        let count = graph.node_count();
        if source >= count || destination >= count {
            return None;
        }

        let mut dist = vec![u64::MAX; count];
        let mut previous: Vec<Option<NodeId>> = vec![None; count];
        let mut heap = BinaryHeap::new();

        dist[source] = 0;
        heap.push(Reverse((0u64, source)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            if node == destination {
                break;
            }
            if cost > dist[node] {
                continue;
            }
            for edge in graph.edges(node) {
                let next_cost = cost.saturating_add(edge.weight);
                if next_cost < dist[edge.to] {
                    dist[edge.to] = next_cost;
                    previous[edge.to] = Some(node);
                    heap.push(Reverse((next_cost, edge.to)));
                }
            }
        }

        if dist[destination] == u64::MAX {
            return None;
        }

        let mut nodes = vec![destination];
        let mut cursor = destination;
        while let Some(prev) = previous[cursor] {
            nodes.push(prev);
            cursor = prev;
        }
        nodes.reverse();

        Some(Route {
            nodes,
            cost: dist[destination],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{LocalView, Position};

    fn graph(rows: &[&str]) -> ObstacleGraph {
        ObstacleGraph::from_view(&LocalView::from_glyphs(rows).unwrap(), 1_000)
    }

    fn node(graph: &ObstacleGraph, row: i32, col: i32) -> NodeId {
        graph.node_of(Position::new(row, col)).unwrap()
    }

    #[test]
    fn straight_line_route() {
        let graph = graph(&[".....", ".....", ".....", ".....", "....."]);
        let route = Dijkstra
            .shortest_path(&graph, node(&graph, 2, 2), node(&graph, 2, 4))
            .unwrap();
        assert_eq!(route.cost, 2);
        assert_eq!(
            route.nodes,
            vec![node(&graph, 2, 2), node(&graph, 2, 3), node(&graph, 2, 4)]
        );
    }

    #[test]
    fn routes_around_walls() {
        let graph = graph(&[".....", ".....", "..#..", ".....", "....."]);
        let route = Dijkstra
            .shortest_path(&graph, node(&graph, 2, 1), node(&graph, 2, 3))
            .unwrap();
        assert_eq!(route.cost, 4);
        assert!(!route.nodes.contains(&node(&graph, 2, 2)));
    }

    #[test]
    fn walled_in_target_costs_a_penalty() {
        let graph = graph(&["...#.", "...##", ".....", ".....", "....."]);
        let route = Dijkstra
            .shortest_path(&graph, node(&graph, 2, 2), node(&graph, 0, 4))
            .unwrap();
        assert!(route.cost >= 1_000);
    }

    #[test]
    fn source_is_its_own_route() {
        let graph = graph(&["...", "...", "..."]);
        let route = Dijkstra.shortest_path(&graph, 4, 4).unwrap();
        assert_eq!(route.nodes, vec![4]);
        assert_eq!(route.cost, 0);
    }

    #[test]
    fn out_of_range_nodes_are_unreachable() {
        let graph = graph(&["...", "...", "..."]);
        assert_eq!(Dijkstra.shortest_path(&graph, 0, 9), None);
    }
}
