// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shortest-path visit order over directed edges
//!
//! This is a FIFO worklist with relaxation, not a heap-ordered Dijkstra. A
//! node is settled the first time it is popped, even if a cheaper path to it
//! is found later, so the visit order (and the distances) can differ from the
//! textbook algorithm on graphs where a longer-hop path is cheaper.

use crate::graph::NodeIndex;
use crate::types::Graph;
use std::collections::VecDeque;

/// Visit order and the tentative distances left when the worklist drained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relaxation {
    /// Node positions in pop order, each at most once
    pub order: Vec<usize>,
    /// Distance per node position; `None` when never reached
    pub distances: Vec<Option<u64>>,
}

/// Run the worklist relaxation from `start`
#[must_use]
pub fn relax_from(graph: &Graph, index: &NodeIndex<'_>, start: usize) -> Relaxation {
    let count = graph.nodes.len();
    let mut distances: Vec<Option<u64>> = vec![None; count];
    let mut visited = vec![false; count];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    distances[start] = Some(0);
    while let Some(current) = queue.pop_front() {
        // A node can sit in the queue more than once before it is popped.
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        let Some(base) = distances[current] else {
            continue;
        };
        for edge in &graph.edges {
            let Some((from, to)) = index.endpoints(edge) else {
                continue;
            };
            if from != current || visited[to] {
                continue;
            }
            let candidate = base + u64::from(edge.weight);
            if distances[to].map_or(true, |known| candidate < known) {
                tracing::trace!(node = %edge.to, distance = candidate, "relaxed");
                distances[to] = Some(candidate);
                queue.push_back(to);
            }
        }
    }

    Relaxation { order, distances }
}

/// Dijkstra visit order from `start`
#[must_use]
pub fn dijkstra(graph: &Graph, index: &NodeIndex<'_>, start: usize) -> Vec<usize> {
    relax_from(graph, index, start).order
}

/// A* visit order from `start`
///
/// No heuristic is applied, so this is exactly [`dijkstra`]. Adding one would
/// need a goal node, which the engine does not have.
#[must_use]
pub fn a_star(graph: &Graph, index: &NodeIndex<'_>, start: usize) -> Vec<usize> {
    dijkstra(graph, index, start)
}
