// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! The algorithm engine
//!
//! Every run owns its visited sets, distances and union-find outright; nothing
//! is shared between calls, so running the same algorithm twice on the same
//! graph always gives the same answer.

pub mod mst;
pub mod shortest_path;
pub mod traversal;
pub mod union_find;

use crate::graph::NodeIndex;
use crate::types::{Algorithm, AlgorithmResult, Graph};
use tracing::debug;

/// Errors raised by the engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The requested start node is not in the graph
    #[error("start node not found: {0}")]
    UnknownStart(String),
}

/// Run `algorithm` from the graph's first node
///
/// An empty graph gives an empty result.
#[must_use]
pub fn run(graph: &Graph, algorithm: Algorithm) -> AlgorithmResult {
    let index = NodeIndex::new(graph);
    match graph.start_node() {
        Some(_) => execute(graph, &index, algorithm, 0),
        None => AlgorithmResult::empty(algorithm),
    }
}

/// Run `algorithm` from the node named `start`
///
/// Kruskal ignores the start node but it must still exist.
pub fn run_from(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
) -> Result<AlgorithmResult, EngineError> {
    let index = NodeIndex::new(graph);
    let position = index
        .get(start)
        .ok_or_else(|| EngineError::UnknownStart(start.to_string()))?;
    Ok(execute(graph, &index, algorithm, position))
}

/// Dispatch to the selected algorithm
fn execute(
    graph: &Graph,
    index: &NodeIndex<'_>,
    algorithm: Algorithm,
    start: usize,
) -> AlgorithmResult {
    debug!(
        algorithm = algorithm.code(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        start = %graph.nodes[start].id,
        "running algorithm"
    );

    let result = match algorithm {
        Algorithm::BreadthFirst => visited(graph, traversal::breadth_first(graph, index, start)),
        Algorithm::DepthFirst => visited(graph, traversal::depth_first(graph, index, start)),
        Algorithm::Dijkstra => visited(graph, shortest_path::dijkstra(graph, index, start)),
        Algorithm::AStar => visited(graph, shortest_path::a_star(graph, index, start)),
        Algorithm::Prim => AlgorithmResult::SpanningTree(mst::prim(graph, index, start)),
        Algorithm::Kruskal => AlgorithmResult::SpanningTree(mst::kruskal(graph, index)),
    };

    debug!(algorithm = algorithm.code(), len = result.len(), "algorithm finished");
    result
}

/// Translate node positions back to ids
fn visited(graph: &Graph, order: Vec<usize>) -> AlgorithmResult {
    AlgorithmResult::Visited(
        order
            .into_iter()
            .map(|position| graph.nodes[position].id.clone())
            .collect(),
    )
}

/// Final tentative distance of every node reached by the shortest-path walk
///
/// Returns `(id, distance)` pairs in visit order from the first node; empty
/// for an empty graph.
#[must_use]
pub fn distances(graph: &Graph) -> Vec<(String, u64)> {
    if graph.is_empty() {
        return Vec::new();
    }
    relaxed_distances(graph, &NodeIndex::new(graph), 0)
}

/// Like [`distances`], walking from the node named `start`
pub fn distances_from(graph: &Graph, start: &str) -> Result<Vec<(String, u64)>, EngineError> {
    let index = NodeIndex::new(graph);
    let position = index
        .get(start)
        .ok_or_else(|| EngineError::UnknownStart(start.to_string()))?;
    Ok(relaxed_distances(graph, &index, position))
}

fn relaxed_distances(graph: &Graph, index: &NodeIndex<'_>, start: usize) -> Vec<(String, u64)> {
    let relaxation = shortest_path::relax_from(graph, index, start);
    relaxation
        .order
        .iter()
        .filter_map(|&position| {
            relaxation.distances[position].map(|d| (graph.nodes[position].id.clone(), d))
        })
        .collect()
}
