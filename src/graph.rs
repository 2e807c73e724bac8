// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph lookups, adjacency views and interchange formats

use crate::types::{Algorithm, AlgorithmResult, Edge, Graph, Node};
use anyhow::{Context, Result};
use petgraph::graph::UnGraph;
use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Problems found when checking an externally supplied graph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Two nodes share an identifier
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),
    /// An edge points at a node that does not exist
    #[error("edge {from} -> {to} references unknown node {missing}")]
    UnknownEndpoint {
        /// Edge source
        from: String,
        /// Edge target
        to: String,
        /// The endpoint that could not be found
        missing: String,
    },
}

/// Map from node id to its position in creation order
///
/// On duplicate ids the first node wins.
#[derive(Debug, Clone)]
pub struct NodeIndex<'g> {
    positions: HashMap<&'g str, usize>,
}

impl<'g> NodeIndex<'g> {
    /// Index the nodes of `graph`
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        let mut positions = HashMap::with_capacity(graph.nodes.len());
        for (i, node) in graph.nodes.iter().enumerate() {
            positions.entry(node.id.as_str()).or_insert(i);
        }
        Self { positions }
    }

    /// Position of `id`, if it names a node
    #[must_use]
    pub fn get(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Number of distinct node ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions of both endpoints, or `None` when the edge is malformed
    #[must_use]
    pub fn endpoints(&self, edge: &Edge) -> Option<(usize, usize)> {
        match (self.get(&edge.from), self.get(&edge.to)) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => {
                tracing::trace!(%edge, "skipping edge with unknown endpoint");
                None
            }
        }
    }
}

/// Which way edges may be followed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Only `from -> to`
    Directed,
    /// Both `from -> to` and `to -> from`
    Both,
}

/// Per-node neighbour lists, in edge-list order
///
/// Built fresh for each algorithm run so one traversal convention never
/// leaks into another.
#[derive(Debug, Clone)]
pub struct Adjacency {
    neighbours: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Build the adjacency view of `graph`, skipping malformed edges
    #[must_use]
    pub fn build(graph: &Graph, index: &NodeIndex<'_>, direction: Direction) -> Self {
        let mut neighbours = vec![Vec::new(); graph.nodes.len()];
        for edge in &graph.edges {
            let Some((from, to)) = index.endpoints(edge) else {
                continue;
            };
            neighbours[from].push(to);
            if direction == Direction::Both {
                neighbours[to].push(from);
            }
        }
        Self { neighbours }
    }

    /// Neighbours of the node at `position`
    #[must_use]
    pub fn neighbours(&self, position: usize) -> &[usize] {
        self.neighbours.get(position).map_or(&[], Vec::as_slice)
    }
}

impl Graph {
    /// Create a graph from nodes and edges
    #[must_use]
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Load a graph from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize graph to JSON")
    }

    /// The default start node: first in creation order
    #[must_use]
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Get a node by ID
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Report every duplicate node id and dangling edge endpoint
    pub fn validate(&self) -> Result<(), Vec<GraphError>> {
        let mut seen = HashSet::new();
        let mut errors: Vec<GraphError> = self
            .nodes
            .iter()
            .filter(|n| !seen.insert(n.id.as_str()))
            .map(|n| GraphError::DuplicateNode(n.id.clone()))
            .collect();

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !seen.contains(endpoint.as_str()) {
                    errors.push(GraphError::UnknownEndpoint {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Number of connected components, ignoring edge direction
    #[must_use]
    pub fn component_count(&self) -> usize {
        let index = NodeIndex::new(self);
        let mut graph = UnGraph::<(), ()>::with_capacity(self.nodes.len(), self.edges.len());
        let handles: Vec<_> = self.nodes.iter().map(|_| graph.add_node(())).collect();
        for edge in &self.edges {
            if let Some((from, to)) = index.endpoints(edge) {
                graph.add_edge(handles[from], handles[to], ());
            }
        }
        // Duplicate ids collapse into their first occurrence.
        let duplicates = self.nodes.len() - index.len();
        petgraph::algo::connected_components(&graph) - duplicates
    }

    /// Export to DOT format for Graphviz
    ///
    /// With a result, visited nodes or selected edges are drawn in red and
    /// weights are labelled only when the algorithm depends on them.
    #[must_use]
    pub fn to_dot(&self, result: Option<(Algorithm, &AlgorithmResult)>) -> String {
        let mut dot = String::from("graph walk {\n");
        dot.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n\n");

        let (visited, tree, show_weights): (HashSet<&str>, HashSet<&Edge>, bool) = match result
        {
            Some((algorithm, AlgorithmResult::Visited(ids))) => (
                ids.iter().map(String::as_str).collect(),
                HashSet::new(),
                algorithm.is_weighted(),
            ),
            Some((algorithm, AlgorithmResult::SpanningTree(edges))) => (
                edges
                    .iter()
                    .flat_map(|e| [e.from.as_str(), e.to.as_str()])
                    .collect(),
                edges.iter().collect(),
                algorithm.is_weighted(),
            ),
            None => (HashSet::new(), HashSet::new(), true),
        };

        for node in &self.nodes {
            let _ = write!(
                dot,
                "  \"{}\" [pos=\"{:.1},{:.1}!\"",
                escape_id(&node.id),
                node.x,
                node.y
            );
            if visited.contains(node.id.as_str()) {
                dot.push_str(", color=red");
            }
            dot.push_str("];\n");
        }

        dot.push('\n');

        for edge in &self.edges {
            let _ = write!(
                dot,
                "  \"{}\" -- \"{}\" [",
                escape_id(&edge.from),
                escape_id(&edge.to)
            );
            let mut attrs = Vec::new();
            if show_weights {
                attrs.push(format!("label=\"{}\"", edge.weight));
            }
            if tree.contains(edge) {
                attrs.push("color=red, penwidth=2".to_string());
            } else {
                attrs.push("color=lightgray".to_string());
            }
            dot.push_str(&attrs.join(", "));
            dot.push_str("];\n");
        }

        // Visit order for traversals, as a chain of arrows.
        if let Some((_, AlgorithmResult::Visited(ids))) = result {
            if ids.len() > 1 {
                dot.push('\n');
                for pair in ids.windows(2) {
                    let _ = writeln!(
                        dot,
                        "  \"{}\" -- \"{}\" [color=red, penwidth=2, dir=forward, constraint=false];",
                        escape_id(&pair[0]),
                        escape_id(&pair[1])
                    );
                }
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Quote-safe form of an id for a DOT string literal
fn escape_id(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}
