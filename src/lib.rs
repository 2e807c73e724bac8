// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphwalk library - random weighted graphs and the six textbook walks
//!
//! This crate provides a random graph generator and an algorithm engine that
//! runs BFS, DFS, Dijkstra, A*, Prim or Kruskal over the generated graph. The
//! output is an ordered list of node ids or spanning-tree edges, ready to be
//! handed to whatever draws it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod commands;
pub mod config;
pub mod generator;
pub mod graph;

/// Core data types shared by the generator, the engine and the renderer
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    // =========================================================================
    // Graph
    // =========================================================================

    /// A graph vertex
    ///
    /// The coordinates only matter to whoever draws the graph; no algorithm
    /// looks at them.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Node {
        /// Unique identifier, `Node <n>` for generated graphs
        pub id: String,
        /// Horizontal canvas position
        #[serde(default)]
        pub x: f64,
        /// Vertical canvas position
        #[serde(default)]
        pub y: f64,
    }

    impl Node {
        /// Identifier of the `index`-th generated node (0-based index, 1-based id)
        #[must_use]
        pub fn generated_id(index: usize) -> String {
            format!("Node {}", index + 1)
        }
    }

    /// A weighted edge, directed as stored
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Edge {
        /// Source node ID
        pub from: String,
        /// Target node ID
        pub to: String,
        /// Positive weight
        pub weight: u32,
    }

    impl Edge {
        /// Create an edge
        #[must_use]
        pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
            Self {
                from: from.into(),
                to: to.into(),
                weight,
            }
        }
    }

    impl fmt::Display for Edge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} -- {} (Weight: {})", self.from, self.to, self.weight)
        }
    }

    /// Nodes in creation order plus the edge list
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Graph {
        /// All nodes; the first one is the default start node
        #[serde(default)]
        pub nodes: Vec<Node>,
        /// All edges, parallel edges included
        #[serde(default)]
        pub edges: Vec<Edge>,
    }

    // =========================================================================
    // Algorithm Selection
    // =========================================================================

    /// The six algorithms the engine can run
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
    )]
    #[serde(rename_all = "kebab-case")]
    pub enum Algorithm {
        /// Breadth-first search over undirected edges
        #[default]
        #[value(alias = "bfs")]
        BreadthFirst,
        /// Depth-first search over undirected edges
        #[value(alias = "dfs")]
        DepthFirst,
        /// Worklist shortest-path relaxation over directed edges
        Dijkstra,
        /// Same as Dijkstra; no heuristic is applied
        #[value(alias = "astar")]
        AStar,
        /// Prim's minimum spanning tree over directed edges
        Prim,
        /// Kruskal's minimum spanning tree
        Kruskal,
    }

    impl Algorithm {
        /// Every algorithm, in selector order
        #[must_use]
        pub fn all() -> [Self; 6] {
            [
                Self::BreadthFirst,
                Self::DepthFirst,
                Self::Dijkstra,
                Self::AStar,
                Self::Prim,
                Self::Kruskal,
            ]
        }

        /// Short command-line name
        #[must_use]
        pub fn code(&self) -> &'static str {
            match self {
                Self::BreadthFirst => "bfs",
                Self::DepthFirst => "dfs",
                Self::Dijkstra => "dijkstra",
                Self::AStar => "astar",
                Self::Prim => "prim",
                Self::Kruskal => "kruskal",
            }
        }

        /// Human-readable label
        #[must_use]
        pub fn display_name(&self) -> &'static str {
            match self {
                Self::BreadthFirst => "Breadth First Search",
                Self::DepthFirst => "Depth First Search",
                Self::Dijkstra => "Dijkstra's Algorithm",
                Self::AStar => "A* Algorithm",
                Self::Prim => "Prim's Algorithm",
                Self::Kruskal => "Kruskal's Algorithm",
            }
        }

        /// Whether edge weights affect the result (and so are worth showing)
        #[must_use]
        pub fn is_weighted(&self) -> bool {
            !matches!(self, Self::BreadthFirst | Self::DepthFirst)
        }

        /// Whether the result is a list of edges rather than visited nodes
        #[must_use]
        pub fn is_spanning_tree(&self) -> bool {
            matches!(self, Self::Prim | Self::Kruskal)
        }

        /// One-paragraph summary for the algorithm catalogue
        #[must_use]
        pub fn description(&self) -> &'static str {
            match self {
                Self::BreadthFirst => {
                    "Explores the graph level by level from the start node, using a queue so \
                     nodes are visited in the order they are discovered. Finds shortest paths \
                     in unweighted graphs."
                }
                Self::DepthFirst => {
                    "Follows each branch as deep as it goes before backtracking. The basis of \
                     cycle detection, topological sorting and strongly connected components."
                }
                Self::Dijkstra => {
                    "Grows shortest paths from the start node by relaxing outgoing edges. \
                     Requires non-negative weights; Bellman-Ford handles the negative case."
                }
                Self::AStar => {
                    "Dijkstra guided by a heuristic estimate of the remaining cost. This build \
                     applies no heuristic, so it visits nodes exactly as Dijkstra does."
                }
                Self::Prim => {
                    "Builds a minimum spanning tree outward from one vertex, always taking the \
                     cheapest edge that reaches a new vertex. Suited to dense graphs."
                }
                Self::Kruskal => {
                    "Builds a minimum spanning tree by taking edges in order of weight and \
                     rejecting any that would close a cycle, tracked with a union-find. Suited \
                     to sparse graphs."
                }
            }
        }
    }

    impl fmt::Display for Algorithm {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.display_name())
        }
    }

    /// Error returned when an algorithm name is not recognised
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("unknown algorithm: {0} (expected one of bfs, dfs, dijkstra, astar, prim, kruskal)")]
    pub struct UnknownAlgorithm(pub String);

    impl FromStr for Algorithm {
        type Err = UnknownAlgorithm;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let wanted = s.trim().to_lowercase();
            let parsed = match wanted.as_str() {
                "bfs" | "breadth-first" => Some(Self::BreadthFirst),
                "dfs" | "depth-first" => Some(Self::DepthFirst),
                "dijkstra" => Some(Self::Dijkstra),
                "astar" | "a-star" | "a*" => Some(Self::AStar),
                "prim" => Some(Self::Prim),
                "kruskal" => Some(Self::Kruskal),
                _ => Self::all()
                    .into_iter()
                    .find(|a| a.display_name().to_lowercase() == wanted),
            };
            parsed.ok_or_else(|| UnknownAlgorithm(s.to_string()))
        }
    }

    // =========================================================================
    // Results
    // =========================================================================

    /// What an algorithm hands to the renderer
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "kind", content = "items", rename_all = "snake_case")]
    pub enum AlgorithmResult {
        /// Node ids in visit order (BFS, DFS, Dijkstra, A*)
        Visited(Vec<String>),
        /// Selected edges in selection order (Prim, Kruskal)
        SpanningTree(Vec<Edge>),
    }

    impl AlgorithmResult {
        /// The empty result of the given algorithm's shape
        #[must_use]
        pub fn empty(algorithm: Algorithm) -> Self {
            if algorithm.is_spanning_tree() {
                Self::SpanningTree(Vec::new())
            } else {
                Self::Visited(Vec::new())
            }
        }

        /// Number of nodes or edges
        #[must_use]
        pub fn len(&self) -> usize {
            match self {
                Self::Visited(nodes) => nodes.len(),
                Self::SpanningTree(edges) => edges.len(),
            }
        }

        /// True when nothing was visited or selected
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// One display string per entry
        #[must_use]
        pub fn display_lines(&self) -> Vec<String> {
            match self {
                Self::Visited(nodes) => nodes.clone(),
                Self::SpanningTree(edges) => edges.iter().map(ToString::to_string).collect(),
            }
        }

        /// Sum of selected edge weights, for spanning trees only
        #[must_use]
        pub fn total_weight(&self) -> Option<u64> {
            match self {
                Self::Visited(_) => None,
                Self::SpanningTree(edges) => {
                    Some(edges.iter().map(|e| u64::from(e.weight)).sum())
                }
            }
        }
    }

    impl fmt::Display for AlgorithmResult {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.display_lines().join(", "))
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::algorithms::{distances, distances_from, run, run_from, EngineError};
    pub use crate::generator::{generate, GeneratorConfig, GraphGenerator};
    pub use crate::types::*;
}
