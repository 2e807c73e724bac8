// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Run command - executes one algorithm over a loaded or generated graph

use super::{generate, write_output, OutputFormat, Style};
use crate::algorithms;
use crate::config::Config;
use crate::types::{Algorithm, AlgorithmResult, Graph};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{info, warn};

/// Arguments for the run command
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Algorithm to run; the configured default when absent
    pub algorithm: Option<Algorithm>,
    /// Graph JSON file; a random graph is generated when absent
    pub input: Option<PathBuf>,
    /// Seed for the generated graph
    pub seed: Option<u64>,
    /// Start node id; the first node when absent
    pub start: Option<String>,
    /// Output file (stdout if not specified)
    pub output: Option<PathBuf>,
}

/// Everything a renderer needs to draw one run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Algorithm that produced the result
    pub algorithm: Algorithm,
    /// Node the walk started from, if any
    pub start: Option<String>,
    /// The ordered result
    pub result: AlgorithmResult,
    /// One display string per result entry
    pub display: Vec<String>,
    /// Spanning-tree weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,
    /// Shortest-path distances, for Dijkstra and A*
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<(String, u64)>>,
    /// The graph the algorithm ran over
    pub graph: Graph,
}

impl RunReport {
    /// Run `algorithm` over `graph` and collect the report
    pub fn build(graph: Graph, algorithm: Algorithm, start: Option<&str>) -> Result<Self> {
        let (result, start) = match start {
            Some(id) => (algorithms::run_from(&graph, algorithm, id)?, Some(id.to_string())),
            None => (
                algorithms::run(&graph, algorithm),
                graph.start_node().map(|n| n.id.clone()),
            ),
        };

        let distances = match (algorithm, start.as_deref()) {
            (Algorithm::Dijkstra | Algorithm::AStar, Some(id)) => {
                Some(algorithms::distances_from(&graph, id)?)
            }
            _ => None,
        };

        Ok(Self {
            algorithm,
            start,
            display: result.display_lines(),
            total_weight: result.total_weight(),
            distances,
            result,
            graph,
        })
    }

    /// Plain-text report: heading, start node, result lines and totals
    #[must_use]
    pub fn to_text(&self, style: Style) -> String {
        let mut text = String::new();
        let _ = writeln!(
            text,
            "{}",
            style.heading(&format!("Output: {}", self.algorithm.display_name()))
        );

        if let Some(start) = &self.start {
            let _ = writeln!(text, "{}", style.dim(&format!("Start: {start}")));
        }

        let label = if self.algorithm.is_spanning_tree() {
            "Selected Edges"
        } else {
            "Visited Nodes"
        };
        let joined = if self.display.is_empty() {
            "(none)".to_string()
        } else {
            self.display.join(", ")
        };
        let _ = writeln!(text, "{label}: {}", style.highlight(&joined));

        if let Some(weight) = self.total_weight {
            let _ = writeln!(text, "Total Weight: {weight}");
        }

        if let Some(distances) = &self.distances {
            let rendered: Vec<String> = distances
                .iter()
                .map(|(id, d)| format!("{id}={d}"))
                .collect();
            let _ = writeln!(text, "Distances: {}", rendered.join(", "));
        }

        if let Some(reached) = self.reached() {
            let unreached = self.graph.node_count().saturating_sub(reached);
            if unreached > 0 {
                let _ = writeln!(
                    text,
                    "{}",
                    style.dim(&format!("{unreached} node(s) not reached"))
                );
            }
        }
        text
    }

    /// Nodes covered by a walk or by Prim's tree; Kruskal builds a forest
    /// with no single root, so it has no meaningful count.
    fn reached(&self) -> Option<usize> {
        match (&self.result, self.algorithm) {
            (AlgorithmResult::Visited(ids), _) => Some(ids.len()),
            (AlgorithmResult::SpanningTree(edges), Algorithm::Prim) if self.start.is_some() => {
                Some(edges.len() + 1)
            }
            _ => None,
        }
    }
}

/// Run the run command
pub fn run(config: &Config, args: RunArgs, format: OutputFormat, style: Style) -> Result<()> {
    let algorithm = args.algorithm.unwrap_or(config.default_algorithm);

    let graph = match &args.input {
        Some(path) => {
            let graph = Graph::load(path)
                .with_context(|| format!("Failed to load graph from {}", path.display()))?;
            if let Err(problems) = graph.validate() {
                for problem in &problems {
                    warn!("{problem}; the edge or node will be ignored");
                }
            }
            graph
        }
        None => generate::generator(&config.generator, args.seed)?.generate(),
    };

    if graph.is_empty() {
        warn!("Graph has no nodes; the result will be empty");
    }

    info!("Running {} over {} nodes", algorithm.display_name(), graph.node_count());
    let report = RunReport::build(graph, algorithm, args.start.as_deref())?;

    let content = match format {
        OutputFormat::Text => report.to_text(style),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize run report")?
        }
        OutputFormat::Dot => report.graph.to_dot(Some((report.algorithm, &report.result))),
    };
    write_output(&content, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Node};

    fn sample() -> Graph {
        let node = |id: &str| Node {
            id: id.into(),
            x: 0.0,
            y: 0.0,
        };
        Graph::new(
            vec![node("Node 1"), node("Node 2"), node("Node 3"), node("Node 4")],
            vec![
                Edge::new("Node 1", "Node 2", 1),
                Edge::new("Node 2", "Node 3", 2),
                Edge::new("Node 1", "Node 3", 5),
            ],
        )
    }

    #[test]
    fn test_text_report_for_traversal() {
        let report = RunReport::build(sample(), Algorithm::BreadthFirst, None).unwrap();
        let text = report.to_text(Style::new(false));
        assert!(text.starts_with("Output: Breadth First Search\n"));
        assert!(text.contains("Visited Nodes: Node 1, Node 2, Node 3\n"));
        assert!(text.contains("1 node(s) not reached"));
    }

    #[test]
    fn test_text_report_for_spanning_tree() {
        let report = RunReport::build(sample(), Algorithm::Kruskal, None).unwrap();
        let text = report.to_text(Style::new(false));
        assert!(text.contains(
            "Selected Edges: Node 1 -- Node 2 (Weight: 1), Node 2 -- Node 3 (Weight: 2)\n"
        ));
        assert!(text.contains("Total Weight: 3\n"));
        assert!(!text.contains("not reached"));

        let report = RunReport::build(sample(), Algorithm::Prim, None).unwrap();
        assert!(report.to_text(Style::new(false)).contains("1 node(s) not reached"));
    }

    #[test]
    fn test_distances_only_for_shortest_path() {
        let report = RunReport::build(sample(), Algorithm::AStar, None).unwrap();
        assert_eq!(
            report.distances,
            Some(vec![
                ("Node 1".to_string(), 0),
                ("Node 2".to_string(), 1),
                ("Node 3".to_string(), 3),
            ])
        );
        let report = RunReport::build(sample(), Algorithm::Prim, None).unwrap();
        assert!(report.distances.is_none());
    }

    #[test]
    fn test_unknown_start_is_an_error() {
        let err = RunReport::build(sample(), Algorithm::DepthFirst, Some("Node 9")).unwrap_err();
        assert!(err.to_string().contains("Node 9"));
    }

    #[test]
    fn test_empty_graph_report() {
        let report = RunReport::build(Graph::default(), Algorithm::Prim, None).unwrap();
        let text = report.to_text(Style::new(false));
        assert!(text.contains("Selected Edges: (none)"));
        assert!(report.start.is_none());
    }
}
