// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Generate command - produces a random graph

use super::{write_output, OutputFormat, Style};
use crate::generator::{GeneratorConfig, GraphGenerator};
use crate::types::Graph;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Build a generator, seeded when a seed is given
pub fn generator(config: &GeneratorConfig, seed: Option<u64>) -> Result<GraphGenerator> {
    let generator = match seed {
        Some(seed) => GraphGenerator::new(config.clone(), seed),
        None => GraphGenerator::from_entropy(config.clone()),
    };
    generator.context("Invalid generator settings")
}

/// Run the generate command
pub fn run(
    config: &GeneratorConfig,
    seed: Option<u64>,
    format: OutputFormat,
    output: Option<&Path>,
    style: Style,
) -> Result<()> {
    let graph = generator(config, seed)?.generate();
    info!(
        "Generated {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let content = match format {
        OutputFormat::Text => summary(&graph, style),
        OutputFormat::Json => graph.to_json()?,
        OutputFormat::Dot => graph.to_dot(None),
    };
    write_output(&content, output)
}

/// Plain-text listing of a graph
#[must_use]
pub fn summary(graph: &Graph, style: Style) -> String {
    let mut text = String::new();
    let _ = writeln!(
        text,
        "{}",
        style.heading(&format!(
            "Graph: {} nodes, {} edges, {} component(s)",
            graph.node_count(),
            graph.edge_count(),
            graph.component_count()
        ))
    );

    let _ = writeln!(text, "Nodes:");
    for node in &graph.nodes {
        let _ = writeln!(
            text,
            "  {} {}",
            node.id,
            style.dim(&format!("({:.1}, {:.1})", node.x, node.y))
        );
    }

    let _ = writeln!(text, "Edges:");
    if graph.edges.is_empty() {
        let _ = writeln!(text, "  (none)");
    }
    for edge in &graph.edges {
        let _ = writeln!(text, "  {} -> {} [{}]", edge.from, edge.to, edge.weight);
    }
    text
}
