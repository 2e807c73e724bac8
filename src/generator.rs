// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Random graph generation

use crate::types::{Edge, Graph, Node};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Invalid generator settings
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Node count range is empty
    #[error("min_nodes ({min}) must not exceed max_nodes ({max})")]
    NodeRange {
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },
    /// Weight range is empty or starts at zero
    #[error("weights must satisfy 1 <= min_weight ({min}) <= max_weight ({max})")]
    WeightRange {
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },
    /// Canvas placement cannot produce finite coordinates
    #[error("canvas_extent must be a positive finite number, got {0}")]
    Canvas(f64),
}

/// Knobs for the random graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest node count (inclusive)
    pub min_nodes: usize,
    /// Largest node count (inclusive)
    pub max_nodes: usize,
    /// Lightest edge weight (inclusive)
    pub min_weight: u32,
    /// Heaviest edge weight (inclusive)
    pub max_weight: u32,
    /// Offset of the node placement area from the canvas origin
    pub canvas_margin: f64,
    /// Side length of the node placement area
    pub canvas_extent: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_nodes: 5,
            max_nodes: 10,
            min_weight: 1,
            max_weight: 10,
            canvas_margin: 50.0,
            canvas_extent: 400.0,
        }
    }
}

impl GeneratorConfig {
    /// Check the ranges are non-empty
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.min_nodes > self.max_nodes {
            return Err(GeneratorError::NodeRange {
                min: self.min_nodes,
                max: self.max_nodes,
            });
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(GeneratorError::WeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        if !self.canvas_extent.is_finite()
            || self.canvas_extent <= 0.0
            || !self.canvas_margin.is_finite()
        {
            return Err(GeneratorError::Canvas(self.canvas_extent));
        }
        Ok(())
    }
}

/// Seedable source of random graphs
pub struct GraphGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl GraphGenerator {
    /// Generator whose output is fixed by `seed`
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Generator seeded from the operating system
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// The settings in use
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce a fresh graph
    ///
    /// Every node draws between 1 and `n - 1` outgoing edge attempts to
    /// uniformly chosen targets. Attempts that land on the node itself are
    /// dropped, and parallel edges are kept, so the graph may be disconnected.
    pub fn generate(&mut self) -> Graph {
        let count = self
            .rng
            .gen_range(self.config.min_nodes..=self.config.max_nodes);
        let nodes: Vec<Node> = (0..count)
            .map(|i| Node {
                id: Node::generated_id(i),
                x: self.coordinate(),
                y: self.coordinate(),
            })
            .collect();

        let mut edges = Vec::new();
        // A single node has no possible targets.
        if count > 1 {
            for (i, source) in nodes.iter().enumerate() {
                let attempts = self.rng.gen_range(1..count);
                for _ in 0..attempts {
                    let target = self.rng.gen_range(0..count);
                    if target == i {
                        continue;
                    }
                    let weight = self
                        .rng
                        .gen_range(self.config.min_weight..=self.config.max_weight);
                    edges.push(Edge::new(source.id.clone(), nodes[target].id.clone(), weight));
                }
            }
        }

        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "generated graph");
        Graph { nodes, edges }
    }

    fn coordinate(&mut self) -> f64 {
        self.rng.gen::<f64>() * self.config.canvas_extent + self.config.canvas_margin
    }
}

/// Generate a graph with default settings and a random seed
#[must_use]
pub fn generate() -> Graph {
    GraphGenerator {
        config: GeneratorConfig::default(),
        rng: StdRng::from_entropy(),
    }
    .generate()
}
