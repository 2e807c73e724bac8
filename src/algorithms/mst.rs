// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimum spanning trees: Prim and Kruskal

use super::union_find::DisjointSet;
use crate::graph::NodeIndex;
use crate::types::{Edge, Graph};

/// Prim's algorithm grown from `start`, following edges `from -> to` only
///
/// Each round takes the lightest edge leaving the tree, the earliest one on
/// ties. Stops early when no edge leaves the tree, so a graph that is not
/// reachable from `start` yields a partial tree.
#[must_use]
pub fn prim(graph: &Graph, index: &NodeIndex<'_>, start: usize) -> Vec<Edge> {
    let mut in_tree = vec![false; graph.nodes.len()];
    let distinct = index.len();
    let mut reached = 1;
    let mut tree = Vec::new();

    in_tree[start] = true;
    while reached < distinct {
        let mut lightest: Option<(&Edge, usize)> = None;
        for edge in &graph.edges {
            let Some((from, to)) = index.endpoints(edge) else {
                continue;
            };
            if !in_tree[from] || in_tree[to] {
                continue;
            }
            if lightest.map_or(true, |(best, _)| edge.weight < best.weight) {
                lightest = Some((edge, to));
            }
        }

        let Some((edge, to)) = lightest else {
            tracing::debug!(reached, total = distinct, "no edge leaves the tree; stopping");
            break;
        };
        in_tree[to] = true;
        reached += 1;
        tree.push(edge.clone());
    }

    tree
}

/// Kruskal's algorithm over every edge, independent of any start node
///
/// Edges are taken in ascending weight with ties kept in list order.
#[must_use]
pub fn kruskal(graph: &Graph, index: &NodeIndex<'_>) -> Vec<Edge> {
    let mut sorted: Vec<&Edge> = graph.edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight);

    let mut sets = DisjointSet::new(graph.nodes.len());
    sorted
        .into_iter()
        .filter(|edge| {
            index
                .endpoints(edge)
                .is_some_and(|(from, to)| sets.union(from, to))
        })
        .cloned()
        .collect()
}
