// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Breadth-first and depth-first traversal
//!
//! Both treat every stored edge as undirected. Neighbours are considered in
//! edge-list order, which fixes the tie-breaking between them.

use crate::graph::{Adjacency, Direction, NodeIndex};
use crate::types::Graph;
use std::collections::VecDeque;

/// Node positions in dequeue order, starting from `start`
#[must_use]
pub fn breadth_first(graph: &Graph, index: &NodeIndex<'_>, start: usize) -> Vec<usize> {
    let adjacency = Adjacency::build(graph, index, Direction::Both);
    let mut visited = vec![false; graph.nodes.len()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    visited[start] = true;
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &next in adjacency.neighbours(node) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

/// Node positions in pre-order, starting from `start`
///
/// Uses an explicit stack of `(node, next neighbour)` cursors, which yields
/// the same order as the recursive formulation without its depth limit.
#[must_use]
pub fn depth_first(graph: &Graph, index: &NodeIndex<'_>, start: usize) -> Vec<usize> {
    let adjacency = Adjacency::build(graph, index, Direction::Both);
    let mut visited = vec![false; graph.nodes.len()];
    let mut stack = vec![(start, 0usize)];
    let mut order = vec![start];

    visited[start] = true;
    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        let Some(&next) = adjacency.neighbours(node).get(cursor) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;
        if !visited[next] {
            visited[next] = true;
            order.push(next);
            stack.push((next, 0));
        }
    }

    order
}
