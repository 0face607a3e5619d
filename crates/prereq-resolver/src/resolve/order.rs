//! Prerequisites-first topological ordering (Kahn's algorithm)
//!
//! A class becomes ready once every class it requires has been emitted.
//! Ready classes are queued first-in first-out, seeded in node order and
//! released in node order, which keeps the output deterministic.

use std::collections::VecDeque;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// Order the nodes of `graph` so that each node comes after every node it
/// has an edge to.
///
/// Returns `Err` with the nodes that could not be ordered when `graph`
/// contains a cycle.
pub(crate) fn prerequisites_first<N, E>(
    graph: &DiGraph<N, E>,
) -> Result<Vec<NodeIndex>, Vec<NodeIndex>> {
    let mut remaining: Vec<usize> = graph
        .node_indices()
        .map(|node| graph.neighbors(node).count())
        .collect();

    let mut ready: VecDeque<NodeIndex> = graph
        .node_indices()
        .filter(|node| remaining[node.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(node) = ready.pop_front() {
        order.push(node);

        let mut dependents: Vec<NodeIndex> = graph
            .neighbors_directed(node, Direction::Incoming)
            .collect();
        dependents.sort_unstable();

        for dependent in dependents {
            let count = &mut remaining[dependent.index()];
            *count -= 1;
            if *count == 0 {
                ready.push_back(dependent);
            }
        }
    }

    if order.len() < graph.node_count() {
        let blocked = graph
            .node_indices()
            .filter(|node| remaining[node.index()] > 0)
            .collect();
        return Err(blocked);
    }

    Ok(order)
}
