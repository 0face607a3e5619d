//! Cycle detection over prerequisite edges
//!
//! Edges point from an item to each of its prerequisites. Detection runs an
//! iterative depth-first traversal with an explicit work stack and an
//! on-stack marker per node, so long prerequisite chains cannot overflow the
//! call stack. The first back edge found closes a cycle; the reported
//! members are exactly the stack segment from the repeated node to the
//! current node, never the whole traversal stack.

use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::graph::CourseGraph;

/// One cycle among prerequisite edges, in traversal order.
///
/// Each member lists the next one as a prerequisite and the last member
/// lists the first. A self-referencing item is a one-member cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    members: Vec<String>,
}

impl Cycle {
    /// Members in traversal order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Consume the cycle, returning its members
    pub fn into_members(self) -> Vec<String> {
        self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; a detected cycle has at least one member
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check if `name` is a member of this cycle
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }
}

impl fmt::Display for Cycle {
    /// Formats as "a -> b -> c -> a"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for member in &self.members {
            write!(f, "{} -> ", member)?;
        }
        match self.members.first() {
            Some(first) => f.write_str(first),
            None => f.write_str("no cycle"),
        }
    }
}

struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    cursor: usize,
}

impl Frame {
    fn new<N, E>(graph: &DiGraph<N, E>, node: NodeIndex) -> Self {
        // petgraph lists neighbors newest edge first
        let mut successors: Vec<NodeIndex> = graph.neighbors(node).collect();
        successors.reverse();
        Self {
            node,
            successors,
            cursor: 0,
        }
    }
}

/// Find the first cycle in `graph`, returned as node indices in traversal
/// order.
///
/// Roots are tried in node index order and visited nodes are never
/// re-traversed, so the search is O(V + E).
pub fn find_cycle_in<N, E>(graph: &DiGraph<N, E>) -> Option<Vec<NodeIndex>> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut on_stack = vec![false; node_count];
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.node_indices() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        on_stack[root.index()] = true;
        stack.push(Frame::new(graph, root));

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = frame.successors.get(frame.cursor) else {
                on_stack[frame.node.index()] = false;
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if on_stack[next.index()] {
                let start = stack
                    .iter()
                    .position(|frame| frame.node == next)
                    .unwrap_or(0);
                return Some(stack[start..].iter().map(|frame| frame.node).collect());
            }

            if !visited[next.index()] {
                visited[next.index()] = true;
                on_stack[next.index()] = true;
                stack.push(Frame::new(graph, next));
            }
        }
    }

    None
}

/// Find the first cycle among the prerequisites of `graph`
pub fn find_cycle(graph: &CourseGraph) -> Option<Cycle> {
    let snapshot = graph.snapshot();
    find_cycle_in(&snapshot.graph).map(|nodes| Cycle {
        members: nodes
            .into_iter()
            .map(|node| snapshot.graph[node].clone())
            .collect(),
    })
}

impl CourseGraph {
    /// Find the first cycle among this graph's prerequisites
    pub fn find_cycle(&self) -> Option<Cycle> {
        find_cycle(self)
    }

    /// Check if any prerequisite chain loops back on itself
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }
}
