//! Equivalence classes of merged items
//!
//! Classes are the strongly connected components of the snapshot. A
//! component with more than one member, or a single member that requires
//! itself, is a merged class; every other item stays a singleton. The class
//! graph has one node per class and one edge per distinct
//! class-to-prerequisite-class pair, so it is always acyclic.

use indexmap::IndexSet;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use prereq_core::types::Cost;

use crate::graph::Snapshot;

/// Node of the class graph
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassNode {
    /// Snapshot node indices of the members, in declaration order
    pub(crate) members: Vec<NodeIndex>,
    /// Sum of the members' own costs
    pub(crate) base: Cost,
    /// Set when the class collapses a cycle
    pub(crate) merged: bool,
}

/// Classes as nodes, edges from a class to each prerequisite class
pub(crate) type ClassGraph = DiGraph<ClassNode, ()>;

/// Condense `snapshot` into its class graph.
///
/// Class nodes are ordered by their first member, so an acyclic snapshot
/// condenses to a class graph with the same node order. Fails with a node
/// of the offending class when its members' summed cost is not finite.
pub(crate) fn condense(snapshot: &Snapshot) -> Result<ClassGraph, NodeIndex> {
    let graph = &snapshot.graph;

    let mut components: Vec<Vec<NodeIndex>> = tarjan_scc(graph)
        .into_iter()
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect();
    components.sort_unstable_by_key(|component| component[0]);

    let mut class_of = vec![NodeIndex::end(); graph.node_count()];
    let mut class_graph = ClassGraph::with_capacity(components.len(), graph.edge_count());

    for members in components {
        let merged = members.len() > 1 || graph.find_edge(members[0], members[0]).is_some();
        let base = Cost::checked_sum(members.iter().map(|node| snapshot.costs[node.index()]))
            .ok_or(members[0])?;

        let class = class_graph.add_node(ClassNode {
            members: Vec::new(),
            base,
            merged,
        });
        for &member in &members {
            class_of[member.index()] = class;
        }
        class_graph[class].members = members;
    }

    let mut edges: IndexSet<(NodeIndex, NodeIndex)> = IndexSet::new();
    for edge in graph.raw_edges() {
        let from = class_of[edge.source().index()];
        let to = class_of[edge.target().index()];
        if from != to {
            edges.insert((from, to));
        }
    }
    for (from, to) in edges {
        class_graph.add_edge(from, to, ());
    }

    Ok(class_graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CourseGraph;

    fn snapshot_of(items: &[(&str, f64, Vec<&str>)]) -> Snapshot {
        let mut graph = CourseGraph::new();
        for (name, cost, prerequisites) in items {
            graph.add_item(*name, *cost, prerequisites.iter().copied()).unwrap();
        }
        graph.snapshot()
    }

    #[test]
    fn test_acyclic_condenses_to_same_shape() {
        let snapshot = snapshot_of(&[("A", 5.0, vec![]), ("B", 8.0, vec!["A"]), ("C", 10.0, vec!["A", "B"])]);
        let class_graph = condense(&snapshot).unwrap();

        assert_eq!(class_graph.node_count(), 3);
        assert_eq!(class_graph.edge_count(), 3);
        assert_eq!(class_graph[NodeIndex::new(2)].base, 10.0);
        assert_eq!(class_graph[NodeIndex::new(2)].members, vec![NodeIndex::new(2)]);
        assert!(class_graph.node_weights().all(|class| !class.merged));
    }

    #[test]
    fn test_cycle_sums_costs_and_drops_inner_edges() {
        let snapshot = snapshot_of(&[
            ("A", 1.0, vec!["B"]),
            ("B", 2.0, vec!["C"]),
            ("C", 3.0, vec!["A"]),
            ("D", 4.0, vec!["C"]),
        ]);
        let class_graph = condense(&snapshot).unwrap();

        assert_eq!(class_graph.node_count(), 2);
        let merged = &class_graph[NodeIndex::new(0)];
        assert!(merged.merged);
        assert_eq!(merged.base, 6.0);
        assert_eq!(
            merged.members,
            vec![NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(2)]
        );
        // Only D -> {A, B, C} survives
        assert_eq!(class_graph.edge_count(), 1);
        assert!(class_graph
            .find_edge(NodeIndex::new(1), NodeIndex::new(0))
            .is_some());
    }

    #[test]
    fn test_self_reference_is_a_merged_singleton() {
        let snapshot = snapshot_of(&[("A", 1.0, vec!["A"]), ("B", 1.0, vec!["A"])]);
        let class_graph = condense(&snapshot).unwrap();

        assert_eq!(class_graph.node_count(), 2);
        assert!(class_graph[NodeIndex::new(0)].merged);
        assert!(!class_graph[NodeIndex::new(1)].merged);
        assert_eq!(class_graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_into_class_are_deduplicated() {
        // E requires both members of the A/B cycle
        let snapshot = snapshot_of(&[("A", 1.0, vec!["B"]), ("B", 1.0, vec!["A"]), ("E", 1.0, vec!["A", "B"])]);
        let class_graph = condense(&snapshot).unwrap();

        assert_eq!(class_graph.edge_count(), 1);
    }

    #[test]
    fn test_overlapping_cycles_share_one_class() {
        // A <-> B and B <-> C share B
        let snapshot = snapshot_of(&[
            ("A", 1.0, vec!["B"]),
            ("B", 1.0, vec!["A", "C"]),
            ("C", 1.0, vec!["B"]),
            ("D", 1.0, vec![]),
        ]);
        let class_graph = condense(&snapshot).unwrap();

        assert_eq!(class_graph.node_count(), 2);
        assert_eq!(class_graph[NodeIndex::new(0)].members.len(), 3);
        assert_eq!(class_graph[NodeIndex::new(1)].members, vec![NodeIndex::new(3)]);
    }

    #[test]
    fn test_class_cost_overflow() {
        let snapshot = snapshot_of(&[("A", f64::MAX, vec!["B"]), ("B", f64::MAX, vec!["A"])]);
        assert_eq!(condense(&snapshot).unwrap_err(), NodeIndex::new(0));
    }
}
