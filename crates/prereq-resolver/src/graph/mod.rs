//! Course graph storage
//!
//! Holds items and their declared prerequisite relations. Pure data: no
//! ordering or cycle checks happen at insertion time, so edges may be
//! declared before their endpoints and cycles are only a resolution-time
//! concern.

use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use prereq_core::error::{PrereqError, PrereqResult};
use prereq_core::types::{Cost, Item};

/// Insertion-ordered map from item name to item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseGraph {
    items: IndexMap<String, Item>,
}

/// Frozen view of a course graph used by the resolver's workspace.
///
/// Declared items come first in declaration order, followed by implicit
/// leaves in order of first reference. Node `i` of `graph` has `costs[i]`
/// and edges point from an item to each of its prerequisites.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub(crate) graph: DiGraph<String, ()>,
    pub(crate) costs: Vec<Cost>,
}

impl CourseGraph {
    /// Create a new empty course graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(course, prerequisites)` pairs.
    ///
    /// Every course gets a zero cost.
    pub fn from_courses<I, N, P, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (name, prerequisites) in courses {
            let name = name.into();
            let item = graph
                .items
                .entry(name.clone())
                .or_insert_with(|| Item::placeholder(name));
            item.prerequisites
                .extend(prerequisites.into_iter().map(Into::into));
        }
        graph
    }

    /// Add an item, or update an existing one.
    ///
    /// An existing item has its cost overwritten and `prerequisites` unioned
    /// into its current set. Negative or non-finite costs are rejected and
    /// leave the graph untouched.
    pub fn add_item<I, S>(
        &mut self,
        name: impl Into<String>,
        cost: f64,
        prerequisites: I,
    ) -> PrereqResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let cost = Cost::new(cost).map_err(|e| PrereqError::InvalidCost {
            name: name.clone(),
            cost: e.0,
        })?;

        let item = self
            .items
            .entry(name.clone())
            .or_insert_with(|| Item::placeholder(name));
        item.cost = cost;
        item.prerequisites
            .extend(prerequisites.into_iter().map(Into::into));
        Ok(())
    }

    /// Add an item with no new prerequisites, or overwrite the cost of an
    /// existing one
    pub fn set_cost(&mut self, name: impl Into<String>, cost: f64) -> PrereqResult<()> {
        self.add_item(name, cost, std::iter::empty::<String>())
    }

    /// Record that `name` requires `prerequisite`.
    ///
    /// `name` is created as a zero-cost placeholder if absent. `prerequisite`
    /// does not need to exist yet.
    pub fn add_prerequisite(&mut self, name: impl Into<String>, prerequisite: impl Into<String>) {
        let name = name.into();
        self.items
            .entry(name.clone())
            .or_insert_with(|| Item::placeholder(name))
            .prerequisites
            .insert(prerequisite.into());
    }

    /// Current prerequisites of `name`; empty for unknown names
    pub fn prerequisites(&self, name: &str) -> IndexSet<&str> {
        self.items
            .get(name)
            .map(|item| item.prerequisites.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Get a declared item by name
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// All declared items in declaration order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Check if `name` was declared or is referenced as a prerequisite
    pub fn contains(&self, name: &str) -> bool {
        self.is_declared(name)
            || self
                .items
                .values()
                .any(|item| item.prerequisites.contains(name))
    }

    /// Check if `name` was declared through `add_item` or `add_prerequisite`
    pub fn is_declared(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Names referenced as prerequisites but never declared, in order of
    /// first reference
    pub fn implicit_leaves(&self) -> IndexSet<&str> {
        self.items
            .values()
            .flat_map(|item| item.prerequisites.iter())
            .map(String::as_str)
            .filter(|name| !self.items.contains_key(*name))
            .collect()
    }

    /// Number of declared items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no items were declared
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of prerequisite edges
    pub fn edge_count(&self) -> usize {
        self.items.values().map(|item| item.prerequisites.len()).sum()
    }

    /// Materialize declared items and implicit leaves as a directed graph
    pub(crate) fn snapshot(&self) -> Snapshot {
        let leaves = self.implicit_leaves();
        let node_count = self.items.len() + leaves.len();

        let mut graph = DiGraph::with_capacity(node_count, self.edge_count());
        let mut costs = Vec::with_capacity(node_count);
        let mut index: IndexMap<&str, NodeIndex> = IndexMap::with_capacity(node_count);

        for item in self.items.values() {
            index.insert(item.name.as_str(), graph.add_node(item.name.clone()));
            costs.push(item.cost);
        }
        for leaf in leaves {
            index.insert(leaf, graph.add_node(leaf.to_string()));
            costs.push(Cost::ZERO);
        }

        for item in self.items.values() {
            let from = index[item.name.as_str()];
            for prerequisite in &item.prerequisites {
                graph.add_edge(from, index[prerequisite.as_str()], ());
            }
        }

        Snapshot { graph, costs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_graph_creation() {
        let graph = CourseGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut graph = CourseGraph::new();
        graph.add_item("B", 8.0, ["A"]).unwrap();

        let item = graph.item("B").unwrap();
        assert_eq!(item.cost, 8.0);
        assert_eq!(graph.prerequisites("B"), IndexSet::from(["A"]));
        assert_eq!(graph.len(), 1);
        assert!(graph.contains("A"));
        assert!(!graph.is_declared("A"));
    }

    #[test]
    fn test_add_item_overwrites_cost_and_unions_prerequisites() {
        let mut graph = CourseGraph::new();
        graph.add_item("C", 3.0, ["A"]).unwrap();
        graph.add_item("C", 10.0, ["B", "A"]).unwrap();

        assert_eq!(graph.item("C").unwrap().cost, 10.0);
        assert_eq!(graph.prerequisites("C"), IndexSet::from(["A", "B"]));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_add_item_is_idempotent() {
        let mut graph = CourseGraph::new();
        graph.add_item("B", 8.0, ["A"]).unwrap();
        let before = graph.clone();
        graph.add_item("B", 8.0, ["A"]).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_default_prerequisites_are_not_shared() {
        let mut graph = CourseGraph::new();
        graph.set_cost("A", 1.0).unwrap();
        graph.set_cost("B", 2.0).unwrap();
        graph.add_prerequisite("A", "X");

        assert_eq!(graph.prerequisites("A"), IndexSet::from(["X"]));
        assert!(graph.prerequisites("B").is_empty());
    }

    #[test]
    fn test_add_item_rejects_invalid_cost() {
        let mut graph = CourseGraph::new();
        let err = graph.add_item("A", -1.0, ["B"]).unwrap_err();
        assert!(matches!(err, PrereqError::InvalidCost { ref name, cost } if name == "A" && cost == -1.0));
        assert!(graph.is_empty());

        assert!(graph.set_cost("A", f64::NAN).is_err());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_failed_update_keeps_existing_item() {
        let mut graph = CourseGraph::new();
        graph.add_item("A", 4.0, ["X"]).unwrap();
        assert!(graph.add_item("A", -4.0, ["Y"]).is_err());

        let item = graph.item("A").unwrap();
        assert_eq!(item.cost, 4.0);
        assert_eq!(graph.prerequisites("A"), IndexSet::from(["X"]));
    }

    #[test]
    fn test_add_prerequisite_creates_placeholder() {
        let mut graph = CourseGraph::new();
        graph.add_prerequisite("D", "C");

        let item = graph.item("D").unwrap();
        assert!(item.cost.is_zero());
        assert!(graph.is_declared("D"));
        assert!(!graph.is_declared("C"));

        // A later declaration keeps the edge and sets the cost
        graph.set_cost("D", 12.0).unwrap();
        assert_eq!(graph.item("D").unwrap().cost, 12.0);
        assert_eq!(graph.prerequisites("D"), IndexSet::from(["C"]));
    }

    #[test]
    fn test_prerequisites_of_unknown_name_is_empty() {
        let graph = CourseGraph::new();
        assert!(graph.prerequisites("nope").is_empty());
    }

    #[test]
    fn test_implicit_leaves() {
        let mut graph = CourseGraph::new();
        graph.add_item("C", 1.0, ["A", "B"]).unwrap();
        graph.add_item("B", 1.0, ["A"]).unwrap();
        graph.add_item("D", 1.0, ["Z", "A"]).unwrap();

        let leaves: Vec<_> = graph.implicit_leaves().into_iter().collect();
        assert_eq!(leaves, vec!["A", "Z"]);
    }

    #[test]
    fn test_from_courses() {
        let graph = CourseGraph::from_courses([
            ("C", vec!["A", "B"]),
            ("A", vec![]),
            ("B", vec!["A"]),
        ]);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.items().all(|item| item.cost.is_zero()));
        assert!(graph.implicit_leaves().is_empty());
    }

    #[test]
    fn test_snapshot_layout() {
        let mut graph = CourseGraph::new();
        graph.add_item("B", 8.0, ["A"]).unwrap();
        graph.add_item("C", 10.0, ["A", "B"]).unwrap();

        let snapshot = graph.snapshot();
        let names: Vec<_> = snapshot.graph.node_weights().cloned().collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(snapshot.costs, vec![Cost::from(8), Cost::from(10), Cost::ZERO]);
        assert_eq!(snapshot.graph.edge_count(), 3);
    }

    #[test]
    fn test_snapshot_keeps_self_reference() {
        let mut graph = CourseGraph::new();
        graph.add_prerequisite("A", "A");

        let snapshot = graph.snapshot();
        assert_eq!(snapshot.graph.node_count(), 1);
        assert!(snapshot
            .graph
            .find_edge(NodeIndex::new(0), NodeIndex::new(0))
            .is_some());
    }
}
