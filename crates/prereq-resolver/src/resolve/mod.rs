//! Prerequisite resolution
//!
//! Runs cycle detection, applies the cycle policy, orders items
//! prerequisites-first and aggregates costs along that order. Every call is
//! a full recomputation over a snapshot of the course graph.

pub(crate) mod classes;
pub(crate) mod order;

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use prereq_core::error::{PrereqError, PrereqResult};
use prereq_core::types::{Cost, CyclePolicy};

use crate::cost;
use crate::cycle::find_cycle_in;
use crate::graph::CourseGraph;

/// Resolves a course graph into an order and a cost table
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    graph: &'g CourseGraph,
}

/// Result of resolving a course graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Policy the resolution ran under
    pub(crate) policy: CyclePolicy,
    /// Aggregated cost per item, keyed in resolved order
    pub(crate) costs: IndexMap<String, Cost>,
    /// Classes formed by merging cycles, members in declaration order
    pub(crate) merged: Vec<Vec<String>>,
    /// Direct prerequisites per item, used by path queries
    pub(crate) prerequisites: IndexMap<String, Vec<String>>,
}

impl<'g> Resolver<'g> {
    /// Create a resolver over `graph`
    pub fn new(graph: &'g CourseGraph) -> Self {
        Self { graph }
    }

    /// Resolve the graph under `policy`.
    ///
    /// Under [`CyclePolicy::Strict`] the first cycle found fails the
    /// resolution with [`PrereqError::CircularDependency`]. Under
    /// [`CyclePolicy::Merge`] every strongly connected component is
    /// collapsed into one class whose members share the summed cost.
    /// Either policy fails with [`PrereqError::CostOverflow`] when an
    /// aggregated cost leaves the finite range.
    pub fn resolve(&self, policy: CyclePolicy) -> PrereqResult<Resolution> {
        let snapshot = self.graph.snapshot();
        debug!(
            "Resolving {} items ({} implicit) and {} prerequisite edges with {} policy",
            snapshot.graph.node_count(),
            snapshot.graph.node_count() - self.graph.len(),
            snapshot.graph.edge_count(),
            policy
        );

        if policy.is_strict() {
            if let Some(cycle) = find_cycle_in(&snapshot.graph) {
                let members: Vec<String> = cycle
                    .into_iter()
                    .map(|node| snapshot.graph[node].clone())
                    .collect();
                debug!("Strict resolution found a cycle: {}", members.join(" -> "));
                return Err(PrereqError::CircularDependency { members });
            }
        }

        let overflow = |node: NodeIndex| PrereqError::CostOverflow {
            name: snapshot.graph[node].clone(),
        };

        let class_graph = classes::condense(&snapshot).map_err(overflow)?;
        for class in class_graph.node_weights().filter(|class| class.merged) {
            warn!(
                "Merging prerequisite cycle into one unit: {}",
                class
                    .members
                    .iter()
                    .map(|&node| snapshot.graph[node].as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let class_order = order::prerequisites_first(&class_graph).map_err(|blocked| {
            PrereqError::circular(
                blocked
                    .into_iter()
                    .flat_map(|class| class_graph[class].members.iter())
                    .map(|&node| snapshot.graph[node].clone()),
            )
        })?;

        let totals = cost::aggregate(&class_graph, &class_order)
            .map_err(|class| overflow(class_graph[class].members[0]))?;

        let mut costs = IndexMap::with_capacity(snapshot.graph.node_count());
        for &class in &class_order {
            for &member in &class_graph[class].members {
                costs.insert(snapshot.graph[member].clone(), totals[class.index()]);
            }
        }

        let merged: Vec<Vec<String>> = class_graph
            .node_weights()
            .filter(|class| class.merged)
            .map(|class| {
                class
                    .members
                    .iter()
                    .map(|&node| snapshot.graph[node].clone())
                    .collect()
            })
            .collect();

        let prerequisites = snapshot
            .graph
            .node_indices()
            .map(|node| {
                let mut direct: Vec<String> = snapshot
                    .graph
                    .neighbors(node)
                    .map(|prerequisite| snapshot.graph[prerequisite].clone())
                    .collect();
                direct.reverse();
                (snapshot.graph[node].clone(), direct)
            })
            .collect();

        debug!(
            "Resolved {} items into {} classes ({} merged)",
            costs.len(),
            class_graph.node_count(),
            merged.len()
        );

        Ok(Resolution {
            policy,
            costs,
            merged,
            prerequisites,
        })
    }
}

impl Resolution {
    /// Policy the resolution ran under
    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    /// Items in prerequisites-first order
    pub fn order(&self) -> impl ExactSizeIterator<Item = &str> {
        self.costs.keys().map(String::as_str)
    }

    /// Aggregated cost per item, keyed in resolved order
    pub fn costs(&self) -> &IndexMap<String, Cost> {
        &self.costs
    }

    /// Aggregated cost of one item
    pub fn cost(&self, name: &str) -> Option<Cost> {
        self.costs.get(name).copied()
    }

    /// Position of `name` in the resolved order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.costs.get_index_of(name)
    }

    /// Classes formed by merging cycles
    pub fn merged_classes(&self) -> &[Vec<String>] {
        &self.merged
    }

    /// Check if `name` is part of a merged cycle
    pub fn is_merged(&self, name: &str) -> bool {
        self.merged
            .iter()
            .any(|class| class.iter().any(|member| member == name))
    }

    /// Check if `name` was present in the graph at resolution time
    pub fn contains(&self, name: &str) -> bool {
        self.costs.contains_key(name)
    }

    /// Number of resolved items
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Check if nothing was resolved
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Split into the resolved order and the cost table
    pub fn into_parts(self) -> (Vec<String>, IndexMap<String, Cost>) {
        let order = self.costs.keys().cloned().collect();
        (order, self.costs)
    }
}

impl CourseGraph {
    /// Resolve this graph under `policy`
    pub fn resolve(&self, policy: CyclePolicy) -> PrereqResult<Resolution> {
        Resolver::new(self).resolve(policy)
    }
}
