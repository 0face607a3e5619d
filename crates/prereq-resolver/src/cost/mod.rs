//! Cost aggregation along a resolved order
//!
//! A class's aggregated cost is its base cost plus the aggregated cost of
//! each distinct class it directly requires. The order is prerequisites
//! first, so one forward pass sees every prerequisite total before it is
//! needed and each total is computed exactly once.

use petgraph::graph::NodeIndex;

use prereq_core::types::Cost;

use crate::resolve::classes::ClassGraph;

/// Aggregate costs for every class, indexed by class node index.
///
/// `order` must list every class of `graph` after all of its prerequisites.
/// Fails with the first class whose total is not finite.
pub(crate) fn aggregate(graph: &ClassGraph, order: &[NodeIndex]) -> Result<Vec<Cost>, NodeIndex> {
    let mut totals: Vec<Option<Cost>> = vec![None; graph.node_count()];

    for &class in order {
        let prerequisites = graph.neighbors(class).map(|prerequisite| {
            debug_assert!(
                totals[prerequisite.index()].is_some(),
                "prerequisite aggregated after its dependent"
            );
            totals[prerequisite.index()].unwrap_or_default()
        });
        let total = Cost::checked_sum(std::iter::once(graph[class].base).chain(prerequisites))
            .ok_or(class)?;
        totals[class.index()] = Some(total);
    }

    Ok(totals.into_iter().map(Option::unwrap_or_default).collect())
}
