//! Learning-path queries over a resolution

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use prereq_core::error::{PrereqError, PrereqResult};
use prereq_core::types::{Cost, CyclePolicy};

use crate::graph::CourseGraph;
use crate::resolve::Resolution;

/// Items needed to reach a target, in resolved order, ending with the target
///
/// `prefix` keeps only the target's transitive prerequisites, so it is an
/// order-preserving subsequence of the resolved order rather than a slice of
/// it: unrelated items resolved before the target are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub prefix: Vec<String>,
    pub total_cost: Cost,
}

impl LearningPath {
    /// The item this path leads to
    pub fn target(&self) -> &str {
        self.prefix.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of items on the path, target included
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// Always false for a path returned by a query
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

impl Resolution {
    /// Learning path to `target`.
    ///
    /// The prefix holds the target's transitive prerequisites in resolved
    /// order followed by the target itself. Items that are not prerequisites
    /// of the target are skipped even when they resolve before it, so the
    /// prefix is generally shorter than `order()` up to the target. The
    /// total is the target's aggregated cost. Members of a merged cycle
    /// containing the target are its prerequisites and come before it.
    pub fn learning_path(&self, target: &str) -> PrereqResult<LearningPath> {
        let total_cost = self.cost(target).ok_or_else(|| PrereqError::UnknownItem {
            name: target.to_string(),
        })?;

        let mut required: HashSet<&str> = HashSet::new();
        let mut pending = vec![target];
        while let Some(name) = pending.pop() {
            let direct = self.prerequisites.get(name).into_iter().flatten();
            for prerequisite in direct {
                if required.insert(prerequisite.as_str()) {
                    pending.push(prerequisite.as_str());
                }
            }
        }

        let prefix = self
            .order()
            .filter(|name| *name != target && required.contains(name))
            .chain(std::iter::once(target))
            .map(str::to_string)
            .collect();

        Ok(LearningPath { prefix, total_cost })
    }
}

impl CourseGraph {
    /// Resolve this graph under `policy` and return the learning path to
    /// `target`
    pub fn learning_path(&self, target: &str, policy: CyclePolicy) -> PrereqResult<LearningPath> {
        self.resolve(policy)?.learning_path(target)
    }
}
