//! Item (course) type.
//!
//! An item is a named unit of work with its own cost and the set of item
//! names it depends on.

use super::Cost;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A course or task in the prerequisite graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub cost: Cost,
    #[serde(default)]
    pub prerequisites: IndexSet<String>,
}

impl Item {
    /// Create a new item with no prerequisites
    pub fn new(name: impl Into<String>, cost: Cost) -> Self {
        Self {
            name: name.into(),
            cost,
            prerequisites: IndexSet::new(),
        }
    }

    /// Zero-cost item used for names that are referenced but not declared
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, Cost::ZERO)
    }

    /// Add a prerequisite
    pub fn with_prerequisite(mut self, prerequisite: impl Into<String>) -> Self {
        self.prerequisites.insert(prerequisite.into());
        self
    }

    /// Check if this item has no prerequisites
    pub fn is_leaf(&self) -> bool {
        self.prerequisites.is_empty()
    }

    /// Check if this item lists itself as a prerequisite
    pub fn is_self_referencing(&self) -> bool {
        self.prerequisites.contains(&self.name)
    }
}
