//! Prerequisite resolution engine for prereq
//!
//! This crate turns a graph of items with named prerequisites into a
//! prerequisites-first completion order and a per-item aggregated cost,
//! with cycle detection and a choice of failing on or merging cycles.
//!
//! ```
//! use prereq_resolver::{CourseGraph, CyclePolicy};
//!
//! let mut graph = CourseGraph::new();
//! graph.set_cost("A", 5.0)?;
//! graph.add_item("C", 10.0, ["A"])?;
//! graph.add_item("E", 15.0, ["C"])?;
//!
//! let resolution = graph.resolve(CyclePolicy::Strict)?;
//! let path = resolution.learning_path("E")?;
//! assert_eq!(path.prefix, ["A", "C", "E"]);
//! assert_eq!(path.total_cost, 30.0);
//! # Ok::<(), prereq_resolver::PrereqError>(())
//! ```

mod cost;
pub mod cycle;
pub mod graph;
pub mod path;
pub mod resolve;

// Re-export main types
pub use cycle::{find_cycle, Cycle};
pub use graph::CourseGraph;
pub use path::LearningPath;
pub use resolve::{Resolution, Resolver};
pub use prereq_core::types::{Cost, CyclePolicy, Item};
pub use prereq_core::error::{PrereqError, PrereqResult};
