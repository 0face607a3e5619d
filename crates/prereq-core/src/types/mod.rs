//! Core data types for prerequisite resolution.
//!
//! This module provides the fundamental types used throughout prereq:
//! - Cost values with validation
//! - Items (courses) and their prerequisite sets
//! - The cycle resolution policy

pub mod cost;
pub mod item;
pub mod policy;

// Re-export all public types
pub use cost::{Cost, CostError};
pub use item::Item;
pub use policy::CyclePolicy;
