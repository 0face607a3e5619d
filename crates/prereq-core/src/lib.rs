//! # prereq-core
//!
//! Core types and utilities shared across all prereq crates.
//!
//! This crate provides:
//! - `Cost`, `Item` and `CyclePolicy` types
//! - `PrereqError` enum for unified error handling
//! - Utility functions for item names
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Cost, Item, CyclePolicy)
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{PrereqError, PrereqResult};
pub use types::{Cost, CostError, CyclePolicy, Item};
