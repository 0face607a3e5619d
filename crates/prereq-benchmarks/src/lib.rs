//! prereq benchmarking suite
//!
//! Benchmarks for resolution and catalog parsing, plus the generators that
//! build their inputs.

pub mod common;

pub use common::*;
