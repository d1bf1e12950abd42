//! Shortest-ancestral-path engine
//!
//! This module provides:
//! - Canonical cache keys for pairs of vertex sets
//! - Reusable per-side traversal scratch with O(touched) reset
//! - The alternating-BFS engine and its mutex-guarded shared form

mod key;
mod scratch;
pub mod sap;
pub mod shared;
#[cfg(test)]
mod integration_test;

pub use sap::SapEngine;
pub use shared::SharedSapEngine;
