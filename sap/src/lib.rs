//! Shortest ancestral path library for rooted hypernym DAGs
//!
//! This library builds and validates the hierarchy graph and answers
//! shortest-common-ancestor queries between vertex sets with an alternating
//! breadth-first search backed by an LRU result cache.

pub mod dag;
pub mod engine;

// Re-export key types for easier access
pub use sap_core::{
    Ancestry, DagRules, GraphError, QueryError, SapError, SapParams, SapResult, SetSide,
    ValidationError, VertexId,
};
pub use query_cache::CacheStats;
pub use dag::{validate, validate_with, DagStore, Neighbors, ValidatedDag};
pub use engine::{SapEngine, SharedSapEngine};
