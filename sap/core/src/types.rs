//! Shared query types
//!
//! This module defines the identifiers and outcomes exchanged between the
//! graph, the engine and the WordNet layer.

use serde::{Deserialize, Serialize};

/// Vertex identifier, dense in `[0, V)`.
pub type VertexId = usize;

/// Outcome of a successful shortest-ancestral-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ancestry {
    /// Common ancestor with the smallest combined distance
    pub ancestor: VertexId,
    /// Sum of the distances from both vertex sets to `ancestor`
    pub length: u32,
}

impl Ancestry {
    pub fn new(ancestor: VertexId, length: u32) -> Self {
        Self { ancestor, length }
    }
}
