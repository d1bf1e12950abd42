use serde::{Deserialize, Serialize};

/// Structural rules enforced when a graph is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DagRules {
    /// Reject graphs with more than one vertex of out-degree zero.
    /// Acyclicity is always enforced.
    pub require_single_root: bool,
}

impl Default for DagRules {
    fn default() -> Self {
        Self { require_single_root: true }
    }
}

/// Engine parameters
///
/// Loaded from the `[engine]` table of the CLI config file; every field has a
/// default so an empty table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SapParams {
    /// Number of memoized query outcomes. `None` sizes the cache to `V + E`
    /// of the graph; `Some(0)` disables caching.
    pub cache_capacity: Option<usize>,
    /// Validation rules for the graph the engine is built on
    pub rules: DagRules,
}

impl Default for SapParams {
    fn default() -> Self {
        Self { cache_capacity: None, rules: DagRules::default() }
    }
}

impl SapParams {
    /// Cache capacity for a graph of the given size.
    pub fn effective_cache_capacity(&self, vertex_count: usize, edge_count: usize) -> usize {
        self.cache_capacity
            .unwrap_or_else(|| vertex_count.saturating_add(edge_count).max(1))
    }
}
