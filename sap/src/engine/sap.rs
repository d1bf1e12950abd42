//! Alternating breadth-first search for shortest ancestral paths
//!
//! Given vertex sets `S` and `T`, the engine finds the vertex reachable from
//! both that minimizes `dist(S, a) + dist(T, a)`. The two frontiers are
//! expanded one vertex at a time in turn and the search runs until both are
//! exhausted: because the frontiers are not level-synchronized, the first
//! vertex reached by both sides is not necessarily the closest one.

use std::sync::Arc;

use query_cache::{CacheStats, LruCache};
use sap_core::{Ancestry, QueryError, SapParams, SetSide, VertexId};

use super::key::QueryKey;
use super::scratch::SideScratch;
use crate::dag::{DagStore, ValidatedDag};

/// Shortest-ancestral-path engine over a validated hierarchy
///
/// Queries take `&mut self`: traversal scratch and the result cache are reused
/// across calls. Wrap the engine in [`super::SharedSapEngine`] to share it
/// between threads.
pub struct SapEngine {
    dag: Arc<ValidatedDag>,
    near: SideScratch,
    far: SideScratch,
    cache: LruCache<QueryKey, Option<Ancestry>>,
}

impl SapEngine {
    /// Creates an engine whose cache holds at most `cache_capacity` outcomes.
    pub fn new(dag: Arc<ValidatedDag>, cache_capacity: usize) -> Self {
        let vertex_count = dag.vertex_count();
        tracing::info!(vertices = vertex_count, edges = dag.edge_count(), cache_capacity, "creating SAP engine");
        Self {
            near: SideScratch::new(vertex_count),
            far: SideScratch::new(vertex_count),
            cache: LruCache::new(cache_capacity),
            dag,
        }
    }

    /// Creates an engine sized by `params` (cache defaults to `V + E`).
    pub fn with_params(dag: Arc<ValidatedDag>, params: &SapParams) -> Self {
        let capacity = params.effective_cache_capacity(dag.vertex_count(), dag.edge_count());
        Self::new(dag, capacity)
    }

    pub fn dag(&self) -> &Arc<ValidatedDag> {
        &self.dag
    }

    /// Closest common ancestor of `sources` and `targets` with its combined
    /// distance, or `None` when the sets share no ancestor.
    pub fn ancestry(
        &mut self,
        sources: &[VertexId],
        targets: &[VertexId],
    ) -> Result<Option<Ancestry>, QueryError> {
        self.check_set(sources, SetSide::Sources)?;
        self.check_set(targets, SetSide::Targets)?;

        let key = QueryKey::new(sources, targets);
        if let Some(&cached) = self.cache.get(&key) {
            tracing::debug!(?cached, "SAP cache hit");
            return Ok(cached);
        }

        let outcome = self.search(&key);
        tracing::debug!(
            ?outcome,
            near_touched = self.near.touched(),
            far_touched = self.far.touched(),
            "SAP search finished"
        );
        self.cache.insert(key, outcome);
        Ok(outcome)
    }

    /// Length of the shortest ancestral path, `None` without a common ancestor.
    pub fn length(&mut self, sources: &[VertexId], targets: &[VertexId]) -> Result<Option<u32>, QueryError> {
        Ok(self.ancestry(sources, targets)?.map(|a| a.length))
    }

    /// Common ancestor on a shortest ancestral path, `None` without one.
    pub fn ancestor(&mut self, sources: &[VertexId], targets: &[VertexId]) -> Result<Option<VertexId>, QueryError> {
        Ok(self.ancestry(sources, targets)?.map(|a| a.ancestor))
    }

    pub fn length_between(&mut self, v: VertexId, w: VertexId) -> Result<Option<u32>, QueryError> {
        self.length(&[v], &[w])
    }

    pub fn ancestor_between(&mut self, v: VertexId, w: VertexId) -> Result<Option<VertexId>, QueryError> {
        self.ancestor(&[v], &[w])
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn check_set(&self, set: &[VertexId], side: SetSide) -> Result<(), QueryError> {
        if set.is_empty() {
            return Err(QueryError::EmptySet { side });
        }
        let vertex_count = self.dag.vertex_count();
        match set.iter().find(|&&v| v >= vertex_count) {
            Some(&vertex) => Err(QueryError::InvalidVertex { vertex, vertex_count }),
            None => Ok(()),
        }
    }

    fn search(&mut self, key: &QueryKey) -> Option<Ancestry> {
        let Self { dag, near, far, .. } = self;
        let store = dag.store();

        near.reset();
        far.reset();
        for &v in key.first() {
            near.visit(v, 0);
        }
        for &v in key.second() {
            far.visit(v, 0);
        }

        // a vertex in both sets is its own ancestor at distance 0
        if let Some(&shared) = key.first().iter().find(|&&v| far.distance(v).is_some()) {
            return Some(Ancestry::new(shared, 0));
        }

        let mut best = None;
        while !near.is_exhausted() || !far.is_exhausted() {
            expand_one(store, near, far, &mut best);
            expand_one(store, far, near, &mut best);
        }
        best
    }
}

/// Dequeues one vertex from `side`, scores it against `other` and enqueues
/// its unvisited neighbors.
///
/// Neighbors are not enqueued once `d + 1` reaches the best total found so
/// far: BFS order means every vertex they would reach lies at distance
/// `>= d + 1` on this side, so it cannot beat the current best.
fn expand_one(store: &DagStore, side: &mut SideScratch, other: &SideScratch, best: &mut Option<Ancestry>) {
    let Some((v, d)) = side.pop() else {
        return;
    };

    if let Some(other_d) = other.distance(v) {
        let total = d + other_d;
        if best.map_or(true, |b| total < b.length) {
            *best = Some(Ancestry::new(v, total));
        }
    }

    if best.map_or(false, |b| d + 1 >= b.length) {
        return;
    }
    for &w in store.adj(v) {
        side.visit(w, d + 1);
    }
}
