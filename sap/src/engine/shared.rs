use std::sync::Arc;

use parking_lot::Mutex;
use query_cache::CacheStats;
use sap_core::{Ancestry, QueryError, VertexId};

use super::sap::SapEngine;
use crate::dag::ValidatedDag;

/// Thread-safe handle to a [`SapEngine`]
///
/// Queries are serialized behind a mutex, one at a time, so the engine's
/// scratch arrays and cache are never touched concurrently. Clones share the
/// same engine.
#[derive(Clone)]
pub struct SharedSapEngine {
    inner: Arc<Mutex<SapEngine>>,
}

impl SharedSapEngine {
    pub fn new(engine: SapEngine) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }

    pub fn ancestry(&self, sources: &[VertexId], targets: &[VertexId]) -> Result<Option<Ancestry>, QueryError> {
        self.inner.lock().ancestry(sources, targets)
    }

    pub fn length(&self, sources: &[VertexId], targets: &[VertexId]) -> Result<Option<u32>, QueryError> {
        self.inner.lock().length(sources, targets)
    }

    pub fn ancestor(&self, sources: &[VertexId], targets: &[VertexId]) -> Result<Option<VertexId>, QueryError> {
        self.inner.lock().ancestor(sources, targets)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.inner.lock().cache_stats()
    }

    pub fn dag(&self) -> Arc<ValidatedDag> {
        self.inner.lock().dag().clone()
    }
}

impl From<SapEngine> for SharedSapEngine {
    fn from(engine: SapEngine) -> Self {
        Self::new(engine)
    }
}
