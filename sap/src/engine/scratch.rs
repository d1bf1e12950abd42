use std::collections::VecDeque;

use sap_core::constants::UNVISITED;
use sap_core::VertexId;

/// Traversal state for one side of the alternating search
///
/// `dist` is sized to the whole graph and allocated once; `touched` is the
/// dirty list of indices written since the last reset, so resetting costs the
/// size of the previous frontier rather than `V`.
pub(crate) struct SideScratch {
    dist: Vec<u32>,
    touched: Vec<VertexId>,
    queue: VecDeque<VertexId>,
}

impl SideScratch {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            dist: vec![UNVISITED; vertex_count],
            touched: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    pub(crate) fn reset(&mut self) {
        for &v in &self.touched {
            self.dist[v] = UNVISITED;
        }
        self.touched.clear();
        self.queue.clear();
    }

    /// Records `v` at `distance` and enqueues it, unless already reached.
    pub(crate) fn visit(&mut self, v: VertexId, distance: u32) -> bool {
        if self.dist[v] != UNVISITED {
            return false;
        }
        self.dist[v] = distance;
        self.touched.push(v);
        self.queue.push_back(v);
        true
    }

    pub(crate) fn distance(&self, v: VertexId) -> Option<u32> {
        match self.dist[v] {
            UNVISITED => None,
            d => Some(d),
        }
    }

    /// Next vertex to expand with its distance.
    pub(crate) fn pop(&mut self) -> Option<(VertexId, u32)> {
        let v = self.queue.pop_front()?;
        Some((v, self.dist[v]))
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn touched(&self) -> usize {
        self.touched.len()
    }
}
