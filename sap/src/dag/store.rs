use std::iter::{Copied, FusedIterator};
use std::slice;

use sap_core::{GraphError, VertexId};

/// Adjacency-list storage for a directed graph over `[0, V)`
///
/// Purely structural: no cycle or root checks happen here. Edges point from
/// the more specific vertex to the more general one and are kept in insertion
/// order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagStore {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl DagStore {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a store from an edge enumeration, stopping at the first
    /// out-of-range endpoint.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut store = Self::new(vertex_count);
        for (from, to) in edges {
            store.add_edge(from, to)?;
        }
        Ok(store)
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Out-neighbors of `v` in insertion order. Cloning the iterator restarts
    /// from the current position; calling again restarts from the beginning.
    pub fn neighbors(&self, v: VertexId) -> Result<Neighbors<'_>, GraphError> {
        self.check(v)?;
        Ok(Neighbors { inner: self.adjacency[v].iter().copied() })
    }

    pub fn out_degree(&self, v: VertexId) -> Result<usize, GraphError> {
        self.check(v)?;
        Ok(self.adjacency[v].len())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertices with out-degree zero, in ascending id order.
    pub fn sinks(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, out)| out.is_empty())
            .map(|(v, _)| v)
    }

    /// Unchecked adjacency slice for traversal code that has already
    /// validated `v`.
    pub(crate) fn adj(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    fn check(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange { vertex, vertex_count: self.adjacency.len() })
        }
    }
}

/// Out-neighbor iterator returned by [`DagStore::neighbors`]
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Copied<slice::Iter<'a, VertexId>>,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}
