//! Rooted-DAG validation
//!
//! A [`ValidatedDag`] can only be obtained through the checks in this module,
//! so every engine is built over a graph that is known to be acyclic and, by
//! default, to have exactly one root.

use sap_core::constants::MAX_REPORTED_ROOTS;
use sap_core::{DagRules, SapResult, ValidationError, VertexId};

use super::store::DagStore;

/// A graph that passed validation. Immutable from here on.
#[derive(Debug, Clone)]
pub struct ValidatedDag {
    store: DagStore,
    roots: Vec<VertexId>,
}

impl ValidatedDag {
    /// Validates `store` under `rules`, taking ownership of it on success.
    pub fn new(store: DagStore, rules: &DagRules) -> Result<Self, ValidationError> {
        let roots = check(&store, rules)?;
        Ok(Self { store, roots })
    }

    /// Builds the store from `(from, to)` edges and validates it in one step.
    pub fn from_edges<I>(vertex_count: usize, edges: I, rules: &DagRules) -> SapResult<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let store = DagStore::from_edges(vertex_count, edges)?;
        Ok(Self::new(store, rules)?)
    }

    pub fn store(&self) -> &DagStore {
        &self.store
    }

    /// Vertices with out-degree zero, ascending.
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// The root, when the graph has exactly one.
    pub fn root(&self) -> Option<VertexId> {
        match self.roots.as_slice() {
            [root] => Some(*root),
            _ => None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }
}

impl TryFrom<DagStore> for ValidatedDag {
    type Error = ValidationError;

    fn try_from(store: DagStore) -> Result<Self, Self::Error> {
        Self::new(store, &DagRules::default())
    }
}

/// Validates a built store with the default rules (acyclic, single root).
pub fn validate(store: &DagStore) -> Result<ValidatedDag, ValidationError> {
    validate_with(store, &DagRules::default())
}

/// Validates a built store with explicit rules. The store is copied only
/// once the checks pass.
pub fn validate_with(store: &DagStore, rules: &DagRules) -> Result<ValidatedDag, ValidationError> {
    let roots = check(store, rules)?;
    Ok(ValidatedDag { store: store.clone(), roots })
}

fn check(store: &DagStore, rules: &DagRules) -> Result<Vec<VertexId>, ValidationError> {
    if store.vertex_count() == 0 {
        tracing::warn!("rejecting graph without vertices");
        return Err(ValidationError::Empty);
    }

    if let Some((from, to)) = find_back_edge(store) {
        tracing::warn!(from, to, "rejecting graph with a cycle");
        return Err(ValidationError::CycleDetected { from, to });
    }

    // an acyclic graph with at least one vertex always has a sink
    let roots: Vec<VertexId> = store.sinks().collect();
    if rules.require_single_root && roots.len() > 1 {
        tracing::warn!(count = roots.len(), "rejecting graph with multiple roots");
        return Err(ValidationError::MultipleRoots {
            count: roots.len(),
            roots: roots.into_iter().take(MAX_REPORTED_ROOTS).collect(),
        });
    }

    tracing::info!(
        vertices = store.vertex_count(),
        edges = store.edge_count(),
        roots = roots.len(),
        "hierarchy graph validated"
    );
    Ok(roots)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Iterative depth-first search returning the first edge that closes a cycle.
///
/// Each stack frame is a vertex and the index of the next out-edge to follow,
/// so the traversal order matches the recursive formulation without using the
/// native call stack.
fn find_back_edge(store: &DagStore) -> Option<(VertexId, VertexId)> {
    let mut marks = vec![Mark::Unvisited; store.vertex_count()];
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for start in 0..store.vertex_count() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::OnPath;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (v, cursor) = *frame;
            match store.adj(v).get(cursor) {
                Some(&w) => {
                    frame.1 += 1;
                    match marks[w] {
                        Mark::OnPath => return Some((v, w)),
                        Mark::Unvisited => {
                            marks[w] = Mark::OnPath;
                            stack.push((w, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[v] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }

    None
}
