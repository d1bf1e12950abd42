use std::fmt;

use thiserror::Error;

use crate::types::VertexId;

/// Structural errors raised while building a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is not in [0, {vertex_count})")]
    OutOfRange { vertex: VertexId, vertex_count: usize },
}

/// Reasons a built graph is refused as a rooted DAG
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cycle detected through edge {from} -> {to}")]
    CycleDetected { from: VertexId, to: VertexId },

    #[error("graph has {count} roots, expected exactly one (first offenders: {roots:?})")]
    MultipleRoots { count: usize, roots: Vec<VertexId> },

    #[error("graph has no vertices")]
    Empty,
}

/// Which argument of a two-set query an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetSide {
    Sources,
    Targets,
}

impl fmt::Display for SetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetSide::Sources => f.write_str("sources"),
            SetSide::Targets => f.write_str("targets"),
        }
    }
}

/// Invalid arguments to an ancestor/length query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{side} vertex set is empty")]
    EmptySet { side: SetSide },

    #[error("vertex {vertex} is not in [0, {vertex_count})")]
    InvalidVertex { vertex: VertexId, vertex_count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SapError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),
}

pub type SapResult<T> = Result<T, SapError>;
