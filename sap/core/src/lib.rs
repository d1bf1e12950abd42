//! Core types shared by the shortest-ancestral-path crates
//!
//! This crate holds the vertex id type, query outcomes, every error enum
//! and the serde-backed engine parameters. It has no graph logic of its own.

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

pub use config::params::{DagRules, SapParams};
pub use errors::{GraphError, QueryError, SapError, SapResult, SetSide, ValidationError};
pub use types::{Ancestry, VertexId};
