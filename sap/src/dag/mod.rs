//! Hierarchy graph construction and validation
//!
//! This module provides:
//! - Adjacency storage for hypernym edges (specific -> general)
//! - One-shot validation into a rooted DAG (acyclic, single root)

pub mod store;
pub mod validator;

pub use store::{DagStore, Neighbors};
pub use validator::{validate, validate_with, ValidatedDag};
