use std::fmt;
use std::path::PathBuf;

use sap_core::{GraphError, QueryError, SapError, ValidationError};
use thiserror::Error;

/// Which input file a parse error comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFile {
    Synsets,
    Hypernyms,
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFile::Synsets => f.write_str("synsets"),
            SourceFile::Hypernyms => f.write_str("hypernyms"),
        }
    }
}

#[derive(Error, Debug)]
pub enum WordNetError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{file} line {line}: {reason}")]
    Parse { file: SourceFile, line: usize, reason: String },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("invalid hierarchy: {0}")]
    Validation(#[from] ValidationError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("unknown noun: {0}")]
    UnknownNoun(String),

    #[error("outcast needs at least one noun")]
    EmptyNounList,

    #[error("no common ancestor between {0} and {1}")]
    Disconnected(String, String),
}

pub type WordNetResult<T> = Result<T, WordNetError>;

impl From<SapError> for WordNetError {
    fn from(err: SapError) -> Self {
        match err {
            SapError::Graph(e) => WordNetError::Graph(e),
            SapError::Validation(e) => WordNetError::Validation(e),
            SapError::Query(e) => WordNetError::Query(e),
        }
    }
}

impl WordNetError {
    pub(crate) fn parse(file: SourceFile, line: usize, reason: impl Into<String>) -> Self {
        WordNetError::Parse { file, line, reason: reason.into() }
    }
}
