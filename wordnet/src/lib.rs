//! WordNet noun hierarchy on top of the shortest-ancestral-path engine
//!
//! Synsets become vertices, hypernym links become edges, and nouns are
//! resolved to every synset they belong to before the engine is asked for
//! distances and shortest common ancestors.

pub mod errors;
pub mod hypernyms;
pub mod index;
pub mod outcast;
pub mod synsets;
pub mod wordnet;

pub use errors::{SourceFile, WordNetError, WordNetResult};
pub use index::NounIndex;
pub use outcast::Outcast;
pub use synsets::Synset;
pub use wordnet::WordNet;
