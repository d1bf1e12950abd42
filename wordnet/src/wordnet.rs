use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use sap::{Ancestry, CacheStats, SapEngine, SapParams, SharedSapEngine, ValidatedDag, VertexId};

use crate::errors::{WordNetError, WordNetResult};
use crate::hypernyms::parse_hypernyms;
use crate::index::NounIndex;
use crate::synsets::{parse_synsets, Synset};

/// WordNet noun hierarchy
///
/// Built once from the synset and hypernym files. Queries resolve each noun to
/// all of its synsets and ask the engine for the shortest ancestral path
/// between the two sets.
pub struct WordNet {
    synsets: Vec<Synset>,
    index: NounIndex,
    engine: SharedSapEngine,
}

impl WordNet {
    pub fn from_files(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
        params: &SapParams,
    ) -> WordNetResult<Self> {
        let synsets = open(synsets.as_ref())?;
        let hypernyms = open(hypernyms.as_ref())?;
        Self::from_readers(synsets, hypernyms, params)
    }

    pub fn from_readers<S: BufRead, H: BufRead>(synsets: S, hypernyms: H, params: &SapParams) -> WordNetResult<Self> {
        let synsets = parse_synsets(synsets)?;
        let edges = parse_hypernyms(hypernyms)?;
        Self::new(synsets, edges, params)
    }

    /// Builds the hierarchy from parsed synsets (in id order) and
    /// `(synset, hypernym)` edges.
    pub fn new(synsets: Vec<Synset>, edges: Vec<(VertexId, VertexId)>, params: &SapParams) -> WordNetResult<Self> {
        let dag = Arc::new(ValidatedDag::from_edges(synsets.len(), edges, &params.rules)?);
        let index = NounIndex::build(&synsets);

        tracing::info!(
            synsets = synsets.len(),
            nouns = index.len(),
            hypernyms = dag.edge_count(),
            "WordNet loaded"
        );

        Ok(Self {
            engine: SapEngine::with_params(dag, params).into(),
            synsets,
            index,
        })
    }

    /// Every distinct noun, in no particular order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.index.nouns()
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn synset(&self, id: VertexId) -> Option<&Synset> {
        self.synsets.get(id)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// The most general synset, when the hierarchy has a single root.
    pub fn root(&self) -> Option<&Synset> {
        self.engine.dag().root().and_then(|id| self.synset(id))
    }

    /// Length of the shortest ancestral path between any synsets of the two
    /// nouns, `None` if they share no ancestor.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> WordNetResult<Option<u32>> {
        Ok(self.relation(noun_a, noun_b)?.map(|a| a.length))
    }

    /// Noun list of the shortest common ancestor synset of the two nouns.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> WordNetResult<Option<&str>> {
        Ok(self
            .relation(noun_a, noun_b)?
            .and_then(|a| self.synset(a.ancestor))
            .map(|s| s.words.as_str()))
    }

    /// Ancestor synset id and distance in one query.
    pub fn relation(&self, noun_a: &str, noun_b: &str) -> WordNetResult<Option<Ancestry>> {
        let a = self.synsets_of(noun_a)?;
        let b = self.synsets_of(noun_b)?;
        Ok(self.engine.ancestry(a, b)?)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.engine.cache_stats()
    }

    fn synsets_of(&self, noun: &str) -> WordNetResult<&[VertexId]> {
        self.index
            .synsets_of(noun)
            .ok_or_else(|| WordNetError::UnknownNoun(noun.to_string()))
    }
}

impl fmt::Debug for WordNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordNet")
            .field("synsets", &self.synsets.len())
            .field("nouns", &self.index.len())
            .field("cache", &self.engine.cache_stats())
            .finish()
    }
}

fn open(path: &Path) -> WordNetResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| WordNetError::Read { path: path.to_path_buf(), source })
}
