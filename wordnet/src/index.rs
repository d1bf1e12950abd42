use std::collections::HashMap;

use sap_core::VertexId;

use crate::synsets::Synset;

/// Maps each noun to every synset that lists it
#[derive(Debug, Default)]
pub struct NounIndex {
    synsets_by_noun: HashMap<String, Vec<VertexId>>,
}

impl NounIndex {
    pub fn build(synsets: &[Synset]) -> Self {
        let mut synsets_by_noun: HashMap<String, Vec<VertexId>> = HashMap::new();
        for synset in synsets {
            for noun in synset.nouns() {
                let ids = synsets_by_noun.entry(noun.to_string()).or_default();
                // a noun repeated inside one synset still maps to it once
                if ids.last() != Some(&synset.id) {
                    ids.push(synset.id);
                }
            }
        }
        Self { synsets_by_noun }
    }

    /// Synset ids for `noun` in ascending order, `None` for unknown nouns.
    pub fn synsets_of(&self, noun: &str) -> Option<&[VertexId]> {
        self.synsets_by_noun.get(noun).map(Vec::as_slice)
    }

    pub fn contains(&self, noun: &str) -> bool {
        self.synsets_by_noun.contains_key(noun)
    }

    /// Every distinct noun, in no particular order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.synsets_by_noun.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.synsets_by_noun.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets_by_noun.is_empty()
    }
}
