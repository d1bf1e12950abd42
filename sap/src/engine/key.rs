use sap_core::VertexId;

/// Cache key for a pair of vertex sets
///
/// Each set is sorted and deduplicated, and the two sets are stored in
/// lexicographic order, so `(S, T)`, `(T, S)` and any reordering or repetition
/// of their members map to the same key. The engine also searches in this
/// orientation, which keeps tie-breaking independent of argument order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct QueryKey {
    first: Box<[VertexId]>,
    second: Box<[VertexId]>,
}

impl QueryKey {
    pub(crate) fn new(sources: &[VertexId], targets: &[VertexId]) -> Self {
        let a = canonical_set(sources);
        let b = canonical_set(targets);
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub(crate) fn first(&self) -> &[VertexId] {
        &self.first
    }

    pub(crate) fn second(&self) -> &[VertexId] {
        &self.second
    }
}

fn canonical_set(set: &[VertexId]) -> Box<[VertexId]> {
    let mut members = set.to_vec();
    members.sort_unstable();
    members.dedup();
    members.into_boxed_slice()
}
