use crate::errors::{WordNetError, WordNetResult};
use crate::wordnet::WordNet;

/// Finds the noun least related to the rest of a group
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// The noun whose summed distance to every other noun is largest; the
    /// earliest one wins ties.
    ///
    /// Each unordered pair is queried once. A pair without a common ancestor
    /// has no finite distance and fails with [`WordNetError::Disconnected`].
    pub fn outcast<'n>(&self, nouns: &[&'n str]) -> WordNetResult<&'n str> {
        if nouns.is_empty() {
            return Err(WordNetError::EmptyNounList);
        }

        let mut sums = vec![0u64; nouns.len()];
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                let distance = self
                    .wordnet
                    .distance(nouns[i], nouns[j])?
                    .ok_or_else(|| WordNetError::Disconnected(nouns[i].to_string(), nouns[j].to_string()))?;
                sums[i] += u64::from(distance);
                sums[j] += u64::from(distance);
            }
        }

        let mut outcast = 0;
        for (idx, &sum) in sums.iter().enumerate() {
            if sum > sums[outcast] {
                outcast = idx;
            }
        }
        tracing::debug!(outcast = nouns[outcast], distance = sums[outcast], "outcast selected");
        Ok(nouns[outcast])
    }
}
