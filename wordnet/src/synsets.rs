//! Synset file parsing
//!
//! One synset per line: `id,noun1 noun2 ...,gloss`. The gloss is everything
//! after the second comma and may itself contain commas. Ids must cover
//! `0..n` exactly once, in any order.

use std::io::BufRead;

use sap_core::VertexId;

use crate::errors::{SourceFile, WordNetError, WordNetResult};

/// A set of synonymous nouns standing for one concept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub id: VertexId,
    /// Space-separated nouns exactly as listed in the source file
    pub words: String,
    pub gloss: String,
}

impl Synset {
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.words.split_whitespace()
    }
}

/// Reads every synset from `reader`, returned in id order.
pub fn parse_synsets<R: BufRead>(reader: R) -> WordNetResult<Vec<Synset>> {
    let mut parsed: Vec<(usize, Synset)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        parsed.push((line_no, parse_line(line, line_no)?));
    }

    parsed.sort_by_key(|(_, synset)| synset.id);
    for (expected, (line_no, synset)) in parsed.iter().enumerate() {
        if synset.id < expected {
            return Err(WordNetError::parse(
                SourceFile::Synsets,
                *line_no,
                format!("duplicate synset id {}", synset.id),
            ));
        }
        if synset.id > expected {
            return Err(WordNetError::parse(
                SourceFile::Synsets,
                *line_no,
                format!("synset id {} leaves id {} unused", synset.id, expected),
            ));
        }
    }

    Ok(parsed.into_iter().map(|(_, synset)| synset).collect())
}

fn parse_line(line: &str, line_no: usize) -> WordNetResult<Synset> {
    let mut fields = line.splitn(3, ',');
    let id_field = fields.next().unwrap_or_default().trim();
    let id = id_field.parse::<VertexId>().map_err(|e| {
        WordNetError::parse(SourceFile::Synsets, line_no, format!("invalid synset id {id_field:?}: {e}"))
    })?;

    let words = fields
        .next()
        .map(str::trim)
        .filter(|words| !words.is_empty())
        .ok_or_else(|| WordNetError::parse(SourceFile::Synsets, line_no, "missing noun list"))?;

    Ok(Synset {
        id,
        words: words.to_string(),
        gloss: fields.next().unwrap_or_default().trim().to_string(),
    })
}
