use std::io::BufRead;

use sap_core::VertexId;

use crate::errors::{SourceFile, WordNetError, WordNetResult};

/// Reads hypernym links, one line per synset: `id,parent1,parent2,...`.
///
/// Returns `(synset, hypernym)` edges in file order. A line with only an id
/// (the root) contributes no edges. Range checks are left to the graph.
pub fn parse_hypernyms<R: BufRead>(reader: R) -> WordNetResult<Vec<(VertexId, VertexId)>> {
    let mut edges = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let synset = parse_id(fields.next().unwrap_or_default(), line_no)?;
        for field in fields.filter(|f| !f.is_empty()) {
            edges.push((synset, parse_id(field, line_no)?));
        }
    }

    Ok(edges)
}

fn parse_id(field: &str, line_no: usize) -> WordNetResult<VertexId> {
    field.parse::<VertexId>().map_err(|e| {
        WordNetError::parse(SourceFile::Hypernyms, line_no, format!("invalid synset id {field:?}: {e}"))
    })
}
