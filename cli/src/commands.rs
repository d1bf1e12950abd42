use std::error::Error;
use std::io::{BufRead, Write};

use tracing::{debug, warn};
use wordnet::{Outcast, WordNet, WordNetError};

use crate::cli::Command;

pub type CommandResult = Result<(), Box<dyn Error>>;

/// Run one subcommand against a loaded hierarchy.
///
/// `input` is only read by `batch`. Results go to `out`, one line each;
/// a missing ancestor prints as `none`.
pub fn run<R: BufRead, W: Write>(command: &Command, wordnet: &WordNet, input: R, out: &mut W) -> CommandResult {
    match command {
        Command::Distance { noun_a, noun_b } => {
            let distance = wordnet.distance(noun_a, noun_b)?;
            writeln!(out, "{}", display_or_none(distance))?;
        }
        Command::Sap { noun_a, noun_b } => {
            let ancestor = wordnet.sap(noun_a, noun_b)?;
            writeln!(out, "{}", ancestor.unwrap_or("none"))?;
        }
        Command::Outcast { nouns } => {
            let nouns: Vec<&str> = nouns.iter().map(String::as_str).collect();
            let outcast = Outcast::new(wordnet).outcast(&nouns)?;
            writeln!(out, "{}", outcast)?;
        }
        Command::Batch => batch(wordnet, input, out)?,
    }
    Ok(())
}

/// Answer `noun_a noun_b` pairs until EOF. A bad line is reported inline and
/// the batch continues.
fn batch<R: BufRead, W: Write>(wordnet: &WordNet, input: R, out: &mut W) -> CommandResult {
    let mut answered = 0usize;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [noun_a, noun_b] => match pair(wordnet, noun_a, noun_b) {
                Ok(answer) => {
                    writeln!(out, "{}", answer)?;
                    answered += 1;
                }
                Err(e) => {
                    warn!("batch line {}: {}", idx + 1, e);
                    writeln!(out, "error: {}", e)?;
                }
            },
            _ => {
                warn!("batch line {}: expected two nouns, got {}", idx + 1, tokens.len());
                writeln!(out, "error: expected two nouns, got {}", tokens.len())?;
            }
        }
    }
    debug!(answered, stats = ?wordnet.cache_stats(), "batch finished");
    Ok(())
}

fn pair(wordnet: &WordNet, noun_a: &str, noun_b: &str) -> Result<String, WordNetError> {
    let relation = wordnet.relation(noun_a, noun_b)?;
    let length = display_or_none(relation.map(|r| r.length));
    let ancestor = relation
        .and_then(|r| wordnet.synset(r.ancestor))
        .map_or("none", |s| s.words.as_str());
    Ok(format!("length = {}, ancestor = {}", length, ancestor))
}

fn display_or_none(value: Option<u32>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}
