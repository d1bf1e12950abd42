use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordnet")]
#[command(about = "Shortest ancestral path queries over a WordNet noun hierarchy", long_about = None)]
pub struct Args {
    /// Synset file (id,nouns,gloss per line)
    #[arg(long)]
    pub synsets: PathBuf,

    /// Hypernym file (id,parent,... per line)
    #[arg(long)]
    pub hypernyms: PathBuf,

    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long = "config")]
    pub config_path: Option<PathBuf>,

    /// Number of cached query results (0 disables the cache)
    #[arg(long)]
    pub cache_capacity: Option<usize>,

    /// Accept hierarchies with more than one root
    #[arg(long)]
    pub allow_forest: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Length of the shortest ancestral path between two nouns
    Distance { noun_a: String, noun_b: String },

    /// Shortest common ancestor synset of two nouns
    Sap { noun_a: String, noun_b: String },

    /// The noun least related to the others
    Outcast {
        #[arg(required = true)]
        nouns: Vec<String>,
    },

    /// Read "noun_a noun_b" pairs from stdin and print distance and ancestor
    Batch,
}

pub fn parse_args() -> Args {
    Args::parse()
}
