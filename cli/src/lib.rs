//! WordNet command-line front end
//!
//! Argument parsing, optional TOML configuration and the subcommand runner
//! used by the `wordnet` binary.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::Args;
pub use config::Config;
