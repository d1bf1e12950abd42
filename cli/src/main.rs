use std::error::Error;
use std::io::{self, BufWriter, Write};

use tracing::info;
use wordnet::WordNet;
use wordnet_cli::{cli, commands, Config};

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Load configuration (use defaults unless config file is provided)
    let mut config = match &args.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Apply CLI overrides
    config.apply_cli_overrides(&args);

    init_logging(&config);

    let wordnet = WordNet::from_files(&args.synsets, &args.hypernyms, &config.engine)?;
    info!(synsets = wordnet.synset_count(), "hierarchy loaded");

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    commands::run(&args.command, &wordnet, stdin.lock(), &mut out)?;
    out.flush()?;

    info!(stats = ?wordnet.cache_stats(), "done");
    Ok(())
}

fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .init();
}
