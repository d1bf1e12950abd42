use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use sap::SapParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: SapParams,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

impl Config {
    /// Load configuration from an explicitly given file. A missing file is
    /// an error; callers without a path use `Config::default()`.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;

        Ok(config)
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &crate::cli::Args) {
        if let Some(capacity) = args.cache_capacity {
            self.engine.cache_capacity = Some(capacity);
        }

        if args.allow_forest {
            self.engine.rules.require_single_root = false;
        }

        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
    }
}
