use anyhow::{anyhow, Result};
use screenkit_resolver::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "screenkit.config.json";

/// Screenkit configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Resolver settings, kept at the top level of the file
    #[serde(flatten)]
    pub resolver: ResolverConfig,

    /// Quiet period after a snapshot change before re-resolving
    #[serde(default = "default_watch_debounce_ms")]
    pub watch_debounce_ms: u64,
}

fn default_watch_debounce_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            watch_debounce_ms: default_watch_debounce_ms(),
        }
    }
}

impl Config {
    /// Load config from `explicit`, or from the default file in `cwd`.
    ///
    /// A missing default file means defaults; a missing explicit file is an
    /// error.
    pub fn load(cwd: &str, explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) if !path.exists() => {
                return Err(anyhow!("Config file does not exist: {}", path.display()));
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| anyhow!("Invalid config {}: {}", config_path.display(), e))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}
