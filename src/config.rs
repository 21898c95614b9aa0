//! Configuration file (pgparams.toml)

use crate::error::{Error, Result};
use crate::query::DEFAULT_CALL;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "pgparams.toml";

fn default_call() -> String {
    DEFAULT_CALL.to_string()
}

/// Settings read from `pgparams.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Call name whose string argument holds SQL
    #[serde(default = "default_call")]
    pub call: String,

    /// Files to convert, relative to the config file
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            call: default_call(),
            paths: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }

    /// Load config from a TOML file, resolving `paths` against its directory
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("{}: {}", path.display(), e),
        })?;

        let mut config = Self::from_toml(&contents)?;
        if let Some(root) = path.parent() {
            config.paths = config
                .paths
                .into_iter()
                .map(|p| if p.is_relative() { root.join(p) } else { p })
                .collect();
        }

        Ok(config)
    }

    /// Load an explicitly named config, or the default file if it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
