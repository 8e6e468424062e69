//! Path resolution for the config file.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::default_config_path;

/// Where the config came from; an explicit path must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `RENTAL_CONFIG`
    Explicit(PathBuf),
    /// The XDG default location
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Default(path) => path,
        }
    }
}

/// Resolve the config file path from `--config`/`RENTAL_CONFIG` or the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<ConfigSource> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(ConfigSource::Explicit(PathBuf::from(value)));
        }
    }
    Ok(ConfigSource::Default(default_config_path()?))
}
