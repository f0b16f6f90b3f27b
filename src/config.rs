//! Configuration handling for apractool.
//! Locates the workspace configuration file and turns it into the
//! read-only [`WorkspaceContext`] the namespace rules are evaluated against.

use crate::constants::{CONFIG_FILES, DEFAULT_ROOT_DIR};
use crate::error::{Error, Result};
use crate::paths::normalize;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Options read from `apractool.json`, `apractool.yml` or `apractool.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root directory relative to the workspace root
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self { root_dir: default_root_dir() }
    }
}

/// Loads configuration from a workspace directory, trying multiple file formats.
///
/// # Arguments
/// * `workspace_root` - Directory containing the configuration file
/// * `config_files` - List of configuration file names to try, in order
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first existing file, if any
pub fn load_config<P: AsRef<Path>>(
    workspace_root: P,
    config_files: &[&str],
) -> Result<Option<String>> {
    for file in config_files {
        let config_path = workspace_root.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }

    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str::<Option<Config>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Returns the workspace configuration, or the defaults when no file exists.
pub fn get_config<P: AsRef<Path>>(workspace_root: P) -> Result<Config> {
    match load_config(workspace_root, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}

/// Read-only view of the workspace a request runs in.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    workspace_root: PathBuf,
    root_dir: PathBuf,
}

impl WorkspaceContext {
    pub fn new<P: Into<PathBuf>>(workspace_root: P, config: &Config) -> Self {
        Self { workspace_root: workspace_root.into(), root_dir: config.root_dir.clone() }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Absolute, normalized root directory.
    pub fn root_directory(&self) -> PathBuf {
        self.resolve(&self.root_dir)
    }

    /// Anchors `path` at the workspace root when relative and normalizes it.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        normalize(self.workspace_root.join(path))
    }
}
