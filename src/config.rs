//! Configuration for wsm
//!
//! Values come from command line flags, then environment variables (both
//! handled by clap), then an optional JSON file in the user's config directory.

use color_eyre::eyre::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::WorkspaceError;

/// Directory under the platform config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "wsm";

/// The name of the config file
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Optional settings read from the config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileConfig {
    /// Directory that workspaces are created in
    #[serde(default)]
    pub ws_root: Option<String>,

    /// Git repository whose branch gets switched
    #[serde(default)]
    pub git_dir: Option<String>,

    /// Whether logging is enabled
    #[serde(default)]
    pub log: Option<bool>,
}

impl FileConfig {
    /// Default location: `<config_dir>/wsm/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load an explicitly requested config file. It must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: FileConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the file at the default location, or an empty config if there is none
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory that workspaces are created in
    pub ws_root: PathBuf,
    /// Git repository whose branch gets switched
    pub git_dir: PathBuf,
    /// Whether logging is enabled
    pub log: bool,
}

impl Config {
    /// Merge flag/environment values (already combined by clap) with the file.
    pub fn resolve(
        root: Option<&str>,
        git_dir: Option<&str>,
        log: Option<bool>,
        file: &FileConfig,
    ) -> Result<Self, WorkspaceError> {
        let ws_root = first_non_empty(root, file.ws_root.as_deref()).ok_or_else(|| {
            WorkspaceError::ConfigurationMissing("WS_ROOT or --root is required".to_string())
        })?;
        let git_dir = first_non_empty(git_dir, file.git_dir.as_deref()).ok_or_else(|| {
            WorkspaceError::ConfigurationMissing("WS_GIT_DIR or --git-dir is required".to_string())
        })?;

        Ok(Self {
            ws_root: expand_home(ws_root),
            git_dir: expand_home(git_dir),
            log: log.or(file.log).unwrap_or(false),
        })
    }
}

fn first_non_empty<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
