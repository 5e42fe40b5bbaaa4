//! Workspace folder naming and creation

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, WorkspaceError};

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("slug pattern is valid"));

/// Normalize a free-text title into lowercase ASCII words joined by hyphens.
///
/// Returns an empty string when the title has no ASCII letters or digits.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// `YYYY-MM-DD_<slug>` for the given day
pub fn folder_name(title: &str, date: NaiveDate) -> String {
    format!("{}_{}", date.format("%Y-%m-%d"), slugify(title))
}

/// Create `root/folder` and any missing parents. An existing directory is fine.
pub fn create_workspace(root: &Path, folder: &str) -> Result<PathBuf> {
    let path = root.join(folder);
    std::fs::create_dir_all(&path).map_err(|source| WorkspaceError::DirectoryCreateFailed {
        path: path.clone(),
        source,
    })?;
    debug!("Workspace directory ready: {}", path.display());
    Ok(path)
}
