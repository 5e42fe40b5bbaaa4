//! Git operations module using the git CLI
//!
//! Provides functionality for:
//! - Listing local branches, most recently committed first
//! - Checking out a branch with git's own output shown to the operator

mod branch;
mod repository;

use std::path::Path;

use crate::error::Result;

pub use branch::*;
pub use repository::*;

/// The two version-control operations the bootstrapper needs.
///
/// [`GitCli`] shells out to `git`; tests substitute an in-memory fake.
pub trait VersionControl {
    /// List the branches of `repo`, most recently committed first.
    ///
    /// Never returns an empty list: an empty result is [`WorkspaceError::NoBranches`].
    ///
    /// [`WorkspaceError::NoBranches`]: crate::error::WorkspaceError::NoBranches
    fn list_branches(&self, repo: &Path) -> Result<BranchList>;

    /// Make `branch` the checked-out branch of `repo`.
    fn checkout(&self, repo: &Path, branch: &BranchName) -> Result<()>;
}
