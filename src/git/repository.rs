//! Branch listing and checkout using git CLI

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use super::{BranchList, BranchName, VersionControl};
use crate::error::{Result, WorkspaceError};

/// [`VersionControl`] backed by the `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    /// Use a specific git executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, repo: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C").arg(repo);
        cmd
    }
}

impl VersionControl for GitCli {
    fn list_branches(&self, repo: &Path) -> Result<BranchList> {
        let args = [
            "branch",
            "--sort=-committerdate",
            "--format=%(refname:short)",
        ];
        let command_line = format!(
            "{} -C {} {}",
            self.program,
            repo.display(),
            args.join(" ")
        );
        debug!("Running: {}", command_line);

        let output = self
            .command(repo)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| WorkspaceError::ToolInvocationFailed {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("git branch failed: {}", stderr.trim());
            let reason = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(WorkspaceError::ToolInvocationFailed {
                command: command_line,
                reason,
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| WorkspaceError::MalformedOutput {
                command: command_line,
            })?;
        let branches = BranchList::parse(&stdout)?;

        debug!("Found {} branches in {}", branches.len(), repo.display());
        Ok(branches)
    }

    fn checkout(&self, repo: &Path, branch: &BranchName) -> Result<()> {
        debug!("Checking out '{}' in {}", branch, repo.display());

        // `--` stops git from treating an unknown branch as a pathspec
        let status = self
            .command(repo)
            .args(["checkout", branch.as_str(), "--"])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| WorkspaceError::CheckoutFailed {
                branch: branch.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(WorkspaceError::CheckoutFailed {
                branch: branch.to_string(),
                reason: status.to_string(),
            });
        }

        Ok(())
    }
}
