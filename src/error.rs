//! Error types for the workspace bootstrap pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Every way a bootstrap run can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// A required path was not given by flag, environment or config file
    #[error("configuration: {0}")]
    ConfigurationMissing(String),

    /// git could not be started or exited non-zero
    #[error("listing branches: `{command}` failed: {reason}")]
    ToolInvocationFailed { command: String, reason: String },

    /// git succeeded but reported no branches
    #[error("listing branches: no branches found")]
    NoBranches,

    /// git succeeded but its output could not be read as branch names
    #[error("listing branches: unreadable output from `{command}`")]
    MalformedOutput { command: String },

    /// The operator's answer was not a number shown in the menu
    #[error("selecting branch: invalid selection {input:?} (expected 1-{max})")]
    InvalidSelection { input: String, max: usize },

    /// git checkout exited non-zero or could not be started
    #[error("switching branch: git checkout {branch} failed: {reason}")]
    CheckoutFailed { branch: String, reason: String },

    /// The workspace directory could not be created
    #[error("creating workspace: failed to create directory {}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = WorkspaceError> = std::result::Result<T, E>;
