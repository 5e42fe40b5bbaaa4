//! Branch names and recency-ordered branch lists

use std::fmt;

use crate::error::{Result, WorkspaceError};

/// A branch name exactly as git reported it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BranchName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Non-empty list of branches, most recently committed first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchList {
    branches: Vec<BranchName>,
}

impl BranchList {
    /// Wrap an already ordered list. Fails with `NoBranches` when empty.
    pub fn new(branches: Vec<BranchName>) -> Result<Self> {
        if branches.is_empty() {
            return Err(WorkspaceError::NoBranches);
        }
        Ok(Self { branches })
    }

    /// Parse `git branch --format=%(refname:short)` output, one branch per line
    pub fn parse(output: &str) -> Result<Self> {
        let branches = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(BranchName::from)
            .collect();
        Self::new(branches)
    }

    /// The first `limit` branches (all of them if there are fewer)
    pub fn top(&self, limit: usize) -> &[BranchName] {
        &self.branches[..limit.min(self.branches.len())]
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &BranchName> {
        self.branches.iter()
    }
}
