//! The bootstrap run: list, select, switch, name, create

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::git::{BranchName, VersionControl};
use crate::selector::BranchSelector;
use crate::workspace;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// The created (or already existing) workspace directory
    pub path: PathBuf,
    /// The branch the repository is now on
    pub branch: BranchName,
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ Workspace ready!")?;
        writeln!(f, "   📂 Directory: {}", self.path.display())?;
        write!(f, "   🌿 Git Branch: {}", self.branch)
    }
}

/// Runs one bootstrap against a repository and a workspace root
pub struct App<'a> {
    vcs: &'a dyn VersionControl,
    selector: &'a mut dyn BranchSelector,
    git_dir: PathBuf,
    ws_root: PathBuf,
}

impl<'a> App<'a> {
    pub fn new(
        vcs: &'a dyn VersionControl,
        selector: &'a mut dyn BranchSelector,
        git_dir: &Path,
        ws_root: &Path,
    ) -> Self {
        Self {
            vcs,
            selector,
            git_dir: git_dir.to_path_buf(),
            ws_root: ws_root.to_path_buf(),
        }
    }

    /// Run every step in order, stopping at the first error.
    ///
    /// Nothing is undone on failure: a directory error after a successful
    /// checkout leaves the repository on the new branch.
    pub fn run(&mut self, title: &str, today: NaiveDate) -> Result<Workspace> {
        let branches = self.vcs.list_branches(&self.git_dir)?;
        let branch = self.selector.select(&branches)?;

        info!(branch = %branch, "Switching git repo");
        self.vcs.checkout(&self.git_dir, &branch)?;

        let folder = workspace::folder_name(title, today);
        let path = workspace::create_workspace(&self.ws_root, &folder)?;

        info!(path = %path.display(), branch = %branch, "workspace created");
        Ok(Workspace { path, branch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkspaceError;
    use crate::git::BranchList;
    use std::cell::RefCell;

    /// In-memory git that records checkouts
    struct FakeGit {
        branches: Vec<&'static str>,
        fail_checkout: bool,
        checkouts: RefCell<Vec<(PathBuf, String)>>,
    }

    impl FakeGit {
        fn with_branches(branches: &[&'static str]) -> Self {
            Self {
                branches: branches.to_vec(),
                fail_checkout: false,
                checkouts: RefCell::new(Vec::new()),
            }
        }
    }

    impl VersionControl for FakeGit {
        fn list_branches(&self, _repo: &Path) -> Result<BranchList> {
            BranchList::new(self.branches.iter().map(|b| BranchName::from(*b)).collect())
        }

        fn checkout(&self, repo: &Path, branch: &BranchName) -> Result<()> {
            self.checkouts
                .borrow_mut()
                .push((repo.to_path_buf(), branch.to_string()));
            if self.fail_checkout {
                return Err(WorkspaceError::CheckoutFailed {
                    branch: branch.to_string(),
                    reason: "exit status: 1".to_string(),
                });
            }
            Ok(())
        }
    }

    /// Answers with a fixed menu number and counts how often it was asked
    struct ScriptedSelector {
        choice: usize,
        calls: usize,
    }

    impl ScriptedSelector {
        fn choosing(choice: usize) -> Self {
            Self { choice, calls: 0 }
        }
    }

    impl BranchSelector for ScriptedSelector {
        fn select(&mut self, branches: &BranchList) -> Result<BranchName> {
            self.calls += 1;
            let shown = branches.top(crate::selector::MENU_LIMIT);
            let index = crate::selector::parse_selection(&self.choice.to_string(), shown.len())?;
            Ok(shown[index - 1].clone())
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_full_run() {
        let root = tempfile::tempdir().unwrap();
        let git = FakeGit::with_branches(&["feature-x", "main", "old"]);
        let mut selector = ScriptedSelector::choosing(1);

        let workspace = App::new(&git, &mut selector, Path::new("/repo"), root.path())
            .run("Project #1! (test)", day())
            .unwrap();

        assert_eq!(workspace.branch.as_str(), "feature-x");
        assert_eq!(workspace.path, root.path().join("2024-03-07_project-1-test"));
        assert!(workspace.path.is_dir());
        assert_eq!(
            *git.checkouts.borrow(),
            vec![(PathBuf::from("/repo"), "feature-x".to_string())]
        );
    }

    #[test]
    fn test_operator_answer_drives_checkout() {
        use crate::selector::PromptSelector;
        use std::io::Cursor;

        let root = tempfile::tempdir().unwrap();
        let git = FakeGit::with_branches(&["feature-x", "main", "old"]);
        let mut menu: Vec<u8> = Vec::new();
        let mut selector = PromptSelector::new(Cursor::new("1\n"), &mut menu);

        let workspace = App::new(&git, &mut selector, Path::new("/repo"), root.path())
            .run("  some   title  ", day())
            .unwrap();

        assert_eq!(workspace.branch.as_str(), "feature-x");
        assert_eq!(workspace.path, root.path().join("2024-03-07_some-title"));
        assert_eq!(git.checkouts.borrow()[0].1, "feature-x");
    }

    #[test]
    fn test_no_branches_never_prompts() {
        let root = tempfile::tempdir().unwrap();
        let git = FakeGit::with_branches(&[]);
        let mut selector = ScriptedSelector::choosing(1);

        let err = App::new(&git, &mut selector, Path::new("/repo"), root.path())
            .run("anything", day())
            .unwrap_err();

        assert!(matches!(err, WorkspaceError::NoBranches));
        assert_eq!(selector.calls, 0);
        assert!(git.checkouts.borrow().is_empty());
    }

    #[test]
    fn test_invalid_selection_stops_before_checkout() {
        let root = tempfile::tempdir().unwrap();
        let git = FakeGit::with_branches(&["feature-x", "main", "old"]);
        let mut selector = ScriptedSelector::choosing(4);

        let err = App::new(&git, &mut selector, Path::new("/repo"), root.path())
            .run("anything", day())
            .unwrap_err();

        assert!(matches!(err, WorkspaceError::InvalidSelection { max: 3, .. }));
        assert!(git.checkouts.borrow().is_empty());
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_checkout_creates_nothing() {
        let root = tempfile::tempdir().unwrap();
        let mut git = FakeGit::with_branches(&["feature-x", "main"]);
        git.fail_checkout = true;
        let mut selector = ScriptedSelector::choosing(2);

        let err = App::new(&git, &mut selector, Path::new("/repo"), root.path())
            .run("my task", day())
            .unwrap_err();

        match err {
            WorkspaceError::CheckoutFailed { branch, .. } => assert_eq!(branch, "main"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_directory_failure_keeps_checkout() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let git = FakeGit::with_branches(&["feature-x"]);
        let mut selector = ScriptedSelector::choosing(1);

        let err = App::new(&git, &mut selector, Path::new("/repo"), &blocker)
            .run("my task", day())
            .unwrap_err();

        assert!(matches!(err, WorkspaceError::DirectoryCreateFailed { .. }));
        assert_eq!(git.checkouts.borrow().len(), 1);
    }

    #[test]
    fn test_existing_workspace_is_reused() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("2024-03-07_my-task")).unwrap();
        let git = FakeGit::with_branches(&["main"]);
        let mut selector = ScriptedSelector::choosing(1);

        let workspace = App::new(&git, &mut selector, Path::new("/repo"), root.path())
            .run("My Task", day())
            .unwrap();
        assert_eq!(workspace.path, root.path().join("2024-03-07_my-task"));
    }

    #[test]
    fn test_report_names_path_and_branch() {
        let workspace = Workspace {
            path: PathBuf::from("/ws/2024-03-07_x"),
            branch: BranchName::from("main"),
        };
        let report = workspace.to_string();
        assert!(report.contains("Directory: /ws/2024-03-07_x"));
        assert!(report.contains("Git Branch: main"));
    }
}
