//! Numbered branch menu and the single-answer prompt

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::{debug, warn};

use crate::error::{Result, WorkspaceError};
use crate::git::{BranchList, BranchName};

/// How many of the most recent branches the menu shows
pub const MENU_LIMIT: usize = 15;

/// Picks one branch out of a recency-ordered list
pub trait BranchSelector {
    fn select(&mut self, branches: &BranchList) -> Result<BranchName>;
}

/// Prints a numbered menu and reads one line of input. No retries.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl PromptSelector<StdinLock<'static>, Stdout> {
    /// Prompt on the terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn show_menu(&mut self, shown: &[BranchName]) -> io::Result<()> {
        writeln!(self.output, "👇 Select a branch to switch to:")?;
        for (i, branch) in shown.iter().enumerate() {
            writeln!(self.output, "[{}] {}", i + 1, branch)?;
        }
        write!(self.output, "\nEnter number: ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> BranchSelector for PromptSelector<R, W> {
    fn select(&mut self, branches: &BranchList) -> Result<BranchName> {
        let shown = branches.top(MENU_LIMIT);

        if let Err(e) = self.show_menu(shown) {
            warn!("Failed to print branch menu: {}", e);
        }

        let mut line = String::new();
        if let Err(e) = self.input.read_line(&mut line) {
            debug!("Failed to read selection: {}", e);
            line.clear();
        }

        let index = parse_selection(&line, shown.len())?;
        Ok(shown[index - 1].clone())
    }
}

/// Parse a 1-based menu choice, accepting only `1..=max`
pub fn parse_selection(input: &str, max: usize) -> Result<usize> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(WorkspaceError::InvalidSelection {
            input: input.to_string(),
            max,
        }),
    }
}
