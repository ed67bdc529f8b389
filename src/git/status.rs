//! Repository status records and `git status` text parsing
//!
//! The parser works on the human-readable report, not on porcelain output.
//! Each fact is extracted by a separate pure function that looks for a fixed
//! phrase; an unrecognized report degrades to `unknown` / `no` instead of
//! failing.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::config::{
    AHEAD_MARKER, ON_BRANCH_MARKER, UNCOMMITTED_MARKERS, UNKNOWN_BRANCH, UNTRACKED_MARKERS,
    UP_TO_DATE_MARKER,
};

/// A yes/no fact about a repository
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Flag {
    Yes,
    #[default]
    No,
}

impl Flag {
    /// Returns the text shown in the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "yes",
            Flag::No => "no",
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facts extracted from a successful `git status` run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusSummary {
    pub local_branch: String,
    pub upstream_branch: String,
    pub ahead: Flag,
    pub uncommitted: Flag,
    pub untracked_files: Flag,
}

/// Status of one discovered repository
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepositoryStatus {
    /// `git status` ran and its report was parsed
    Success { path: PathBuf, summary: StatusSummary },
    /// `git status` could not be run or exited abnormally
    Failure { path: PathBuf, message: String },
}

impl RepositoryStatus {
    /// Repository root this record describes
    pub fn path(&self) -> &Path {
        match self {
            RepositoryStatus::Success { path, .. } | RepositoryStatus::Failure { path, .. } => path,
        }
    }

    /// Parsed facts, or `None` for a failure record
    pub fn summary(&self) -> Option<&StatusSummary> {
        match self {
            RepositoryStatus::Success { summary, .. } => Some(summary),
            RepositoryStatus::Failure { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RepositoryStatus::Failure { .. })
    }
}

/// Builds a success record from the full `git status` output
pub fn parse_status(path: impl Into<PathBuf>, text: &str) -> RepositoryStatus {
    let (upstream_branch, ahead) = parse_upstream(text);
    RepositoryStatus::Success {
        path: path.into(),
        summary: StatusSummary {
            local_branch: parse_local_branch(text),
            upstream_branch,
            ahead,
            uncommitted: parse_uncommitted(text),
            untracked_files: parse_untracked(text),
        },
    }
}

/// Extracts the checked-out branch from the first line (`On branch <name>`)
pub fn parse_local_branch(text: &str) -> String {
    text.lines()
        .next()
        .and_then(|line| text_after(line, ON_BRANCH_MARKER))
        .map(|branch| branch.trim().to_string())
        .unwrap_or_else(|| UNKNOWN_BRANCH.to_string())
}

/// Extracts the upstream branch and ahead flag from the second line
pub fn parse_upstream(text: &str) -> (String, Flag) {
    let Some(line) = text.lines().nth(1) else {
        return (UNKNOWN_BRANCH.to_string(), Flag::No);
    };

    if let Some(rest) = text_after(line, UP_TO_DATE_MARKER) {
        return (clean_branch_name(rest), Flag::No);
    }

    if let Some(rest) = text_after(line, AHEAD_MARKER) {
        // "Your branch is ahead of 'origin/main' by 2 commits." - the remainder
        // starts with a space, so the name is the second space-separated token
        let upstream = rest
            .split(' ')
            .nth(1)
            .map(clean_branch_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_BRANCH.to_string());
        return (upstream, Flag::Yes);
    }

    (UNKNOWN_BRANCH.to_string(), Flag::No)
}

/// Whether staged or unstaged modifications are reported anywhere in the text
pub fn parse_uncommitted(text: &str) -> Flag {
    contains_any(text, UNCOMMITTED_MARKERS).into()
}

/// Whether untracked files are reported anywhere in the text
pub fn parse_untracked(text: &str) -> Flag {
    contains_any(text, UNTRACKED_MARKERS).into()
}

fn text_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|idx| &line[idx + marker.len()..])
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

// Quotes and periods are dropped wherever they occur, not only at the ends
fn clean_branch_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\'' && *c != '.')
        .collect::<String>()
        .trim()
        .to_string()
}
