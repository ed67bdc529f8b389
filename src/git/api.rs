//! Public API for git operations.
//!
//! This module provides the stable public API for git-related functionality:
//! - Running `git status` for a repository
//! - Parsing the human-readable status report
//!
//! ## Example: Parsing a report
//!
//! ```rust
//! use git_audit::git::{parse_status, Flag};
//!
//! let status = parse_status("/work/app", "On branch main\nYour branch is ahead of 'origin/main' by 1 commit.\n");
//! assert_eq!(status.summary().map(|s| s.ahead), Some(Flag::Yes));
//! ```

// Status records
pub use super::status::{Flag, RepositoryStatus, StatusSummary};

// Parsing
pub use super::status::{
    parse_local_branch, parse_status, parse_uncommitted, parse_untracked, parse_upstream,
};

// Command execution
pub use super::operations::{clean_error_message, fetch_status, run_git};
