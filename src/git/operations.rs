//! Git command execution and status fetching

use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

use super::status::{parse_status, RepositoryStatus};
use crate::core::config::{GIT_STATUS_ARGS, GIT_STATUS_TIMEOUT_SECS};

/// Runs a git command in the specified directory with a timeout
/// Returns (success, stdout, stderr)
///
/// The command runs under the C locale so that its human-readable output
/// matches the English phrases the status parser looks for.
pub async fn run_git(path: &Path, args: &[&str]) -> Result<(bool, String, String)> {
    let timeout_duration = Duration::from_secs(GIT_STATUS_TIMEOUT_SECS);
    log::debug!("$ git {} [{}]", args.join(" "), path.display());

    let result = tokio::time::timeout(
        timeout_duration,
        Command::new("git")
            .args(args)
            .current_dir(path)
            .env("LC_ALL", "C")
            .kill_on_drop(true)
            .output(),
    )
    .await;

    match result {
        Ok(Ok(output)) => Ok((
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(anyhow::anyhow!(
            "Git operation timed out after {} seconds",
            GIT_STATUS_TIMEOUT_SECS
        )),
    }
}

/// Runs `git status` in `path` and turns the report into a status record
///
/// Never fails: a command that cannot be spawned, times out, or exits
/// non-zero becomes a [`RepositoryStatus::Failure`] carrying the reason.
pub async fn fetch_status(path: &Path) -> RepositoryStatus {
    match run_git(path, GIT_STATUS_ARGS).await {
        Ok((true, stdout, _)) => parse_status(path, &stdout),
        Ok((false, _, stderr)) => {
            let message = if stderr.is_empty() {
                "git status exited with an error".to_string()
            } else {
                clean_error_message(&stderr)
            };
            log::warn!("git status failed in {}: {}", path.display(), message);
            RepositoryStatus::Failure {
                path: path.to_path_buf(),
                message,
            }
        }
        Err(e) => {
            let message = clean_error_message(&e.to_string());
            log::warn!("Could not run git status in {}: {}", path.display(), message);
            RepositoryStatus::Failure {
                path: path.to_path_buf(),
                message,
            }
        }
    }
}

/// Collapses newlines, tabs and runs of spaces into single spaces
pub fn clean_error_message(error: &str) -> String {
    error.split_whitespace().collect::<Vec<_>>().join(" ")
}
