//! Repository discovery and status collection

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::config::GIT_MARKER_DIR;
use crate::git::{fetch_status, RepositoryStatus};

/// Finds repository roots below `search_path`, in depth-first discovery order
///
/// A directory is a repository root when it contains a `.git` directory. The
/// marker is checked for every listed entry, so `max_depth` only limits how
/// far the walk descends into ordinary subdirectories: with `max_depth == 0`
/// only the entries directly inside `search_path` are listed.
///
/// Entries within a directory are visited in file-name order. Symbolic links
/// are not followed, and directories that cannot be read are skipped with a
/// warning.
pub fn find_repo_roots(search_path: impl AsRef<Path>, max_depth: usize) -> Vec<PathBuf> {
    let search_path = search_path.as_ref();

    // filter_entry runs while the sequential walker iterates, so pushes arrive
    // in traversal order
    let roots = Arc::new(Mutex::new(Vec::new()));
    let roots_clone = Arc::clone(&roots);

    let walker = WalkBuilder::new(search_path)
        .standard_filters(false) // .git and hidden directories must stay visible
        .follow_links(false)
        // The walker counts the root as depth 0, so its entries sit one level deeper
        .max_depth(Some(max_depth.saturating_add(1)))
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir && entry.file_name() == GIT_MARKER_DIR {
                if let Some(repo_path) = entry.path().parent() {
                    log::debug!("Found repository at {}", repo_path.display());
                    if let Ok(mut roots) = roots_clone.lock() {
                        roots.push(repo_path.to_path_buf());
                    }
                }
                // Don't descend into .git
                return false;
            }
            true
        })
        .build();

    for result in walker {
        if let Err(err) = result {
            log::warn!("Skipping unreadable entry: {err}");
        }
    }

    // The walker (and with it the closure's clone) is gone by now
    match Arc::try_unwrap(roots) {
        Ok(mutex) => mutex.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()),
        Err(arc) => arc.lock().map(|roots| roots.clone()).unwrap_or_default(),
    }
}

/// Discovers repositories below `root` and fetches the status of each one
///
/// Discovery runs on a blocking thread; status commands then run with at most
/// `concurrency` in flight. Results come back in discovery order regardless of
/// which command finishes first.
///
/// Fails only when `root` itself cannot be read.
pub async fn scan(
    root: impl AsRef<Path>,
    max_depth: usize,
    concurrency: usize,
) -> Result<Vec<RepositoryStatus>> {
    let root = root.as_ref().to_path_buf();
    let repo_paths = discover(&root, max_depth).await?;
    Ok(fetch_all(repo_paths, concurrency).await)
}

/// Runs [`find_repo_roots`] off the async runtime after checking that `root`
/// can be listed
pub async fn discover(root: &Path, max_depth: usize) -> Result<Vec<PathBuf>> {
    let walk_root = root.to_path_buf();
    let repo_paths = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        // Surface an unreadable root instead of silently reporting nothing
        fs::read_dir(&walk_root)
            .with_context(|| format!("Cannot read directory {}", walk_root.display()))?;
        Ok(find_repo_roots(&walk_root, max_depth))
    })
    .await
    .context("Repository discovery task failed")??;

    log::info!(
        "Discovered {} repositories under {}",
        repo_paths.len(),
        root.display()
    );
    Ok(repo_paths)
}

/// Fetches the status of every path, keeping the input order
pub async fn fetch_all(repo_paths: Vec<PathBuf>, concurrency: usize) -> Vec<RepositoryStatus> {
    stream::iter(repo_paths)
        .map(|path| async move { fetch_status(&path).await })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
