//! File system path utilities

use std::path::Path;

use crate::core::config::ROOT_DISPLAY_PREFIX;

/// Formats `path` relative to the scanned `root` for display
///
/// The root prefix becomes `./`, so `/work/app` under root `/work` is shown as
/// `./app` and the root itself as `./`. Paths outside the root are shown in
/// full. Backslashes are normalized to forward slashes either way.
pub fn display_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => format!(
            "{ROOT_DISPLAY_PREFIX}{}",
            normalize_separators(&relative.to_string_lossy())
        ),
        Err(_) => normalize_separators(&path.to_string_lossy()),
    }
}

/// Replaces every backslash with a forward slash in one left-to-right pass
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
