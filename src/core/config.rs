//! Configuration constants and settings

// Concurrency Configuration
//
// `git status` is I/O-bound (index refresh, stat calls) so a moderate number of
// concurrent invocations finishes well before a sequential pass would.

// Upper bound on concurrent `git status` invocations
pub const GIT_CONCURRENT_CAP: usize = 12;

// Environment variable that overrides the default concurrency
pub const JOBS_ENV_VAR: &str = "GIT_AUDIT_JOBS";

/// Determines the concurrency limit for status fetching based on CLI args and system resources
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N
/// 3. GIT_AUDIT_JOBS env var → N
/// 4. Smart default → min(CPU_CORES + 2, 12)
pub fn get_git_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return n.max(1); // Ensure at least 1
    }

    if let Ok(env_concurrency) = std::env::var(JOBS_ENV_VAR) {
        match env_concurrency.parse::<usize>() {
            Ok(n) if n > 0 => return n,
            _ => log::warn!("Ignoring invalid {JOBS_ENV_VAR} value {env_concurrency:?}"),
        }
    }

    let cpu_count = num_cpus::get();
    (cpu_count + 2).min(GIT_CONCURRENT_CAP)
}

/// Parses the `--max-depth` argument
///
/// Negative and non-numeric values are rejected with the same message so the
/// user sees exactly what was refused.
pub fn parse_max_depth(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid max-depth {raw}"))
}

// Repository discovery configuration
pub const DEFAULT_MAX_DEPTH: usize = 2; // Levels below the root that are descended into
pub const GIT_MARKER_DIR: &str = ".git";

// Git command configuration
pub const GIT_STATUS_ARGS: &[&str] = &["status"];
pub const GIT_STATUS_TIMEOUT_SECS: u64 = 60;

// Status parsing markers
pub const UNKNOWN_BRANCH: &str = "unknown";
pub const ON_BRANCH_MARKER: &str = "On branch";
pub const UP_TO_DATE_MARKER: &str = "Your branch is up to date with";
pub const AHEAD_MARKER: &str = "Your branch is ahead of";
pub const UNCOMMITTED_MARKERS: &[&str] = &["Changes to be committed", "Changes not staged for commit"];
pub const UNTRACKED_MARKERS: &[&str] = &["untracked files present", "Untracked files:"];

// Table rendering
pub const COLUMN_SEPARATOR: &str = "|";
pub const STATUS_ERROR_MESSAGE: &str = "Unable to retrieve Git status";
pub const ROOT_DISPLAY_PREFIX: &str = "./";

// UI Constants
pub const SPINNER_TEMPLATE: &str = "{spinner} {wide_msg}";
pub const SPINNER_TICK_MILLIS: u64 = 80;
