//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery and status collection
//! - Table rendering
//! - Progress reporting
//! - Configuration utilities
//!
//! Internal implementation details are not exposed through this API.

// Discovery
pub use super::discovery::{discover, fetch_all, find_repo_roots, scan};

// Rendering
pub use super::render::{
    classify, compute_widths, default_columns, ColumnKind, ColumnSpec, Highlight, Row,
    TableRenderer, ValueFn,
};

// Progress
pub use super::progress::create_spinner;

// Configuration
pub use super::config::{get_git_concurrency, parse_max_depth};
pub use super::config::{DEFAULT_MAX_DEPTH, GIT_CONCURRENT_CAP, GIT_MARKER_DIR, JOBS_ENV_VAR};

// User-facing messages
pub use super::config::STATUS_ERROR_MESSAGE;
