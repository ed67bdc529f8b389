//! # git-audit
//!
//! `git-audit` finds every git repository below a directory and reports, in a
//! single table, where each one stands relative to its upstream. It powers the
//! `git-audit` CLI tool.
//!
//! ## Core Features
//!
//! - **Depth-bounded Discovery**: Repository roots are found by their `.git`
//!   directory, descending at most `max_depth` levels.
//! - **Status Parsing**: `git status` output is reduced to branch, upstream,
//!   ahead, uncommitted and untracked facts.
//! - **Concurrent Fetching**: Status commands run concurrently while the
//!   result order stays depth-first.
//! - **Aligned Output**: A pipe-delimited table with colour-coded flags.
//!
//! ## Example
//!
//! ```rust,no_run
//! use git_audit::core::{default_columns, scan, TableRenderer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let statuses = scan(".", 2, 4).await?;
//!     let renderer = TableRenderer::new(".", false);
//!     for line in renderer.render(&statuses, &mut default_columns()) {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod git;
pub mod utils;
