//! git-audit: A tool for auditing many git repositories at once
//! This tool scans a directory tree for git repositories and prints a table of
//! each repository's branch, upstream and working-tree state.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use git_audit::core::{
    create_spinner, default_columns, discover, fetch_all, get_git_concurrency, parse_max_depth,
    TableRenderer, DEFAULT_MAX_DEPTH,
};
use git_audit::utils::color_enabled;

#[derive(Parser, Debug)]
#[command(
    name = "git-audit",
    version,
    about = "Report the git status of every repository below a directory"
)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    path: Option<PathBuf>,

    /// How many directory levels below PATH to descend into
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = parse_max_depth,
        allow_hyphen_values = true
    )]
    max_depth: usize,

    /// Number of concurrent `git status` commands
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Check repositories one at a time
    #[arg(long, conflicts_with = "jobs")]
    sequential: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Print debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let root = match cli.path {
        Some(path) => path,
        None => {
            log::info!("No path specified, using current directory");
            std::env::current_dir().context("Cannot determine the current directory")?
        }
    };
    let concurrency = get_git_concurrency(cli.jobs, cli.sequential);
    log::debug!(
        "Scanning {} (max depth {}, {} concurrent)",
        root.display(),
        cli.max_depth,
        concurrency
    );

    let spinner = create_spinner(format!("Scanning {}...", root.display()))?;
    let repo_paths = match discover(&root, cli.max_depth).await {
        Ok(paths) => paths,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.set_message(format!("Checking {} repositories...", repo_paths.len()));
    let statuses = fetch_all(repo_paths, concurrency).await;
    spinner.finish_and_clear();

    let failures = statuses.iter().filter(|status| status.is_failure()).count();
    if failures > 0 {
        log::info!("{failures} of {} repositories could not be inspected", statuses.len());
    }

    let color = color_enabled(cli.no_color);
    if color {
        // colored re-checks the terminal on its own; the decision is already made
        colored::control::set_override(true);
    }

    // An empty scan still prints the header line
    let renderer = TableRenderer::new(root, color);
    for line in renderer.render(&statuses, &mut default_columns()) {
        println!("{line}");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli).await
}
