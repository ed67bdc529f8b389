//! Table renderer for repository status reports.

use colored::Colorize;
use std::path::PathBuf;

use super::config::{COLUMN_SEPARATOR, STATUS_ERROR_MESSAGE};
use crate::git::RepositoryStatus;
use crate::utils::display_path;

/// One status record paired with its display path
pub struct Row<'a> {
    pub path: String,
    pub status: &'a RepositoryStatus,
}

/// How a column's values are treated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Repository path; the only column shown for failure rows
    Path,
    /// Plain text
    Text,
    /// yes/no value that is colour-classified
    Flag,
}

/// Colour class for a flag cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Alert,
    Positive,
    Warning,
}

/// Classifies a (possibly padded) flag value
pub fn classify(value: &str) -> Highlight {
    if value.contains("yes") {
        Highlight::Alert
    } else if value.contains("no") {
        Highlight::Positive
    } else {
        Highlight::Warning
    }
}

/// Projects a column's value out of a row; `None` for failure rows
pub type ValueFn = for<'r> fn(&'r Row<'r>) -> Option<&'r str>;

/// A table column: header, value accessor, treatment and computed width
pub struct ColumnSpec {
    pub header: &'static str,
    pub kind: ColumnKind,
    pub value: ValueFn,
    pub width: usize,
}

impl ColumnSpec {
    pub fn new(header: &'static str, kind: ColumnKind, value: ValueFn) -> Self {
        Self {
            header,
            kind,
            value,
            width: 0,
        }
    }
}

/// The standard column set, in display order
pub fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Path", ColumnKind::Path, |row| Some(row.path.as_str())),
        ColumnSpec::new("Local Branch", ColumnKind::Text, |row| {
            row.status.summary().map(|s| s.local_branch.as_str())
        }),
        ColumnSpec::new("Upstream", ColumnKind::Text, |row| {
            row.status.summary().map(|s| s.upstream_branch.as_str())
        }),
        ColumnSpec::new("Ahead", ColumnKind::Flag, |row| {
            row.status.summary().map(|s| s.ahead.as_str())
        }),
        ColumnSpec::new("Uncommitted Changes", ColumnKind::Flag, |row| {
            row.status.summary().map(|s| s.uncommitted.as_str())
        }),
        ColumnSpec::new("Untracked Files", ColumnKind::Flag, |row| {
            row.status.summary().map(|s| s.untracked_files.as_str())
        }),
    ]
}

/// Renders status records as pipe-delimited, padded lines
#[derive(Clone)]
pub struct TableRenderer {
    root: PathBuf,
    color: bool,
}

impl TableRenderer {
    /// `root` is the scanned directory that paths are shown relative to
    pub fn new(root: impl Into<PathBuf>, color: bool) -> Self {
        Self {
            root: root.into(),
            color,
        }
    }

    /// Builds the display rows for `statuses`
    pub fn rows<'a>(&self, statuses: &'a [RepositoryStatus]) -> Vec<Row<'a>> {
        statuses
            .iter()
            .map(|status| Row {
                path: display_path(status.path(), &self.root),
                status,
            })
            .collect()
    }

    /// Returns the header line followed by one line per record
    ///
    /// Column widths are computed first and stored in `columns`.
    pub fn render(&self, statuses: &[RepositoryStatus], columns: &mut [ColumnSpec]) -> Vec<String> {
        let rows = self.rows(statuses);
        compute_widths(columns, &rows);

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(render_header(columns));
        for row in &rows {
            let line = if row.status.is_failure() {
                self.render_failure(row, columns)
            } else {
                self.render_success(row, columns)
            };
            lines.push(line);
        }
        lines
    }

    fn render_success(&self, row: &Row<'_>, columns: &[ColumnSpec]) -> String {
        columns
            .iter()
            .map(|column| {
                let padded = pad((column.value)(row).unwrap_or(""), column.width);
                match column.kind {
                    ColumnKind::Flag => {
                        let highlight = classify(&padded);
                        self.paint(padded, highlight)
                    }
                    ColumnKind::Path | ColumnKind::Text => padded,
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }

    fn render_failure(&self, row: &Row<'_>, columns: &[ColumnSpec]) -> String {
        let path_width = columns
            .iter()
            .find(|column| column.kind == ColumnKind::Path)
            .map_or(0, |column| column.width);
        format!(
            "{}{}{}",
            pad(&row.path, path_width),
            COLUMN_SEPARATOR,
            self.paint(STATUS_ERROR_MESSAGE.to_string(), Highlight::Alert)
        )
    }

    fn paint(&self, text: String, highlight: Highlight) -> String {
        if !self.color {
            return text;
        }
        match highlight {
            Highlight::Alert => text.as_str().red().to_string(),
            Highlight::Positive => text.as_str().green().to_string(),
            Highlight::Warning => text.as_str().yellow().to_string(),
        }
    }
}

/// Sets each column's width to the widest of its header and its non-empty
/// values on success rows
///
/// Failure rows never widen a column.
pub fn compute_widths(columns: &mut [ColumnSpec], rows: &[Row<'_>]) {
    for column in columns.iter_mut() {
        column.width = rows
            .iter()
            .filter(|row| !row.status.is_failure())
            .filter_map(|row| (column.value)(row))
            .filter(|value| !value.is_empty())
            .map(|value| value.chars().count())
            .fold(column.header.chars().count(), usize::max);
    }
}

fn render_header(columns: &[ColumnSpec]) -> String {
    columns
        .iter()
        .map(|column| pad(column.header, column.width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

// Left-aligned, space-filled to `width` characters
fn pad(value: &str, width: usize) -> String {
    format!("{value:<width$}")
}
