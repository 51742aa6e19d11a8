//! Per-file run results collected into a summary.

use owo_colors::OwoColorize;
use std::error::Error;
use std::path::PathBuf;

use crate::log;
use crate::rewrite::RewriteError;

/// Outcome for one processed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed (or would change, on a dry run).
    Fixed,
    /// No rule matched; the file is already in shape.
    Unchanged,
    /// File does not exist at the expected path.
    Missing,
    /// Load or save failed.
    Failed,
}

/// Result record for one page, in file-set order.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub error: Option<RewriteError>,
}

impl FileReport {
    pub fn fixed(path: PathBuf) -> Self {
        Self {
            path,
            status: FileStatus::Fixed,
            error: None,
        }
    }

    pub fn unchanged(path: PathBuf) -> Self {
        Self {
            path,
            status: FileStatus::Unchanged,
            error: None,
        }
    }

    pub fn missing(path: PathBuf) -> Self {
        Self {
            path,
            status: FileStatus::Missing,
            error: None,
        }
    }

    pub fn failed(path: PathBuf, error: RewriteError) -> Self {
        Self {
            path,
            status: FileStatus::Failed,
            error: Some(error),
        }
    }

    /// Print the one-line status for this file.
    pub fn log(&self, module: &str, dry_run: bool) {
        let path = self.path.display();
        match self.status {
            FileStatus::Fixed if dry_run => {
                log!(module; "{} needs fix: {path}", "✓".green());
            }
            FileStatus::Fixed => {
                log!(module; "{} fixed: {path}", "✓".green());
            }
            FileStatus::Unchanged => {
                log!(module; "{}", format!("unchanged: {path}").dimmed());
            }
            FileStatus::Missing => {
                log!(module; "{} not found: {path}", "⚠".yellow());
            }
            FileStatus::Failed => {
                log!(module; "{} failed: {}", "✗".red(), self.error_chain());
            }
        }
    }

    /// Error message with its source chain, for the status line.
    fn error_chain(&self) -> String {
        let Some(err) = &self.error else {
            return format!("{}", self.path.display());
        };
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// All per-file results of one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: FileReport) {
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    fn count(&self, status: FileStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }

    pub fn fixed(&self) -> usize {
        self.count(FileStatus::Fixed)
    }

    pub fn unchanged(&self) -> usize {
        self.count(FileStatus::Unchanged)
    }

    pub fn missing(&self) -> usize {
        self.count(FileStatus::Missing)
    }

    pub fn failed(&self) -> usize {
        self.count(FileStatus::Failed)
    }

    /// Whether any file changed (or would change).
    pub fn has_changes(&self) -> bool {
        self.fixed() > 0
    }

    /// Whether any file failed to load or save.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Print the closing totals line.
    pub fn log_totals(&self, module: &str, dry_run: bool) {
        let verb = if dry_run { "to fix" } else { "fixed" };
        let mut parts = vec![format!("{} {}", plural_count(self.fixed(), "file"), verb)];
        if self.unchanged() > 0 {
            parts.push(format!("{} unchanged", self.unchanged()));
        }
        if self.missing() > 0 {
            parts.push(format!("{} missing", self.missing()));
        }
        if self.failed() > 0 {
            parts.push(format!("{} failed", self.failed()));
        }
        log!(module; "{}", parts.join(", "));
    }
}

/// Format count with noun, handling pluralization
fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
