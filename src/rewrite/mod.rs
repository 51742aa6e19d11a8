//! HTML rewriter: ordered rule application over a fixed page set.
//!
//! # Module Structure
//!
//! ```text
//! rewrite/
//! ├── document   # One file's text in memory (load/apply/save)
//! ├── rule       # Typed transformation rules
//! ├── rules      # The ordered default rule set
//! ├── error      # RewriteError
//! └── mod.rs     # Sequential run loop (this file)
//! ```
//!
//! Files are processed one at a time, each fully read, transformed, and
//! written before the next begins. One file's failure never aborts the run.

pub mod document;
pub mod error;
pub mod rule;
pub mod rules;

pub use document::Document;
pub use error::RewriteError;
pub use rule::{Anchor, Rule};

use std::path::Path;

use crate::config::{Page, RelinkConfig};
use crate::debug;
use crate::report::{FileReport, RunSummary};

/// Process every configured page in order, logging one status line each.
///
/// With `dry_run` set, nothing is written; a page that would change is
/// still reported as needing a fix.
pub fn run(config: &RelinkConfig, root: &Path, dry_run: bool) -> RunSummary {
    let module = if dry_run { "check" } else { "fix" };
    let mut summary = RunSummary::new();
    for page in &config.pages {
        let report = process_page(config, root, page, dry_run, module);
        report.log(module, dry_run);
        summary.push(report);
    }
    summary
}

/// Load, transform, and (unless dry running) save one page.
fn process_page(
    config: &RelinkConfig,
    root: &Path,
    page: &Page,
    dry_run: bool,
    module: &str,
) -> FileReport {
    let path = root.join(&page.path);
    let mut doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(err) if err.is_not_found() => return FileReport::missing(page.path.clone()),
        Err(err) => return FileReport::failed(page.path.clone(), err),
    };

    for (index, rule) in rules::page_rules(config, page).iter().enumerate() {
        let hit = doc.apply(rule);
        if hit {
            debug!(module; "{}: rule {} ({}) matched", page.path.display(), index + 1, rule.kind());
        }
    }

    if !doc.changed() {
        return FileReport::unchanged(page.path.clone());
    }
    if dry_run {
        return FileReport::fixed(page.path.clone());
    }
    match doc.save() {
        Ok(()) => FileReport::fixed(page.path.clone()),
        Err(err) => FileReport::failed(page.path.clone(), err),
    }
}
